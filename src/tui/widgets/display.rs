//! Submitted-values display: a pure rendering of a [`Contact`] snapshot.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Contact, Field};

/// One rendered value, addressable by its field's stable display id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub field: Field,
    pub value: String,
}

impl DisplayNode {
    fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }

    /// Stable identifier, e.g. `firstnameDisplay`.
    pub fn id(&self) -> &'static str {
        self.field.display_id()
    }

    /// Label part of the rendered line, e.g. `First Name: `.
    pub fn prefix(&self) -> String {
        format!("{}: ", self.field.label())
    }

    /// Text of the rendered line, e.g. `First Name: Edd`.
    pub fn text(&self) -> String {
        self.prefix() + &self.value
    }
}

/// Block title of the display.
const TITLE: &str = " You Submitted: ";

/// Render model for the display. The message node is structurally absent
/// when the submitted message was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub first_name: DisplayNode,
    pub last_name: DisplayNode,
    pub email: DisplayNode,
    pub message: Option<DisplayNode>,
}

impl DisplayView {
    /// Builds the view of a submitted snapshot.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: DisplayNode::new(Field::FirstName, &contact.first_name),
            last_name: DisplayNode::new(Field::LastName, &contact.last_name),
            email: DisplayNode::new(Field::Email, &contact.email),
            message: contact
                .message()
                .map(|m| DisplayNode::new(Field::Message, m)),
        }
    }

    /// Present nodes in display order.
    pub fn nodes(&self) -> impl Iterator<Item = &DisplayNode> {
        [&self.first_name, &self.last_name, &self.email]
            .into_iter()
            .chain(self.message.as_ref())
    }

    /// Looks up a node by id, ignoring ASCII case.
    pub fn find(&self, id: &str) -> Option<&DisplayNode> {
        self.nodes().find(|n| n.id().eq_ignore_ascii_case(id))
    }

    /// Rows needed to draw the display, including borders and heading.
    pub fn height(&self) -> u16 {
        self.nodes().count() as u16 + 3
    }

    /// Columns needed to show the title and every line unclipped, including borders.
    pub fn width(&self) -> u16 {
        let widest = self
            .nodes()
            .map(|n| n.text().chars().count())
            .chain([TITLE.chars().count()])
            .max()
            .unwrap_or(0);
        u16::try_from(widest + 2).unwrap_or(u16::MAX)
    }
}

/// Renders the submitted values.
#[mutants::skip]
pub fn draw_display(view: &DisplayView, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let label_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    for node in view.nodes() {
        lines.push(Line::from(vec![
            Span::styled(node.prefix(), label_style),
            Span::raw(node.value.as_str()),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
