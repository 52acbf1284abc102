//! Contact form screen: field entry, inline validation, submitted-values display.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Contact, Field, ValidationError, validate_contact};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::display::{DisplayNode, DisplayView, draw_display};
use crate::tui::widgets::form::{Form, FormField, draw_form, error_text};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// Title rendered on the screen border.
pub const TITLE: &str = "Contact Form";
/// Label of the submit button.
pub const SUBMIT_LABEL: &str = "Submit";

/// State for the contact form screen.
///
/// Visible errors are never tracked incrementally: every change recomputes
/// them from the current values, limited to touched fields until the first
/// submit attempt.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    form: Form,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    submitted: Option<Contact>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    /// Creates an empty form with focus on the first name.
    pub fn new() -> Self {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let input = FormField::new(field.label(), field.required());
                match field.placeholder() {
                    Some(hint) => input.with_placeholder(hint),
                    None => input,
                }
            })
            .collect();
        Self {
            form: Form::new(fields).with_submit(SUBMIT_LABEL),
            touched: BTreeSet::new(),
            submit_attempted: false,
            submitted: None,
        }
    }

    /// Sets the value of `field` and re-evaluates the visible errors.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_value(field.index(), value);
        self.touch(field);
    }

    fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        self.refresh_errors();
    }

    fn refresh_errors(&mut self) {
        self.form.clear_errors();
        for (field, error) in self.errors() {
            self.form.set_error(field.index(), error.to_string());
        }
    }

    /// Current field values.
    pub fn values(&self) -> Contact {
        let mut contact = Contact::default();
        for field in Field::ALL {
            contact.set(field, self.form.value(field.index()));
        }
        contact
    }

    /// Validation errors currently shown, in form order.
    pub fn errors(&self) -> Vec<(Field, ValidationError)> {
        validate_contact(&self.values())
            .into_iter()
            .filter(|(field, _)| self.submit_attempted || self.touched.contains(field))
            .collect()
    }

    /// The error shown for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<ValidationError> {
        self.errors()
            .into_iter()
            .find_map(|(f, e)| (f == field).then_some(e))
    }

    /// The last successfully submitted values.
    pub fn submitted(&self) -> Option<&Contact> {
        self.submitted.as_ref()
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Runs every rule. On success the values become the displayed snapshot;
    /// on failure the previous snapshot is left as it was.
    pub fn submit(&mut self) -> Action {
        self.submit_attempted = true;
        self.refresh_errors();

        let errors = self.errors();
        if !errors.is_empty() {
            let names: Vec<&str> = errors.iter().map(|(f, _)| f.label()).collect();
            debug!("submit rejected: invalid {}", names.join(", "));
            return Action::None;
        }

        let contact = self.values();
        info!(
            "submit accepted (message {})",
            if contact.message().is_some() {
                "present"
            } else {
                "empty"
            }
        );
        self.submitted = Some(contact.clone());
        Action::Submitted(contact)
    }

    /// Resets the form to its initial empty state.
    pub fn reset(&mut self) {
        self.form.reset();
        self.touched.clear();
        self.submit_attempted = false;
        self.submitted = None;
        debug!("form reset");
    }

    /// Builds the queryable render model.
    pub fn view(&self) -> ContactFormView {
        ContactFormView {
            title: TITLE,
            inputs: Field::ALL
                .into_iter()
                .map(|field| InputView {
                    field,
                    label: field.label(),
                    placeholder: field.placeholder(),
                    value: self.form.value(field.index()).to_string(),
                })
                .collect(),
            button: SUBMIT_LABEL,
            errors: self
                .errors()
                .into_iter()
                .map(|(_, e)| error_text(&e.to_string()))
                .collect(),
            display: self.submitted.as_ref().map(DisplayView::from_contact),
        }
    }

    fn focused_field(&self) -> Option<Field> {
        self.form.focused_field().and_then(Field::from_index)
    }
}

impl ScreenState for ContactFormState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // AltGr arrives as Ctrl+Alt on Windows and must still type characters.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            if key.code == KeyCode::Char('r') {
                self.reset();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Char(' ') if self.form.submit_focused() => self.submit(),
            KeyCode::Char(ch) => {
                if let Some(field) = self.focused_field() {
                    self.form.insert_char(ch);
                    self.touch(field);
                }
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.form.delete_char();
                    self.touch(field);
                }
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// One input as seen by a reader of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: Field,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub value: String,
}

/// Everything the screen renders, in a form that can be queried without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub title: &'static str,
    pub inputs: Vec<InputView>,
    pub button: &'static str,
    pub errors: Vec<String>,
    pub display: Option<DisplayView>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ContactFormView {
    /// Finds the input whose placeholder contains `text`, ignoring case.
    pub fn input_by_placeholder(&self, text: &str) -> Option<&InputView> {
        self.inputs.iter().find(|i| {
            i.placeholder
                .is_some_and(|hint| contains_ignore_case(hint, text))
        })
    }

    /// Finds the input whose label contains `text`, ignoring case.
    pub fn input_by_label(&self, text: &str) -> Option<&InputView> {
        self.inputs
            .iter()
            .find(|i| contains_ignore_case(i.label, text))
    }

    /// Finds the first error line containing `text`, ignoring case.
    pub fn find_error(&self, text: &str) -> Option<&str> {
        self.errors
            .iter()
            .map(String::as_str)
            .find(|e| contains_ignore_case(e, text))
    }

    /// Looks up a submitted-values node by its display id.
    pub fn display_node(&self, id: &str) -> Option<&DisplayNode> {
        self.display.as_ref().and_then(|d| d.find(id))
    }
}

/// Renders the contact form screen from its [`ContactFormView`].
///
/// The display goes below the form when the area is tall enough, and beside
/// it otherwise, so submitted values are never clipped away.
#[mutants::skip]
pub fn draw_contact_form(state: &ContactFormState, frame: &mut Frame, area: Rect) {
    let view = state.view();

    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let form_height = state.form().height();
    match view.display {
        None => {
            let [form_area, _] =
                Layout::vertical([Constraint::Length(form_height), Constraint::Min(0)])
                    .areas(body_area);
            draw_form(state.form(), frame, form_area);
        }
        Some(ref display) if body_area.height >= form_height + 1 + display.height() => {
            let [form_area, _gap, display_area, _] = Layout::vertical([
                Constraint::Length(form_height),
                Constraint::Length(1),
                Constraint::Length(display.height()),
                Constraint::Min(0),
            ])
            .areas(body_area);
            draw_form(state.form(), frame, form_area);
            draw_display(display, frame, display_area);
        }
        Some(ref display) => {
            let display_width = display.width().min(body_area.width / 2);
            let [form_column, _gap, display_column] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(display_width),
            ])
            .areas(body_area);
            let [form_area, _] =
                Layout::vertical([Constraint::Length(form_height), Constraint::Min(0)])
                    .areas(form_column);
            let [display_area, _] =
                Layout::vertical([Constraint::Length(display.height()), Constraint::Min(0)])
                    .areas(display_column);
            draw_form(state.form(), frame, form_area);
            draw_display(display, frame, display_area);
        }
    }

    let status = StatusBarContext {
        error_count: view.errors.len(),
        submitted: view.display.is_some(),
    };
    draw_status_bar(&status, frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl+R: reset  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
