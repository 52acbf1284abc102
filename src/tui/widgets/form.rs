//! Reusable form widget for text input screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of a field's bordered input box.
const INPUT_HEIGHT: u16 = 3;
/// Height of the error line below each input.
const ERROR_HEIGHT: u16 = 1;

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown on the input's border.
    pub label: String,
    /// Example text shown while the value is empty.
    pub placeholder: Option<String>,
    /// Current text value.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the field is marked as required.
    pub required: bool,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            placeholder: None,
            value: String::new(),
            error: None,
            required,
        }
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// A multi-field text form with focus management and an optional submit button.
///
/// When a button is present it takes the focus slot after the last field.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
    submit_label: Option<String>,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focus: 0,
            submit_label: None,
        }
    }

    /// Adds a submit button with the given label.
    pub fn with_submit(mut self, label: impl Into<String>) -> Self {
        self.submit_label = Some(label.into());
        self
    }

    /// Returns the submit button's label, if the form has one.
    pub fn submit_label(&self) -> Option<&str> {
        self.submit_label.as_deref()
    }

    /// Returns the current focus slot (field index, or `fields().len()` for the button).
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the index of the focused field, or `None` if the button has focus.
    pub fn focused_field(&self) -> Option<usize> {
        (self.focus < self.fields.len()).then_some(self.focus)
    }

    /// Returns `true` if the submit button has focus.
    pub fn submit_focused(&self) -> bool {
        self.submit_label.is_some() && self.focus == self.fields.len()
    }

    fn focus_slots(&self) -> usize {
        self.fields.len() + usize::from(self.submit_label.is_some())
    }

    /// Moves focus to the next slot, wrapping around.
    pub fn focus_next(&mut self) {
        let slots = self.focus_slots();
        if slots == 0 {
            return;
        }
        self.focus = (self.focus + 1) % slots;
    }

    /// Moves focus to the previous slot, wrapping around.
    pub fn focus_prev(&mut self) {
        let slots = self.focus_slots();
        if slots == 0 {
            return;
        }
        self.focus = (self.focus + slots - 1) % slots;
    }

    /// Inserts a character at the end of the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(ch);
        }
    }

    /// Deletes the last character from the focused field.
    pub fn delete_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns all field values as a vector of string slices.
    pub fn values(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.value.as_str()).collect()
    }

    /// Resets all field values, errors, and focus.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.focus = 0;
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Total rows needed to draw the form.
    pub fn height(&self) -> u16 {
        let per_field = INPUT_HEIGHT + ERROR_HEIGHT;
        let button = u16::from(self.submit_label.is_some());
        per_field * self.fields.len() as u16 + button
    }
}

/// Formats a field error the way it is shown under the input.
pub fn error_text(error: &str) -> String {
    format!("Error: {error}")
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(INPUT_HEIGHT), Constraint::Length(ERROR_HEIGHT)])
        .collect();
    if form.submit_label.is_some() {
        constraints.push(Constraint::Length(1));
    }

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;
        let input_area = rows[i * 2];
        let error_area = rows[i * 2 + 1];

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = match (&field.placeholder, field.value.is_empty()) {
            (Some(hint), true) => vec![Span::styled(
                hint.as_str(),
                Style::default().fg(Color::DarkGray),
            )],
            _ => vec![Span::raw(&field.value)],
        };
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, input_area);

        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(
                error_text(err),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(error_line, error_area);
        }
    }

    if let Some(ref label) = form.submit_label {
        let style = if form.submit_focused() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let button = Paragraph::new(Span::styled(format!("[ {label} ]"), style));
        frame.render_widget(button, rows[rows.len() - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Form {
        Form::new(vec![
            FormField::new("First Name", true).with_placeholder("Edd"),
            FormField::new("Last Name", true),
            FormField::new("Message", false),
        ])
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_zero() {
        let form = make_form();
        assert_eq!(form.focus(), 0);
        assert_eq!(form.focused_field(), Some(0));
    }

    #[test]
    fn focus_next_wraps_without_button() {
        let mut form = make_form();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), 2);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_next_visits_button() {
        let mut form = make_form().with_submit("Submit");
        for _ in 0..3 {
            form.focus_next();
        }
        assert_eq!(form.focus(), 3);
        assert!(form.submit_focused());
        assert_eq!(form.focused_field(), None);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_wraps_to_button() {
        let mut form = make_form().with_submit("Submit");
        form.focus_prev();
        assert!(form.submit_focused());
    }

    #[test]
    fn focus_prev_wraps_without_button() {
        let mut form = make_form();
        form.focus_prev();
        assert_eq!(form.focus(), 2);
        assert!(!form.submit_focused());
    }

    #[test]
    fn focus_next_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn focus_prev_empty_form_is_noop() {
        let mut form = Form::new(vec![]);
        form.focus_prev();
        assert_eq!(form.focus(), 0);
    }

    // --- Character insert/delete ---

    #[test]
    fn insert_char_appends_to_focused() {
        let mut form = make_form();
        form.insert_char('a');
        form.insert_char('b');
        assert_eq!(form.value(0), "ab");
        assert_eq!(form.value(1), "");
    }

    #[test]
    fn insert_char_on_button_is_noop() {
        let mut form = make_form().with_submit("Submit");
        form.focus_prev();
        form.insert_char('x');
        assert_eq!(form.values(), vec!["", "", ""]);
    }

    #[test]
    fn delete_char_removes_last() {
        let mut form = make_form();
        form.insert_char('A');
        form.insert_char('B');
        form.delete_char();
        assert_eq!(form.value(0), "A");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut form = make_form();
        form.delete_char();
        assert_eq!(form.value(0), "");
    }

    #[test]
    fn set_value_replaces() {
        let mut form = make_form();
        form.insert_char('x');
        form.set_value(0, "abcde");
        assert_eq!(form.value(0), "abcde");
    }

    #[test]
    fn set_value_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_value(99, "nope");
        assert_eq!(form.values(), vec!["", "", ""]);
    }

    // --- Error management ---

    #[test]
    fn set_error_on_field() {
        let mut form = make_form();
        form.set_error(0, "too short".into());
        assert!(form.has_errors());
        assert_eq!(form.fields()[0].error, Some("too short".into()));
    }

    #[test]
    fn clear_errors_removes_all() {
        let mut form = make_form();
        form.set_error(0, "err1".into());
        form.set_error(1, "err2".into());
        form.clear_errors();
        assert!(!form.has_errors());
    }

    #[test]
    fn set_error_out_of_bounds_is_noop() {
        let mut form = make_form();
        form.set_error(99, "nope".into());
        assert!(!form.has_errors());
    }

    #[test]
    fn error_text_is_prefixed() {
        assert_eq!(error_text("bad"), "Error: bad");
    }

    // --- Reset / accessors ---

    #[test]
    fn reset_clears_values_errors_and_focus() {
        let mut form = make_form().with_submit("Submit");
        form.insert_char('X');
        form.focus_prev();
        form.set_error(0, "err".into());
        form.reset();
        assert_eq!(form.value(0), "");
        assert_eq!(form.focus(), 0);
        assert!(!form.has_errors());
    }

    #[test]
    fn value_out_of_bounds_returns_empty() {
        assert_eq!(make_form().value(99), "");
    }

    #[test]
    fn placeholder_and_required_flags() {
        let form = make_form();
        assert_eq!(form.fields()[0].placeholder.as_deref(), Some("Edd"));
        assert_eq!(form.fields()[1].placeholder, None);
        assert!(form.fields()[0].required);
        assert!(!form.fields()[2].required);
    }

    #[test]
    fn height_counts_error_rows_and_button() {
        assert_eq!(make_form().height(), 12);
        assert_eq!(make_form().with_submit("Go").height(), 13);
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_form(form: &Form, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_form(form, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn empty_field_shows_placeholder() {
            let form = make_form();
            let output = render_form(&form, 40, 13);
            assert!(output.contains("Edd"), "should show placeholder");
        }

        #[test]
        fn typed_value_replaces_placeholder() {
            let mut form = make_form();
            form.set_value(0, "abcde");
            let output = render_form(&form, 40, 13);
            assert!(output.contains("abcde"));
            assert!(!output.contains("Edd"), "placeholder should be hidden");
        }

        #[test]
        fn error_rendered_with_prefix() {
            let mut form = make_form();
            form.set_error(1, "lastName is a required field.".into());
            let output = render_form(&form, 50, 13);
            assert!(output.contains("Error: lastName is a required field."));
        }

        #[test]
        fn button_rendered() {
            let form = make_form().with_submit("Submit");
            let output = render_form(&form, 40, 13);
            assert!(output.contains("[ Submit ]"));
        }

        #[test]
        fn required_fields_marked() {
            let output = render_form(&make_form(), 40, 13);
            assert!(output.contains("First Name *"));
            assert!(!output.contains("Message *"));
        }
    }
}
