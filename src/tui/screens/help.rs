//! Help overlay: keybinding reference drawn over the contact form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Backspace", "delete last character"),
    ("Enter", "submit"),
    ("Space", "press focused button"),
    ("Ctrl+R", "reset form"),
    ("Esc", "quit"),
    ("F1", "toggle help"),
];

/// Width of the key column.
const KEY_WIDTH: usize = 18;
const FOOTER: &str = "Esc/q/F1: close";

/// The help overlay. Stateless: any close key returns to the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay;

impl ScreenState for HelpOverlay {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => {
                Action::Navigate(Screen::ContactForm)
            }
            _ => Action::None,
        }
    }
}

fn help_lines() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line<'static>> = KEYS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:<KEY_WIDTH$}"), key_style),
                Span::raw(*desc),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(FOOTER, Style::default().fg(Color::DarkGray)));
    lines
}

/// Centered rectangle just large enough for the help text, clamped to `area`.
pub fn overlay_area(area: Rect) -> Rect {
    let lines = help_lines();
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 2;
    let height = lines.len() as u16 + 2;
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draws the help overlay on top of whatever is already in `area`.
#[mutants::skip]
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let popup = overlay_area(area);
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(help_lines()).block(block), popup);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn close_keys_return_to_form() {
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::F(1)] {
            let action = HelpOverlay.handle_key(press(code));
            assert_eq!(action, Action::Navigate(Screen::ContactForm), "{code:?}");
        }
    }

    #[test]
    fn other_keys_do_nothing() {
        for code in [KeyCode::Char('x'), KeyCode::Down, KeyCode::Enter] {
            assert_eq!(HelpOverlay.handle_key(press(code)), Action::None, "{code:?}");
        }
    }

    #[test]
    fn lines_cover_every_key_and_footer() {
        let lines = help_lines();
        assert_eq!(lines.len(), KEYS.len() + 2);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Ctrl+R"));
        assert!(text.contains("reset form"));
        assert!(text.contains(FOOTER));
    }

    #[test]
    fn overlay_sized_to_content_and_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = overlay_area(area);
        assert_eq!(popup.height, KEYS.len() as u16 + 4);
        // Widest line is the key column plus "delete last character".
        assert_eq!(popup.width, (KEY_WIDTH + "delete last character".len()) as u16 + 2);
        assert!(popup.x.abs_diff((area.width - popup.width) / 2) <= 1);
        assert!(popup.y.abs_diff((area.height - popup.height) / 2) <= 1);
    }

    #[test]
    fn overlay_clamped_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = overlay_area(area);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
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

        #[test]
        fn renders_keys_inside_titled_box() {
            let backend = TestBackend::new(80, 24);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_help(frame, frame.area()))
                .unwrap();
            let output = buffer_to_string(terminal.backend().buffer());
            assert!(output.contains(" Help "));
            assert!(output.contains("Ctrl+R"));
            assert!(output.contains("next / prev field"));
            assert!(output.contains(FOOTER));
        }
    }
}
