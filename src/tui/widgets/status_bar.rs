//! Status bar widget: one-line summary of the form's validation state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of visible validation errors.
    pub error_count: usize,
    /// Whether a snapshot is currently on display.
    pub submitted: bool,
}

impl StatusBarContext {
    /// Text of the status bar.
    ///
    /// - Errors visible:          `2 errors` / `1 error` (Red)
    /// - No errors, submitted:    `SUBMITTED` (Green)
    /// - No errors, nothing sent: `Ready` (Cyan)
    pub fn text(&self) -> String {
        match (self.error_count, self.submitted) {
            (1, _) => "1 error".to_string(),
            (0, true) => "SUBMITTED".to_string(),
            (0, false) => "Ready".to_string(),
            (n, _) => format!("{n} errors"),
        }
    }

    fn color(&self) -> Color {
        match (self.error_count, self.submitted) {
            (0, true) => Color::Green,
            (0, false) => Color::Cyan,
            _ => Color::Red,
        }
    }
}

/// Renders a one-line status bar.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let span = Span::styled(ctx.text(), Style::default().fg(ctx.color()));
    frame.render_widget(Paragraph::new(Line::from(span)), area);
}

#[cfg(test)]
mod tests {
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

    fn render_status_bar(ctx: &StatusBarContext, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn text_variants() {
        let cases = [
            (0, false, "Ready"),
            (0, true, "SUBMITTED"),
            (1, false, "1 error"),
            (3, true, "3 errors"),
        ];
        for (error_count, submitted, expected) in cases {
            let ctx = StatusBarContext {
                error_count,
                submitted,
            };
            assert_eq!(ctx.text(), expected, "{ctx:?}");
        }
    }

    #[test]
    fn colors() {
        assert_eq!(StatusBarContext::default().color(), Color::Cyan);
        let submitted = StatusBarContext {
            error_count: 0,
            submitted: true,
        };
        assert_eq!(submitted.color(), Color::Green);
        let failing = StatusBarContext {
            error_count: 2,
            submitted: true,
        };
        assert_eq!(failing.color(), Color::Red);
    }

    #[test]
    fn renders_error_count() {
        let ctx = StatusBarContext {
            error_count: 3,
            submitted: false,
        };
        let output = render_status_bar(&ctx, 40, 1);
        assert!(output.contains("3 errors"));
    }

    #[test]
    fn renders_ready_by_default() {
        let output = render_status_bar(&StatusBarContext::default(), 40, 1);
        assert!(output.contains("Ready"));
    }
}
