use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use ratatui::{Frame, Terminal};

use crate::model::Contact;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{ContactFormState, HelpOverlay, draw_contact_form, draw_help};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The contact form and its submitted-values display.
    ContactForm,
    /// Keybinding help drawn over the contact form.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::ContactForm => "Contact Form",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    contact_form: ContactFormState,
    help: HelpOverlay,
    last_submitted: Option<Contact>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::ContactForm`] screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::ContactForm,
            contact_form: ContactFormState::new(),
            help: HelpOverlay,
            last_submitted: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the form, with help on top when it is open.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        draw_contact_form(&self.contact_form, frame, area);
        if self.screen == Screen::Help {
            draw_help(frame, area);
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.apply(Action::Quit);
            return;
        }

        if key.code == KeyCode::F(1) && self.screen == Screen::ContactForm {
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::ContactForm => self.contact_form.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                debug!("navigate to {}", screen.label());
                self.screen = screen;
            }
            Action::Submitted(contact) => self.last_submitted = Some(contact),
            Action::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the contact form state.
    pub fn contact_form(&self) -> &ContactFormState {
        &self.contact_form
    }

    /// The values of the last accepted submit, surviving form resets.
    pub fn last_submitted(&self) -> Option<&Contact> {
        self.last_submitted.as_ref()
    }

    /// Encodes the last accepted submit as pretty JSON, if there was one.
    pub fn last_submitted_json(&self) -> Result<Option<String>, AppError> {
        self.last_submitted
            .as_ref()
            .map(serde_json::to_string_pretty)
            .transpose()
            .map_err(AppError::from)
    }
}
