use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::export;
use crate::pricing::{consignment_display, PriceField, TaxRate};

/// Delay before the "How much is Today's Tax?" prompt appears.
pub const SUBTITLE_REVEAL: Duration = Duration::from_secs(2);
/// Delay before the tax stepper appears.
pub const TAX_INPUT_REVEAL: Duration = Duration::from_secs(3);
/// Transition time between confirming the tax and the calculator screen.
pub const CONFIRM_TRANSITION: Duration = Duration::from_millis(800);
/// How long the "Copied!" acknowledgment stays on screen.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Reveal sequence and tax confirmation
    Intro,
    /// The calculator itself
    Calculator,
}

/// State for the single-screen calculator flow.
///
/// All timing is deadline-based against `Instant`s owned by this struct,
/// so dropping the app tears every pending transition down with it.
pub struct CalculatorApp {
    started_at: Instant,
    confirmed_at: Option<Instant>,
    copied_at: Option<Instant>,
    pub tax_rate: TaxRate,
    pub price: PriceField,
    pub should_quit: bool,
}

impl CalculatorApp {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            confirmed_at: None,
            copied_at: None,
            tax_rate: TaxRate::default(),
            price: PriceField::new(),
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.confirmed_at {
            Some(confirmed) if confirmed.elapsed() >= CONFIRM_TRANSITION => Screen::Calculator,
            _ => Screen::Intro,
        }
    }

    pub fn subtitle_visible(&self) -> bool {
        self.started_at.elapsed() >= SUBTITLE_REVEAL
    }

    pub fn tax_input_visible(&self) -> bool {
        self.started_at.elapsed() >= TAX_INPUT_REVEAL
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed_at.is_some()
    }

    /// Locks in the tax rate and starts the transition to the calculator.
    pub fn confirm(&mut self) {
        if self.tax_input_visible() && self.confirmed_at.is_none() {
            info!(tax = %self.tax_rate, "tax rate confirmed");
            self.confirmed_at = Some(Instant::now());
        }
    }

    /// The derived consignment price, formatted, or `None` while the
    /// desired price carries no usable value.
    pub fn consignment(&self) -> Option<String> {
        consignment_display(self.price.display(), self.tax_rate)
    }

    pub fn copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Copies the raw (ungrouped) consignment price to the clipboard and
    /// arms the acknowledgment window. A clipboard failure is logged and
    /// otherwise ignored.
    pub fn copy_result(&mut self) {
        let Some(display) = self.consignment() else {
            return;
        };
        match export::copy_to_clipboard(&display) {
            Ok(raw) => {
                info!(value = %raw, "consignment price copied");
                self.copied_at = Some(Instant::now());
            }
            Err(e) => warn!("failed to copy to clipboard: {}", e),
        }
    }

    /// Expires timed state; called on every tick event.
    pub fn on_tick(&mut self) {
        if let Some(copied) = self.copied_at {
            if copied.elapsed() >= COPY_ACK_WINDOW {
                self.copied_at = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.screen() {
            Screen::Intro => self.handle_intro_key(key),
            Screen::Calculator => self.handle_calculator_key(key),
        }
    }

    fn handle_intro_key(&mut self, key: KeyEvent) {
        if !self.tax_input_visible() || self.confirmed_at.is_some() {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => self.tax_rate.increment(),
            KeyCode::Down | KeyCode::Char('-') => self.tax_rate.decrement(),
            KeyCode::Char(digit @ '0'..='9') => {
                // out-of-range digits are silently ignored
                let value = i64::from(digit as u8 - b'0');
                self.tax_rate.set_exact(value);
            }
            KeyCode::Enter => self.confirm(),
            _ => {}
        }
    }

    fn handle_calculator_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch @ ('0'..='9' | '.')) => {
                // rejected keystrokes leave the field untouched
                self.price.push(ch);
            }
            KeyCode::Backspace => self.price.backspace(),
            KeyCode::Delete => self.price.clear(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.copy_result(),
            _ => {}
        }
    }

    /// Test helper: shifts every deadline into the past so screens and
    /// reveals can be exercised without sleeping.
    #[cfg(test)]
    fn back_date(&mut self, by: Duration) {
        self.started_at = self.started_at.checked_sub(by).unwrap();
        if let Some(t) = self.confirmed_at.as_mut() {
            *t = t.checked_sub(by).unwrap();
        }
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app_at_tax_prompt() -> CalculatorApp {
        let mut app = CalculatorApp::new();
        app.back_date(TAX_INPUT_REVEAL);
        app
    }

    fn app_at_calculator() -> CalculatorApp {
        let mut app = app_at_tax_prompt();
        app.handle_key(key(KeyCode::Enter));
        app.back_date(CONFIRM_TRANSITION);
        app
    }

    #[test]
    fn test_reveal_sequence() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.screen(), Screen::Intro);
        assert!(!app.subtitle_visible());
        assert!(!app.tax_input_visible());

        app.back_date(SUBTITLE_REVEAL);
        assert!(app.subtitle_visible());
        assert!(!app.tax_input_visible());

        app.back_date(TAX_INPUT_REVEAL - SUBTITLE_REVEAL);
        assert!(app.tax_input_visible());
    }

    #[test]
    fn test_enter_before_reveal_does_not_confirm() {
        let mut app = CalculatorApp::new();
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.confirmed());
    }

    #[test]
    fn test_tax_stepper_and_digits() {
        let mut app = app_at_tax_prompt();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.tax_rate.percent(), 2);

        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.tax_rate.percent(), 5);

        // 7-9 are outside the daily range and ignored
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.tax_rate.percent(), 5);

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.tax_rate.percent(), 4);
    }

    #[test]
    fn test_confirm_transitions_after_delay() {
        let mut app = app_at_tax_prompt();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.confirmed());
        assert_eq!(app.screen(), Screen::Intro);

        app.back_date(CONFIRM_TRANSITION);
        assert_eq!(app.screen(), Screen::Calculator);
    }

    #[test]
    fn test_typing_price_updates_consignment() {
        let mut app = app_at_calculator();
        for ch in "1000000".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(app.price.display(), "1,000,000");
        // tax stayed at the default of 0
        assert_eq!(app.consignment().as_deref(), Some("1,000,000"));
    }

    #[test]
    fn test_scenario_million_at_five_percent() {
        let mut app = app_at_tax_prompt();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Enter));
        app.back_date(CONFIRM_TRANSITION);

        for ch in "1000000".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(app.consignment().as_deref(), Some("952,380"));
    }

    #[test]
    fn test_zero_price_shows_no_value() {
        let mut app = app_at_calculator();
        app.handle_key(key(KeyCode::Char('0')));
        assert_eq!(app.consignment(), None);
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = app_at_calculator();
        for ch in "1234".chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.price.display(), "123");
        app.handle_key(key(KeyCode::Delete));
        assert!(app.price.is_empty());
    }

    #[test]
    fn test_copy_without_value_is_noop() {
        let mut app = app_at_calculator();
        app.copy_result();
        assert!(!app.copied());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = CalculatorApp::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = app_at_calculator();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
