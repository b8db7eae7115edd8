//! Per-view state of the text translator.
//!
//! Edits bump an edit sequence; a debounce ticket only turns into a request if
//! no edit happened after it was issued. Every request gets an id, and only the
//! most recently issued id may write its result back.

use super::backend::TranslateError;
use super::languages;

/// User-facing message for any failed translation.
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed. Please try again.";

/// Inputs at or below this many characters never auto-translate.
const MIN_AUTO_TRANSLATE_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub edit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub id: u64,
    pub text: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorSession {
    pub input: String,
    pub target: String,
    pub output: String,
    pub phase: Phase,
    edit_seq: u64,
    latest_request: u64,
}

impl TranslatorSession {
    pub fn new(target: &str) -> Self {
        let target = languages::find(target)
            .map(|lang| lang.code)
            .unwrap_or(languages::DEFAULT_TARGET);
        Self {
            input: String::new(),
            target: target.to_string(),
            output: String::new(),
            phase: Phase::Idle,
            edit_seq: 0,
            latest_request: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the current input is long enough to translate on its own.
    pub fn qualifies_for_auto(&self) -> bool {
        !self.input.trim().is_empty() && self.input.chars().count() > MIN_AUTO_TRANSLATE_CHARS
    }

    pub fn can_request(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_loading()
    }

    pub fn set_input(&mut self, text: String) -> Option<DebounceTicket> {
        self.input = text;
        self.next_edit()
    }

    pub fn set_target(&mut self, code: &str) -> Option<DebounceTicket> {
        self.target = code.trim().to_string();
        self.next_edit()
    }

    fn next_edit(&mut self) -> Option<DebounceTicket> {
        self.edit_seq += 1;
        self.qualifies_for_auto().then_some(DebounceTicket {
            edit: self.edit_seq,
        })
    }

    /// Resolve a debounce ticket once its quiet period has passed.
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<TranslationRequest> {
        if ticket.edit != self.edit_seq || !self.qualifies_for_auto() {
            return None;
        }
        Some(self.issue())
    }

    /// Explicit trigger from the translate button.
    pub fn request_now(&mut self) -> Option<TranslationRequest> {
        if !self.can_request() {
            return None;
        }
        Some(self.issue())
    }

    fn issue(&mut self) -> TranslationRequest {
        self.latest_request += 1;
        TranslationRequest {
            id: self.latest_request,
            text: self.input.clone(),
            target: self.target.clone(),
        }
    }

    pub fn begin(&mut self, request: &TranslationRequest) {
        if request.id == self.latest_request {
            self.phase = Phase::Loading;
        }
    }

    /// Apply a finished request. Returns `false` when the result was discarded
    /// because a newer request (or a clear) superseded it.
    pub fn complete(&mut self, request_id: u64, result: Result<String, TranslateError>) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        match result {
            Ok(text) => {
                self.output = text;
                self.phase = Phase::Idle;
            }
            Err(_) => {
                self.phase = Phase::Failed(TRANSLATION_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.phase = Phase::Idle;
        self.edit_seq += 1;
        self.latest_request += 1;
    }
}

impl Default for TranslatorSession {
    fn default() -> Self {
        Self::new(languages::DEFAULT_TARGET)
    }
}
