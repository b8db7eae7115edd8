//! Per-view state of the random string generator.

use rand::Rng;

use super::auto::AutoGenerate;
use super::charset::{CharClass, CharacterSet, GenerationConfig};
use super::engine::{self, GenerateError};
use super::history::{History, HistoryEntry};
use crate::core::format;
use crate::core::settings::AppSettings;

/// What the output panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Empty,
    Generated(String),
    Message(String),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Empty => "",
            Output::Generated(value) | Output::Message(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSession {
    pub config: GenerationConfig,
    pub output: Output,
    pub history: History,
    pub auto: AutoGenerate,
    next_id: u64,
}

impl GeneratorSession {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            config: settings.generation.clone(),
            output: Output::Empty,
            history: History::with_capacity(settings.history_capacity),
            auto: AutoGenerate::default(),
            next_id: 0,
        }
    }

    pub fn set_length(&mut self, length: usize) {
        self.config.set_length(length);
    }

    pub fn toggle(&mut self, class: CharClass, enabled: bool) {
        self.config.toggle(class, enabled);
    }

    /// Generate with the current configuration and record the result.
    ///
    /// An empty character set leaves the history untouched and shows the
    /// explanatory message instead.
    pub fn generate<R>(&mut self, rng: &mut R) -> Result<HistoryEntry, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let charset = CharacterSet::from_config(&self.config);
        match engine::generate_string(&charset, self.config.length, rng) {
            Ok(value) => {
                self.next_id += 1;
                let entry = HistoryEntry::new(self.next_id, value.clone(), format::now_local());
                self.output = Output::Generated(value);
                self.history.record(entry.clone());
                Ok(entry)
            }
            Err(err) => {
                self.output = Output::Message(err.to_string());
                Err(err)
            }
        }
    }

    /// Timer callback. Returns `false` once `epoch` has been superseded so the
    /// caller's loop can exit.
    pub fn auto_tick<R>(&mut self, epoch: u64, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        if !self.auto.is_current(epoch) {
            return false;
        }
        let _ = self.generate(rng);
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}
