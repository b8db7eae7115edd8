//! Character classes and the configuration that selects them.

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationConfig {
    pub const MIN_LENGTH: usize = 1;
    pub const MAX_LENGTH: usize = 100;

    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }

    pub fn toggle(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Uppercase => self.include_uppercase = enabled,
            CharClass::Lowercase => self.include_lowercase = enabled,
            CharClass::Numbers => self.include_numbers = enabled,
            CharClass::Symbols => self.include_symbols = enabled,
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 10,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Fixed concatenation order of the character set.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase Letters (A-Z)",
            CharClass::Lowercase => "Lowercase Letters (a-z)",
            CharClass::Numbers => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#$%^&*)",
        }
    }
}

/// The characters a generation may draw from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let chars = CharClass::ALL
            .iter()
            .filter(|class| config.is_enabled(**class))
            .flat_map(|class| class.alphabet().chars())
            .collect();
        Self { chars }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
