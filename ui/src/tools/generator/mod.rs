//! Random string generator tool.

mod auto;
mod charset;
mod engine;
mod history;
mod session;
mod view;

pub use auto::{AutoGenerate, AutoState};
pub use charset::{CharClass, CharacterSet, GenerationConfig, LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
pub use engine::{generate_string, GenerateError, EMPTY_CHARSET_MESSAGE};
pub use history::{History, HistoryEntry};
pub use session::{GeneratorSession, Output};
pub use view::GeneratorView;
