//! Text translator tool.

mod backend;
pub mod languages;
mod session;
mod view;

pub use backend::{MockTranslator, TranslateError, Translator};
pub use languages::{Language, LANGUAGES};
pub use session::{
    DebounceTicket, Phase, TranslationRequest, TranslatorSession, TRANSLATION_FAILED_MESSAGE,
};
pub use view::TranslatorView;
