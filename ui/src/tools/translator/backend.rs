//! Translation backends.
//!
//! Views talk to a `Translator` trait object supplied through context, so a
//! real service can replace the mock without touching view logic.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::settings::DEFAULT_MOCK_TRANSLATION_DELAY_MS;
use crate::core::timing;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unsupported target language `{0}`")]
    UnsupportedLanguage(String),
    #[error("translation backend failed: {0}")]
    Backend(String),
}

#[async_trait(?Send)]
pub trait Translator {
    fn name(&self) -> &str;

    /// Translate English `text` into the language identified by `target`.
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}

/// Stand-in backend: tags the text with the upper-cased target code after an
/// artificial delay.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    pub delay_ms: u64,
}

impl MockTranslator {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_TRANSLATION_DELAY_MS)
    }
}

#[async_trait(?Send)]
impl Translator for MockTranslator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        if self.delay_ms > 0 {
            timing::sleep_ms(self.delay_ms).await;
        }
        let code = target.trim();
        if code.is_empty() {
            return Err(TranslateError::UnsupportedLanguage(target.to_string()));
        }
        Ok(format!("[{}] {text}", code.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn mock_prefixes_upper_cased_code() {
        let backend = MockTranslator::new(0);
        assert_eq!(block_on(backend.translate("hello", "fr")).unwrap(), "[FR] hello");
        assert_eq!(block_on(backend.translate("hola", "zh")).unwrap(), "[ZH] hola");
    }

    #[test]
    fn unknown_codes_still_get_tagged() {
        let backend = MockTranslator::new(0);
        assert_eq!(block_on(backend.translate("hi", "tlh")).unwrap(), "[TLH] hi");
    }

    #[test]
    fn blank_code_is_rejected() {
        let backend = MockTranslator::new(0);
        let err = block_on(backend.translate("hello", "  ")).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedLanguage(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_its_delay() {
        let backend = MockTranslator::default();
        let started = tokio::time::Instant::now();
        let out = backend.translate("hello", "es").await.unwrap();
        assert_eq!(out, "[ES] hello");
        assert!(started.elapsed() >= std::time::Duration::from_millis(1_000));
    }
}
