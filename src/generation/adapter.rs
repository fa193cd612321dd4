//! Generation adapter: the single hop between an HTTP request and the model.
//!
//! The adapter has no phases beyond build prompt → call → return text. It
//! never parses the model's claimed percentage; the reply is display text.

use std::sync::Arc;

use tracing::debug;

use crate::error::GenerationError;
use crate::generation::prompt::build_prompt;
use crate::generation::TextGenerator;

/// Builds the triage prompt and forwards it to a [`TextGenerator`].
#[derive(Clone)]
pub struct GenerationAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Model identifier of the underlying generator.
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Ask the model how critical `tweet` is for `bank_name`'s customer service.
    ///
    /// Exactly one upstream call is made. Its text is returned unmodified and
    /// its failure is propagated unmodified.
    pub async fn assess(&self, tweet: &str, bank_name: &str) -> Result<String, GenerationError> {
        let prompt = build_prompt(tweet, bank_name);
        debug!(
            model = self.generator.model(),
            prompt_len = prompt.len(),
            "Sending triage prompt"
        );
        self.generator.generate(&prompt).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    /// Records prompts and replays a canned result.
    struct Recorder {
        prompts: Mutex<Vec<String>>,
        reply: fn() -> Result<String, GenerationError>,
    }

    #[async_trait]
    impl TextGenerator for Recorder {
        fn model(&self) -> &str {
            "recorder"
        }

        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }
    }

    fn recorder(reply: fn() -> Result<String, GenerationError>) -> Arc<Recorder> {
        Arc::new(Recorder {
            prompts: Mutex::new(Vec::new()),
            reply,
        })
    }

    #[tokio::test]
    async fn test_reply_is_returned_verbatim() {
        let generator = recorder(|| Ok("  85%\n(high) ".to_string()));
        let adapter = GenerationAdapter::new(generator.clone());

        let reply = adapter.assess("My card was charged twice!", "Zenith").await.unwrap();
        assert_eq!(reply, "  85%\n(high) ");

        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("My card was charged twice!", "Zenith"));
    }

    #[tokio::test]
    async fn test_failure_is_propagated_once() {
        let generator = recorder(|| Err(GenerationError::Timeout(Duration::from_secs(60))));
        let adapter = GenerationAdapter::new(generator.clone());

        let err = adapter.assess("hello", "Acme").await.unwrap_err();
        assert!(matches!(err, GenerationError::Timeout(_)));
        assert_eq!(generator.prompts.lock().unwrap().len(), 1);
    }
}
