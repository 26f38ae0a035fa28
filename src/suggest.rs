use crate::config::Config;
use crate::diff::render_diff;
use crate::extract::extract_code_and_explanation;
use crate::llm::{ChatProvider, OpenAIProvider};
use crate::prompt;
use crate::render::format_analysis;
use crate::rule::analyze;
use crate::types::SuggestionResponse;
use anyhow::bail;
use tracing::{debug, info, warn};

/// Generates code improvement suggestions by combining local pattern
/// analysis with a chat-completion service.
#[derive(Debug)]
pub struct SuggestEngine<P> {
    provider: P,
}

impl SuggestEngine<OpenAIProvider> {
    /// Build an engine backed by the configured OpenAI-compatible endpoint.
    ///
    /// A missing API key is a configuration error and fails here, before
    /// any request is attempted. Transport failures are separate; `generate`
    /// absorbs those into its result.
    pub fn from_config(config: &Config, api_key: &str) -> anyhow::Result<Self> {
        if api_key.trim().is_empty() {
            bail!("LLM API key is not set");
        }
        let llm = &config.llm;
        Ok(Self::new(OpenAIProvider::new(
            llm.base_url.clone(),
            api_key.to_string(),
            llm.model.clone(),
            llm.temperature,
            llm.max_tokens,
        )))
    }
}

impl<P: ChatProvider> SuggestEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Analyze `code`, ask the model to improve it per `request`, and return
    /// the improved code, explanation, and side-by-side diff.
    ///
    /// Never fails: a provider error degrades to the original code with the
    /// error detail as explanation and an empty diff, so the caller always
    /// has something displayable.
    pub async fn generate(&self, code: &str, request: &str) -> SuggestionResponse {
        let analysis = analyze(code);
        debug!("Local analysis produced {} findings", analysis.total());
        let analysis_text = format_analysis(&analysis);

        let system = prompt::system_prompt(&analysis_text);
        let user = prompt::user_prompt(code, request);

        match self.provider.complete(&system, &user).await {
            Ok(response_text) => {
                let (improved_code, explanation) = extract_code_and_explanation(&response_text);
                if improved_code.is_empty() {
                    info!("Model response contained no code block");
                }
                let diff_html = render_diff(code, &improved_code);
                SuggestionResponse {
                    improved_code,
                    explanation,
                    diff_html,
                }
            }
            Err(e) => {
                warn!("Completion request failed: {}", e);
                SuggestionResponse {
                    improved_code: code.to_string(),
                    explanation: format!("Error generating suggestions: {}", e),
                    diff_html: String::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a canned response without touching the network
    struct CannedProvider {
        response: String,
    }

    impl ChatProvider for CannedProvider {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
        ) -> Result<String, Box<dyn std::error::Error>> {
            Ok(self.response.clone())
        }
    }

    /// Always fails, simulating a transport error
    struct FailingProvider;

    impl ChatProvider for FailingProvider {
        async fn complete(
            &self,
            _system: &str,
            _user: &str,
        ) -> Result<String, Box<dyn std::error::Error>> {
            Err("connection refused".into())
        }
    }

    #[tokio::test]
    async fn test_generate_extracts_code_and_renders_diff() {
        let engine = SuggestEngine::new(CannedProvider {
            response: "Improvements below.\n```cpp\nint x = 0;\n```\nInitialized x.".to_string(),
        });
        let result = engine.generate("int x;", "fix potential bugs").await;
        assert_eq!(result.improved_code, "int x = 0;");
        assert!(result.explanation.contains("Initialized x."));
        assert!(!result.explanation.contains("int x = 0;"));
        assert!(result.diff_html.contains("<table"));
    }

    #[tokio::test]
    async fn test_generate_without_code_block_signals_empty_code() {
        let engine = SuggestEngine::new(CannedProvider {
            response: "The code already looks good.".to_string(),
        });
        let result = engine.generate("int x = 0;", "optimize").await;
        assert_eq!(result.improved_code, "");
        assert_eq!(result.explanation, "The code already looks good.");
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_original_code() {
        let engine = SuggestEngine::new(FailingProvider);
        let original = "int* ptr = new int(5);";
        let result = engine.generate(original, "modernize").await;
        assert_eq!(result.improved_code, original);
        assert!(result.explanation.contains("Error generating suggestions"));
        assert!(result.explanation.contains("connection refused"));
        assert_eq!(result.diff_html, "");
    }

    #[test]
    fn test_from_config_rejects_missing_api_key() {
        let err = SuggestEngine::from_config(&Config::default(), "").unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_from_config_accepts_key() {
        assert!(SuggestEngine::from_config(&Config::default(), "gsk_test").is_ok());
    }
}
