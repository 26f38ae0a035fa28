use anyhow::Context;
use serde::Deserialize;
use std::fs;

/// Library configuration, loaded from a TOML file or built from defaults.
///
/// The LLM API key is deliberately not part of the file; it is injected when
/// constructing the suggestion engine.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
}

/// Settings for the chat-completion endpoint
#[derive(Deserialize, Debug, Clone)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low so rewrites stay close to deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output token ceiling, generous enough for a full rewritten file
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_max_tokens() -> u32 {
    4000
}

impl Config {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file '{}'", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.llm.model, "llama3-70b-8192");
        assert_eq!(config.llm.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.llm.temperature, 0.2);
        assert_eq!(config.llm.max_tokens, 4000);
    }

    #[test]
    fn test_partial_llm_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[llm]\nmodel = \"mixtral-8x7b\"\n").unwrap();
        assert_eq!(config.llm.model, "mixtral-8x7b");
        assert_eq!(config.llm.max_tokens, 4000);
    }

    #[test]
    fn test_full_llm_section() {
        let toml = r#"
[llm]
base_url = "http://localhost:11434/v1"
model = "llama3"
temperature = 0.0
max_tokens = 2048
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.llm.max_tokens, 2048);
    }
}
