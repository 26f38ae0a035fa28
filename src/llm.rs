use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Serialize, Deserialize, Clone, Debug)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

/// The completion-service seam. Implementations send one system/user message
/// pair and return the raw response text; tests substitute a fake.
pub trait ChatProvider {
    async fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> Result<String, Box<dyn std::error::Error>>;
}

/// OpenAI-compatible chat completion client
#[derive(Debug)]
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new provider. No request is made until `complete` is called.
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
            temperature,
            max_tokens,
        }
    }
}

impl ChatProvider for OpenAIProvider {
    /// Single attempt, no retry; transport errors and non-2xx statuses are
    /// returned to the caller to absorb.
    async fn complete(
        &self,
        system: &str,
        user: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        trace!(
            "Request to {}: {} system chars, {} user chars",
            self.model,
            system.len(),
            user.len()
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or("completion response contained no choices")?;

        debug!("Response: {} chars", content.len());
        Ok(content)
    }
}
