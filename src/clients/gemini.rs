use std::sync::Arc;

use anyhow::Result;
use gemini_rust::Gemini;

#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<Gemini>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = Gemini::with_model(&api_key, model.clone())
            .map_err(|e| anyhow::anyhow!("Failed to build Gemini client: {}", e))?;

        Ok(Self {
            client: Arc::new(client),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(|e| anyhow::anyhow!("Gemini request failed: {}", e))?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(anyhow::anyhow!("Gemini returned an empty response"));
        }

        Ok(text)
    }
}
