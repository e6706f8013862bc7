use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    constants::prompts::{question_generation_prompt, WORD_EXTRACTION_PROMPT},
    errors::{AppError, AppResult},
    models::{
        domain::{EncodedImage, QuestionBatch, QuestionType, Word},
        dto::model_payload::{parse_extraction, parse_question_batch},
    },
};

/// The external model. Implementations return validated, typed results only;
/// raw JSON never leaves this boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Raw candidate words read from the image, not yet normalized.
    async fn extract_words(&self, image: &EncodedImage) -> AppResult<Vec<String>>;

    async fn generate_questions(
        &self,
        question_type: QuestionType,
        count: usize,
        words: &[Word],
    ) -> AppResult<QuestionBatch>;
}

// Only the part of a chat completion we read.
#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret().to_string())
            .with_api_base(config.openai_api_base.clone());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }

    async fn complete_json(&self, content: Value) -> AppResult<String> {
        let request = chat_request(&self.model, content);
        let reply: ChatCompletionReply = self.client.chat().create_byot(request).await?;

        first_message_content(reply)
    }
}

#[async_trait]
impl ModelService for OpenAiModelService {
    async fn extract_words(&self, image: &EncodedImage) -> AppResult<Vec<String>> {
        log::info!("Requesting word extraction ({} image)", image.mime);

        let content = json!([
            { "type": "text", "text": WORD_EXTRACTION_PROMPT },
            { "type": "image_url", "image_url": { "url": image.data_url() } }
        ]);
        let reply = self.complete_json(content).await?;

        parse_extraction(&reply)
    }

    async fn generate_questions(
        &self,
        question_type: QuestionType,
        count: usize,
        words: &[Word],
    ) -> AppResult<QuestionBatch> {
        log::info!(
            "Requesting {} questions of type {} over {} words",
            count,
            question_type,
            words.len()
        );

        let prompt = question_generation_prompt(question_type, count, words);
        let reply = self.complete_json(Value::String(prompt)).await?;

        parse_question_batch(&reply, question_type, count)
    }
}

fn chat_request(model: &str, content: Value) -> Value {
    json!({
        "model": model,
        "messages": [{ "role": "user", "content": content }],
        "response_format": { "type": "json_object" }
    })
}

fn first_message_content(reply: ChatCompletionReply) -> AppResult<String> {
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| AppError::CollaboratorResponse("model reply has no message content".to_string()))
}
