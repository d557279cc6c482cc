//! Prompt construction and the text-generation service seam.

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};

use crate::core::config::NarrativeConfig;
use crate::emotion::EmotionData;
use crate::report::error::NarrativeError;
use crate::report::stats::EmotionStats;

/// Sections the model is asked to produce, in order.
pub const SECTIONS: [&str; 6] = [
    "Clinician Insights",
    "Emotional Trends",
    "Risk Indicators (if any)",
    "Recommendations",
    "User-Friendly Summary",
    "Positive Closing Note",
];

/// A fully rendered prompt plus the sampling temperature to send with it.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativePrompt {
    pub text: String,
    pub temperature: f32,
}

impl NarrativePrompt {
    pub fn build(stats: &EmotionStats, current: Option<&EmotionData>, temperature: f32) -> Self {
        let current = current.map(|obs| obs.emotion.key()).unwrap_or("unknown");
        let sections = SECTIONS
            .iter()
            .enumerate()
            .map(|(idx, title)| format!("{}. {title}", idx + 1))
            .collect::<Vec<_>>()
            .join("\n");

        let text = format!(
            "You are a professional emotional wellbeing analysis AI.\n\
             \n\
             Write a structured clinical-style report using bullet points only.\n\
             \n\
             Rules:\n\
             - No diagnosis\n\
             - No medical claims\n\
             - Neutral, professional tone\n\
             - Clear headings\n\
             - Bullet points only\n\
             - No markdown\n\
             \n\
             Context:\n\
             Emotion percentages:\n\
             {summary}\n\
             \n\
             Current emotion:\n\
             {current}\n\
             \n\
             Provide:\n\
             {sections}\n",
            summary = stats.percentage_summary(),
        );

        Self { text, temperature }
    }
}

/// Something that turns a prompt into free-form prose.
///
/// Futures are local because the browser transport is not `Send`.
pub trait NarrativeService {
    fn narrate<'a>(
        &'a self,
        prompt: &'a NarrativePrompt,
    ) -> LocalBoxFuture<'a, Result<String, NarrativeError>>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible chat completions client (OpenRouter by default).
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    config: NarrativeConfig,
}

impl ChatCompletionsClient {
    pub fn new(config: NarrativeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    async fn complete(&self, prompt: &NarrativePrompt) -> Result<String, NarrativeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(NarrativeError::MissingApiKey)?;

        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt.text,
            }],
            temperature: prompt.temperature,
        };

        let res = self
            .http
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(NarrativeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = res.text().await?;
        parse_completion(&raw)
    }
}

impl NarrativeService for ChatCompletionsClient {
    fn narrate<'a>(
        &'a self,
        prompt: &'a NarrativePrompt,
    ) -> LocalBoxFuture<'a, Result<String, NarrativeError>> {
        self.complete(prompt).boxed_local()
    }
}

/// First choice's content; a null content counts as empty text.
pub(crate) fn parse_completion(raw: &str) -> Result<String, NarrativeError> {
    let response: ChatResponse =
        serde_json::from_str(raw).map_err(|err| NarrativeError::Malformed(err.to_string()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| NarrativeError::Malformed("response has no choices".into()))?;
    Ok(choice.message.content.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;

    fn stats(emotions: &[Emotion]) -> EmotionStats {
        let obs: Vec<EmotionData> = emotions
            .iter()
            .map(|&e| EmotionData::new(e, 1.0, 0))
            .collect();
        EmotionStats::from_observations(&obs)
    }

    #[test]
    fn prompt_embeds_breakdown_and_current_emotion() {
        let stats = stats(&[Emotion::Happy, Emotion::Happy, Emotion::Sad, Emotion::Sad]);
        let current = EmotionData::new(Emotion::Sad, 0.9, 10);
        let prompt = NarrativePrompt::build(&stats, Some(&current), 0.3);

        assert!(prompt.text.contains("Happy: 50%\nSad: 50%"));
        assert!(prompt.text.contains("Current emotion:\nsad"));
        assert!(!prompt.text.contains("Angry"));
        assert_eq!(prompt.temperature, 0.3);
    }

    #[test]
    fn prompt_lists_all_sections_and_rules() {
        let prompt = NarrativePrompt::build(&stats(&[Emotion::Neutral]), None, 0.3);
        for (idx, title) in SECTIONS.iter().enumerate() {
            assert!(prompt.text.contains(&format!("{}. {title}", idx + 1)));
        }
        assert!(prompt.text.contains("- No diagnosis"));
        assert!(prompt.text.contains("- No markdown"));
        assert!(prompt.text.contains("Current emotion:\nunknown"));
    }

    #[test]
    fn completion_content_is_extracted() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"- calm"}}]}"#;
        assert_eq!(parse_completion(raw).unwrap(), "- calm");
    }

    #[test]
    fn null_content_defaults_to_empty() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(parse_completion(raw).unwrap(), "");
    }

    #[test]
    fn missing_choices_is_malformed() {
        assert!(matches!(
            parse_completion(r#"{"choices":[]}"#),
            Err(NarrativeError::Malformed(_))
        ));
        assert!(matches!(
            parse_completion("<html>bad gateway</html>"),
            Err(NarrativeError::Malformed(_))
        ));
    }

    #[test]
    fn client_without_key_fails_before_network() {
        let client = ChatCompletionsClient::new(NarrativeConfig::default());
        let prompt = NarrativePrompt::build(&stats(&[Emotion::Happy]), None, 0.3);
        let result = futures::executor::block_on(client.narrate(&prompt));
        assert!(matches!(result, Err(NarrativeError::MissingApiKey)));
    }
}
