//! Pass-through client for the external text-completion service backing the
//! chat widget. One request, one answer; no retries, no streaming, no
//! conversation state. Failures degrade to a fixed apology in the active
//! locale, never a raw error.

use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;
use crate::content::PROJECTS;
use crate::i18n::Locale;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct AssistantClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl AssistantClient {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Answer a visitor question in the given locale. Missing credential
    /// yields the demo-mode notice; any transport or decode failure yields
    /// the localized apology.
    pub async fn ask(&self, question: &str, locale: Locale) -> String {
        let t = locale.translations();

        let Some(api_key) = self.api_key.as_deref() else {
            return t.assistant.demo_mode.to_string();
        };

        match self.complete(api_key, question, locale).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Assistant request failed: {}", e);
                t.assistant.unavailable.to_string()
            }
        }
    }

    async fn complete(
        &self,
        api_key: &str,
        question: &str,
        locale: Locale,
    ) -> anyhow::Result<String> {
        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: system_prompt(locale),
                }],
            },
            contents: vec![Content {
                parts: vec![Part {
                    text: question.to_string(),
                }],
            }],
        };

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let response: GenerateResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let answer = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| anyhow::anyhow!("empty completion"))?;

        Ok(answer)
    }
}

/// Locale-specific system prompt built from the translation table and the
/// project catalog.
fn system_prompt(locale: Locale) -> String {
    let t = locale.translations();
    let projects_text = PROJECTS
        .iter()
        .map(|p| format!("- {}: {}", p.title.get(locale), p.description.get(locale)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful, warm, and professional AI assistant for the NGO \"Neusatz\" in Ukraine.\n\
         Your goal is to answer questions about the NGO for potential donors, volunteers, and community members.\n\n\
         Current Language: {lang}\n\n\
         About Neusatz:\n{mission}\n\n\
         Key Projects:\n{projects}\n\n\
         Contact Info:\n{address}\n\n\
         Rules:\n\
         1. Be concise and polite.\n\
         2. Focus on the NGO's transparency and impact.\n\
         3. If asked about how to donate, mention Bank Transfer, Crypto, and PayPal.\n\
         4. Keep answers under 100 words.",
        lang = locale.as_str(),
        mission = t.about.mission_text,
        projects = projects_text,
        address = t.footer.address,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssistantConfig;

    #[test]
    fn prompt_includes_localized_mission_and_projects() {
        let prompt = system_prompt(Locale::De);
        assert!(prompt.contains("Current Language: de"));
        assert!(prompt.contains("Industriepark Progresivka"));
        assert!(prompt.contains(Locale::De.translations().about.mission_text));

        let prompt = system_prompt(Locale::Ua);
        assert!(prompt.contains("Індустріальний парк «Прогресівка»"));
    }

    #[tokio::test]
    async fn missing_credential_degrades_to_demo_notice() {
        let client = AssistantClient::new(&AssistantConfig {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
        });
        let answer = client.ask("How can I donate?", Locale::En).await;
        assert_eq!(answer, Locale::En.translations().assistant.demo_mode);

        let answer = client.ask("Як допомогти?", Locale::Ua).await;
        assert_eq!(answer, Locale::Ua.translations().assistant.demo_mode);
    }
}
