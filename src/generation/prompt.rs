/**
 * Prompt Template and Output Shaping
 *
 * The prompt sent to the completion API is a fixed template over the four
 * request fields. The model is asked for JSON `{subject, content}`; since
 * models don't always comply, parsing falls back to a canned subject with
 * the raw completion as the body rather than failing the request.
 */
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// System prompt for the completion API
pub const SYSTEM_PROMPT: &str = "You are a professional email writing assistant. \
Generate concise, effective emails that achieve the user's goals.";

/// Fallback subject when the completion isn't valid JSON
const FALLBACK_SUBJECT: &str = "Professional Communication";

/// Requested tone of the generated email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warm,
    Formal,
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation request body
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateEmailRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub recipient_name: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub recipient_organization: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub desired_outcome: String,
    pub tone: Tone,
}

/// A generated email, parsed from the completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEmail {
    pub subject: String,
    pub content: String,
}

/// Build the user prompt for a generation request
pub fn build_prompt(request: &GenerateEmailRequest) -> String {
    format!(
        "Generate a professional email with the following requirements:\n\n\
         Recipient: {} at {}\n\
         Desired Outcome: {}\n\
         Tone: {}\n\n\
         Please provide:\n\
         1. A compelling subject line\n\
         2. A well-structured email body that achieves the desired outcome\n\
         3. Use the specified tone throughout\n\n\
         Format the response as JSON with \"subject\" and \"content\" fields.",
        request.recipient_name,
        request.recipient_organization,
        request.desired_outcome,
        request.tone,
    )
}

/// Parse the completion text into subject and content
///
/// Falls back to a fixed subject with the raw text as content when the
/// model ignored the JSON instruction.
pub fn parse_generated(text: &str) -> GeneratedEmail {
    serde_json::from_str::<GeneratedEmail>(text).unwrap_or_else(|_| GeneratedEmail {
        subject: FALLBACK_SUBJECT.to_string(),
        content: text.to_string(),
    })
}

/// Synthesize the recipient address from name and organization
///
/// `Jane Doe` at `Acme Corp` becomes `Jane Doe@acmecorp.com`. Lossy, but
/// the stored record only needs a plausible placeholder until the user
/// edits it.
pub fn synthesize_to_email(recipient_name: &str, recipient_organization: &str) -> String {
    let domain: String = recipient_organization
        .to_lowercase()
        .split_whitespace()
        .collect();
    format!("{recipient_name}@{domain}.com")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request() -> GenerateEmailRequest {
        GenerateEmailRequest {
            recipient_name: "Jane".to_string(),
            recipient_organization: "Acme Corp".to_string(),
            desired_outcome: "schedule a call".to_string(),
            tone: Tone::Warm,
        }
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Recipient: Jane at Acme Corp"));
        assert!(prompt.contains("Desired Outcome: schedule a call"));
        assert!(prompt.contains("Tone: warm"));
        assert!(prompt.contains("\"subject\" and \"content\""));
    }

    #[test]
    fn test_parse_json_completion() {
        let generated =
            parse_generated(r#"{"subject": "Quick call?", "content": "Hi Jane, ..."}"#);
        assert_eq!(generated.subject, "Quick call?");
        assert_eq!(generated.content, "Hi Jane, ...");
    }

    #[test]
    fn test_parse_falls_back_on_plain_text() {
        let generated = parse_generated("Subject: Quick call?\n\nHi Jane");
        assert_eq!(generated.subject, "Professional Communication");
        assert_eq!(generated.content, "Subject: Quick call?\n\nHi Jane");
    }

    #[test]
    fn test_to_email_synthesis() {
        assert_eq!(synthesize_to_email("Jane", "Acme Corp"), "Jane@acmecorp.com");
        assert_eq!(synthesize_to_email("Bo", "X"), "Bo@x.com");
    }

    #[test]
    fn test_tone_deserializes_lowercase() {
        let tone: Tone = serde_json::from_str(r#""formal""#).unwrap();
        assert_eq!(tone, Tone::Formal);
        assert!(serde_json::from_str::<Tone>(r#""angry""#).is_err());
    }
}
