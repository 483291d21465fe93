use std::sync::Arc;

use chrono::NaiveDate;

use super::completion::CompletionClient;
use super::domain::{DraftLetter, GenerateLetterTypeRequest, LetterResponse, LetterType};
use super::{fallback, prompt};

/// Why the canned template was used instead of a generated letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingCredentials,
    ServiceError(String),
}

/// A drafted letter and how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterOutcome {
    Generated {
        letter_type: LetterType,
        draft: DraftLetter,
    },
    Fallback {
        letter_type: LetterType,
        draft: DraftLetter,
        reason: FallbackReason,
    },
}

impl LetterOutcome {
    pub fn draft(&self) -> &DraftLetter {
        match self {
            Self::Generated { draft, .. } | Self::Fallback { draft, .. } => draft,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn into_response(self) -> LetterResponse {
        let mock = self.is_fallback();
        let (letter_type, draft) = match self {
            Self::Generated { letter_type, draft } | Self::Fallback { letter_type, draft, .. } => {
                (letter_type, draft)
            }
        };

        LetterResponse {
            letter: draft.letter,
            subject: draft.subject,
            letter_type: Some(letter_type),
            mock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    #[error("a description of the complaint is required")]
    MissingComplaint,
}

/// Drafts complaint letters through the completion service, degrading to the local template.
#[derive(Clone)]
pub struct LetterService {
    client: Option<Arc<dyn CompletionClient>>,
    max_tokens: u32,
}

impl LetterService {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    /// Service with no completion client; every request uses the template.
    pub fn offline(max_tokens: u32) -> Self {
        Self::new(None, max_tokens)
    }

    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(
        &self,
        request: GenerateLetterTypeRequest,
        today: NaiveDate,
    ) -> Result<LetterOutcome, LetterError> {
        if request.complaint.trim().is_empty() {
            return Err(LetterError::MissingComplaint);
        }

        let letter_type = request.letter_type;
        let Some(client) = self.client.as_ref() else {
            tracing::info!(letter_type = %letter_type, "no completion credentials; using template letter");
            return Ok(Self::fallback(&request, today, FallbackReason::MissingCredentials));
        };

        let prompt = prompt::build_prompt(&request, today);
        match client.complete(&prompt, self.max_tokens).await {
            Ok(completion) => {
                tracing::info!(letter_type = %letter_type, mode = "generated", "letter drafted");
                Ok(LetterOutcome::Generated {
                    letter_type,
                    draft: DraftLetter {
                        subject: fallback::subject_for(&request),
                        letter: completion.text.trim().to_string(),
                    },
                })
            }
            Err(error) => {
                tracing::warn!(letter_type = %letter_type, error = %error, "completion failed; using template letter");
                Ok(Self::fallback(
                    &request,
                    today,
                    FallbackReason::ServiceError(error.to_string()),
                ))
            }
        }
    }

    fn fallback(
        request: &GenerateLetterTypeRequest,
        today: NaiveDate,
        reason: FallbackReason,
    ) -> LetterOutcome {
        LetterOutcome::Fallback {
            letter_type: request.letter_type,
            draft: fallback::render(request, today),
            reason,
        }
    }
}
