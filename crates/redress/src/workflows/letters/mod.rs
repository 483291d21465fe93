//! Complaint-letter generation.
//!
//! Requests are turned into a completion prompt and sent to the external text-completion
//! service. Missing credentials or a failed call produce the local template letter instead,
//! reported as `LetterOutcome::Fallback` and surfaced to HTTP callers as `mock: true`.

pub mod completion;
pub mod domain;
pub mod fallback;
pub mod prompt;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use completion::{AnthropicCompletionClient, Completion, CompletionClient, CompletionError};
pub use domain::{
    DraftLetter, EvidenceItem, GenerateLetterTypeRequest, LetterErrorResponse, LetterResponse,
    LetterType, SenderProfile,
};
pub use prompt::build_prompt;
pub use router::letter_router;
pub use service::{FallbackReason, LetterError, LetterOutcome, LetterService};
