//! Consumer-rights calculators and complaint-letter generation.
//!
//! `workflows::rights` evaluates jurisdiction-specific rule tables against a claim, and
//! `workflows::letters` drafts complaint letters through an external text-completion
//! service with a deterministic local fallback.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
