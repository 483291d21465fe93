use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEADLINE_DAYS: u32 = 14;

/// Stage of the complaint the letter is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterType {
    Initial,
    FollowUp,
    LetterBeforeAction,
    Escalation,
    Chargeback,
    ResponseCounter,
}

impl LetterType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Initial,
            Self::FollowUp,
            Self::LetterBeforeAction,
            Self::Escalation,
            Self::Chargeback,
            Self::ResponseCounter,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::FollowUp => "follow-up",
            Self::LetterBeforeAction => "letter-before-action",
            Self::Escalation => "escalation",
            Self::Chargeback => "chargeback",
            Self::ResponseCounter => "response-counter",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Initial => "Initial complaint",
            Self::FollowUp => "Follow-up",
            Self::LetterBeforeAction => "Letter before action",
            Self::Escalation => "Escalation",
            Self::Chargeback => "Chargeback request",
            Self::ResponseCounter => "Response to company reply",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ordered()
            .into_iter()
            .find(|letter_type| letter_type.code() == normalized)
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderProfile {
    pub full_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Body of `POST /api/generate/letter-type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterTypeRequest {
    pub letter_type: LetterType,
    #[serde(default)]
    pub complaint: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub desired_outcome: Option<String>,
    #[serde(default)]
    pub previous_letter_date: Option<NaiveDate>,
    #[serde(default)]
    pub company_response: Option<String>,
    #[serde(default)]
    pub case_reference: Option<String>,
    #[serde(default = "default_deadline_days")]
    pub deadline_days: u32,
    #[serde(default)]
    pub card_issuer: Option<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub sender_profile: Option<SenderProfile>,
}

fn default_deadline_days() -> u32 {
    DEFAULT_DEADLINE_DAYS
}

impl GenerateLetterTypeRequest {
    pub fn new(letter_type: LetterType, complaint: impl Into<String>) -> Self {
        Self {
            letter_type,
            complaint: complaint.into(),
            company: None,
            amount: None,
            purchase_date: None,
            issue_date: None,
            desired_outcome: None,
            previous_letter_date: None,
            company_response: None,
            case_reference: None,
            deadline_days: DEFAULT_DEADLINE_DAYS,
            card_issuer: None,
            evidence: Vec::new(),
            sender_profile: None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        present(self.company.as_deref())
    }

    pub fn sender_name(&self) -> Option<&str> {
        self.sender_profile
            .as_ref()
            .and_then(|profile| present(Some(profile.full_name.as_str())))
    }
}

/// Treat blank optional strings the same as missing ones.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}

/// `£1,250.00`-style amount; letters are drafted in British English.
pub(crate) fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{rounded:.2}");
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}£{grouped}.{fraction}")
}

/// `18 October 2026`.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Subject line and body of a drafted letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLetter {
    pub subject: String,
    pub letter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterResponse {
    pub letter: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_type: Option<LetterType>,
    pub mock: bool,
}

/// Error body; `letter` and `subject` stay empty and `mock` is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterErrorResponse {
    pub error: String,
    pub letter: String,
    pub subject: String,
    pub mock: bool,
}

impl LetterErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            letter: String::new(),
            subject: String::new(),
            mock: true,
        }
    }
}
