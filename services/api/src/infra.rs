use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use redress::workflows::letters::LetterType;
use redress::workflows::rights::{CalculatorKind, EvidenceFlag, Jurisdiction};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_calculator(raw: &str) -> Result<CalculatorKind, String> {
    CalculatorKind::parse(raw).ok_or_else(|| {
        format!(
            "unknown calculator '{raw}' (expected one of: {})",
            join_codes(CalculatorKind::ordered().map(CalculatorKind::code))
        )
    })
}

pub(crate) fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    Jurisdiction::parse(raw).ok_or_else(|| {
        format!(
            "unknown jurisdiction '{raw}' (expected one of: {})",
            join_codes(Jurisdiction::ordered().map(Jurisdiction::code))
        )
    })
}

pub(crate) fn parse_evidence(raw: &str) -> Result<EvidenceFlag, String> {
    EvidenceFlag::parse(raw).ok_or_else(|| {
        format!(
            "unknown evidence flag '{raw}' (expected one of: {})",
            join_codes(EvidenceFlag::all().map(EvidenceFlag::code))
        )
    })
}

pub(crate) fn parse_letter_type(raw: &str) -> Result<LetterType, String> {
    LetterType::parse(raw).ok_or_else(|| {
        format!(
            "unknown letter type '{raw}' (expected one of: {})",
            join_codes(LetterType::ordered().map(LetterType::code))
        )
    })
}

fn join_codes<const N: usize>(codes: [&'static str; N]) -> String {
    codes.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsers_accept_form_spellings() {
        assert_eq!(parse_calculator("Vehicle"), Ok(CalculatorKind::Vehicle));
        assert_eq!(parse_jurisdiction(" uk "), Ok(Jurisdiction::Uk));
        assert_eq!(
            parse_letter_type("letter_before_action"),
            Ok(LetterType::LetterBeforeAction)
        );
        assert_eq!(
            parse_date("2024-01-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"))
        );
    }

    #[test]
    fn parser_errors_list_the_accepted_values() {
        let error = parse_jurisdiction("mars").expect_err("unknown jurisdiction");
        assert!(error.contains("uk, us, eu, au, ca"));
        assert!(parse_date("01/01/2024").is_err());
    }
}
