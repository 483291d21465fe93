//! Canned letter used when the completion service is unavailable.

use chrono::NaiveDate;

use super::domain::{
    format_amount, format_date, present, DraftLetter, GenerateLetterTypeRequest, LetterType,
};

/// Heading printed above the salutation; one per letter type.
pub const fn heading(letter_type: LetterType) -> &'static str {
    match letter_type {
        LetterType::Initial => "FORMAL COMPLAINT",
        LetterType::FollowUp => "FOLLOW-UP TO UNRESOLVED COMPLAINT",
        LetterType::LetterBeforeAction => "LETTER BEFORE ACTION",
        LetterType::Escalation => "ESCALATION OF COMPLAINT",
        LetterType::Chargeback => "CHARGEBACK REQUEST",
        LetterType::ResponseCounter => "RESPONSE TO YOUR REPLY",
    }
}

/// Subject line shared by generated and fallback letters.
pub fn subject_for(request: &GenerateLetterTypeRequest) -> String {
    let company = request.company_name().unwrap_or("my recent purchase");
    let prefix = match request.letter_type {
        LetterType::Initial => "Formal complaint regarding",
        LetterType::FollowUp => "Follow-up: unresolved complaint regarding",
        LetterType::LetterBeforeAction => "Letter Before Action:",
        LetterType::Escalation => "Escalation of complaint regarding",
        LetterType::Chargeback => "Chargeback request: transaction with",
        LetterType::ResponseCounter => "Response to your reply regarding",
    };

    match present(request.case_reference.as_deref()) {
        Some(reference) => format!("{prefix} {company} (ref: {reference})"),
        None => format!("{prefix} {company}"),
    }
}

/// Render the deterministic template letter for a request.
pub fn render(request: &GenerateLetterTypeRequest, today: NaiveDate) -> DraftLetter {
    let company = request.company_name().unwrap_or("[Company Name]");
    let sender = request.sender_name().unwrap_or("[Your Name]");
    let deadline = request.deadline_days;
    let amount = request
        .amount
        .map(format_amount)
        .unwrap_or_else(|| "[Amount]".to_string());
    let outcome = present(request.desired_outcome.as_deref())
        .unwrap_or("a full refund or an appropriate remedy");

    let mut blocks: Vec<String> = Vec::new();

    let profile = request.sender_profile.as_ref();
    let mut sender_block = vec![
        sender.to_string(),
        present(profile.and_then(|p| p.address.as_deref()))
            .unwrap_or("[Your Address]")
            .to_string(),
    ];
    if let Some(email) = present(profile.and_then(|p| p.email.as_deref())) {
        sender_block.push(email.to_string());
    }
    if let Some(phone) = present(profile.and_then(|p| p.phone.as_deref())) {
        sender_block.push(phone.to_string());
    }
    blocks.push(sender_block.join("\n"));

    blocks.push(format_date(today));

    let recipient = match request.letter_type {
        LetterType::Chargeback => present(request.card_issuer.as_deref())
            .unwrap_or("[Card Issuer]")
            .to_string(),
        LetterType::Escalation => format!("Complaints Manager\n{company}"),
        _ => company.to_string(),
    };
    blocks.push(recipient);

    if let Some(reference) = present(request.case_reference.as_deref()) {
        blocks.push(format!("Your reference: {reference}"));
    }

    blocks.push(heading(request.letter_type).to_string());
    blocks.push("Dear Sir or Madam,".to_string());

    let purchased = request
        .purchase_date
        .map(|date| format!(" on {}", format_date(date)))
        .unwrap_or_default();
    let complaint = request.complaint.trim();
    let response = present(request.company_response.as_deref());

    match request.letter_type {
        LetterType::Initial => {
            blocks.push(format!(
                "I am writing to make a formal complaint about a purchase from {company}{purchased}. {complaint}"
            ));
            blocks.push(format!(
                "Under the Consumer Rights Act 2015, goods must be of satisfactory quality, fit for purpose and as described, and services must be carried out with reasonable care and skill. I would like {outcome}."
            ));
        }
        LetterType::FollowUp => {
            let previous = request
                .previous_letter_date
                .map(format_date)
                .unwrap_or_else(|| "[Previous Letter Date]".to_string());
            blocks.push(format!(
                "I wrote to you on {previous} about the following complaint, which remains unresolved. {complaint}"
            ));
            blocks.push(match response {
                Some(text) => format!("Your response so far has been: \"{text}\". This does not resolve the matter."),
                None => "I have not received a satisfactory response.".to_string(),
            });
            blocks.push(format!("I again ask for {outcome}."));
        }
        LetterType::LetterBeforeAction => {
            blocks.push(format!(
                "This is a letter before action. I have a claim against {company} for {amount} arising from the following. {complaint}"
            ));
            blocks.push(format!(
                "Unless this matter is resolved within {deadline} days of the date of this letter, I intend to issue court proceedings without further notice. I will also claim court fees and statutory interest."
            ));
        }
        LetterType::Escalation => {
            blocks.push(format!(
                "I am escalating my complaint because it has not been resolved at the first level. {complaint}"
            ));
            if let Some(text) = response {
                blocks.push(format!("The response I received was: \"{text}\"."));
            }
            blocks.push(
                "Please treat this as a formal escalation and issue a final response. If the matter is not resolved, I will refer it to the relevant ombudsman or alternative dispute resolution scheme.".to_string(),
            );
        }
        LetterType::Chargeback => {
            blocks.push(format!(
                "I am requesting a chargeback of {amount} paid to {company}{purchased}. {complaint}"
            ));
            blocks.push(
                "Where the payment was made by credit card and is covered by section 75 of the Consumer Credit Act 1974, please also treat this as a claim against you as jointly liable with the merchant.".to_string(),
            );
        }
        LetterType::ResponseCounter => {
            blocks.push(format!(
                "Thank you for your reply, which stated: \"{}\".",
                response.unwrap_or("[Company Response]")
            ));
            blocks.push(format!(
                "I do not accept this response. {complaint} My rights under consumer law are unaffected and I still require {outcome}."
            ));
        }
    }

    if !request.evidence.is_empty() {
        let items: Vec<String> = request
            .evidence
            .iter()
            .map(|item| match present(item.description.as_deref()) {
                Some(description) => format!("- {}: {}", item.name, description),
                None => format!("- {}", item.name),
            })
            .collect();
        blocks.push(format!(
            "I enclose the following evidence:\n{}",
            items.join("\n")
        ));
    }

    if request.letter_type != LetterType::LetterBeforeAction {
        blocks.push(format!(
            "Please respond within {deadline} days of the date of this letter."
        ));
    }

    blocks.push(format!("Yours faithfully,\n\n{sender}"));

    DraftLetter {
        subject: subject_for(request),
        letter: blocks.join("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::letters::domain::SenderProfile;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn every_type_carries_its_heading() {
        for letter_type in LetterType::ordered() {
            let request = GenerateLetterTypeRequest::new(letter_type, "The kettle leaks.");
            let draft = render(&request, today());

            assert!(draft.letter.contains(heading(letter_type)), "{letter_type}");
            assert!(draft.letter.contains("Dear Sir or Madam,"));
            assert!(draft.letter.ends_with("Yours faithfully,\n\n[Your Name]"));
            assert!(!draft.subject.is_empty());
        }
    }

    #[test]
    fn letter_before_action_states_the_claim_and_deadline() {
        let mut request =
            GenerateLetterTypeRequest::new(LetterType::LetterBeforeAction, "The car was faulty.");
        request.company = Some("Acme Motors".to_string());
        request.amount = Some(Decimal::new(4_500, 0));
        request.deadline_days = 14;
        request.sender_profile = Some(SenderProfile {
            full_name: "Jo Patel".to_string(),
            address: Some("2 Mill Lane".to_string()),
            email: Some("jo@example.com".to_string()),
            phone: None,
        });

        let draft = render(&request, today());

        assert!(draft.letter.starts_with("Jo Patel\n2 Mill Lane\njo@example.com\n\n18 October 2026"));
        assert!(draft.letter.contains("claim against Acme Motors for £4,500.00"));
        assert!(draft.letter.contains("within 14 days"));
        assert_eq!(draft.subject, "Letter Before Action: Acme Motors");
    }

    #[test]
    fn chargeback_is_addressed_to_the_card_issuer() {
        let mut request = GenerateLetterTypeRequest::new(LetterType::Chargeback, "Never delivered.");
        request.company = Some("GadgetHub".to_string());
        request.card_issuer = Some("Example Bank".to_string());
        request.case_reference = Some("CB-42".to_string());

        let draft = render(&request, today());

        assert!(draft.letter.contains("\n\nExample Bank\n\nYour reference: CB-42"));
        assert_eq!(
            draft.subject,
            "Chargeback request: transaction with GadgetHub (ref: CB-42)"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let request = GenerateLetterTypeRequest::new(LetterType::Escalation, "No refund yet.");
        assert_eq!(render(&request, today()), render(&request, today()));
    }
}
