//! Prompt text sent to the completion service.

use chrono::NaiveDate;

use super::domain::{format_amount, format_date, present, GenerateLetterTypeRequest, LetterType};

/// Build the completion prompt for a letter request. Pure: missing facts become bracketed
/// placeholders so the model never has to guess them.
pub fn build_prompt(request: &GenerateLetterTypeRequest, today: NaiveDate) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an experienced UK consumer rights adviser. Draft a formal letter on behalf of \
         a consumer using only the facts below.\n\n",
    );

    prompt.push_str("CASE FACTS\n");
    line(&mut prompt, "Company", &company(request));
    line(&mut prompt, "Complaint", request.complaint.trim());
    line(&mut prompt, "Amount involved", &amount(request));
    line(
        &mut prompt,
        "Purchase date",
        &date_or(request.purchase_date, "[Purchase Date]"),
    );
    line(
        &mut prompt,
        "Date the problem started",
        &date_or(request.issue_date, "[Issue Date]"),
    );
    line(
        &mut prompt,
        "Desired outcome",
        present(request.desired_outcome.as_deref()).unwrap_or("[Desired Outcome]"),
    );
    if let Some(reference) = present(request.case_reference.as_deref()) {
        line(&mut prompt, "Case reference", reference);
    }
    line(&mut prompt, "Today's date", &format_date(today));
    prompt.push('\n');

    prompt.push_str(&format!("LETTER TYPE: {}\n", request.letter_type.label()));
    prompt.push_str(&instructions(request));
    prompt.push_str("\n\n");

    prompt.push_str("EVIDENCE\n");
    if request.evidence.is_empty() {
        prompt.push_str(
            "- None listed. Refer generally to receipts and correspondence without inventing documents.\n",
        );
    } else {
        for item in &request.evidence {
            match present(item.description.as_deref()) {
                Some(description) => line(&mut prompt, &item.name, description),
                None => prompt.push_str(&format!("- {}\n", item.name)),
            }
        }
    }
    prompt.push('\n');

    prompt.push_str("SENDER\n");
    let profile = request.sender_profile.as_ref();
    line(
        &mut prompt,
        "Name",
        request.sender_name().unwrap_or("[Your Name]"),
    );
    line(
        &mut prompt,
        "Address",
        present(profile.and_then(|p| p.address.as_deref())).unwrap_or("[Your Address]"),
    );
    line(
        &mut prompt,
        "Email",
        present(profile.and_then(|p| p.email.as_deref())).unwrap_or("[Your Email]"),
    );
    line(
        &mut prompt,
        "Phone",
        present(profile.and_then(|p| p.phone.as_deref())).unwrap_or("[Your Phone]"),
    );
    prompt.push('\n');

    prompt.push_str("FORMAT\n");
    prompt.push_str("- Write in British English with a firm, polite and professional tone.\n");
    prompt.push_str("- Start with the sender's address block, then the date, then the recipient.\n");
    prompt.push_str(&format!(
        "- Give the recipient {} days to respond.\n",
        request.deadline_days
    ));
    prompt.push_str("- Keep any bracketed placeholder exactly as written.\n");
    prompt.push_str("- Return only the letter text, without a subject line or commentary.\n");

    prompt
}

fn line(prompt: &mut String, label: &str, value: &str) {
    prompt.push_str(&format!("- {label}: {value}\n"));
}

fn company(request: &GenerateLetterTypeRequest) -> String {
    request
        .company_name()
        .unwrap_or("[Company Name]")
        .to_string()
}

fn amount(request: &GenerateLetterTypeRequest) -> String {
    request
        .amount
        .map(format_amount)
        .unwrap_or_else(|| "[Amount]".to_string())
}

fn date_or(date: Option<NaiveDate>, placeholder: &str) -> String {
    date.map(format_date)
        .unwrap_or_else(|| placeholder.to_string())
}

fn instructions(request: &GenerateLetterTypeRequest) -> String {
    let deadline = request.deadline_days;
    let response = present(request.company_response.as_deref());

    match request.letter_type {
        LetterType::Initial => format!(
            "This is the consumer's first formal complaint. Explain the problem clearly, cite \
             the consumer protection law that applies (for goods and services, the Consumer \
             Rights Act 2015), state the desired outcome and ask for a response within {deadline} days."
        ),
        LetterType::FollowUp => format!(
            "This follows an earlier letter dated {} that has not resolved the complaint. \
             Refer to that letter, summarise the company's response so far ({}), restate the \
             demand and set a final deadline of {deadline} days.",
            date_or(request.previous_letter_date, "[Previous Letter Date]"),
            response.unwrap_or("no response received"),
        ),
        LetterType::LetterBeforeAction => format!(
            "This is a formal Letter Before Action under the Practice Direction on Pre-Action \
             Conduct. Set out the claim of {} against {}, state that court proceedings will be \
             issued without further notice if the matter is not resolved within {deadline} days, \
             and mention that court fees and statutory interest will be claimed.",
            amount(request),
            company(request),
        ),
        LetterType::Escalation => format!(
            "The complaint is being escalated to a senior manager or the complaints department \
             after an unsatisfactory response ({}). Request a final response or deadlock letter \
             within {deadline} days so the consumer can refer the matter to the relevant \
             ombudsman or alternative dispute resolution scheme.",
            response.unwrap_or("[Company Response]"),
        ),
        LetterType::Chargeback => format!(
            "Address the letter to the card issuer {}, not the merchant. Request a chargeback, \
             or a claim under section 75 of the Consumer Credit Act 1974 where the purchase was \
             on a credit card, for {} because {} failed to provide the goods or services as \
             agreed. Ask the issuer to confirm the claim within {deadline} days.",
            present(request.card_issuer.as_deref()).unwrap_or("[Card Issuer]"),
            amount(request),
            company(request),
        ),
        LetterType::ResponseCounter => format!(
            "Respond point by point to the company's reply: \"{}\". Rebut each point with \
             reference to the facts and the law, restate the desired outcome and ask for a \
             revised response within {deadline} days.",
            response.unwrap_or("[Company Response]"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::letters::domain::{EvidenceItem, SenderProfile};
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
    }

    #[test]
    fn missing_facts_become_placeholders() {
        let request = GenerateLetterTypeRequest::new(LetterType::Initial, "Laptop screen failed");
        let prompt = build_prompt(&request, today());

        assert!(prompt.contains("- Company: [Company Name]"));
        assert!(prompt.contains("- Amount involved: [Amount]"));
        assert!(prompt.contains("- Name: [Your Name]"));
        assert!(prompt.contains("- Complaint: Laptop screen failed"));
        assert!(prompt.contains("18 October 2026"));
        assert!(prompt.contains("LETTER TYPE: Initial complaint"));
    }

    #[test]
    fn facts_and_evidence_are_interpolated() {
        let mut request = GenerateLetterTypeRequest::new(
            LetterType::LetterBeforeAction,
            "Sofa delivered damaged",
        );
        request.company = Some("HomeCo Ltd".to_string());
        request.amount = Some(Decimal::new(89_900, 2));
        request.deadline_days = 7;
        request.evidence = vec![
            EvidenceItem {
                name: "Delivery photos".to_string(),
                description: Some("Taken on arrival".to_string()),
            },
            EvidenceItem {
                name: "Order confirmation".to_string(),
                description: None,
            },
        ];
        request.sender_profile = Some(SenderProfile {
            full_name: "Alex Morgan".to_string(),
            address: Some("1 High Street, Leeds".to_string()),
            email: None,
            phone: None,
        });

        let prompt = build_prompt(&request, today());

        assert!(prompt.contains("claim of £899.00 against HomeCo Ltd"));
        assert!(prompt.contains("within 7 days"));
        assert!(prompt.contains("- Delivery photos: Taken on arrival"));
        assert!(prompt.contains("- Order confirmation\n"));
        assert!(prompt.contains("- Name: Alex Morgan"));
        assert!(prompt.contains("- Email: [Your Email]"));
    }

    #[test]
    fn each_letter_type_selects_its_own_instructions() {
        let prompts: Vec<String> = LetterType::ordered()
            .into_iter()
            .map(|letter_type| {
                build_prompt(
                    &GenerateLetterTypeRequest::new(letter_type, "Boiler repair not completed"),
                    today(),
                )
            })
            .collect();

        for (index, prompt) in prompts.iter().enumerate() {
            for other in prompts.iter().skip(index + 1) {
                assert_ne!(prompt, other);
            }
        }
        assert!(prompts[4].contains("[Card Issuer]"));
        assert!(prompts[1].contains("[Previous Letter Date]"));
    }

    #[test]
    fn sections_are_written_one_line_per_fact() {
        let request = GenerateLetterTypeRequest::new(LetterType::Chargeback, "Item never arrived");
        let prompt = build_prompt(&request, today());

        assert!(prompt.contains("\nLETTER TYPE: Chargeback request\n"));
        assert!(prompt.contains("- Complaint: Item never arrived\n- Amount involved: [Amount]\n"));
        assert!(prompt.contains("- Give the recipient 14 days to respond.\n"));
        assert!(prompt.ends_with("without a subject line or commentary.\n"));
    }
}
