use crate::infra::{
    parse_calculator, parse_date, parse_evidence, parse_jurisdiction, parse_letter_type,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use redress::config::{AppConfig, LetterGenerationConfig};
use redress::error::AppError;
use redress::workflows::letters::{
    AnthropicCompletionClient, CompletionClient, EvidenceItem, FallbackReason,
    GenerateLetterTypeRequest, LetterOutcome, LetterService, LetterType, SenderProfile,
};
use redress::workflows::rights::{
    CalculatorKind, ClaimSubmission, EvidenceFlag, EvidenceFlags, Jurisdiction, ResultRecord,
    RightsService,
};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RightsEvaluateArgs {
    /// Calculator to run (vehicle, warranty, parking, energy)
    #[arg(long, value_parser = parse_calculator)]
    pub(crate) calculator: CalculatorKind,
    /// Jurisdiction code (uk, us, eu, au, ca)
    #[arg(long, value_parser = parse_jurisdiction)]
    pub(crate) jurisdiction: Jurisdiction,
    /// Category for the calculator, e.g. dealer, electronics, council, billing
    #[arg(long)]
    pub(crate) category: String,
    /// Purchase, notice or deadlock date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) purchase_date: NaiveDate,
    /// Date the problem arose (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) event_date: Option<NaiveDate>,
    /// Amount paid or charged
    #[arg(long)]
    pub(crate) amount: Option<Decimal>,
    /// Evidence held; repeat the flag for each item
    #[arg(long = "evidence", value_parser = parse_evidence)]
    pub(crate) evidence: Vec<EvidenceFlag>,
    /// Name of the seller, operator or supplier
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Free-text description carried through to the result
    #[arg(long)]
    pub(crate) details: Option<String>,
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct LetterDraftArgs {
    /// Letter type (initial, follow-up, letter-before-action, escalation, chargeback, response-counter)
    #[arg(long = "type", value_parser = parse_letter_type)]
    pub(crate) letter_type: LetterType,
    /// Description of the complaint
    #[arg(long)]
    pub(crate) complaint: String,
    /// Company the letter is addressed to
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Amount in dispute
    #[arg(long)]
    pub(crate) amount: Option<Decimal>,
    /// Purchase date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) purchase_date: Option<NaiveDate>,
    /// What you want the company to do
    #[arg(long)]
    pub(crate) desired_outcome: Option<String>,
    /// Case or order reference
    #[arg(long)]
    pub(crate) reference: Option<String>,
    /// Card issuer for chargeback letters
    #[arg(long)]
    pub(crate) card_issuer: Option<String>,
    /// Your full name for the sign-off
    #[arg(long)]
    pub(crate) sender: Option<String>,
    /// Days the company has to respond
    #[arg(long)]
    pub(crate) deadline_days: Option<u32>,
    /// Evidence item to list; repeat for each item
    #[arg(long = "evidence")]
    pub(crate) evidence: Vec<String>,
    /// Always use the local template, even when an API key is configured
    #[arg(long)]
    pub(crate) offline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the letter portion of the demo.
    #[arg(long)]
    pub(crate) skip_letter: bool,
}

pub(crate) fn run_rights_evaluate(args: RightsEvaluateArgs) -> Result<(), AppError> {
    let RightsEvaluateArgs {
        calculator,
        jurisdiction,
        category,
        purchase_date,
        event_date,
        amount,
        evidence,
        company,
        details,
        today,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let service = RightsService::standard()?;
    let submission = ClaimSubmission {
        calculator,
        jurisdiction: Some(jurisdiction),
        category: Some(category),
        purchase_date: Some(purchase_date),
        event_date,
        amount,
        evidence: evidence.into_iter().collect(),
        company_name: company,
        details,
    };

    let record = service.assess(submission, today)?;
    render_result(&record);
    Ok(())
}

pub(crate) async fn run_letter_draft(args: LetterDraftArgs) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let service = if args.offline {
        LetterService::offline(LetterGenerationConfig::default().max_tokens)
    } else {
        let config = AppConfig::load()?;
        let client = AnthropicCompletionClient::from_config(&config.letters)
            .map(|client| Arc::new(client) as Arc<dyn CompletionClient>);
        LetterService::new(client, config.letters.max_tokens)
    };

    let mut request = GenerateLetterTypeRequest::new(args.letter_type, args.complaint);
    request.company = args.company;
    request.amount = args.amount;
    request.purchase_date = args.purchase_date;
    request.desired_outcome = args.desired_outcome;
    request.case_reference = args.reference;
    request.card_issuer = args.card_issuer;
    if let Some(days) = args.deadline_days {
        request.deadline_days = days;
    }
    request.evidence = args
        .evidence
        .into_iter()
        .map(|name| EvidenceItem {
            name,
            description: None,
        })
        .collect();
    request.sender_profile = args.sender.map(|full_name| SenderProfile {
        full_name,
        address: None,
        email: None,
        phone: None,
    });

    let outcome = service.generate(request, today).await?;
    render_letter(&outcome);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, skip_letter } = args;
    let service = RightsService::standard()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let purchase_date = today - chrono::Duration::days(200);

    println!("Redress demo ({} rule tables loaded)", service.book().len());

    let scenarios = [
        (
            "Dealer sale, fault found after 10 days",
            "dealer",
            10,
            EvidenceFlags::new(),
        ),
        (
            "Dealer sale, fault found after 200 days with a failed repair",
            "dealer",
            200,
            EvidenceFlags::new().with(EvidenceFlag::RepairAttempted),
        ),
        (
            "Private sale, fault found after 10 days",
            "private",
            10,
            EvidenceFlags::new(),
        ),
    ];

    for (title, seller, days, evidence) in scenarios {
        let event_date = purchase_date + chrono::Duration::days(days);
        let submission = ClaimSubmission {
            calculator: CalculatorKind::Vehicle,
            jurisdiction: Some(Jurisdiction::Uk),
            category: Some(seller.to_string()),
            purchase_date: Some(purchase_date),
            event_date: Some(event_date),
            amount: Some(Decimal::new(8_500, 0)),
            evidence,
            company_name: Some("Acme Motors".to_string()),
            details: None,
        };

        println!("\n== {title} ==");
        let record = service.assess(submission, event_date)?;
        render_result(&record);
    }

    if skip_letter {
        return Ok(());
    }

    let mut request = GenerateLetterTypeRequest::new(
        LetterType::LetterBeforeAction,
        "The gearbox failed ten days after purchase and the dealer refuses to accept the car back.",
    );
    request.company = Some("Acme Motors".to_string());
    request.amount = Some(Decimal::new(8_500, 0));
    request.purchase_date = Some(purchase_date);

    println!("\n== Template letter ==");
    let outcome = LetterService::offline(LetterGenerationConfig::default().max_tokens)
        .generate(request, today)
        .await?;
    render_letter(&outcome);

    Ok(())
}

fn render_result(record: &ResultRecord) {
    println!(
        "{} / {} / {}: {} (tier {})",
        record.calculator,
        record.jurisdiction,
        record.category,
        record.tier,
        record.tier_index + 1
    );
    println!(
        "Elapsed: {} days | Eligible for the primary remedy: {}",
        record.elapsed.days,
        if record.eligible { "yes" } else { "no" }
    );
    if !record.window_label.is_empty() {
        println!("Window: {}", record.window_label);
    }

    print_section("Rights", record.rights.iter().map(String::as_str));
    print_section(
        "Remedies",
        record.remedies.iter().map(|remedy| remedy.detail.as_str()),
    );
    print_section("Warnings", record.warnings.iter().map(String::as_str));

    if !record.next_steps.is_empty() {
        println!("Next steps:");
        for step in &record.next_steps {
            println!("  {step}");
        }
    }

    if !record.citations.is_empty() {
        let cited: Vec<String> = record
            .citations
            .iter()
            .map(|citation| format!("{} {}", citation.law, citation.section))
            .collect();
        println!("Law: {}", cited.join("; "));
    }
}

fn print_section<'a>(title: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn render_letter(outcome: &LetterOutcome) {
    match outcome {
        LetterOutcome::Generated { .. } => println!("(generated letter)"),
        LetterOutcome::Fallback {
            reason: FallbackReason::MissingCredentials,
            ..
        } => println!("(template letter: no API key configured)"),
        LetterOutcome::Fallback {
            reason: FallbackReason::ServiceError(error),
            ..
        } => println!("(template letter: {error})"),
    }

    let draft = outcome.draft();
    println!("Subject: {}\n", draft.subject);
    println!("{}", draft.letter);
}
