use super::common::*;
use crate::workflows::rights::domain::{
    CalculatorKind, Category, EvidenceFlag, EvidenceFlags, IssuerType, Jurisdiction, SellerType,
};
use crate::workflows::rights::elapsed::ElapsedBound;
use crate::workflows::rights::rules::{ConfigurationError, RuleBook, RuleTableEntry, TierRule};

fn entry_with(tiers: Vec<TierRule>) -> RuleTableEntry {
    RuleTableEntry::new(
        Jurisdiction::Uk,
        Category::Vehicle(SellerType::Dealer),
        "the dealer",
    )
    .tiers(tiers)
}

#[test]
fn standard_book_covers_every_supported_combination() {
    let book = standard_book();
    let mut expected = 0;

    for jurisdiction in Jurisdiction::ordered() {
        for calculator in CalculatorKind::ordered() {
            for category in calculator.categories() {
                expected += 1;
                let entry = book
                    .lookup(jurisdiction, category)
                    .unwrap_or_else(|error| panic!("{error}"));
                assert_eq!(entry.jurisdiction, jurisdiction);
                assert_eq!(entry.calculator(), calculator);
                assert!(!entry.next_steps.is_empty(), "{jurisdiction}/{category}");
                assert!(!entry.citations.is_empty(), "{jurisdiction}/{category}");
            }
        }
    }

    assert_eq!(book.len(), expected);
    assert_eq!(expected, 60);
}

#[test]
fn lookup_resolves_the_calculator_from_the_category() {
    let book = standard_book();

    let parking = book
        .lookup(Jurisdiction::Uk, Category::Parking(IssuerType::Council))
        .expect("council parking entry");
    assert_eq!(parking.calculator(), CalculatorKind::Parking);
    assert_eq!(parking.counterparty, "the council");

    let vehicle = book
        .lookup(Jurisdiction::Uk, Category::Vehicle(SellerType::Dealer))
        .expect("dealer entry");
    assert_eq!(vehicle.calculator(), CalculatorKind::Vehicle);
}

#[test]
fn lookup_without_entry_is_a_configuration_error() {
    let book = RuleBook::empty();
    let error = book
        .lookup(Jurisdiction::Au, Category::Parking(IssuerType::Council))
        .expect_err("unmapped");

    assert_eq!(
        error,
        ConfigurationError::Unmapped {
            calculator: CalculatorKind::Parking,
            jurisdiction: Jurisdiction::Au,
            category: Category::Parking(IssuerType::Council),
        }
    );
    assert!(error.to_string().contains("no rule table"));
}

#[test]
fn insert_rejects_malformed_tier_ladders() {
    let mut book = RuleBook::empty();

    assert!(matches!(
        book.insert(entry_with(Vec::new())),
        Err(ConfigurationError::EmptyTiers { .. })
    ));

    assert!(matches!(
        book.insert(entry_with(vec![
            TierRule::within("long", ElapsedBound::Months(6)),
            TierRule::within("short", ElapsedBound::Days(30)),
            TierRule::beyond("closed"),
        ])),
        Err(ConfigurationError::UnorderedTiers { tier: "short", .. })
    ));

    assert!(matches!(
        book.insert(entry_with(vec![
            TierRule::beyond("open"),
            TierRule::within("short", ElapsedBound::Days(30)),
        ])),
        Err(ConfigurationError::OpenTierNotLast { tier: "open", .. })
    ));

    assert!(matches!(
        book.insert(entry_with(vec![TierRule::within(
            "short",
            ElapsedBound::Days(30)
        )])),
        Err(ConfigurationError::MissingOpenTier { .. })
    ));

    assert!(book.is_empty());
}

#[test]
fn insert_rejects_duplicate_entries() {
    let mut book = RuleBook::empty();
    let ladder = || {
        vec![
            TierRule::within("short", ElapsedBound::Days(30)),
            TierRule::beyond("closed"),
        ]
    };

    book.insert(entry_with(ladder())).expect("first insert");
    assert!(matches!(
        book.insert(entry_with(ladder())),
        Err(ConfigurationError::Duplicate { .. })
    ));
    assert_eq!(book.len(), 1);
}

fn sample_days(entry: &RuleTableEntry) -> Vec<i64> {
    let mut days = vec![0];
    for bound in entry.tiers.iter().filter_map(|tier| tier.bound) {
        let edge = bound.approx_days();
        days.extend([edge, edge + 1]);
        if let ElapsedBound::Months(limit) | ElapsedBound::Years(limit) = bound {
            let unit = bound.approx_days() / limit;
            days.push(edge + unit);
        }
    }
    days.push(days.iter().copied().max().unwrap_or_default() + 400);
    days.push(10_000);
    days.sort_unstable();
    days.dedup();
    days
}

fn evidence_sets() -> Vec<EvidenceFlags> {
    let mut sets = vec![EvidenceFlags::new(), evidence(&EvidenceFlag::all())];
    sets.extend(
        EvidenceFlag::all()
            .into_iter()
            .map(|flag| EvidenceFlags::new().with(flag)),
    );
    sets
}

#[test]
fn later_tiers_never_grant_more_than_earlier_ones() {
    let book = standard_book();

    for entry in book.entries() {
        for flags in evidence_sets() {
            let records: Vec<_> = sample_days(entry)
                .into_iter()
                .map(|days| {
                    let input = claim(entry.jurisdiction, entry.category, days, flags.clone());
                    (days, evaluate(&book, &input))
                })
                .collect();

            for pair in records.windows(2) {
                let (earlier_day, earlier) = &pair[0];
                let (later_day, later) = &pair[1];
                let context = format!(
                    "{}/{} evidence={:?} day {earlier_day} -> {later_day}",
                    entry.jurisdiction, entry.category, flags
                );

                assert!(later.tier_index >= earlier.tier_index, "{context}");
                assert!(!later.eligible || earlier.eligible, "{context}");
                assert!(
                    later.remedy_kinds().is_subset(&earlier.remedy_kinds()),
                    "{context}: {:?} not within {:?}",
                    later.remedy_kinds(),
                    earlier.remedy_kinds()
                );
            }
        }
    }
}

#[test]
fn every_standard_ladder_ends_open() {
    let book = standard_book();
    for entry in book.entries() {
        let last = entry.tiers.last().expect("tiers present");
        assert!(last.bound.is_none(), "{}/{}", entry.jurisdiction, entry.category);
    }
}
