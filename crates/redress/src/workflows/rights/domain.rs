use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::elapsed::Elapsed;

/// Legal systems with a rule table in the standard rule book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    Uk,
    Us,
    Eu,
    Au,
    Ca,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 5] {
        [Self::Uk, Self::Us, Self::Eu, Self::Au, Self::Ca]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Uk => "uk",
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Au => "au",
            Self::Ca => "ca",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Uk => "United Kingdom",
            Self::Us => "United States",
            Self::Eu => "European Union",
            Self::Au => "Australia",
            Self::Ca => "Canada",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|jurisdiction| jurisdiction.code() == normalized)
    }
}

/// The four rights calculators offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Vehicle,
    Warranty,
    Parking,
    Energy,
}

impl CalculatorKind {
    pub const fn ordered() -> [Self; 4] {
        [Self::Vehicle, Self::Warranty, Self::Parking, Self::Energy]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Warranty => "warranty",
            Self::Parking => "parking",
            Self::Energy => "energy",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle purchase dispute",
            Self::Warranty => "Product warranty checker",
            Self::Parking => "Parking charge appeal",
            Self::Energy => "Energy complaint",
        }
    }

    /// What the calculator's start date means to the user.
    pub const fn start_date_label(self) -> &'static str {
        match self {
            Self::Vehicle | Self::Warranty => "purchase or delivery date",
            Self::Parking => "date the charge was issued",
            Self::Energy => "date the complaint reached deadlock",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.code() == normalized)
    }

    /// Every category the calculator accepts, in display order.
    pub fn categories(self) -> Vec<Category> {
        match self {
            Self::Vehicle => SellerType::ordered()
                .into_iter()
                .map(Category::Vehicle)
                .collect(),
            Self::Warranty => ProductCategory::ordered()
                .into_iter()
                .map(Category::Warranty)
                .collect(),
            Self::Parking => IssuerType::ordered()
                .into_iter()
                .map(Category::Parking)
                .collect(),
            Self::Energy => EnergyIssue::ordered()
                .into_iter()
                .map(Category::Energy)
                .collect(),
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerType {
    Dealer,
    Private,
    Online,
}

impl SellerType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Dealer, Self::Private, Self::Online]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::Private => "private",
            Self::Online => "online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Appliances,
    Furniture,
    Clothing,
}

impl ProductCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Electronics,
            Self::Appliances,
            Self::Furniture,
            Self::Clothing,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Appliances => "appliances",
            Self::Furniture => "furniture",
            Self::Clothing => "clothing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuerType {
    Council,
    PrivateOperator,
}

impl IssuerType {
    pub const fn ordered() -> [Self; 2] {
        [Self::Council, Self::PrivateOperator]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Council => "council",
            Self::PrivateOperator => "private_operator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyIssue {
    Billing,
    SupplyInterruption,
    Metering,
}

impl EnergyIssue {
    pub const fn ordered() -> [Self; 3] {
        [Self::Billing, Self::SupplyInterruption, Self::Metering]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::SupplyInterruption => "supply_interruption",
            Self::Metering => "metering",
        }
    }
}

/// Category selection scoped to its calculator, so a parking issuer can never be paired
/// with the vehicle rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "category", rename_all = "snake_case")]
pub enum Category {
    Vehicle(SellerType),
    Warranty(ProductCategory),
    Parking(IssuerType),
    Energy(EnergyIssue),
}

impl Category {
    pub const fn calculator(self) -> CalculatorKind {
        match self {
            Self::Vehicle(_) => CalculatorKind::Vehicle,
            Self::Warranty(_) => CalculatorKind::Warranty,
            Self::Parking(_) => CalculatorKind::Parking,
            Self::Energy(_) => CalculatorKind::Energy,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Vehicle(seller) => seller.code(),
            Self::Warranty(product) => product.code(),
            Self::Parking(issuer) => issuer.code(),
            Self::Energy(issue) => issue.code(),
        }
    }

    /// Parse a form value for the given calculator. Hyphens and spaces are accepted in
    /// place of underscores so `private-operator` and `private operator` both resolve.
    pub fn parse(calculator: CalculatorKind, raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        calculator
            .categories()
            .into_iter()
            .find(|category| category.code() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Documentation the claimant says they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceFlag {
    RepairAttempted,
    IndependentInspection,
    ServiceHistory,
    PhotosTaken,
    ReceiptKept,
    PaidByCreditCard,
    WrittenComplaintSent,
    FinalResponseReceived,
    SignageUnclear,
    ValidPermit,
    NoticeNotReceived,
}

impl EvidenceFlag {
    pub const fn all() -> [Self; 11] {
        [
            Self::RepairAttempted,
            Self::IndependentInspection,
            Self::ServiceHistory,
            Self::PhotosTaken,
            Self::ReceiptKept,
            Self::PaidByCreditCard,
            Self::WrittenComplaintSent,
            Self::FinalResponseReceived,
            Self::SignageUnclear,
            Self::ValidPermit,
            Self::NoticeNotReceived,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::RepairAttempted => "repair_attempted",
            Self::IndependentInspection => "independent_inspection",
            Self::ServiceHistory => "service_history",
            Self::PhotosTaken => "photos_taken",
            Self::ReceiptKept => "receipt_kept",
            Self::PaidByCreditCard => "paid_by_credit_card",
            Self::WrittenComplaintSent => "written_complaint_sent",
            Self::FinalResponseReceived => "final_response_received",
            Self::SignageUnclear => "signage_unclear",
            Self::ValidPermit => "valid_permit",
            Self::NoticeNotReceived => "notice_not_received",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::all().into_iter().find(|flag| flag.code() == normalized)
    }
}

/// Set of evidence flags held by the claimant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceFlags(BTreeSet<EvidenceFlag>);

impl EvidenceFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, flag: EvidenceFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn has_all(&self, flags: &[EvidenceFlag]) -> bool {
        flags.iter().all(|flag| self.has(*flag))
    }

    pub fn insert(&mut self, flag: EvidenceFlag) -> bool {
        self.0.insert(flag)
    }

    pub fn with(mut self, flag: EvidenceFlag) -> Self {
        self.insert(flag);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = EvidenceFlag> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<EvidenceFlag> for EvidenceFlags {
    fn from_iter<I: IntoIterator<Item = EvidenceFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw calculator form as submitted, before intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub calculator: CalculatorKind,
    #[serde(default)]
    pub jurisdiction: Option<Jurisdiction>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub evidence: EvidenceFlags,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Validated claim facts consumed by the eligibility evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimInput {
    pub jurisdiction: Jurisdiction,
    pub category: Category,
    pub purchase_date: NaiveDate,
    pub event_date: NaiveDate,
    pub amount: Option<Decimal>,
    pub evidence: EvidenceFlags,
    pub company_name: Option<String>,
    pub details: String,
}

impl ClaimInput {
    pub fn calculator(&self) -> CalculatorKind {
        self.category.calculator()
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed::between(self.purchase_date, self.event_date)
    }
}

/// Legal footing of a right or remedy. Private sales strip everything `Statutory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    Statutory,
    Contractual,
    Misrepresentation,
    Regulatory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemedyKind {
    Refund,
    RepairOrReplacement,
    PriceReduction,
    Compensation,
    Cancellation,
    Chargeback,
    ManufacturerWarranty,
    Misrepresentation,
    InformalChallenge,
    FormalAppeal,
    IndependentAdjudication,
    SupplierComplaint,
    OmbudsmanReferral,
    RegulatorComplaint,
    Arbitration,
    SmallClaims,
}

/// Law name and section quoted back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub law: String,
    pub section: String,
}

/// Remedy available for the claim, in recommendation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyOption {
    pub kind: RemedyKind,
    pub detail: String,
}

/// Structured advice produced for a single claim. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub calculator: CalculatorKind,
    pub jurisdiction: Jurisdiction,
    pub category: Category,
    pub tier: String,
    pub tier_index: usize,
    pub elapsed: Elapsed,
    pub eligible: bool,
    pub rights: Vec<String>,
    pub remedies: Vec<RemedyOption>,
    pub warnings: Vec<String>,
    pub next_steps: Vec<String>,
    pub window_label: String,
    pub citations: Vec<Citation>,
    pub details: String,
}

impl ResultRecord {
    pub fn offers(&self, kind: RemedyKind) -> bool {
        self.remedies.iter().any(|remedy| remedy.kind == kind)
    }

    pub fn remedy_kinds(&self) -> BTreeSet<RemedyKind> {
        self.remedies.iter().map(|remedy| remedy.kind).collect()
    }
}
