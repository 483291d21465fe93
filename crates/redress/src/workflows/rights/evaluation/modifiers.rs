use super::Assessment;
use crate::workflows::rights::domain::{Basis, ClaimInput, RemedyKind};
use crate::workflows::rights::elapsed::Elapsed;
use crate::workflows::rights::rules::Modifier;

/// Apply every modifier except `PrivateSale`, in declaration order.
pub(super) fn apply_adjustments(
    modifiers: &[Modifier],
    claim: &ClaimInput,
    elapsed: &Elapsed,
    assessment: &mut Assessment,
) {
    for modifier in modifiers {
        match modifier {
            Modifier::Chargeback {
                minimum,
                maximum,
                text,
            } => {
                let in_range = claim.amount.is_some_and(|amount| {
                    amount >= *minimum && maximum.map_or(true, |max| amount <= max)
                });
                if in_range {
                    assessment.remedy(RemedyKind::Chargeback, text, Basis::Statutory);
                }
            }
            Modifier::CoolingOff { window, text } => {
                if window.contains(elapsed) {
                    assessment.remedy(RemedyKind::Cancellation, text, Basis::Statutory);
                }
            }
            Modifier::ManufacturerWarranty { window, text } => {
                if window.contains(elapsed) {
                    assessment.remedy(RemedyKind::ManufacturerWarranty, text, Basis::Contractual);
                }
            }
            Modifier::EvidenceGround { flag, text } => {
                if claim.evidence.has(*flag) {
                    assessment.right(text, Basis::Contractual);
                }
            }
            Modifier::PrivateSale { .. } => {}
        }
    }
}

/// Private sellers owe no statutory duties, so this runs after everything else has been
/// collected and strips what a private buyer cannot rely on.
pub(super) fn apply_private_sale(
    modifiers: &[Modifier],
    time_barred: bool,
    assessment: &mut Assessment,
) {
    for modifier in modifiers {
        let Modifier::PrivateSale {
            right,
            remedy,
            warning,
        } = modifier
        else {
            continue;
        };

        assessment.eligible = false;
        assessment
            .rights
            .retain(|(_, basis)| *basis != Basis::Statutory);
        assessment.remedies.clear();

        if !time_barred {
            assessment.right(right, Basis::Misrepresentation);
            assessment.remedy(RemedyKind::Misrepresentation, remedy, Basis::Misrepresentation);
        }
        assessment.warning(warning);
    }
}
