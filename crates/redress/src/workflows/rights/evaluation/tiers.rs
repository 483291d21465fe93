use crate::workflows::rights::elapsed::Elapsed;
use crate::workflows::rights::rules::TierRule;

/// First tier whose bound contains `elapsed`; open tiers contain everything. Falls back to
/// the final tier so an unvalidated table with only bounded tiers still resolves.
pub(super) fn select<'a>(tiers: &'a [TierRule], elapsed: &Elapsed) -> Option<(usize, &'a TierRule)> {
    tiers
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.bound.map_or(true, |bound| bound.contains(elapsed)))
        .or_else(|| tiers.iter().enumerate().last())
}

pub(super) fn window_label(tiers: &[TierRule], index: usize, elapsed: &Elapsed) -> String {
    let Some(tier) = tiers.get(index) else {
        return String::new();
    };

    match tier.bound {
        Some(bound) => format!("{} ({})", bound.remaining_phrase(elapsed), tier.name),
        None => {
            let previous = tiers[..index].iter().rev().find_map(|prior| prior.bound);
            match previous {
                Some(bound) => format!("{}: beyond the {} window", tier.name, bound.window()),
                None => tier.name.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::rights::elapsed::ElapsedBound;

    fn ladder() -> Vec<TierRule> {
        vec![
            TierRule::within("first", ElapsedBound::Days(30)),
            TierRule::within("second", ElapsedBound::Months(6)),
            TierRule::beyond("closed").time_barred(),
        ]
    }

    #[test]
    fn threshold_day_stays_in_lower_tier() {
        let tiers = ladder();
        let (index, tier) = select(&tiers, &Elapsed::from_days(30)).expect("tier");
        assert_eq!(index, 0);
        assert_eq!(tier.name, "first");

        let (index, _) = select(&tiers, &Elapsed::from_days(31)).expect("tier");
        assert_eq!(index, 1);
    }

    #[test]
    fn open_tier_catches_everything_past_the_last_bound() {
        let tiers = ladder();
        let (index, _) = select(&tiers, &Elapsed::from_days(5_000)).expect("tier");
        assert_eq!(index, 2);
        assert_eq!(
            window_label(&tiers, index, &Elapsed::from_days(5_000)),
            "closed: beyond the 6-month window"
        );
    }

    #[test]
    fn bounded_only_tables_fall_back_to_the_final_tier() {
        let tiers = vec![TierRule::within("only", ElapsedBound::Days(10))];
        let (index, _) = select(&tiers, &Elapsed::from_days(45)).expect("tier");
        assert_eq!(index, 0);
        assert!(select(&[], &Elapsed::from_days(1)).is_none());
    }

    #[test]
    fn bounded_label_names_the_tier() {
        let tiers = ladder();
        assert_eq!(
            window_label(&tiers, 0, &Elapsed::from_days(10)),
            "20 days left in 30-day window (first)"
        );
    }
}
