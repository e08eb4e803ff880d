//! Tests for the tier classifier

use chrono::NaiveDate;
use rstest::rstest;

use cakematrix::domain::{classify, classify_referrals, NextTier, Referral, Tier};

#[rstest]
#[case(0, Tier::Bronze, Some((Tier::Silver, 5)), 0.0)]
#[case(1, Tier::Bronze, Some((Tier::Silver, 4)), 5.0)]
#[case(4, Tier::Bronze, Some((Tier::Silver, 1)), 20.0)]
#[case(5, Tier::Silver, Some((Tier::Gold, 10)), 50.0)]
#[case(14, Tier::Silver, Some((Tier::Gold, 1)), 50.0)]
#[case(15, Tier::Gold, Some((Tier::Platinum, 15)), 75.0)]
#[case(29, Tier::Gold, Some((Tier::Platinum, 1)), 75.0)]
#[case(30, Tier::Platinum, None, 100.0)]
#[case(31, Tier::Platinum, None, 100.0)]
fn given_referral_count_when_classifying_then_matches_ladder(
    #[case] count: u64,
    #[case] current: Tier,
    #[case] next: Option<(Tier, u64)>,
    #[case] progress: f64,
) {
    let status = classify(count);

    assert_eq!(status.current, current);
    assert_eq!(
        status.next,
        next.map(|(tier, remaining)| NextTier { tier, remaining })
    );
    assert!(
        (status.progress_percent - progress).abs() < 1e-9,
        "progress for {count}: {} != {progress}",
        status.progress_percent
    );
}

#[test]
fn given_any_count_below_platinum_then_remaining_is_at_least_one() {
    for count in 0..30 {
        let next = classify(count).next.expect("below platinum");
        assert!(next.remaining >= 1, "count {count}");
        assert_eq!(next.tier.threshold(), count + next.remaining);
    }
}

#[test]
fn given_progress_then_stays_within_zero_and_hundred() {
    for count in 0..100 {
        let progress = classify(count).progress_percent;
        assert!((0.0..=100.0).contains(&progress), "count {count}");
    }
}

#[test]
fn given_boundaries_then_progress_jumps_instead_of_ramping() {
    // the ramp only covers Bronze; Silver and Gold are flat
    assert!((classify(4).progress_percent - 20.0).abs() < 1e-9);
    assert_eq!(classify(5).progress_percent, 50.0);
    assert_eq!(classify(14).progress_percent, 50.0);
    assert_eq!(classify(15).progress_percent, 75.0);
}

#[test]
fn given_same_count_when_classifying_twice_then_identical() {
    assert_eq!(classify(17), classify(17));
}

#[test]
fn given_referral_collection_when_classifying_then_uses_its_length() {
    let referrals: Vec<Referral> = (0..6)
        .map(|i| Referral {
            name: format!("r{i}"),
            joined: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            earnings: 0,
            active: true,
        })
        .collect();

    let status = classify_referrals(&referrals);

    assert_eq!(status.current, Tier::Silver);
    assert_eq!(status.next.map(|n| n.remaining), Some(9));
}

#[test]
fn given_tiers_then_labels_and_colors_are_distinct() {
    let labels: Vec<&str> = Tier::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Bronze", "Silver", "Gold", "Platinum"]);
    let mut colors: Vec<&str> = Tier::ALL.iter().map(|t| t.color()).collect();
    colors.dedup();
    assert_eq!(colors.len(), 4);
    assert_eq!(Tier::Gold.to_string(), "Gold");
}
