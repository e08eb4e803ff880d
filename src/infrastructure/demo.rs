//! Demo snapshot used when no snapshot file is configured

use chrono::NaiveDate;

use crate::domain::{BakerOffer, MatrixLevel, Referral, Snapshot, UserProfile};

pub fn snapshot() -> Snapshot {
    Snapshot {
        user: UserProfile {
            name: "DMITRIY".to_string(),
            emoji: "🥷".to_string(),
            total_network: 968,
            cakes_in_work: 8,
            referral_link: "https://cake-matrix.com/ref/DMITRIY2024".to_string(),
        },
        levels: vec![
            level(1, 8, 10, 25.0, 75),
            level(2, 24, 30, 12.5, 113),
            level(3, 72, 90, 8.33, 225),
            level(4, 216, 270, 6.25, 506),
            level(5, 648, 810, 5.0, 1215),
        ],
        baker: BakerOffer {
            total_slots: 10_000,
            sold_slots: 1_458,
            days_until_increase: 15,
            price: "5 TON".to_string(),
        },
        referrals: vec![
            referral("Anna", (2024, 1, 15), 450, true),
            referral("Maxim", (2024, 2, 3), 300, true),
            referral("Elena", (2024, 2, 20), 150, false),
        ],
    }
}

fn level(level: usize, total: u64, max: u64, percentage: f64, income: u64) -> MatrixLevel {
    MatrixLevel {
        level,
        total,
        max,
        percentage,
        income,
    }
}

fn referral(name: &str, (y, m, d): (i32, u32, u32), earnings: u64, active: bool) -> Referral {
    Referral {
        name: name.to_string(),
        joined: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
        earnings,
        active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_demo_snapshot_then_total_income_is_2134() {
        let snapshot = snapshot();
        assert_eq!(snapshot.total_income(), 2134);
        assert_eq!(snapshot.baker.remaining_slots(), 8_542);
        assert!(snapshot.validate_levels().is_ok());
    }
}
