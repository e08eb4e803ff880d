//! Domain entities: the user/referral snapshot shown on the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::projection::LEVELS;

/// The account owner as shown in the profile panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub emoji: String,
    pub total_network: u64,
    pub cakes_in_work: u64,
    pub referral_link: String,
}

/// One level of the user's matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixLevel {
    /// One-based level number
    pub level: usize,
    /// Occupied places
    pub total: u64,
    /// Available places
    pub max: u64,
    /// Commission percent paid on this level
    pub percentage: f64,
    pub income: u64,
}

impl MatrixLevel {
    /// Occupied share of the level, 0.0 for a level without places.
    pub fn fill_ratio(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.total as f64 / self.max as f64
        }
    }
}

/// The BAKER slot package on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakerOffer {
    pub total_slots: u64,
    pub sold_slots: u64,
    pub days_until_increase: u32,
    /// Display price, e.g. "5 TON"
    pub price: String,
}

impl BakerOffer {
    pub fn remaining_slots(&self) -> u64 {
        self.total_slots.saturating_sub(self.sold_slots)
    }
}

/// A person recruited by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    pub name: String,
    pub joined: NaiveDate,
    pub earnings: u64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Everything the dashboard needs about the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: UserProfile,
    pub levels: Vec<MatrixLevel>,
    pub baker: BakerOffer,
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

impl Snapshot {
    /// Sum of the income of all matrix levels.
    pub fn total_income(&self) -> u64 {
        self.levels.iter().map(|l| l.income).sum()
    }

    pub fn level(&self, level: usize) -> Option<&MatrixLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn referral_count(&self) -> u64 {
        self.referrals.len() as u64
    }

    pub fn active_referrals(&self) -> u64 {
        self.referrals.iter().filter(|r| r.active).count() as u64
    }

    pub fn referral_earnings(&self) -> u64 {
        self.referrals.iter().map(|r| r.earnings).sum()
    }

    /// Check level numbering: each level in `1..=LEVELS`, no duplicates.
    pub fn validate_levels(&self) -> Result<(), String> {
        let mut seen = [false; LEVELS];
        for level in &self.levels {
            let index = level
                .level
                .checked_sub(1)
                .filter(|i| *i < LEVELS)
                .ok_or_else(|| format!("level {} outside 1..={LEVELS}", level.level))?;
            if seen[index] {
                return Err(format!("level {} listed twice", level.level));
            }
            seen[index] = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(level: usize, total: u64, max: u64, income: u64) -> MatrixLevel {
        MatrixLevel {
            level,
            total,
            max,
            percentage: 5.0,
            income,
        }
    }

    #[test]
    fn given_zero_max_then_fill_ratio_is_zero() {
        assert_eq!(level(1, 3, 0, 0).fill_ratio(), 0.0);
        assert_eq!(level(1, 8, 10, 0).fill_ratio(), 0.8);
    }

    #[test]
    fn given_oversold_offer_then_remaining_saturates() {
        let offer = BakerOffer {
            total_slots: 10,
            sold_slots: 12,
            days_until_increase: 1,
            price: "5 TON".into(),
        };
        assert_eq!(offer.remaining_slots(), 0);
    }

    #[test]
    fn given_duplicate_level_then_validation_fails() {
        let snapshot = Snapshot {
            user: UserProfile {
                name: "A".into(),
                emoji: "🥷".into(),
                total_network: 0,
                cakes_in_work: 0,
                referral_link: String::new(),
            },
            levels: vec![level(1, 1, 10, 1), level(1, 2, 10, 2)],
            baker: BakerOffer {
                total_slots: 1,
                sold_slots: 0,
                days_until_increase: 0,
                price: String::new(),
            },
            referrals: vec![],
        };
        assert_eq!(
            snapshot.validate_levels().unwrap_err(),
            "level 1 listed twice"
        );
        assert_eq!(snapshot.total_income(), 3);
    }
}
