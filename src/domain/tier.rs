//! Referral status tiers

use serde::{Deserialize, Serialize};

use crate::domain::entities::Referral;

/// Reward rank unlocked by cumulative referral count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// The ladder, lowest tier first.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Minimum referral count (inclusive) for this tier.
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 5,
            Self::Gold => 15,
            Self::Platinum => 30,
        }
    }

    /// Display color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Bronze => "#CD7F32",
            Self::Silver => "#C0C0C0",
            Self::Gold => "#FFD700",
            Self::Platinum => "#E5E4E2",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Tier> {
        match self {
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }

    /// Highest tier whose threshold is at or below `count`.
    pub fn for_count(count: u64) -> Tier {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| tier.threshold() <= count)
            .unwrap_or(Self::Bronze)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The tier above the current one and how many referrals are still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTier {
    pub tier: Tier,
    /// Always at least 1
    pub remaining: u64,
}

/// Where a referral count sits on the tier ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStatus {
    pub current: Tier,
    /// `None` at the top of the ladder
    pub next: Option<NextTier>,
    /// Progress across the whole ladder, 0 to 100
    pub progress_percent: f64,
}

/// Classify a referral count.
pub fn classify(referral_count: u64) -> TierStatus {
    let current = Tier::for_count(referral_count);
    let next = current.next().map(|tier| NextTier {
        tier,
        remaining: tier.threshold() - referral_count,
    });

    TierStatus {
        current,
        next,
        progress_percent: progress_percent(referral_count),
    }
}

/// Classify by the size of a referral collection.
pub fn classify_referrals(referrals: &[Referral]) -> TierStatus {
    classify(referrals.len() as u64)
}

/// Stepped progress: a linear ramp to 25 inside Bronze, then fixed 50, 75 and 100.
///
/// The jumps at 5 and 15 are kept exactly as the dashboard has always shown them.
fn progress_percent(referral_count: u64) -> f64 {
    match referral_count {
        0..=4 => (referral_count as f64 / 5.0) * 25.0,
        5..=14 => 50.0,
        15..=29 => 75.0,
        _ => 100.0,
    }
}
