//! Dashboard service
//!
//! Reads the current snapshot from a [`DataProvider`] and derives the figures
//! shown on the matrix page and the referral dashboard.

use std::sync::Arc;

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::{
    classify, BakerOffer, DomainError, MatrixLevel, Referral, Snapshot, TierStatus, UserProfile,
    LEVELS,
};
use crate::infrastructure::traits::DataProvider;

/// Derived dashboard figures for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub user: UserProfile,
    /// Matrix levels ordered by level number
    pub levels: Vec<MatrixLevel>,
    /// Sum of level incomes
    pub total_income: u64,
    pub tier: TierStatus,
    pub referral_count: u64,
    pub active_referrals: u64,
    pub referral_earnings: u64,
    pub baker: BakerOffer,
}

/// Service for the dashboard views.
pub struct DashboardService {
    provider: Arc<dyn DataProvider>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    pub fn snapshot(&self) -> ApplicationResult<Snapshot> {
        self.provider.snapshot()
    }

    pub fn overview(&self) -> ApplicationResult<Overview> {
        let snapshot = self.provider.snapshot()?;
        let tier = classify(snapshot.referral_count());
        debug!(
            "overview: user={} referrals={} tier={}",
            snapshot.user.name,
            snapshot.referral_count(),
            tier.current
        );

        let mut levels = snapshot.levels.clone();
        levels.sort_by_key(|l| l.level);

        Ok(Overview {
            total_income: snapshot.total_income(),
            referral_count: snapshot.referral_count(),
            active_referrals: snapshot.active_referrals(),
            referral_earnings: snapshot.referral_earnings(),
            tier,
            levels,
            user: snapshot.user,
            baker: snapshot.baker,
        })
    }

    /// A single matrix level tab.
    pub fn level(&self, level: usize) -> ApplicationResult<MatrixLevel> {
        if !(1..=LEVELS).contains(&level) {
            return Err(DomainError::LevelOutOfRange(level).into());
        }
        let snapshot = self.provider.snapshot()?;
        snapshot
            .level(level)
            .cloned()
            .ok_or_else(|| DomainError::LevelOutOfRange(level).into())
    }

    /// Referrals, most recently joined first.
    pub fn referrals(&self) -> ApplicationResult<Vec<Referral>> {
        let mut referrals = self.provider.snapshot()?.referrals;
        referrals.sort_by(|a, b| b.joined.cmp(&a.joined).then_with(|| a.name.cmp(&b.name)));
        Ok(referrals)
    }
}
