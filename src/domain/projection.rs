//! Referral network projection: five-level tree size and commission income.
//!
//! Every level multiplies the previous one by a fixed branching factor. Each
//! person at a level contributes a fixed share of the package price to the
//! commission fund, and the recruiter receives a per-level rate of that share.

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Depth of the referral tree.
pub const LEVELS: usize = 5;

/// Branching factor applied uniformly at every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BranchingMode {
    /// Every participant brings three people.
    #[default]
    #[serde(rename = "x3")]
    LinearTriple,
    /// Every participant brings ten people.
    #[serde(rename = "x10", alias = "xx")]
    LinearTen,
}

impl BranchingMode {
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::LinearTriple => 3,
            Self::LinearTen => 10,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinearTriple => "x3",
            Self::LinearTen => "x10",
        }
    }
}

impl std::fmt::Display for BranchingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BranchingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x3" => Ok(Self::LinearTriple),
            "x10" | "xx" => Ok(Self::LinearTen),
            other => Err(format!("unknown branching mode '{other}' (expected x3 or x10)")),
        }
    }
}

/// Price and commission constants used to turn head counts into income.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionSchedule {
    package_price: f64,
    fund_percentage: f64,
    rates: [f64; LEVELS],
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            package_price: 150.0,
            fund_percentage: 0.25,
            rates: [0.25, 0.125, 0.0833, 0.0625, 0.05],
        }
    }
}

impl CommissionSchedule {
    /// Build a validated schedule.
    ///
    /// Price and fund share must be finite and positive (fund share at most 1),
    /// and exactly [`LEVELS`] rates in `[0, 1]` are required.
    pub fn new(package_price: f64, fund_percentage: f64, rates: &[f64]) -> DomainResult<Self> {
        if !package_price.is_finite() || package_price <= 0.0 {
            return Err(DomainError::InvalidSchedule {
                message: format!("package price must be positive, got {package_price}"),
            });
        }
        if !fund_percentage.is_finite() || fund_percentage <= 0.0 || fund_percentage > 1.0 {
            return Err(DomainError::InvalidSchedule {
                message: format!("fund percentage must be in (0, 1], got {fund_percentage}"),
            });
        }
        let rates: [f64; LEVELS] = rates.try_into().map_err(|_| DomainError::InvalidSchedule {
            message: format!("expected {LEVELS} level rates, got {}", rates.len()),
        })?;
        if let Some((index, rate)) = rates
            .iter()
            .enumerate()
            .find(|(_, rate)| !rate.is_finite() || **rate < 0.0 || **rate > 1.0)
        {
            return Err(DomainError::InvalidSchedule {
                message: format!("rate for level {} must be in [0, 1], got {rate}", index + 1),
            });
        }

        Ok(Self {
            package_price,
            fund_percentage,
            rates,
        })
    }

    pub fn package_price(&self) -> f64 {
        self.package_price
    }

    pub fn fund_percentage(&self) -> f64 {
        self.fund_percentage
    }

    pub fn rates(&self) -> &[f64; LEVELS] {
        &self.rates
    }

    /// Share of one package price that goes into the commission fund.
    pub fn fund_per_user(&self) -> f64 {
        self.package_price * self.fund_percentage
    }

    /// Income for `people` at the zero-based level `index`, rounded half away from zero.
    fn income_for(&self, index: usize, people: u64) -> u64 {
        // float-to-int casts saturate, so absurd configured prices cannot wrap
        (people as f64 * self.fund_per_user() * self.rates[index]).round() as u64
    }
}

/// Head count and income for one level of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelIncome {
    pub people_count: u64,
    pub income: u64,
}

/// Full projection for one seed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub total_network: u64,
    /// Levels 1 through 5, in order
    pub levels: [LevelIncome; LEVELS],
    /// Sum of the rounded level incomes
    pub total_income: u64,
}

impl ProjectionResult {
    /// Level by its one-based number.
    pub fn level(&self, level: usize) -> Option<&LevelIncome> {
        level.checked_sub(1).and_then(|index| self.levels.get(index))
    }
}

/// Project a network with the default commission schedule.
///
/// Returns `None` for a zero seed count: nothing is computed.
pub fn project(seed_count: u32, mode: BranchingMode) -> Option<ProjectionResult> {
    project_with(seed_count, mode, &CommissionSchedule::default())
}

/// Project a network with an explicit commission schedule.
///
/// Seed counts are `u32` so the deepest level (`seed * 10^4`) always fits in `u64`.
pub fn project_with(
    seed_count: u32,
    mode: BranchingMode,
    schedule: &CommissionSchedule,
) -> Option<ProjectionResult> {
    if seed_count == 0 {
        return None;
    }

    let mut levels = [LevelIncome::default(); LEVELS];
    let mut people = u64::from(seed_count);
    for (index, slot) in levels.iter_mut().enumerate() {
        if index > 0 {
            people *= mode.multiplier();
        }
        *slot = LevelIncome {
            people_count: people,
            income: schedule.income_for(index, people),
        };
    }

    let total_network = levels.iter().map(|l| l.people_count).sum();
    let total_income = levels
        .iter()
        .fold(0u64, |acc, l| acc.saturating_add(l.income));

    Some(ProjectionResult {
        total_network,
        levels,
        total_income,
    })
}

/// Parse a user-typed seed count leniently.
///
/// Leading whitespace and an optional `+` are skipped, then the leading run of
/// decimal digits is used and anything after it is ignored (`"12abc"` is 12).
/// Empty, non-numeric, negative or out-of-range input is 0.
pub fn parse_seed_count(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().unwrap_or(0)
}
