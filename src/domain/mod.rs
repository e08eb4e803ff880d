//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod emoji;
pub mod entities;
pub mod error;
pub mod projection;
pub mod tier;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use projection::{
    parse_seed_count, project, project_with, BranchingMode, CommissionSchedule, LevelIncome,
    ProjectionResult, LEVELS,
};
pub use tier::{classify, classify_referrals, NextTier, Tier, TierStatus};
