//! cakematrix: referral matrix income projection and status tiers
//!
//! The core is two pure computations in [`domain`]: [`domain::project`] sizes a
//! five-level referral network and its commission income, [`domain::classify`]
//! places a referral count on the Bronze/Silver/Gold/Platinum ladder. The other
//! layers feed them data and present the results.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
