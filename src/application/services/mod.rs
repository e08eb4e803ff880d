//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (DataProvider, Notifier)
//! but are themselves concrete structs, not traits.

mod calculator;
mod dashboard;
mod payment;

pub use calculator::CalculatorService;
pub use dashboard::{DashboardService, Overview};
pub use payment::PaymentService;
