//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates process environment variables,
//! which would race with other config tests running in parallel.

use std::env;

use cakematrix::application::ApplicationError;
use cakematrix::config::Settings;
use cakematrix::domain::BranchingMode;

const VARS: [&str; 4] = [
    "CAKEMATRIX_CURRENCY",
    "CAKEMATRIX_DEFAULT_MODE",
    "CAKEMATRIX_COMMISSION__RATES",
    "CAKEMATRIX_COMMISSION__PACKAGE_PRICE",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn given_env_vars_when_load_then_they_override_everything() {
    clear_vars();
    env::set_var("CAKEMATRIX_CURRENCY", "USD");
    env::set_var("CAKEMATRIX_DEFAULT_MODE", "x10");
    env::set_var("CAKEMATRIX_COMMISSION__RATES", "0.2, 0.1,0.05,0.05,0.05");

    let settings = Settings::load(None);
    clear_vars();
    let settings = settings.expect("load settings");

    assert_eq!(settings.currency, "USD");
    assert_eq!(settings.default_mode, BranchingMode::LinearTen);
    assert_eq!(settings.commission.rates, vec![0.2, 0.1, 0.05, 0.05, 0.05]);
    assert!(settings.commission.schedule().is_ok());

    // invalid numbers are reported, not ignored
    env::set_var("CAKEMATRIX_COMMISSION__PACKAGE_PRICE", "lots");
    let result = Settings::load(None);
    clear_vars();

    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("commission.package_price"), "{message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}
