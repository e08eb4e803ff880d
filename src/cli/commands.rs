//! Command dispatch: one function per subcommand

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, ModeArg};
use crate::cli::output::{self, group_thousands, money};
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{classify, emoji, BranchingMode, MatrixLevel, TierStatus};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Project { input, mode }) => project(&container(cli)?, input, *mode),
        Some(Commands::Tier { count }) => tier(*count),
        Some(Commands::Dashboard) => dashboard(&container(cli)?),
        Some(Commands::Level { level }) => show_level(&container(cli)?, *level),
        Some(Commands::Referrals) => referrals(&container(cli)?),
        Some(Commands::Buy) => buy(&container(cli)?),
        Some(Commands::Link) => link(&container(cli)?),
        Some(Commands::Emojis { page }) => emojis(*page),
        Some(Commands::Config { command }) => config_command(cli, command),
        Some(Commands::Completion { shell }) => {
            completions(*shell);
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into()),
    }
}

/// Settings from all layers, with `--snapshot` taking precedence.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(snapshot) = &cli.snapshot {
        settings.snapshot = Some(snapshot.clone());
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    Ok(ServiceContainer::new(load_settings(cli)?))
}

#[instrument(skip(container))]
fn project(container: &ServiceContainer, input: &str, mode: Option<ModeArg>) -> CliResult<()> {
    let mode = mode
        .map(BranchingMode::from)
        .unwrap_or(container.settings.default_mode);
    let currency = container.settings.currency.as_str();
    let calculator = container.calculator()?;

    let Some(result) = calculator.calculate(input, mode) else {
        output::warning(&format!(
            "nothing to calculate for {input:?}: enter a positive number of direct recruits"
        ));
        return Ok(());
    };

    output::header(&format!(
        "Calculator {} ({} direct recruits)",
        mode,
        group_thousands(result.levels[0].people_count)
    ));
    output::row(
        "Total network",
        &format!("{} people", group_thousands(result.total_network)),
    );
    for (index, level) in result.levels.iter().enumerate() {
        output::row(
            &format!("Line {}", index + 1),
            &format!(
                "{} people = {}",
                group_thousands(level.people_count),
                money(level.income, currency)
            ),
        );
    }
    output::total("Total income", &money(result.total_income, currency));
    Ok(())
}

fn tier(count: u64) -> CliResult<()> {
    output::header(&format!("Referral status for {count} referrals"));
    print_tier(&classify(count));
    Ok(())
}

fn print_tier(status: &TierStatus) {
    output::row("Status", &status.current.label().bold());
    match status.next {
        Some(next) => output::row(
            "Next",
            &format!("{} ({} more referrals)", next.tier, next.remaining),
        ),
        None => output::row("Next", "top tier reached"),
    }
    output::row(
        "Progress",
        &format!(
            "{} {:.0}%",
            progress_bar(status.progress_percent),
            status.progress_percent
        ),
    );
}

/// Twenty-cell bar for a 0-100 percentage.
fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 5.0).round() as usize).min(20);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

fn print_level(level: &MatrixLevel, currency: &str) {
    output::row(
        &format!("LEVEL {}", level.level),
        &format!(
            "{}/{} people  {}%  {}",
            group_thousands(level.total),
            group_thousands(level.max),
            level.percentage,
            money(level.income, currency).green()
        ),
    );
}

fn dashboard(container: &ServiceContainer) -> CliResult<()> {
    let currency = container.settings.currency.as_str();
    let overview = container.dashboard().overview()?;

    output::header(&format!("{} {}", overview.user.emoji, overview.user.name));
    output::row(
        "Network",
        &format!("{} people", group_thousands(overview.user.total_network)),
    );
    output::row("Cakes in work", &overview.user.cakes_in_work);
    output::row("Referral link", &overview.user.referral_link);

    output::header("Matrix");
    for level in &overview.levels {
        print_level(level, currency);
    }
    output::total("Total income", &money(overview.total_income, currency));

    output::header("Referral program");
    print_tier(&overview.tier);
    output::row(
        "Referrals",
        &format!(
            "{} ({} active)",
            overview.referral_count, overview.active_referrals
        ),
    );
    output::row("Earnings", &money(overview.referral_earnings, currency));

    output::header("BAKER");
    output::row("Price", &overview.baker.price);
    output::row(
        "Slots left",
        &format!(
            "{}/{}",
            group_thousands(overview.baker.remaining_slots()),
            group_thousands(overview.baker.total_slots)
        ),
    );
    output::row(
        "Price increase",
        &format!("in {} days", overview.baker.days_until_increase),
    );
    Ok(())
}

fn show_level(container: &ServiceContainer, level: usize) -> CliResult<()> {
    let level = container.dashboard().level(level)?;
    output::header(&format!("LEVEL {}", level.level));
    print_level(&level, &container.settings.currency);
    output::row("Filled", &format!("{:.0}%", level.fill_ratio() * 100.0));
    Ok(())
}

fn referrals(container: &ServiceContainer) -> CliResult<()> {
    let currency = container.settings.currency.as_str();
    let referrals = container.dashboard().referrals()?;
    if referrals.is_empty() {
        output::info("No referrals yet");
        return Ok(());
    }

    output::header(&format!("Referrals ({})", referrals.len()));
    for referral in &referrals {
        let state = if referral.active {
            "active".green()
        } else {
            "inactive".dimmed()
        };
        output::detail(&format!(
            "{:<16} {}  {:>12}  {}",
            referral.name,
            referral.joined,
            money(referral.earnings, currency),
            state
        ));
    }
    Ok(())
}

fn buy(container: &ServiceContainer) -> CliResult<()> {
    let snapshot = container.dashboard().snapshot()?;
    container.payments().buy_baker(&snapshot.baker);
    Ok(())
}

fn link(container: &ServiceContainer) -> CliResult<()> {
    let snapshot = container.dashboard().snapshot()?;
    container.payments().copy_referral_link(&snapshot.user);
    Ok(())
}

fn emojis(page: usize) -> CliResult<()> {
    let pages = emoji::page_count();
    let index = page
        .checked_sub(1)
        .filter(|i| *i < pages)
        .ok_or_else(|| CliError::InvalidArgs(format!("page must be between 1 and {pages}")))?;

    output::header(&format!("Emojis (page {page}/{pages})"));
    for chunk in emoji::page(index).chunks(8) {
        output::detail(&chunk.join(" "));
    }
    Ok(())
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let target = cli
                .config
                .clone()
                .or_else(global_config_path)
                .ok_or_else(|| {
                    CliError::InvalidArgs("cannot determine config directory".to_string())
                })?;
            if target.exists() && !force {
                return Err(CliError::InvalidArgs(format!(
                    "{} already exists (use --force to overwrite)",
                    target.display()
                )));
            }
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    InfraError::io(format!("create {}", parent.display()), e)
                })?;
            }
            std::fs::write(&target, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", target.display()), e))?;
            output::success(&format!("Created {}", target.display()));
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let marker = if path.exists() { "" } else { " (not found)" };
                    output::row("Global", &format!("{}{}", path.display(), marker));
                }
                None => output::row("Global", "-"),
            }
            match &cli.config {
                Some(path) => output::row("Local", &path.display()),
                None => output::row("Local", "-"),
            }
        }
    }
    Ok(())
}

fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
