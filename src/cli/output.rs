//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print a label/value row, label dimmed and padded
pub fn row(label: &str, value: &(impl std::fmt::Display + ?Sized)) {
    println!("  {:<16} {}", format!("{label}:").dimmed(), value);
}

/// Print a highlighted total (green bold)
pub fn total(label: &str, value: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", format!("{label}:").bold(), value.to_string().green().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Group digits in threes with spaces: 1234567 -> "1 234 567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Amount with currency symbol: "2 134 ₽"
pub fn money(value: u64, currency: &str) -> String {
    format!("{} {}", group_thousands(value), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_large_number_then_groups_by_three() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1 000");
        assert_eq!(group_thousands(1_234_567), "1 234 567");
    }

    #[test]
    fn given_amount_then_appends_currency() {
        assert_eq!(money(2134, "₽"), "2 134 ₽");
    }
}
