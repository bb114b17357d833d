//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a labelled value, label dimmed
    pub fn field(label: &str, value: &str) {
        println!("  {} {}", format!("{label}:").dimmed(), value);
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a price with two decimals
pub fn format_price(amount: f64) -> String {
    format!("£{amount:.2}")
}

/// Format list and sale price, e.g. `£40.00 → £30.00`
pub fn format_price_pair(price: Option<f64>, discount: Option<f64>) -> String {
    match (price, discount) {
        (Some(p), Some(d)) => format!("{} → {}", format_price(p), format_price(d)),
        (Some(p), None) => format_price(p),
        (None, Some(d)) => format_price(d),
        (None, None) => "-".to_string(),
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_ms() {
        let d = Duration::from_millis(500);
        assert_eq!(format_duration(d), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        let d = Duration::from_secs_f32(5.5);
        assert_eq!(format_duration(d), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        let d = Duration::from_secs(125);
        assert_eq!(format_duration(d), "2m 5s");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "£12.50");
    }

    #[test]
    fn test_format_price_pair() {
        assert_eq!(format_price_pair(Some(40.0), Some(30.0)), "£40.00 → £30.00");
        assert_eq!(format_price_pair(Some(40.0), None), "£40.00");
        assert_eq!(format_price_pair(None, None), "-");
    }

    #[test]
    fn test_format_count_singular() {
        assert_eq!(format_count(1, "item", "items"), "1 item");
    }

    #[test]
    fn test_format_count_plural() {
        assert_eq!(format_count(5, "item", "items"), "5 items");
    }
}
