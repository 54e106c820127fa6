//! Shared formatting for the text reports.

/// Frame line around driver and rider reports.
pub const REPORT_RULE: &str = "===========================";

/// Separator between rides and between a report header and its entries.
pub const SECTION_RULE: &str = "---------------------------";

/// Format an amount as dollars with exactly two decimals, e.g. `$7.50`.
pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}
