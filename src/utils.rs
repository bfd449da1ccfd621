use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};

/// Generates a random reading-list identifier. 16 alphanumeric characters is
/// plenty to make collisions between locally created lists negligible.
pub fn generate_list_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp() as u64
}

pub fn format_created(timestamp: u64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn truncate_summary(summary: &str, max_chars: usize) -> String {
    if summary.chars().count() <= max_chars {
        return summary.to_string();
    }

    let cut: String = summary.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
