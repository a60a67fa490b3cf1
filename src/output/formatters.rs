//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Describe how long until `expires_at`, relative to `now`.
///
/// # Example output
/// - `expires in 4h 12m`
/// - `expires in 35m`
/// - `expired 2h 3m ago`
pub fn describe_expiry(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = expires_at.signed_duration_since(now);
    let (hours, mins) = (
        remaining.num_hours().abs(),
        remaining.num_minutes().abs() % 60,
    );
    let span = if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    };

    if remaining.num_seconds() >= 0 {
        format!("expires in {}", span)
    } else {
        format!("expired {} ago", span)
    }
}

/// Local wall-clock rendering of a UTC instant
pub fn format_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_describe_expiry_future_hours() {
        let now = Utc::now();
        let at = now + Duration::minutes(4 * 60 + 12);
        assert_eq!(describe_expiry(at, now), "expires in 4h 12m");
    }

    #[test]
    fn test_describe_expiry_future_minutes() {
        let now = Utc::now();
        assert_eq!(
            describe_expiry(now + Duration::minutes(35), now),
            "expires in 35m"
        );
    }

    #[test]
    fn test_describe_expiry_past() {
        let now = Utc::now();
        assert_eq!(
            describe_expiry(now - Duration::minutes(123), now),
            "expired 2h 3m ago"
        );
    }

    #[test]
    fn test_format_local_has_date() {
        let at = DateTime::from_timestamp(1736942400, 0).unwrap();
        assert!(format_local(at).starts_with("2025-01-1"));
    }
}
