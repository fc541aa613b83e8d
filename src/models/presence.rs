//! Presence model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::presence_statuses;

/// Daily presence record of a user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Presence {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw per-status counts for one user over a period
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct PresenceCounts {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub remote: i64,
}

/// Attendance summary returned to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PresenceSummary {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub remote: i64,
    /// Attended days over recorded days, in percent
    pub attendance_rate: f64,
}

impl From<PresenceCounts> for PresenceSummary {
    fn from(counts: PresenceCounts) -> Self {
        let attended = counts.present + counts.late + counts.remote;
        Self {
            total: counts.total,
            present: counts.present,
            absent: counts.absent,
            late: counts.late,
            remote: counts.remote,
            attendance_rate: percentage(attended, counts.total),
        }
    }
}

/// `part / total * 100` rounded to two decimals; zero when there is nothing to divide
pub fn percentage(part: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Whether a presence status counts as attended
pub fn is_attended(status: &str) -> bool {
    matches!(
        status,
        presence_statuses::PRESENT | presence_statuses::LATE | presence_statuses::REMOTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(5, 5), 100.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_summary_counts_late_and_remote_as_attended() {
        let summary = PresenceSummary::from(PresenceCounts {
            total: 10,
            present: 6,
            absent: 2,
            late: 1,
            remote: 1,
        });
        assert_eq!(summary.attendance_rate, 80.0);
        assert_eq!(summary.absent, 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = PresenceSummary::from(PresenceCounts::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.attendance_rate, 0.0);
    }

    #[test]
    fn test_is_attended() {
        assert!(is_attended("present"));
        assert!(is_attended("remote"));
        assert!(!is_attended("absent"));
    }
}
