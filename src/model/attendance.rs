use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Today's attendance joined with user identity, as listed on the report.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub student_id: String,
    pub name: String,
    pub class: String,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
}

/// The `status` column is denormalized for query convenience. The presence
/// of `check_out_time` is the source of truth: every write site derives the
/// stored value through this enum, and readers re-derive it instead of
/// trusting the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Completed,
}

impl AttendanceStatus {
    pub fn from_check_out(check_out_time: Option<&NaiveDateTime>) -> Self {
        match check_out_time {
            None => AttendanceStatus::Present,
            Some(_) => AttendanceStatus::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Completed => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn status_follows_check_out_presence() {
        let checkout = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();

        assert_eq!(AttendanceStatus::from_check_out(None), AttendanceStatus::Present);
        assert_eq!(
            AttendanceStatus::from_check_out(Some(&checkout)),
            AttendanceStatus::Completed
        );
    }

    #[test]
    fn status_column_values() {
        assert_eq!(AttendanceStatus::Present.as_str(), "Present");
        assert_eq!(AttendanceStatus::Completed.as_str(), "Completed");
    }
}
