use crate::config::Config;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::view;
use actix_web::{HttpResponse, Responder, web};
use chrono::{Duration, Local, NaiveDateTime};
use sqlx::MySqlPool;
use tracing::{debug, error};

const PURGE_SQL: &str = "DELETE FROM attendance WHERE check_in_date < ?";

const TODAY_SQL: &str = "\
    SELECT u.student_id, u.name, u.class, a.check_in_time, a.check_out_time \
    FROM attendance a \
    JOIN users u ON a.user_id = u.id \
    WHERE a.check_in_date = ? \
    ORDER BY a.check_in_time DESC";

#[derive(Debug, PartialEq, Eq)]
struct ReportStats {
    total: usize,
    present: usize,
    completed: usize,
}

fn tally(records: &[AttendanceRecord]) -> ReportStats {
    let completed = records
        .iter()
        .filter(|r| {
            AttendanceStatus::from_check_out(r.check_out_time.as_ref()) == AttendanceStatus::Completed
        })
        .count();

    ReportStats {
        total: records.len(),
        present: records.len() - completed,
        completed,
    }
}

fn format_clock(t: &NaiveDateTime) -> String {
    t.format("%I:%M %p").to_string()
}

fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .content_type("text/plain; charset=utf-8")
        .body("System temporarily unavailable. Please contact administrator.")
}

/// Daily report page. Purges records older than the rolling two-day window,
/// then renders today's attendance with aggregate counts.
pub async fn report_page(pool: web::Data<MySqlPool>, config: web::Data<Config>) -> impl Responder {
    let now = Local::now().naive_local();
    let today = now.date();
    let yesterday = today - Duration::days(1);

    // Retention sweep: today's and yesterday's records survive.
    if let Err(e) = sqlx::query(PURGE_SQL)
        .bind(yesterday)
        .execute(pool.get_ref())
        .await
    {
        error!(error = %e, sql = PURGE_SQL, "Retention sweep failed");
        return unavailable();
    }

    let records = match sqlx::query_as::<_, AttendanceRecord>(TODAY_SQL)
        .bind(today)
        .fetch_all(pool.get_ref())
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, sql = TODAY_SQL, "Failed to fetch today's attendance");
            return unavailable();
        }
    };

    let stats = tally(&records);
    debug!(
        total = stats.total,
        present = stats.present,
        completed = stats.completed,
        "Rendering attendance report"
    );

    let rows: Vec<view::ReportRow> = records
        .iter()
        .map(|r| {
            let status = AttendanceStatus::from_check_out(r.check_out_time.as_ref());
            view::ReportRow {
                student_id: r.student_id.clone(),
                name: r.name.clone(),
                class: r.class.clone(),
                check_in: format_clock(&r.check_in_time),
                check_out: r
                    .check_out_time
                    .as_ref()
                    .map(format_clock)
                    .unwrap_or_else(|| "—".to_string()),
                status: status.as_str(),
            }
        })
        .collect();

    let ctx = view::ReportContext {
        date_long: now.format("%A, %B %-d, %Y").to_string(),
        last_updated: now.format("%I:%M %p").to_string(),
        year: now.format("%Y").to_string(),
        total: stats.total,
        present: stats.present,
        completed: stats.completed,
        refresh_ms: config.report_refresh_secs as u64 * 1000,
        rows,
    };

    match view::render_report(&ctx) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!(error = %e, "Report template render failed");
            unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(check_out: Option<(u32, u32)>) -> AttendanceRecord {
        let day = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        AttendanceRecord {
            student_id: "S-001".into(),
            name: "John Doe".into(),
            class: "10-A".into(),
            check_in_time: day.and_hms_opt(8, 0, 0).unwrap(),
            check_out_time: check_out.map(|(h, m)| day.and_hms_opt(h, m, 0).unwrap()),
        }
    }

    #[test]
    fn tally_counts_by_derived_status() {
        let records = vec![record(None), record(Some((16, 0))), record(None)];
        let stats = tally(&records);
        assert_eq!(
            stats,
            ReportStats {
                total: 3,
                present: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn tally_of_empty_day() {
        let stats = tally(&[]);
        assert_eq!(
            stats,
            ReportStats {
                total: 0,
                present: 0,
                completed: 0
            }
        );
    }

    #[test]
    fn clock_format_is_twelve_hour() {
        let t = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(format_clock(&t), "08:05 AM");

        let t = NaiveDate::from_ymd_opt(2026, 8, 29)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap();
        assert_eq!(format_clock(&t), "04:30 PM");
    }
}
