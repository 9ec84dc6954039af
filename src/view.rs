//! Server-side rendering of the daily report page.

use minijinja::Environment;
use serde::Serialize;
use std::sync::OnceLock;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

// The ".html" name turns on minijinja's auto-escaping for cell values.
const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.jinja");

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub student_id: String,
    pub name: String,
    pub class: String,
    pub check_in: String,
    /// Formatted checkout time, or the placeholder dash while still present.
    pub check_out: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReportContext {
    pub date_long: String,
    pub last_updated: String,
    pub year: String,
    pub total: usize,
    pub present: usize,
    pub completed: usize,
    pub refresh_ms: u64,
    pub rows: Vec<ReportRow>,
}

fn environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)
            .expect("embedded report template must parse");
        env
    })
}

pub fn render_report(ctx: &ReportContext) -> Result<String, minijinja::Error> {
    environment().get_template(REPORT_TEMPLATE_NAME)?.render(ctx)
}
