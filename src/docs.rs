use crate::models::{ScanResponse, ScanStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RFID Attendance API",
        version = "1.0.0",
        description = r#"
## RFID Attendance System

Records attendance events triggered by RFID tag scans.

### 🔹 Key Features
- **Scan endpoint**
  - First scan of the day checks the user in
  - Any later scan the same day stamps the checkout
- **Daily report**
  - Server-rendered page at `/` with today's records and aggregate counts
  - Records older than the rolling two-day window are purged on load

### 📦 Response Format
The scan endpoint always answers JSON: `{"status": ..., "message": ...}`
with `status` one of `error`, `not_found`, `check_in`, `check_out`.

---
Built with **Rust**, **Actix Web**, and **SQLx**.
"#,
    ),
    paths(
        crate::api::scan::scan,
    ),
    components(
        schemas(
            ScanResponse,
            ScanStatus
        )
    ),
    tags(
        (name = "Scan", description = "RFID scan check-in / check-out"),
    )
)]
pub struct ApiDoc;
