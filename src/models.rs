use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `rfid_tag` may arrive in the query string or an urlencoded body.
#[derive(Debug, Deserialize)]
pub struct ScanParams {
    pub rfid_tag: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Error,
    NotFound,
    CheckIn,
    CheckOut,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "status": "check_in",
    "message": "Checked in: John Doe"
}))]
pub struct ScanResponse {
    pub status: ScanStatus,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_status_wire_names() {
        assert_eq!(serde_json::to_value(ScanStatus::Error).unwrap(), json!("error"));
        assert_eq!(serde_json::to_value(ScanStatus::NotFound).unwrap(), json!("not_found"));
        assert_eq!(serde_json::to_value(ScanStatus::CheckIn).unwrap(), json!("check_in"));
        assert_eq!(serde_json::to_value(ScanStatus::CheckOut).unwrap(), json!("check_out"));
    }

    #[test]
    fn scan_response_shape() {
        let value = serde_json::to_value(ScanResponse {
            status: ScanStatus::CheckOut,
            message: "Checked out: Jane".into(),
        })
        .unwrap();
        assert_eq!(value, json!({"status": "check_out", "message": "Checked out: Jane"}));
    }
}
