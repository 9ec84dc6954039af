use serde::{Deserialize, Serialize};

/// Identity record owned by the external registration process; this service
/// only ever reads it. `rfid_tag` is stored lowercase.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub rfid_tag: String,
    pub name: String,
    pub student_id: String,
    pub class: String,
}
