use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    /// Client-side reload interval of the report page, in seconds.
    pub report_refresh_secs: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            report_refresh_secs: env::var("REPORT_REFRESH_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
        }
    }
}
