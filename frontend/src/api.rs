// One module per backend resource
pub mod achievements;
pub mod client;
pub mod gallery;
pub mod health;
pub mod matches;
pub mod players;
pub mod registration;
pub mod stats;
pub mod uploads;
pub mod utils;

pub use client::{ApiContext, HttpClubApi};

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_keeps_path() {
        assert!(api_url("/api/matches").ends_with("/api/matches"));
    }
}
