pub struct Config;

impl Config {
    /// Backend origin baked in at build time via `CLUB_API_URL`.
    ///
    /// Empty means relative URLs: Trunk proxies `/api/` in development and
    /// nginx does the same in production.
    pub fn api_base_url() -> String {
        option_env!("CLUB_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    /// LocalStorage key holding the admin session flag.
    pub const SESSION_KEY: &'static str = "admin_session";

    const ADMIN_USERNAME: &'static str = "admin";
    const ADMIN_PASSWORD: &'static str = "admin123";

    // Placeholder until the backend grows real authentication.
    pub fn admin_credentials_match(username: &str, password: &str) -> bool {
        username == Self::ADMIN_USERNAME && password == Self::ADMIN_PASSWORD
    }
}
