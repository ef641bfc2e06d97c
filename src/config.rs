
use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme-storage";

pub const SITE_TITLE: &str = "Jeremiah Candelaria - Software Engineer";

pub const OWNER_FIRST_NAME: &str = "Jeremiah";
pub const OWNER_FULL_NAME: &str = "Jeremiah Candelaria";
pub const OWNER_ROLE: &str = "AI-First Software Engineer";
pub const OWNER_TAGLINE: &str =
    "Building innovative projects that solve real problems through cutting-edge technology and clean, scalable code.";

pub const CONTACT_EMAIL: &str = "jeremiah@jeremiahcandelaria.com";
pub const SOCIAL_EMAIL: &str = "jeremiahcandelaria@gmail.com";
pub const GITHUB_PROFILE: &str = "https://github.com/imjeremiah";
pub const LINKEDIN_PROFILE: &str = "https://linkedin.com/in/jeremiahcandelaria";
/// Served next to the app, so it works on any host or dev-server port.
pub const RESUME_PATH: &str = "/resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_link_is_root_relative() {
        assert!(RESUME_PATH.starts_with('/'));
        assert!(!RESUME_PATH.contains("://"));
    }

    #[test]
    fn log_level_is_at_least_info() {
        assert!(get_log_level() >= Level::Info);
    }
}
