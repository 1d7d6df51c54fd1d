//! Server configuration from the environment.
//!
//! HOST (default 0.0.0.0), PORT (default 8080), SESSION_SECRET (at least 64
//! bytes), STATIC_DIR (default "static"), COOKIE_SECURE (default false).

use actix_web::cookie::Key;

/// Minimum length of SESSION_SECRET, in bytes.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub session_secret: Option<String>,
    pub static_dir: String,
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_secret: None,
            static_dir: "static".to_string(),
            cookie_secure: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            session_secret: lookup("SESSION_SECRET").filter(|s| !s.is_empty()),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            cookie_secure: lookup("COOKIE_SECURE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.cookie_secure),
        }
    }

    /// Cookie signing key. Without a usable secret a random key is generated,
    /// so sessions do not survive a restart.
    pub fn session_key(&self) -> Key {
        match self.session_secret.as_deref() {
            Some(secret) if secret.len() >= MIN_SESSION_SECRET_LEN => {
                match Key::try_from(secret.as_bytes()) {
                    Ok(key) => return key,
                    Err(e) => log::warn!("SESSION_SECRET rejected ({}); using a random key", e),
                }
            }
            Some(_) => log::warn!(
                "SESSION_SECRET shorter than {} bytes; using a random key",
                MIN_SESSION_SECRET_LEN
            ),
            None => log::warn!("SESSION_SECRET not set; using a random key"),
        }
        Key::generate()
    }
}
