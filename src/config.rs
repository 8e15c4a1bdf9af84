use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Vaidya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path to the SQLite database file.
/// `VAIDYA_DB` overrides the default `patients.db` in the working directory.
pub fn database_path() -> PathBuf {
    std::env::var_os("VAIDYA_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("patients.db"))
}

/// Path to the disease reference CSV.
/// `VAIDYA_REFERENCE` overrides the default `disease_data.csv`.
pub fn reference_path() -> PathBuf {
    std::env::var_os("VAIDYA_REFERENCE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("disease_data.csv"))
}

/// Address the HTTP server binds to. `VAIDYA_ADDR` overrides.
pub fn bind_addr() -> SocketAddr {
    std::env::var("VAIDYA_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)))
}

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_path_defaults_to_patients_db() {
        if std::env::var_os("VAIDYA_DB").is_none() {
            assert_eq!(database_path(), PathBuf::from("patients.db"));
        }
    }

    #[test]
    fn bind_addr_defaults_to_loopback() {
        if std::env::var_os("VAIDYA_ADDR").is_none() {
            assert_eq!(bind_addr().port(), 5000);
            assert!(bind_addr().ip().is_loopback());
        }
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn log_filter_names_crate() {
        assert!(default_log_filter().contains("vaidya"));
    }
}
