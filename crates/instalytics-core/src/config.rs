use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing logic is decoupled from the actual environment so it can
/// be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let metadata_dir = lookup("INSTALYTICS_METADATA_DIR")
        .map(PathBuf::from)
        .map_err(|_| ConfigError::MissingEnvVar("INSTALYTICS_METADATA_DIR".to_string()))?;

    Ok(AppConfig { metadata_dir })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_fails_without_metadata_dir() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "INSTALYTICS_METADATA_DIR"),
            "expected MissingEnvVar(INSTALYTICS_METADATA_DIR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_metadata_dir() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("INSTALYTICS_METADATA_DIR", "/srv/instalytics/metadata");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.metadata_dir, PathBuf::from("/srv/instalytics/metadata"));
    }
}
