use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use verba_config::Config;

/// `VERBA_HOME`, else `~/.verba`, else `./.verba`
fn verba_root() -> PathBuf {
    if let Some(home) = env::var_os("VERBA_HOME") {
        return PathBuf::from(home);
    }
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".verba")
}

fn profiles_dir() -> PathBuf {
    verba_root().join("profiles")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Config from an explicit file, else the named profile, else the environment
pub fn load_config(path: Option<&Path>, profile: &str) -> anyhow::Result<Config> {
    match path {
        Some(path) => read_profile(path),
        None => load_user_profile(profile),
    }
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    let main_file = profiles_dir().join("main.json");
    if main_file.exists() {
        if name != "main" {
            tracing::warn!("Profile {name} not found, falling back to main profile");
        }
        read_profile(&main_file)
    } else {
        // First run, nothing saved yet
        Ok(Config::new())
    }
}

/// Accepts a `{name, value}` profile or a bare config object
fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&data)?;
    if value.get("value").is_some() {
        let profile: Profile = serde_json::from_value(value)?;
        tracing::info!("Loaded profile {} from {}", profile.name, path.display());
        return Ok(profile.value);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use verba_config::StorageBackend;

    use super::*;

    fn scratch_file(contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("verba-profile-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_wrapped_profile() {
        let path = scratch_file(
            r#"{ "name": "main", "value": { "storage": { "backend": "memory" }, "request_timeout_ms": 250 } }"#,
        );
        let config = load_config(Some(&path), "main").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.request_timeout_ms, 250);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_reads_bare_config() {
        let path = scratch_file(r#"{ "engine": { "max_input_chars": 64 } }"#);
        let config = load_config(Some(&path), "main").unwrap();
        assert_eq!(config.engine.max_input_chars, 64);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = scratch_file("not json");
        assert!(load_config(Some(&path), "main").is_err());
        fs::remove_file(path).unwrap();
    }
}
