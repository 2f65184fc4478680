use anyhow::{Context, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use ini::{Ini, Properties};
use std::path::PathBuf;
use tokio::fs;

use crate::constants::{self, AKM_KEY_PORTAL_URL};

const CREDENTIALS_SECTION: &str = "credentials";

/// AKM API client credentials stored in the config file
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    fn from_ini_section(section: &Properties) -> Self {
        Self {
            client_id: section.get("client_id").unwrap_or("").to_string(),
            client_secret: section.get("client_secret").unwrap_or("").to_string(),
        }
    }

    fn save_to_ini(&self, ini: &mut Ini) {
        ini.with_section(Some(CREDENTIALS_SECTION))
            .set("client_id", &self.client_id)
            .set("client_secret", &self.client_secret);
    }

    /// Both fields must be present for an unattended token exchange
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

pub async fn load() -> Result<Config> {
    let path = get_config_path()?;
    let ini = Ini::load_from_file(&path)
        .context("Failed to load config file. Please run `akm configure` first")?;

    let section = ini
        .section(Some(CREDENTIALS_SECTION))
        .context("No credentials section found in config")?;

    Ok(Config::from_ini_section(section))
}

pub async fn save(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut ini = if path.exists() {
        Ini::load_from_file(&path).unwrap_or_else(|_| Ini::new())
    } else {
        Ini::new()
    };

    config.save_to_ini(&mut ini);

    ini.write_to_file(&path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    // The file holds a client secret, keep it private to the owner
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let metadata = fs::metadata(&path).await?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o600);
        fs::set_permissions(&path, permissions).await?;
    }

    Ok(())
}

pub async fn configure_interactive() -> Result<()> {
    println!("Configuring AKM API client credentials");
    println!("Credentials can be acquired from {AKM_KEY_PORTAL_URL}");

    let existing_config = load().await.ok();

    if existing_config.is_some() {
        println!("Press Enter to keep current values, or type new values.");
    }
    println!();

    let theme = ColorfulTheme::default();

    let default_config = existing_config.unwrap_or(Config {
        client_id: String::new(),
        client_secret: String::new(),
    });

    let client_id = Input::<String>::with_theme(&theme)
        .with_prompt("Client ID")
        .default(default_config.client_id.clone())
        .allow_empty(!default_config.client_id.is_empty())
        .validate_with(|input: &String| {
            if input.is_empty() {
                Err("Client ID is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read client id")?;

    let client_secret = Input::<String>::with_theme(&theme)
        .with_prompt("Client Secret")
        .default(default_config.client_secret)
        .allow_empty(false)
        .interact_text()
        .context("Failed to read client secret")?;

    let config = Config {
        client_id,
        client_secret,
    };

    save(&config).await?;

    println!("\nConfiguration saved successfully.");
    Ok(())
}

fn get_config_path() -> Result<PathBuf> {
    constants::get_config_path().context("Failed to determine config path")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    #[tokio::test]
    #[serial]
    async fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        let original = env::var("AKM_CONFIG_FILE").ok();

        unsafe {
            env::set_var("AKM_CONFIG_FILE", &path);
        }

        let config = Config {
            client_id: "my-client".to_string(),
            client_secret: "my-secret".to_string(),
        };
        save(&config).await.unwrap();

        let loaded = load().await.unwrap();
        assert_eq!(loaded.client_id, "my-client");
        assert_eq!(loaded.client_secret, "my-secret");
        assert!(loaded.is_complete());

        unsafe {
            match original {
                Some(val) => env::set_var("AKM_CONFIG_FILE", val),
                None => env::remove_var("AKM_CONFIG_FILE"),
            }
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist");
        let original = env::var("AKM_CONFIG_FILE").ok();

        unsafe {
            env::set_var("AKM_CONFIG_FILE", &path);
        }

        assert!(load().await.is_err());

        unsafe {
            match original {
                Some(val) => env::set_var("AKM_CONFIG_FILE", val),
                None => env::remove_var("AKM_CONFIG_FILE"),
            }
        }
    }

    #[test]
    fn test_is_complete() {
        let complete = Config {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
        };
        assert!(complete.is_complete());

        let missing_secret = Config {
            client_id: "id".to_string(),
            client_secret: String::new(),
        };
        assert!(!missing_secret.is_complete());
    }
}
