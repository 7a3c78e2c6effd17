//! Configuration management for campdesk.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]) and can be overridden from the environment, which
//! includes values loaded from a `.env` file at startup.
//!
//! ## Configuration Structure
//!
//! - **Server Config**: Camp API base URL and bearer token
//! - **Camp Config**: Camp worked on by default and an optional cohort filter
//!
//! ## Environment Overrides
//!
//! | Variable               | Field                  |
//! |------------------------|------------------------|
//! | `CAMPDESK_API_URL`     | `server.api_url`       |
//! | `CAMPDESK_AUTH_TOKEN`  | `server.auth_token`    |
//! | `CAMPDESK_CAMP_ID`     | `camp.camp_id`         |
//! | `CAMPDESK_COHORT`      | `camp.cohort_number`   |
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use campdesk::libs::config::Config;
//!
//! let config = Config::read()?.with_env_overrides();
//! if let Some(camp) = &config.camp {
//!     println!("Working on camp {}", camp.camp_id);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_API_URL: &str = "CAMPDESK_API_URL";
pub const ENV_AUTH_TOKEN: &str = "CAMPDESK_AUTH_TOKEN";
pub const ENV_CAMP_ID: &str = "CAMPDESK_CAMP_ID";
pub const ENV_COHORT: &str = "CAMPDESK_COHORT";

/// Connection parameters of the camp API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the API, e.g. `https://camp.example.org/api`.
    pub api_url: String,

    /// Bearer token sent with every request. Empty means anonymous.
    #[serde(default)]
    pub auth_token: String,
}

/// Camp selected by default.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CampConfig {
    pub camp_id: i64,

    /// Cohort to filter tasks by. When unset the camp's current cohort is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_number: Option<u32>,
}

/// Root configuration. Unconfigured sections are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub camp: Option<CampConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Applies `CAMPDESK_*` environment variables on top of the file values.
    ///
    /// Unparseable numeric values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(api_url) = env::var(ENV_API_URL) {
            let server = self.server.get_or_insert_with(|| ServerConfig {
                api_url: String::new(),
                auth_token: String::new(),
            });
            server.api_url = api_url;
        }
        if let Ok(token) = env::var(ENV_AUTH_TOKEN) {
            if let Some(server) = self.server.as_mut() {
                server.auth_token = token;
            }
        }
        if let Some(camp_id) = env::var(ENV_CAMP_ID).ok().and_then(|v| v.trim().parse::<i64>().ok()) {
            let camp = self.camp.get_or_insert(CampConfig { camp_id, cohort_number: None });
            camp.camp_id = camp_id;
        }
        if let Some(cohort) = env::var(ENV_COHORT).ok().and_then(|v| v.trim().parse::<u32>().ok()) {
            if let Some(camp) = self.camp.as_mut() {
                camp.cohort_number = Some(cohort);
            }
        }
        self
    }

    /// Runs the interactive setup wizard, using current values as defaults.
    pub fn init() -> Result<Config> {
        let config = Config::read()?;
        let server = config.server.unwrap_or(ServerConfig {
            api_url: String::new(),
            auth_token: String::new(),
        });

        msg_print!(Message::ConfigModuleServer);
        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerApiUrl.to_string())
            .default(server.api_url)
            .interact_text()?;
        let auth_token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerAuthToken.to_string())
            .default(server.auth_token)
            .allow_empty(true)
            .interact_text()?;

        msg_print!(Message::ConfigModuleCamp);
        let camp_id: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCampId.to_string())
            .default(config.camp.as_ref().map(|c| c.camp_id).unwrap_or(1))
            .interact_text()?;
        let cohort: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCohortNumber.to_string())
            .default(config.camp.as_ref().and_then(|c| c.cohort_number).map(|c| c.to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            server: Some(ServerConfig { api_url, auth_token }),
            camp: Some(CampConfig {
                camp_id,
                cohort_number: cohort.trim().parse().ok(),
            }),
        })
    }
}
