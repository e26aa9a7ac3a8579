//! Configuration handling for the contact form
//!
//! The relay identifiers and owner details are compiled in. An optional
//! `config.json` in the platform config directory and `FOLIO_*` environment
//! variables can override them; the form itself never edits them.

use crate::state::RelaySettings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const EMAILJS_SERVICE_ID: &str = "service_tp0yqvl";
pub const EMAILJS_TEMPLATE_ID: &str = "template_uzi56vb";
pub const EMAILJS_PUBLIC_KEY: &str = "pu0KNbhkPuXOfc37I";
pub const EMAILJS_API_URL: &str = "https://api.emailjs.com";

pub const OWNER_EMAIL: &str = "sin16405@sheridancollege.ca";
const OWNER_LOCATION: &str = "Oakville, Ontario, Canada";
const OWNER_LINKEDIN: &str = "https://linkedin.com/in/pavitersingh88/";
const OWNER_GITHUB: &str = "https://github.com/pavitersingh88/";

/// EmailJS account identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key, only needed when the account enforces it.
    /// Read from the file but never written back to it.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Base URL of the EmailJS REST API
    pub api_url: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
            access_token: None,
            api_url: EMAILJS_API_URL.to_string(),
        }
    }
}

/// Site owner contact details shown beside the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerProfile {
    /// Address every message is delivered to
    pub email: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl Default for OwnerProfile {
    fn default() -> Self {
        Self {
            email: OWNER_EMAIL.to_string(),
            location: OWNER_LOCATION.to_string(),
            linkedin_url: OWNER_LINKEDIN.to_string(),
            github_url: OWNER_GITHUB.to_string(),
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactConfig {
    pub emailjs: EmailJsConfig,
    pub owner: OwnerProfile,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path, |key| std::env::var(key).ok()),
            None => {
                let mut config = Self::default();
                config.apply_overrides(|key| std::env::var(key).ok());
                Ok(config)
            }
        }
    }

    /// Load from `path` if it exists, falling back to defaults, then apply overrides
    fn load_from(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Apply `FOLIO_*` overrides from a variable lookup; empty values are ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets: [(&str, &mut String); 5] = [
            ("FOLIO_EMAILJS_SERVICE_ID", &mut self.emailjs.service_id),
            ("FOLIO_EMAILJS_TEMPLATE_ID", &mut self.emailjs.template_id),
            ("FOLIO_EMAILJS_PUBLIC_KEY", &mut self.emailjs.public_key),
            ("FOLIO_EMAILJS_API_URL", &mut self.emailjs.api_url),
            ("FOLIO_CONTACT_TO_EMAIL", &mut self.owner.email),
        ];
        for (key, slot) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = value;
            }
        }
        if let Some(token) = lookup("FOLIO_EMAILJS_ACCESS_TOKEN").filter(|v| !v.is_empty()) {
            self.emailjs.access_token = Some(token);
        }
    }

    /// Save configuration to file, returning where it was written
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("No config directory on this platform")?;
        self.save_to(&path)?;
        Ok(path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Identifiers the dispatcher sends with every message
    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            service_id: self.emailjs.service_id.clone(),
            template_id: self.emailjs.template_id.clone(),
            public_key: self.emailjs.public_key.clone(),
            to_email: self.owner.email.clone(),
        }
    }
}
