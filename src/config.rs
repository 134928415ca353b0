// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Defaults are compiled in from `folio.yaml`. A user file (YAML, or JSON
//! when the extension is `.json`) may override any top-level key; the
//! `site` block is replaced as a whole when present. Command-line flags
//! are applied last.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../folio.yaml");

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A labelled reel video, relative to the media base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    pub label: String,
    pub path: String,
}

/// A client logo image and the site it links to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    pub file: String,
    pub url: String,
}

impl Logo {
    /// Client name derived from the file name, e.g. `Atlantic`.
    pub fn label(&self) -> &str {
        let stem = self
            .file
            .rsplit('/')
            .next()
            .unwrap_or(self.file.as_str())
            .split('.')
            .next()
            .unwrap_or_default();
        stem.rsplit('_').next().unwrap_or(stem)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub press: Vec<Link>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Static copy and links rendered around the catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub name: String,
    pub subtitle: String,
    pub monogram: String,
    pub resume: String,
    pub tools: String,
    #[serde(default)]
    pub socials: Vec<Link>,
    pub hero_bumper: String,
    pub hero_reel: Reel,
    #[serde(default)]
    pub reels: Vec<Reel>,
    pub about: AboutContent,
    #[serde(default)]
    pub logos: Vec<Logo>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub projects_source: String,
    pub film_source: String,
    pub media_base: String,
    pub allow_empty_category_selection: bool,
    pub marquee_speed: f32,
    pub site: SiteContent,
}

/// Partial configuration as read from a user file or the command line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigOverrides {
    pub projects_source: Option<String>,
    pub film_source: Option<String>,
    pub media_base: Option<String>,
    pub allow_empty_category_selection: Option<bool>,
    pub marquee_speed: Option<f32>,
    pub site: Option<SiteContent>,
}

impl Config {
    /// Parse the compiled-in defaults.
    pub fn defaults() -> Result<Self> {
        serde_yaml::from_str(DEFAULT_CONFIG).context("parsing embedded folio.yaml")
    }

    /// Load defaults, then the user file at `path` (or the default user
    /// config location). A missing or malformed user file is ignored.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults()?;

        let explicit = path.is_some();
        let user_path = path.map(Path::to_path_buf).or_else(user_config_path);
        if let Some(path) = user_path {
            if path.exists() {
                match read_overrides(&path) {
                    Ok(overrides) => {
                        log::info!("Using config {}", path.display());
                        config.apply(overrides);
                    }
                    Err(e) => log::warn!("Ignoring config {}: {:#}", path.display(), e),
                }
            } else if explicit {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
        }

        Ok(config)
    }

    /// Apply every override that is set.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(v) = overrides.projects_source {
            self.projects_source = v;
        }
        if let Some(v) = overrides.film_source {
            self.film_source = v;
        }
        if let Some(v) = overrides.media_base {
            self.media_base = v;
        }
        if let Some(v) = overrides.allow_empty_category_selection {
            self.allow_empty_category_selection = v;
        }
        if let Some(v) = overrides.marquee_speed {
            self.marquee_speed = v.max(0.0);
        }
        if let Some(v) = overrides.site {
            self.site = v;
        }
    }
}

/// Parse a user config file, JSON or YAML by extension.
pub fn read_overrides(path: &Path) -> Result<ConfigOverrides> {
    let text = std::fs::read_to_string(path)?;
    let overrides = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&text)?,
        _ => serde_yaml::from_str(&text)?,
    };
    Ok(overrides)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::defaults().unwrap();
        assert_eq!(config.media_base, "https://media.gregjoblove.com");
        assert!(!config.allow_empty_category_selection);
        assert_eq!(config.marquee_speed, 30.0);
        assert_eq!(config.site.name, "GREG JOBLOVE");
        assert_eq!(config.site.logos.len(), 7);
        assert_eq!(config.site.reels.len(), 2);
    }

    #[test]
    fn test_yaml_override_keeps_other_keys() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "media_base: /srv/media").unwrap();
        writeln!(file, "allow_empty_category_selection: true").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.media_base, "/srv/media");
        assert!(config.allow_empty_category_selection);
        assert_eq!(config.projects_source, "data/gjprojects.csv");
    }

    #[test]
    fn test_json_override() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"projects_source": "https://example.com/p.csv", "marquee_speed": -5}}"#).unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.projects_source, "https://example.com/p.csv");
        assert_eq!(config.marquee_speed, 0.0);
    }

    #[test]
    fn test_malformed_override_is_ignored() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "media_base: [unterminated").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config, Config::defaults().unwrap());
    }

    #[test]
    fn test_logo_label() {
        let logo = Logo {
            file: "logos/GJ_Client-Logos_Atlantic.png".into(),
            url: String::new(),
        };
        assert_eq!(logo.label(), "Atlantic");
    }
}
