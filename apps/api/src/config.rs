use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::engine::courses::CourseLimits;
use crate::engine::pathway::PathwaySettings;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the four catalog files. `None` uses the embedded copies.
    pub catalog_dir: Option<PathBuf>,
    pub pathway: PathwaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            catalog_dir: None,
            pathway: PathwaySettings::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let top_careers = parse_var(&lookup, "TOP_CAREERS", defaults.pathway.top_careers)?;
        let per_skill = parse_var(
            &lookup,
            "COURSES_PER_SKILL",
            defaults.pathway.course_limits.per_skill,
        )?;
        let total = parse_var(&lookup, "COURSES_TOTAL", defaults.pathway.course_limits.total)?;

        Ok(Config {
            port: parse_var(&lookup, "PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            catalog_dir: lookup("CATALOG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            pathway: PathwaySettings {
                top_careers,
                course_limits: CourseLimits { per_skill, total },
            },
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
