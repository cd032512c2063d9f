use std::{
    env::{self, VarError},
    path::PathBuf,
    str::FromStr,
};
use tracing::Level;

use crate::shamir::Verification;

pub mod radix;
pub mod shamir;
pub mod shares;

// ############################################
// ################## CONFIG ##################
// ############################################

pub struct Config {
    pub log_level: Level,
    pub share_files: Vec<PathBuf>,
    pub cross_check: bool,
}

impl Config {
    pub fn parse_environment() -> Result<Config, anyhow::Error> {
        let mut errors: Vec<String> = vec![];
        // `LOG_LEVEL` has priority over `RUST_LOG`
        let log_level = match parse_env_variable::<Level>("LOG_LEVEL") {
            Ok(v) => v
                .or_else(|| parse_env_variable::<Level>("RUST_LOG").unwrap_or(None))
                .unwrap_or(Level::INFO),
            Err(e) => {
                errors.push(e.to_string());
                Level::INFO
            }
        };

        let share_files = match parse_share_files() {
            Ok(v) => v,
            Err(e) => {
                errors.push(e.to_string());
                vec![]
            }
        };

        let cross_check = match parse_env_variable::<bool>("CROSS_CHECK") {
            Ok(v) => v.unwrap_or(false),
            Err(e) => {
                errors.push(e.to_string());
                false
            }
        };

        if !errors.is_empty() {
            return Err(anyhow::anyhow!(errors.join(", ")));
        }

        Ok(Config {
            log_level,
            share_files,
            cross_check,
        })
    }

    pub fn verification(&self) -> Verification {
        if self.cross_check {
            Verification::AllPoints
        } else {
            Verification::SelectedOnly
        }
    }
}

fn parse_share_files() -> Result<Vec<PathBuf>, anyhow::Error> {
    let Some(raw_paths) = parse_env_variable::<String>("SHARE_FILES")? else {
        return Ok(vec![]);
    };
    let share_files: Vec<PathBuf> = raw_paths
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect();
    if share_files.is_empty() {
        return Err(anyhow::anyhow!(
            "[SHARE_FILES]: must contain at least one path"
        ));
    }
    Ok(share_files)
}

fn parse_env_variable<T>(key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fn map_err<E>(key: &str, e: E) -> anyhow::Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        anyhow::anyhow!("[{key}]: {e}")
    }

    let env_value = match env::var(key) {
        Ok(v) => {
            if v.is_empty() {
                Ok(None)
            } else {
                Ok(Some(v))
            }
        }
        Err(e) => {
            if e == VarError::NotPresent {
                Ok(None)
            } else {
                Err(map_err(key, e))
            }
        }
    }?;
    env_value
        .map(|v| v.parse::<T>().map_err(|e| map_err(key, e)))
        .transpose()
}
