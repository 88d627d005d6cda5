//! Run settings loaded from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `GROUPING_PEOPLE` | 24 |
//! | `GROUPING_GROUP_SIZE` | 6 |
//! | `GROUPING_DAYS` | 6 |
//! | `GROUPING_REPEATS` | 2 |
//! | `GROUPING_VERBOSE` | true |
//! | `GROUPING_TIME_LIMIT_SECS` | none |
//! | `GROUPING_THREADS` | backend default |
//! | `GROUPING_SEED` | backend default |
//! | `RUST_LOG` | info |

use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::grouping::GroupingConfig;
use crate::ilp::SolverConfig;

/// Everything a single run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub grouping: GroupingConfig,
    pub solver: SolverConfig,
    pub rust_log: String,
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // a missing .env is fine
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults. Set keys that do not parse fail with
    /// [`ConfigError::InvalidEnv`]. The grouping parameters are validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GroupingConfig::default();
        let grouping = GroupingConfig::new(
            parse_or(&lookup, "GROUPING_PEOPLE", defaults.num_people)?,
            parse_or(&lookup, "GROUPING_GROUP_SIZE", defaults.group_size)?,
            parse_or(&lookup, "GROUPING_DAYS", defaults.num_days)?,
            parse_or(&lookup, "GROUPING_REPEATS", defaults.repeats_allowed)?,
        );
        grouping.validate()?;

        let mut solver = SolverConfig::default()
            .with_verbose(parse_or(&lookup, "GROUPING_VERBOSE", true)?);
        if let Some(secs) = parse_opt::<f64, _>(&lookup, "GROUPING_TIME_LIMIT_SECS")? {
            let limit = Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidEnv {
                key: "GROUPING_TIME_LIMIT_SECS".into(),
                value: secs.to_string(),
            })?;
            solver = solver.with_time_limit(limit);
        }
        if let Some(threads) = parse_opt(&lookup, "GROUPING_THREADS")? {
            solver = solver.with_threads(threads);
        }
        if let Some(seed) = parse_opt(&lookup, "GROUPING_SEED")? {
            solver = solver.with_seed(seed);
        }

        Ok(Self {
            grouping,
            solver,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_opt<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value: raw,
            }),
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}
