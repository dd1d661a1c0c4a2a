//! Module resolving [`Config`] from command line options and environment variables.

use std::env::VarError;

use color_eyre::{
    Result,
    eyre::{WrapErr as _, eyre},
};
use moties_engine::{Config, config::DEFAULT_RECENT_LIMIT};
use tracing::info;
use url::Url;

/// Environment variable with the backend base url.
const API_BASE_URL_ENV_VAR: &str = "MOTIES_API_BASE_URL";
/// Environment variable with the size of the default collection.
const RECENT_LIMIT_ENV_VAR: &str = "MOTIES_RECENT_LIMIT";
/// Base url used when nothing is configured.
const API_BASE_URL_DEFAULT_VALUE: &str = "http://localhost:5000/api";

/// Build [`Config`] preferring explicit options over environment variables.
///
/// # Errors
///
/// Fails if an environment variable is set but can't be parsed.
pub fn resolve(api_base_url: Option<Url>, recent_limit: Option<u32>) -> Result<Config> {
    let api_base_url = match api_base_url {
        Some(url) => url,
        None => parse_api_base_url(std::env::var(API_BASE_URL_ENV_VAR))?,
    };
    let recent_limit = match recent_limit {
        Some(limit) => limit,
        None => parse_recent_limit(std::env::var(RECENT_LIMIT_ENV_VAR))?,
    };

    Ok(Config::new(api_base_url).with_recent_limit(recent_limit))
}

/// Parse base url from the value of [`API_BASE_URL_ENV_VAR`] or use default value.
fn parse_api_base_url(var: Result<String, VarError>) -> Result<Url> {
    let raw = match var {
        Ok(var) if !var.is_empty() => var,
        Ok(_) | Err(VarError::NotPresent) => {
            info!("`{API_BASE_URL_ENV_VAR}` environment variable is not set. Using default value {API_BASE_URL_DEFAULT_VALUE}");
            API_BASE_URL_DEFAULT_VALUE.to_owned()
        }
        Err(VarError::NotUnicode(_)) => {
            return Err(eyre!(
                "`{API_BASE_URL_ENV_VAR}` environment variable is not in unicode format"
            ));
        }
    };

    Url::parse(&raw)
        .wrap_err_with(|| format!("Failed to parse `{API_BASE_URL_ENV_VAR}` environment variable as url"))
}

/// Parse recent limit from the value of [`RECENT_LIMIT_ENV_VAR`] or use default value.
fn parse_recent_limit(var: Result<String, VarError>) -> Result<u32> {
    match var {
        Ok(var) if var.is_empty() => {
            info!("`{RECENT_LIMIT_ENV_VAR}` environment variable is empty. Using default value {DEFAULT_RECENT_LIMIT}");
            Ok(DEFAULT_RECENT_LIMIT)
        }
        Ok(var) => var.parse().wrap_err_with(|| {
            format!("Failed to parse `{RECENT_LIMIT_ENV_VAR}` environment variable as integer")
        }),
        Err(VarError::NotPresent) => {
            info!("`{RECENT_LIMIT_ENV_VAR}` environment variable is not set. Using default value {DEFAULT_RECENT_LIMIT}");
            Ok(DEFAULT_RECENT_LIMIT)
        }
        Err(VarError::NotUnicode(_)) => Err(eyre!(
            "`{RECENT_LIMIT_ENV_VAR}` environment variable is not in unicode format"
        )),
    }
}
