use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::config::dto::{AutomationConfig, ServerConfig};
use crate::core::error::AppError;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 133));
pub const DEFAULT_PORT: u16 = 3000;

#[cfg(windows)]
pub const DEFAULT_GRADLE_PROGRAM: &str = "gradlew.bat";
#[cfg(not(windows))]
pub const DEFAULT_GRADLE_PROGRAM: &str = "./gradlew";

// The original mock bound a fixed LAN address; the env override exists so the
// server can be started on any other machine.
pub fn load_server_config() -> Result<ServerConfig, AppError> {
    dotenvy::dotenv().ok();
    server_config_from(|key| env::var(key).ok())
}

pub fn load_automation_config() -> AutomationConfig {
    dotenvy::dotenv().ok();
    automation_config_from(|key| env::var(key).ok())
}

pub(crate) fn server_config_from<F>(lookup: F) -> Result<ServerConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    // Empty values count as unset.
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let host = match lookup("MOCK_SERVER_HOST") {
        Some(value) => value
            .trim()
            .parse::<IpAddr>()
            .map_err(|err| AppError::configuration(format!("invalid MOCK_SERVER_HOST: {err}")))?,
        None => DEFAULT_HOST,
    };

    let port = match lookup("MOCK_SERVER_PORT").or_else(|| lookup("PORT")) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?,
        None => DEFAULT_PORT,
    };

    Ok(ServerConfig { host, port })
}

pub(crate) fn automation_config_from<F>(lookup: F) -> AutomationConfig
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let project_dir = lookup("TEST_RUN_PROJECT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let server_dir = lookup("TEST_RUN_SERVER_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let gradle_program =
        lookup("TEST_RUN_GRADLE").unwrap_or_else(|| DEFAULT_GRADLE_PROGRAM.to_string());

    AutomationConfig {
        project_dir,
        server_dir,
        gradle_program,
    }
}
