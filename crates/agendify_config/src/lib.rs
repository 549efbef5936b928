use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `config/default.{toml,json,yaml}`
/// 2. `config/{RUN_ENV}` (RUN_ENV defaults to `debug`)
/// 3. `AGENDIFY__*` environment variables
///
/// The config directory is `AGENDIFY_CONFIG_DIR` or `./config`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("AGENDIFY_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    load_config_from(&config_dir, &run_env)
}

/// Loads configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let prefix = env_vars::get_config_prefix();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    env_vars::inject_env_vars(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// `DOTENV_OVERRIDE` names the file; otherwise `.env` is used. Loading happens
/// at most once per process. Returns the path that was (or would have been) read.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> AppConfig {
        let raw: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        apply_env_overrides_from_marker(raw).unwrap()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8086
            "#,
        );

        assert_eq!(config.server.port, 8086);
        assert_eq!(config.booking_api.base_url, DEFAULT_BOOKING_API_URL);
        assert_eq!(config.booking_api.timeout_secs, 30);
        assert_eq!(config.session.cookie_name, "token");
        assert_eq!(config.session.max_age_secs, 604_800);
        assert_eq!(config.slots.time_zone, "America/Sao_Paulo");
        assert_eq!(config.slots.empty_work_days, EmptyWorkDaysPolicy::AlwaysOfferable);
        assert_eq!(config.slots.unknown_work_day, UnknownWorkDayPolicy::Reject);
        assert!(config.admin_invite_code.is_none());
    }

    #[test]
    fn test_slot_policies_are_configurable() {
        let config = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 80

            [slots]
            time_zone = "Europe/Lisbon"
            empty_work_days = "never_offerable"
            unknown_work_day = "ignore"
            "#,
        );

        assert_eq!(config.slots.time_zone, "Europe/Lisbon");
        assert_eq!(config.slots.empty_work_days, EmptyWorkDaysPolicy::NeverOfferable);
        assert_eq!(config.slots.unknown_work_day, UnknownWorkDayPolicy::Ignore);
    }

    #[test]
    fn test_missing_invite_secret_reads_as_none() {
        let config = parse(
            r#"
            admin_invite_code = "secret_from_env"
            [server]
            host = "127.0.0.1"
            port = 8086
            "#,
        );

        // Neither AGENDIFY_SECRET_ADMIN_INVITE_CODE nor ADMIN_INVITE_CODE is set in tests.
        if env::var("AGENDIFY_SECRET_ADMIN_INVITE_CODE").is_err()
            && env::var("ADMIN_INVITE_CODE").is_err()
        {
            assert!(config.admin_invite_code.is_none());
        }
    }
}
