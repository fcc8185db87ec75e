use crate::error_handling::types::ConfigError;
use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Runtime configuration of the story server.
///
/// Values come from three layers, each overriding the previous one: built-in defaults, an
/// optional TOML file (`--config-file`), then command-line flags and the `PORT` environment
/// variable.
///
/// # Fields Overview
///
/// - `bind_address`: IP address the HTTP server listens on
/// - `port`: first port tried by the server
/// - `port_fallback_attempts`: how many consecutive ports are tried before giving up
/// - `max_body_bytes`: upper bound for JSON request bodies
/// - `cors_enabled`: answer cross-origin requests from any origin
/// - `web_ui_enabled`: serve the embedded front-end on `/`
/// - `seed`: optional seed making template selection deterministic
///
/// # Examples
///
/// ```
/// use storyteller::configuration::Config;
///
/// let config = Config::from_toml_str("port = 4000").unwrap();
/// assert_eq!(config.port, 4000);
/// assert_eq!(config.bind_address, "0.0.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub port_fallback_attempts: u16,
    pub max_body_bytes: u64,
    pub cors_enabled: bool,
    pub web_ui_enabled: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: String::from("0.0.0.0"),
            port: 3002,
            port_fallback_attempts: 10,
            max_body_bytes: 100 * 1024,
            cors_enabled: true,
            web_ui_enabled: true,
            seed: None,
        }
    }
}

/// Command-line arguments.
///
/// Every value is optional so that anything left out falls back to the configuration file, then
/// to the defaults.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "storyteller")]
#[command(version)]
#[command(about = "Serves stories and poems picked from a template library")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    ///
    /// # Command Line
    /// Use `--config-file <PATH>` (or `-c <PATH>`) to set this value from the CLI
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// IP address to bind the HTTP server to
    #[arg(long)]
    pub bind_address: Option<String>,

    /// First port to listen on
    ///
    /// Also read from the `PORT` environment variable
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Number of consecutive ports to try when the first one is busy
    #[arg(long)]
    pub port_fallback_attempts: Option<u16>,

    /// Maximum accepted request body size in bytes
    #[arg(long)]
    pub max_body_bytes: Option<u64>,

    /// Disable CORS headers
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_cors: bool,

    /// Do not serve the embedded web front-end
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_web_ui: bool,

    /// Seed for the template engine's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// Reads a TOML configuration file. Keys missing from the file keep their default value.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading configuration file {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Builds the effective configuration from parsed command-line arguments and validates it.
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config_file {
            Some(path) => {
                info!("Importing configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Overrides file values with the ones given on the command line.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(ref bind_address) = args.bind_address {
            self.bind_address = bind_address.clone();
        }
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(attempts) = args.port_fallback_attempts {
            self.port_fallback_attempts = attempts;
        }
        if let Some(limit) = args.max_body_bytes {
            self.max_body_bytes = limit;
        }
        if args.no_cors {
            self.cors_enabled = false;
        }
        if args.no_web_ui {
            self.web_ui_enabled = false;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_ip()?;
        if self.port_fallback_attempts == 0 {
            return Err(ConfigError::NotInRange(String::from(
                "port_fallback_attempts must be at least 1",
            )));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::NotInRange(String::from(
                "max_body_bytes must be at least 1",
            )));
        }
        Ok(())
    }

    pub fn bind_ip(&self) -> Result<IpAddr, ConfigError> {
        self.bind_address
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::BadIPFormatting(format!("{}: {}", self.bind_address, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_under_test(extra: &[&str]) -> Result<CliArgs, clap::Error> {
        let mut argv = vec!["storyteller"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv)
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 3002);
        assert_eq!(config.port_fallback_attempts, 10);
        assert_eq!(config.max_body_bytes, 102400);
        assert!(config.cors_enabled);
        assert!(config.web_ui_enabled);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config("port = 4100\nweb_ui_enabled = false\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.port, 4100);
        assert!(!config.web_ui_enabled);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.max_body_bytes, 102400);
    }

    #[test]
    #[serial]
    fn command_line_overrides_file() {
        std::env::remove_var("PORT");
        let file = write_config("port = 4100\nbind_address = \"127.0.0.1\"\nseed = 1\n");
        let path = file.path().to_str().unwrap().to_string();
        let args = args_under_test(&[
            "--config-file",
            &path,
            "--port",
            "4200",
            "--no-cors",
            "--seed",
            "9",
        ])
        .unwrap_or_else(|e| panic!("{}", e));

        let config = Config::load(&args).unwrap();
        assert_eq!(config.port, 4200);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert!(!config.cors_enabled);
        assert!(config.web_ui_enabled);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    #[serial]
    fn port_is_read_from_environment() {
        std::env::set_var("PORT", "5005");
        let args = args_under_test(&[]);
        std::env::remove_var("PORT");

        let config = Config::load(&args.unwrap()).unwrap();
        assert_eq!(config.port, 5005);
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let config = Config {
            bind_address: String::from("not-an-ip"),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadIPFormatting(_))
        ));
    }

    #[test]
    fn zero_limits_are_rejected() {
        let config = Config {
            port_fallback_attempts: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotInRange(_))));

        let config = Config {
            max_body_bytes: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotInRange(_))));
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(
            Config::from_toml_str("port = \"many\""),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Config::from_file(Path::new("/nonexistent/storyteller.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
