//! Application configuration
//!
//! Values come from three layers, later ones winning:
//!
//! 1. [`AppConfig::default`]
//! 2. an optional `.toml` / `.ron` file ([`Config::load_or_default`])
//! 3. `key=value` command-line overrides ([`AppConfig::apply_args`])
//!
//! Override keys accept the long dotted form and its short aliases:
//!
//! | Key                               | Aliases       | Value            |
//! |-----------------------------------|---------------|------------------|
//! | `app.debug`                       | `debug`, `d`  | 0..=4            |
//! | `app.mode`                        | `mode`, `m`   | DEV, TEST, PROD  |
//! | `app.window.size`                 | `ws`          | `WxH`            |
//! | `app.gfx.rendering.buffer.size`   | `rbs`         | `WxH`            |
//! | `app.fps`                         | `fps`         | frames/s, 0=off  |
//! | `app.log`                         | `log`         | log level filter |

use super::{Config, ConfigError};
use crate::render::DebugLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long the loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunMode {
    /// Development: one iteration, then stop
    Dev,
    /// Headless testing: one iteration, then stop
    Test,
    /// Run until an exit is requested
    #[default]
    Prod,
}

impl RunMode {
    /// Whether the loop continues past the first iteration
    pub fn loops_until_exit(self) -> bool {
        self == Self::Prod
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEV" => Ok(Self::Dev),
            "TEST" => Ok(Self::Test),
            "PROD" => Ok(Self::Prod),
            _ => Err(ConfigError::InvalidValue {
                key: "app.mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dev => "DEV",
            Self::Test => "TEST",
            Self::Prod => "PROD",
        })
    }
}

/// Pixel dimensions written as `WxH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    /// Create a size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidValue {
            key: "size".to_string(),
            value: s.to_string(),
        };
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Debug overlay level
    pub debug: DebugLevel,
    /// Run mode
    pub mode: RunMode,
    /// Pacing target; `None` disables the pacing sleep
    pub target_fps: Option<u32>,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
    /// Window size, opaque to the core
    pub window_size: Size,
    /// Logical render buffer size, opaque to the core
    pub buffer_size: Size,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: DebugLevel::OFF,
            mode: RunMode::Prod,
            target_fps: Some(60),
            log_level: "info".to_string(),
            window_size: Size::new(720, 460),
            buffer_size: Size::new(320, 200),
        }
    }
}

impl Config for AppConfig {}

impl AppConfig {
    /// Apply one `key = value` override
    ///
    /// On error the configuration is left unchanged.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();

        match key.trim() {
            "app.debug" | "debug" | "d" => {
                let level: u8 = value.parse().map_err(|_| invalid())?;
                if level > DebugLevel::MAX {
                    return Err(invalid());
                }
                self.debug = DebugLevel::new(level);
            }
            "app.mode" | "mode" | "m" => self.mode = value.parse().map_err(|_| invalid())?,
            "app.window.size" | "ws" => self.window_size = value.parse().map_err(|_| invalid())?,
            "app.gfx.rendering.buffer.size" | "rbs" => {
                self.buffer_size = value.parse().map_err(|_| invalid())?;
            }
            "app.fps" | "fps" => {
                let fps: u32 = value.parse().map_err(|_| invalid())?;
                self.target_fps = (fps > 0).then_some(fps);
            }
            "app.log" | "log" => {
                log::LevelFilter::from_str(value).map_err(|_| invalid())?;
                self.log_level = value.to_ascii_lowercase();
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply `key=value` command-line arguments in order
    ///
    /// Bad arguments are logged and skipped; they never abort startup.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::info!("Parse command line arguments...");
        for arg in args {
            let arg = arg.as_ref();
            let result = arg
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedArgument(arg.to_string()))
                .and_then(|(key, value)| self.apply_override(key, value));

            match result {
                Ok(()) => log::info!(" |_ Override config: {}", arg),
                Err(e) => log::warn!(" |_ Ignored argument: {}", e),
            }
        }
    }

    /// Pacing period derived from `target_fps`
    pub fn frame_period(&self) -> Option<std::time::Duration> {
        self.target_fps
            .filter(|fps| *fps > 0)
            .map(|fps| std::time::Duration::from_secs_f64(1.0 / f64::from(fps)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.debug, DebugLevel::OFF);
        assert_eq!(config.mode, RunMode::Prod);
        assert_eq!(config.window_size, Size::new(720, 460));
        assert_eq!(config.buffer_size, Size::new(320, 200));
        assert_eq!(config.target_fps, Some(60));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_aliases() {
        let mut config = AppConfig::default();

        config.apply_args(["d=2", "m=TEST", "ws=1280x800", "rbs=640x400", "fps=30", "log=debug"]);

        assert_eq!(config.debug.level(), 2);
        assert_eq!(config.mode, RunMode::Test);
        assert_eq!(config.window_size, Size::new(1280, 800));
        assert_eq!(config.buffer_size, Size::new(640, 400));
        assert_eq!(config.target_fps, Some(30));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_long_keys() {
        let mut config = AppConfig::default();

        config.apply_args(["app.debug=4", "app.mode=dev", "app.gfx.rendering.buffer.size=160x100"]);

        assert_eq!(config.debug.level(), 4);
        assert_eq!(config.mode, RunMode::Dev);
        assert_eq!(config.buffer_size, Size::new(160, 100));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut config = AppConfig::default();

        let result = config.apply_override("app.colour", "blue");

        assert!(matches!(result, Err(ConfigError::UnknownKey(key)) if key == "app.colour"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_bad_values_keep_previous() {
        let mut config = AppConfig::default();

        config.apply_args(["d=7", "mode=FAST", "ws=wide", "fps=-1", "log=loud", "no_equals_sign"]);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_fps_disables_pacing() {
        let mut config = AppConfig::default();

        config.apply_override("fps", "0").unwrap();

        assert_eq!(config.target_fps, None);
        assert_eq!(config.frame_period(), None);
    }

    #[test]
    fn test_frame_period() {
        let period = AppConfig::default().frame_period().unwrap();

        assert_eq!(period.as_micros(), 16_666);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("320x200".parse::<Size>().unwrap(), Size::new(320, 200));
        assert_eq!(" 8 X 6 ".trim().parse::<Size>().unwrap(), Size::new(8, 6));
        assert!("320".parse::<Size>().is_err());
        assert_eq!(Size::new(720, 460).to_string(), "720x460");
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("lumen_config_{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let mut config = AppConfig::default();
        config.apply_args(["d=3", "m=TEST"]);

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: AppConfig = ron::from_str("(mode: TEST, debug: 1)").unwrap();

        assert_eq!(config.mode, RunMode::Test);
        assert_eq!(config.debug.level(), 1);
        assert_eq!(config.window_size, Size::new(720, 460));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("/nonexistent/lumen.toml");

        assert_eq!(config, AppConfig::default());
    }
}
