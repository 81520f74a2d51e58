//! Lumen demo application
//!
//! Runs the demo scene headlessly: frames go to the log and input comes from
//! a fixed script that ends with Escape.
//!
//! ```text
//! lumen_demo [config=<path>] [key=value ...]
//! ```
//!
//! `config=` selects a `.toml` or `.ron` file (default `lumen.toml`); every
//! other argument overrides one configuration value, e.g. `d=2 m=TEST`.

mod demo_scene;
mod headless;

use demo_scene::DemoScene;
use headless::{LogRenderer, ScriptedInput};
use lumen_engine::foundation::logging;
use lumen_engine::prelude::*;

const DEFAULT_CONFIG_PATH: &str = "lumen.toml";

/// Log level requested on the command line, if any
fn requested_log_level(args: &[String]) -> Option<&str> {
    args.iter()
        .rev()
        .find_map(|arg| arg.strip_prefix("log=").or_else(|| arg.strip_prefix("app.log=")))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config_args, overrides): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|arg| arg.starts_with("config="));
    let config_path = config_args
        .last()
        .and_then(|arg| arg.strip_prefix("config="))
        .unwrap_or(DEFAULT_CONFIG_PATH)
        .to_string();

    let loaded = AppConfig::load_from_file(&config_path);
    let mut config = loaded.as_ref().map_or_else(|_| AppConfig::default(), Clone::clone);

    logging::init(requested_log_level(&overrides).unwrap_or(&config.log_level));
    log::info!("Starting Lumen demo");
    match loaded {
        Ok(_) => log::info!("Read configuration from {}", config_path),
        Err(e) => log::error!("Unable to read configuration file {}: {}", config_path, e),
    }

    config.apply_args(&overrides);
    log::info!(
        "Configuration: mode={} debug={} window={} buffer={} fps={:?}",
        config.mode,
        config.debug,
        config.window_size,
        config.buffer_size,
        config.target_fps
    );

    let mut scene = DemoScene::new(config.buffer_size);
    let mut renderer = LogRenderer::new();
    let mut input = ScriptedInput::demo();
    log::info!("Input script ends at frame {:?}", input.last_frame());
    let mut engine = Engine::new(config);

    engine.run(&mut scene, &mut renderer, &mut input)?;

    log::info!("Demo finished after {} frames", renderer.frames());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_log_override_wins() {
        let args = vec!["d=1".to_string(), "log=debug".to_string(), "app.log=warn".to_string()];

        assert_eq!(requested_log_level(&args), Some("warn"));
        assert_eq!(requested_log_level(&["d=1".to_string()]), None);
    }
}
