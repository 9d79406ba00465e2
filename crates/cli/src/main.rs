use std::path::PathBuf;
use std::process;

use clap::Parser;

use facewatch_core::pipeline::errors::AppError;
use facewatch_core::pipeline::infrastructure::default_backend::DefaultBackend;
use facewatch_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use facewatch_core::pipeline::session::initialize;
use facewatch_core::shared::app_config::AppConfig;

/// Live object detection with cascade classifiers.
///
/// With no arguments, opens camera 0 and outlines frontal faces until
/// Escape is pressed or the window is closed.
#[derive(Parser)]
#[command(name = "facewatch")]
struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Classifier data file (repeatable; replaces the configured list).
    #[arg(long = "cascade")]
    cascades: Vec<PathBuf>,

    /// Camera index to capture from.
    #[arg(long)]
    camera: Option<i32>,

    /// Video or image file to read instead of a camera.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Run without a window; stops when the input runs out.
    #[arg(long)]
    headless: bool,

    /// Anything else on the command line is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if let Err(io) = e.print() {
                log::debug!("Failed to print usage: {io}");
            }
            process::exit(usage_exit_code(&e));
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `--help` exits 0; every other parse failure exits 1.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = build_config(cli)?;

    let backend = DefaultBackend::new()
        .headless(cli.headless)
        .model_dirs(model_dirs(cli));
    let logger = Box::new(StdoutPipelineLogger::default());

    let mut session = initialize(&config, &backend, logger)?;
    let termination = session.run()?;
    log::info!("Finished: {termination}");
    Ok(())
}

fn build_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).map_err(|e| AppError::Init(e.into()))?,
        None => AppConfig::default(),
    };

    if !cli.cascades.is_empty() {
        config.classifiers = cli.cascades.clone();
    }
    if let Some(index) = cli.camera {
        config.camera_index = index;
    }
    if let Some(input) = &cli.input {
        config.input = Some(input.clone());
    }
    Ok(config)
}

/// Classifier names that aren't found as given are also looked up next to
/// the config file.
fn model_dirs(cli: &Cli) -> Vec<PathBuf> {
    cli.config
        .as_ref()
        .and_then(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| vec![dir.to_path_buf()])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("facewatch").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = parse(&[]);
        assert!(!cli.headless);
        assert_eq!(build_config(&cli).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--cascade",
            "faces.xml",
            "--cascade",
            "eyes.xml",
            "--camera",
            "2",
            "--input",
            "clip.mp4",
            "--headless",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(
            config.classifiers,
            vec![PathBuf::from("faces.xml"), PathBuf::from("eyes.xml")]
        );
        assert_eq!(config.camera_index, 2);
        assert_eq!(config.input, Some(PathBuf::from("clip.mp4")));
        assert!(cli.headless);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facewatch.json");
        fs::write(&path, r#"{ "camera_index": 3, "classifiers": ["a.xml"] }"#).unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--camera", "1"]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.camera_index, 1);
        assert_eq!(config.classifiers, vec![PathBuf::from("a.xml")]);
        assert_eq!(model_dirs(&cli), vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn test_stray_arguments_are_ignored() {
        let cli = Cli::try_parse_from(["facewatch", "ignored-arg", "--not-a-flag", "7"]).unwrap();
        assert_eq!(build_config(&cli).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_stray_arguments_after_flags_keep_flags() {
        let cli = Cli::try_parse_from(["facewatch", "--headless", "--camera", "1", "extra"]).unwrap();
        assert!(cli.headless);
        assert_eq!(build_config(&cli).unwrap().camera_index, 1);
    }

    #[test]
    fn test_usage_errors_exit_with_one() {
        let err = Cli::try_parse_from(["facewatch", "--camera", "front"])
            .err()
            .unwrap();
        assert_eq!(usage_exit_code(&err), 1);

        let err = Cli::try_parse_from(["facewatch", "--config"]).err().unwrap();
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn test_help_exits_with_zero() {
        let err = Cli::try_parse_from(["facewatch", "--help"]).err().unwrap();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn test_unreadable_config_is_init_error() {
        let cli = parse(&["--config", "/nonexistent/facewatch.json"]);
        assert!(matches!(build_config(&cli), Err(AppError::Init(_))));
    }
}
