//! Extraction settings
//!
//! Only file locations are configurable. Ball geometry and thumbnail sizes
//! are fixed in `constants`. An optional JSON file under config/ and a few
//! command line flags can move the source and outputs.
//!
//! Priority: flags > `--settings <file>` > config/ballcrop.json > built-in defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{OUTPUT_FILE, SOURCE_FILE};

/// Local settings file (optional, gitignored)
pub const SETTINGS_FILE: &str = "config/ballcrop.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractSettings {
    /// Logo to cut the ball from
    pub source: PathBuf,
    /// Native-size masked ball; thumbnails are written next to it
    pub output: PathBuf,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl ExtractSettings {
    /// Load configuration from a JSON settings file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&contents).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// config/ballcrop.json if present and valid, otherwise defaults
    pub fn from_config_file() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", SETTINGS_FILE);
                settings
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Config files first, then `--settings`, then per-field flags.
    /// Unknown arguments are ignored with a warning.
    pub fn from_arg_list(args: &[String]) -> Self {
        let mut settings = match find_value(args, "--settings") {
            Some(path) => match Self::from_file(Path::new(path)) {
                Ok(loaded) => loaded,
                Err(e) => {
                    warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            None => Self::from_config_file(),
        };
        settings.apply_args(args);
        settings
    }

    fn apply_args(&mut self, args: &[String]) {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--settings" | "--input" | "--output" => {
                    let Some(value) = args.get(i + 1) else {
                        warn!("Missing value for {}", flag);
                        break;
                    };
                    match flag {
                        "--input" => self.source = PathBuf::from(value),
                        "--output" => self.output = PathBuf::from(value),
                        // Already loaded by from_arg_list
                        _ => {}
                    }
                    i += 1;
                }
                // Read by logging setup before settings load
                "--debug-log" => {}
                other => warn!("Ignoring unknown argument '{}'", other),
            }
            i += 1;
        }
    }

    /// Output path for a thumbnail: `<stem>-<size>.<ext>` next to the primary output
    pub fn thumbnail_path(&self, size: u32) -> PathBuf {
        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ball".to_string());
        let file_name = match self.output.extension() {
            Some(ext) => format!("{}-{}.{}", stem, size, ext.to_string_lossy()),
            None => format!("{}-{}", stem, size),
        };
        self.output.with_file_name(file_name)
    }
}

fn find_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_match_constants() {
        let s = ExtractSettings::default();
        assert_eq!(s.source, PathBuf::from("frontend/src/assets/BEEXOCCER.png"));
        assert_eq!(s.output, PathBuf::from("frontend/src/assets/ball.png"));
    }

    #[test]
    fn test_default_thumbnail_paths() {
        let s = ExtractSettings::default();
        assert_eq!(
            s.thumbnail_path(100),
            PathBuf::from("frontend/src/assets/ball-100.png")
        );
        assert_eq!(
            s.thumbnail_path(200),
            PathBuf::from("frontend/src/assets/ball-200.png")
        );
    }

    #[test]
    fn test_thumbnail_path_without_extension() {
        let s = ExtractSettings {
            output: PathBuf::from("out/ball"),
            ..Default::default()
        };
        assert_eq!(s.thumbnail_path(100), PathBuf::from("out/ball-100"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = ExtractSettings::from_json(r#"{ "output": "out/ball.png" }"#).unwrap();
        assert_eq!(s.output, PathBuf::from("out/ball.png"));
        assert_eq!(s.source, PathBuf::from("frontend/src/assets/BEEXOCCER.png"));
    }

    #[test]
    fn test_geometry_keys_are_rejected() {
        for json in [
            r#"{ "radius": 4000000000 }"#,
            r#"{ "offset_x": -3 }"#,
            r#"{ "thumbnail_sizes": [] }"#,
        ] {
            assert!(ExtractSettings::from_json(json).is_err(), "{} should not parse", json);
        }
    }

    #[test]
    fn test_geometry_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "thumbnail_sizes": [], "output": "x.png" }"#).unwrap();

        let s = ExtractSettings::from_arg_list(&args(&["--settings", path.to_str().unwrap()]));
        assert_eq!(s, ExtractSettings::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ExtractSettings::from_json("{ source: }").is_err());
    }

    #[test]
    fn test_flags_override() {
        let mut s = ExtractSettings::default();
        s.apply_args(&args(&["--input", "logo.png", "--output", "out/b.png", "--debug-log"]));
        assert_eq!(s.source, PathBuf::from("logo.png"));
        assert_eq!(s.output, PathBuf::from("out/b.png"));
    }

    #[test]
    fn test_trailing_flag_without_value_is_ignored() {
        let mut s = ExtractSettings::default();
        s.apply_args(&args(&["--input", "logo.png", "--output"]));
        assert_eq!(s.source, PathBuf::from("logo.png"));
        assert_eq!(s.output, ExtractSettings::default().output);

        let mut s = ExtractSettings::default();
        s.apply_args(&args(&["--input"]));
        assert_eq!(s, ExtractSettings::default());
    }

    #[test]
    fn test_settings_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{ "source": "from_file.png", "output": "from_file_out.png" }"#).unwrap();

        let s = ExtractSettings::from_arg_list(&args(&[
            "--settings",
            path.to_str().unwrap(),
            "--output",
            "from_flag.png",
        ]));
        assert_eq!(s.source, PathBuf::from("from_file.png"));
        assert_eq!(s.output, PathBuf::from("from_flag.png"));
    }

    #[test]
    fn test_missing_settings_file_falls_back() {
        let s = ExtractSettings::from_arg_list(&args(&["--settings", "/nonexistent/ballcrop.json"]));
        assert_eq!(s, ExtractSettings::default());
    }
}
