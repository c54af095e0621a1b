use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the generated year/month/day tree is rooted at.
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything not set.
    pub fn load() -> Result<Self> {
        let file_config =
            Self::read_file_config().unwrap_or_else(|_| FileConfig { base_dir: None });

        let base_dir = file_config.base_dir.unwrap_or_else(Self::default_base_dir);

        Ok(Self { base_dir })
    }

    /// Default root when the user didn't set `base_dir` in config: a `posts`
    /// directory relative to wherever the tool is run.
    fn default_base_dir() -> PathBuf {
        PathBuf::from("posts")
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daygrid")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daygrid").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig { base_dir: None })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(base_dir: PathBuf) -> Config {
        Config { base_dir }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("daygrid")
                .join("config.toml");
            let expected_native = b.config_dir().join("daygrid").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_base_dir() {
        let toml = r#"
            base_dir = "/tmp/my-posts"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.base_dir.as_deref(), Some(Path::new("/tmp/my-posts")));
    }

    #[test]
    fn parse_file_defaults_missing_fields() {
        let fc = super::Config::parse_file("").unwrap();
        assert!(fc.base_dir.is_none());
        assert_eq!(
            fc.base_dir.unwrap_or_else(Config::default_base_dir),
            Path::new("posts")
        );
    }
}
