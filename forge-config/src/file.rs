use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// A pixelforge.toml on disk: raw content plus the parsed configuration.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a pixelforge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists; `None` means callers should use defaults.
    pub fn open_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pixelforge_core::Framework;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pixelforge.toml");
        fs::write(&path, "[generation]\nframework = \"html-tailwind\"\n").unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("html-tailwind"));
        assert_eq!(file.config().generation.framework, Framework::HtmlTailwind);
    }

    #[test]
    fn test_open_missing_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("nope.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_if_exists_missing() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::open_if_exists(temp.path().join("nope.toml")).unwrap();
        assert!(file.is_none());
    }
}
