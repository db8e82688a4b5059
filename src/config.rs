use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{Catalog, ImageRef};
use crate::category::Category;
use crate::constants::*;
use crate::controller::Settings;
use crate::error::{GalleryError, Result};
use crate::interval::clamp_minutes;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub category: Option<Category>,
    pub interval_minutes: Option<f64>,
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub drawing: SourceConfig,
    #[serde(default)]
    pub figure: SourceConfig,
    #[serde(default)]
    pub real: SourceConfig,

    // Relative paths resolve against this.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// Where one category's images come from.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load_default() -> Result<Option<Config>> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
        let mut config = Self::parse(&text, path)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Config> {
        toml::from_str(text).map_err(|source| GalleryError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn source(&self, category: Category) -> &SourceConfig {
        match category {
            Category::Drawing => &self.drawing,
            Category::Figure => &self.figure,
            Category::Real => &self.real,
        }
    }

    pub fn source_mut(&mut self, category: Category) -> &mut SourceConfig {
        match category {
            Category::Drawing => &mut self.drawing,
            Category::Figure => &mut self.figure,
            Category::Real => &mut self.real,
        }
    }

    /// Controller startup values. An out-of-range interval is clamped, not rejected.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let interval_minutes = match self.interval_minutes {
            Some(minutes) => {
                let clamped = clamp_minutes(minutes);
                if clamped != minutes {
                    warn!(
                        "interval_minutes ({}) must be between {} and {}, using {}",
                        minutes, MIN_INTERVAL_MINUTES, MAX_INTERVAL_MINUTES, clamped
                    );
                }
                clamped
            }
            None => defaults.interval_minutes,
        };

        Settings {
            category: self.category.unwrap_or(defaults.category),
            interval_minutes,
            auto_play: self.autoplay.unwrap_or(defaults.auto_play),
        }
    }

    // Directory scan first, explicit images after.
    pub fn build_catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for category in Category::ALL {
            let source = self.source(category);
            if let Some(dir) = &source.directory {
                catalog.scan_directory(category, &self.resolve(dir))?;
            }
            let images: Vec<ImageRef> = source
                .images
                .iter()
                .map(|image| self.resolve_reference(image))
                .collect();
            catalog.extend(category, images);
        }
        Ok(catalog)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let expanded = expand_home(path);
        match &self.base_dir {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        }
    }

    fn resolve_reference(&self, image: &str) -> ImageRef {
        let reference = ImageRef::new(image);
        if reference.is_remote() {
            reference
        } else {
            ImageRef::from(self.resolve(Path::new(image)))
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(text: &str) -> Result<Config> {
        Config::parse(text, Path::new("gallery.toml"))
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.settings(), Settings::default());
        assert!(config.build_catalog().unwrap().is_empty());
    }

    #[test]
    fn reads_settings() {
        let config = parse(
            r#"
            category = "figure"
            interval_minutes = 2.5
            autoplay = true
            "#,
        )
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.category, Category::Figure);
        assert_eq!(settings.interval_minutes, 2.5);
        assert!(settings.auto_play);
    }

    #[test]
    fn out_of_range_interval_is_clamped() {
        let config = parse("interval_minutes = 0.1").unwrap();
        assert_eq!(config.settings().interval_minutes, 0.5);
        let config = parse("interval_minutes = 600").unwrap();
        assert_eq!(config.settings().interval_minutes, 60.0);
    }

    #[test]
    fn rejects_unknown_keys_and_categories() {
        assert!(matches!(parse("speed = 3"), Err(GalleryError::Config { .. })));
        assert!(matches!(parse("category = \"sketch\""), Err(GalleryError::Config { .. })));
        assert!(matches!(
            parse("[drawing]\nfolder = \"x\""),
            Err(GalleryError::Config { .. })
        ));
    }

    #[test]
    fn builds_catalog_relative_to_config_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let drawings = dir.path().join("drawings");
        fs::create_dir(&drawings).unwrap();
        fs::write(drawings.join("b.png"), b"x").unwrap();
        fs::write(drawings.join("a.jpg"), b"x").unwrap();

        let path = dir.path().join("gallery.toml");
        fs::write(
            &path,
            r#"
            [drawing]
            directory = "drawings"
            images = ["https://example.com/remote.png", "local/extra.gif"]

            [real]
            directory = "missing"
            "#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        let catalog = config.build_catalog().unwrap();
        let drawing = catalog.images(Category::Drawing);

        assert_eq!(drawing.len(), 4);
        assert!(drawing[0].as_str().ends_with("a.jpg"));
        assert!(drawing[1].as_str().ends_with("b.png"));
        assert_eq!(drawing[2].as_str(), "https://example.com/remote.png");
        assert_eq!(
            Path::new(drawing[3].as_str()),
            dir.path().join("local").join("extra.gif")
        );
        assert!(catalog.images(Category::Real).is_empty());
        assert!(catalog.images(Category::Figure).is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }
}
