use std::path::PathBuf;

use clap::Parser;
use gallery::{Category, Config};

#[derive(Debug, Parser)]
#[command(name = "gallery", version, about = "Image gallery with timed auto-play")]
pub struct Args {
    /// Configuration file (defaults to <config dir>/gallery/gallery.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of drawings
    #[arg(long, value_name = "DIR")]
    pub drawing: Option<PathBuf>,

    /// Directory of figures
    #[arg(long, value_name = "DIR")]
    pub figure: Option<PathBuf>,

    /// Directory of real photos
    #[arg(long, value_name = "DIR")]
    pub real: Option<PathBuf>,

    /// Category shown on startup
    #[arg(short = 'C', long, value_enum)]
    pub category: Option<Category>,

    /// Auto-play period in minutes (0.5-60)
    #[arg(short, long, value_name = "MINUTES")]
    pub interval: Option<f64>,

    /// Start with auto-play enabled
    #[arg(short, long)]
    pub autoplay: bool,

    /// Print the image lists and exit
    #[arg(long)]
    pub list: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn directory(&self, category: Category) -> Option<&PathBuf> {
        match category {
            Category::Drawing => self.drawing.as_ref(),
            Category::Figure => self.figure.as_ref(),
            Category::Real => self.real.as_ref(),
        }
    }

    /// Command-line values win over the configuration file.
    pub fn apply(&self, config: &mut Config) {
        for category in Category::ALL {
            if let Some(dir) = self.directory(category) {
                config.source_mut(category).directory = Some(dir.clone());
            }
        }
        if let Some(category) = self.category {
            config.category = Some(category);
        }
        if let Some(interval) = self.interval {
            config.interval_minutes = Some(interval);
        }
        if self.autoplay {
            config.autoplay = Some(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_config_values() {
        let args = Args::try_parse_from([
            "gallery", "--figure", "/pics/figures", "-C", "real", "--interval", "5", "--autoplay",
        ])
        .unwrap();

        let mut config = Config::default();
        config.drawing.directory = Some(PathBuf::from("/pics/drawings"));
        config.figure.directory = Some(PathBuf::from("/old/figures"));
        args.apply(&mut config);

        assert_eq!(config.drawing.directory, Some(PathBuf::from("/pics/drawings")));
        assert_eq!(config.figure.directory, Some(PathBuf::from("/pics/figures")));
        assert_eq!(config.category, Some(Category::Real));
        assert_eq!(config.interval_minutes, Some(5.0));
        assert_eq!(config.autoplay, Some(true));
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let args = Args::try_parse_from(["gallery"]).unwrap();
        let mut config = Config::default();
        config.autoplay = Some(false);
        args.apply(&mut config);
        assert_eq!(config.autoplay, Some(false));
        assert_eq!(config.category, None);
        assert_eq!(config.interval_minutes, None);
        assert_eq!(config.drawing.directory, None);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Args::try_parse_from(["gallery", "--category", "sketch"]).is_err());
    }
}
