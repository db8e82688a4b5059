use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::category::Category;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{GalleryError, Result};

/// Opaque reference to an image: a file path or a URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_remote(&self) -> bool {
        let lower = self.0.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<PathBuf> for ImageRef {
    fn from(path: PathBuf) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    lists: [Vec<ImageRef>; 3],
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images<I, R>(mut self, category: Category, images: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        self.extend(category, images);
        self
    }

    pub fn extend<I, R>(&mut self, category: Category, images: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        self.lists[category.index()].extend(images.into_iter().map(Into::into));
    }

    // A missing directory adds nothing.
    pub fn scan_directory(&mut self, category: Category, dir: &Path) -> Result<usize> {
        let paths = match load_sorted_image_paths(dir) {
            Ok(paths) => paths,
            Err(GalleryError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!(category = %category, dir = %dir.display(), "image directory does not exist");
                return Ok(0);
            }
            Err(e) => return Err(e),
        };
        let count = paths.len();
        debug!(category = %category, dir = %dir.display(), count, "scanned image directory");
        self.extend(category, paths);
        Ok(count)
    }

    pub fn images(&self, category: Category) -> &[ImageRef] {
        &self.lists[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.images(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| GalleryError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| GalleryError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
