use crate::catalog::ImageRef;
use crate::category::Category;
use crate::interval::Interval;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadState {
    Idle,    // Current image is on screen (or failed)
    Loading, // Waiting for the front end to report load/error
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoPlay {
    Off,
    On,
}

impl AutoPlay {
    pub fn is_on(self) -> bool {
        self == AutoPlay::On
    }

    pub fn toggled(self) -> Self {
        match self {
            AutoPlay::Off => AutoPlay::On,
            AutoPlay::On => AutoPlay::Off,
        }
    }
}

/// Everything the controller mutates.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub category: Category,
    pub images: Vec<ImageRef>,
    /// `None` exactly when `images` is empty.
    pub current_index: Option<usize>,
    pub load: LoadState,
    pub auto_play: AutoPlay,
    pub interval: Interval,
    pub settings_visible: bool,
}

impl GalleryState {
    pub fn new(category: Category, images: Vec<ImageRef>) -> Self {
        let mut state = Self {
            category,
            images: Vec::new(),
            current_index: None,
            load: LoadState::Idle,
            auto_play: AutoPlay::Off,
            interval: Interval::default(),
            settings_visible: false,
        };
        state.replace_images(category, images);
        state
    }

    /// Swaps in a new list and points at its first image.
    pub fn replace_images(&mut self, category: Category, images: Vec<ImageRef>) {
        self.category = category;
        self.current_index = if images.is_empty() { None } else { Some(0) };
        self.load = LoadState::Loading;
        self.images = images;
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.current_index.and_then(|i| self.images.get(i))
    }

    pub fn view(&self) -> GalleryView {
        GalleryView {
            category: self.category,
            current_image: self.current_image().cloned(),
            current_index: self.current_index,
            total: self.images.len(),
            loading: self.load == LoadState::Loading,
            auto_play: self.auto_play.is_on(),
            settings_visible: self.settings_visible,
            interval_minutes: self.interval.minutes(),
            interval_display: self.interval.to_string(),
        }
    }
}

/// Read-only snapshot for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub category: Category,
    pub current_image: Option<ImageRef>,
    pub current_index: Option<usize>,
    pub total: usize,
    pub loading: bool,
    pub auto_play: bool,
    pub settings_visible: bool,
    pub interval_minutes: f64,
    pub interval_display: String,
}

impl GalleryView {
    /// "Image 2 of 5", or a placeholder for an empty category.
    pub fn counter(&self) -> String {
        match self.current_index {
            Some(i) => format!("Image {} of {}", i + 1, self.total),
            None => "No image available".to_string(),
        }
    }
}
