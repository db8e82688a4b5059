pub mod catalog;
pub mod category;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod event;
pub mod interval;
pub mod logging;
pub mod state;
pub mod timer;

pub use catalog::{Catalog, ImageRef};
pub use category::Category;
pub use config::Config;
pub use controller::{GalleryController, Settings};
pub use error::{GalleryError, Result};
pub use event::{Event, Key};
pub use interval::Interval;
pub use state::{GalleryState, GalleryView};
