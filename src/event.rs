use crate::category::Category;
use crate::timer::Generation;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectCategory(Category),
    Next,
    Previous,
    Random,
    ToggleAutoPlay,
    IncreaseInterval,
    DecreaseInterval,
    SetInterval(f64),
    ToggleSettings,
    Key(Key),
    ImageLoaded,
    ImageError(String),
    /// Auto-play tick, stamped with the timer run that produced it.
    Tick(Generation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM-style key name ("ArrowRight") to a [`Key`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}
