use raylib::prelude::*;
use gallery::{Category, Event, Key};

/// Keyboard binding for one raylib key press.
pub fn map_key(key: KeyboardKey) -> Option<Event> {
    let event = match key {
        KeyboardKey::KEY_RIGHT => Event::Key(Key::ArrowRight),
        KeyboardKey::KEY_LEFT => Event::Key(Key::ArrowLeft),
        KeyboardKey::KEY_R => Event::Random,
        KeyboardKey::KEY_SPACE => Event::ToggleAutoPlay,
        KeyboardKey::KEY_S => Event::ToggleSettings,
        KeyboardKey::KEY_UP => Event::IncreaseInterval,
        KeyboardKey::KEY_DOWN => Event::DecreaseInterval,
        KeyboardKey::KEY_ONE => Event::SelectCategory(Category::Drawing),
        KeyboardKey::KEY_TWO => Event::SelectCategory(Category::Figure),
        KeyboardKey::KEY_THREE => Event::SelectCategory(Category::Real),
        _ => return None,
    };
    Some(event)
}
