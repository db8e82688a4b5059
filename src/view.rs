use raylib::prelude::*;
use gallery::{Category, Event, GalleryView, Interval};

use crate::slide::Slide;

const MARGIN: f32 = 20.0;
const TITLE_SIZE: i32 = 32;
const TEXT_SIZE: i32 = 20;
const SMALL_TEXT_SIZE: i32 = 16;
const BUTTON_HEIGHT: f32 = 44.0;
const BUTTON_GAP: f32 = 10.0;
const CATEGORY_BUTTON_WIDTH: f32 = 140.0;
const NAV_BUTTON_WIDTH: f32 = 110.0;
const SETTINGS_PANEL_HEIGHT: f32 = 170.0;
const HINT_HEIGHT: f32 = 40.0;
const COUNTER_HEIGHT: f32 = 40.0;

const BACKGROUND: Color = Color::new(17, 24, 39, 255);
const PANEL: Color = Color::new(31, 41, 55, 255);
const BUTTON: Color = Color::new(55, 65, 81, 255);
const ACTIVE: Color = Color::new(37, 99, 235, 255);
const DISABLED: Color = Color::new(40, 46, 58, 255);
const MUTED: Color = Color::new(156, 163, 175, 255);
const OVERLAY: Color = Color::new(0, 0, 0, 128);

pub struct Button {
    pub rect: Rectangle,
    pub label: String,
    pub event: Event,
    pub active: bool,
    pub enabled: bool,
}

pub struct Layout {
    pub viewport: Rectangle,
    pub buttons: Vec<Button>,
    pub settings_panel: Option<Rectangle>,
    pub interval_display: Option<Rectangle>,
    pub hint_y: f32,
}

impl Layout {
    pub fn new(view: &GalleryView, width: f32, height: f32) -> Self {
        let mut buttons = Vec::new();

        // Category row
        let row_width = CATEGORY_BUTTON_WIDTH * 3.0 + BUTTON_GAP * 2.0;
        let mut x = (width - row_width) * 0.5;
        let category_y = MARGIN + TITLE_SIZE as f32 + BUTTON_GAP;
        for category in Category::ALL {
            buttons.push(Button {
                rect: Rectangle::new(x, category_y, CATEGORY_BUTTON_WIDTH, BUTTON_HEIGHT),
                label: category.label().to_string(),
                event: Event::SelectCategory(category),
                active: view.category == category,
                enabled: true,
            });
            x += CATEGORY_BUTTON_WIDTH + BUTTON_GAP;
        }

        // Portrait 3:4 viewport in whatever height is left
        let viewport_y = category_y + BUTTON_HEIGHT + MARGIN;
        let settings_height = if view.settings_visible { SETTINGS_PANEL_HEIGHT + MARGIN } else { 0.0 };
        let reserved = BUTTON_HEIGHT + MARGIN * 2.0 + settings_height + HINT_HEIGHT;
        let viewport_height = (height - viewport_y - reserved).max(BUTTON_HEIGHT);
        let viewport_width = (viewport_height * 0.75).min(width - MARGIN * 2.0);
        let viewport = Rectangle::new(
            (width - viewport_width) * 0.5,
            viewport_y,
            viewport_width,
            viewport_height,
        );

        // Navigation row
        let nav: [(&str, Event, bool); 5] = [
            ("< Prev", Event::Previous, false),
            ("Random", Event::Random, false),
            ("Next >", Event::Next, false),
            (if view.auto_play { "Pause" } else { "Play" }, Event::ToggleAutoPlay, view.auto_play),
            (if view.settings_visible { "Close" } else { "Settings" }, Event::ToggleSettings, view.settings_visible),
        ];
        let row_width = NAV_BUTTON_WIDTH * nav.len() as f32 + BUTTON_GAP * (nav.len() - 1) as f32;
        let mut x = (width - row_width) * 0.5;
        let nav_y = viewport.y + viewport.height + MARGIN;
        for (label, event, active) in nav {
            buttons.push(Button {
                rect: Rectangle::new(x, nav_y, NAV_BUTTON_WIDTH, BUTTON_HEIGHT),
                label: label.to_string(),
                event,
                active,
                enabled: true,
            });
            x += NAV_BUTTON_WIDTH + BUTTON_GAP;
        }

        let mut hint_y = nav_y + BUTTON_HEIGHT + MARGIN;
        let (settings_panel, interval_display) = if view.settings_visible {
            let panel_width = (width - MARGIN * 2.0).min(420.0);
            let panel = Rectangle::new((width - panel_width) * 0.5, hint_y, panel_width, SETTINGS_PANEL_HEIGHT);
            let inner_x = panel.x + MARGIN;
            let inner_width = panel.width - MARGIN * 2.0;

            let step_y = panel.y + 70.0;
            let interval = Interval::new(view.interval_minutes);
            buttons.push(Button {
                rect: Rectangle::new(inner_x, step_y, BUTTON_HEIGHT, BUTTON_HEIGHT),
                label: "-".to_string(),
                event: Event::DecreaseInterval,
                active: false,
                enabled: !interval.is_min(),
            });
            buttons.push(Button {
                rect: Rectangle::new(inner_x + inner_width - BUTTON_HEIGHT, step_y, BUTTON_HEIGHT, BUTTON_HEIGHT),
                label: "+".to_string(),
                event: Event::IncreaseInterval,
                active: false,
                enabled: !interval.is_max(),
            });
            let display = Rectangle::new(inner_x + BUTTON_HEIGHT, step_y, inner_width - BUTTON_HEIGHT * 2.0, BUTTON_HEIGHT);

            buttons.push(Button {
                rect: Rectangle::new(inner_x, step_y + BUTTON_HEIGHT + BUTTON_GAP, inner_width, BUTTON_HEIGHT - 8.0),
                label: (if view.auto_play { "Disable Auto-Play" } else { "Enable Auto-Play" }).to_string(),
                event: Event::ToggleAutoPlay,
                active: view.auto_play,
                enabled: true,
            });

            hint_y += SETTINGS_PANEL_HEIGHT + MARGIN;
            (Some(panel), Some(display))
        } else {
            (None, None)
        };

        Self {
            viewport,
            buttons,
            settings_panel,
            interval_display,
            hint_y,
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<Event> {
        self.buttons
            .iter()
            .find(|button| button.enabled && contains(&button.rect, point))
            .map(|button| button.event.clone())
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

pub fn draw(
    d: &mut RaylibDrawHandle,
    view: &GalleryView,
    layout: &Layout,
    slide: Option<&Slide>,
    notice: Option<&str>,
) {
    let width = d.get_screen_width();
    d.clear_background(BACKGROUND);

    draw_centered_text(d, "Gallery", width as f32 * 0.5, MARGIN, TITLE_SIZE, Color::WHITE);

    // --- Image ---
    let viewport = layout.viewport;
    d.draw_rectangle_rec(viewport, PANEL);
    match slide {
        Some(slide) if view.current_image.as_ref().is_some_and(|image| slide.shows(image)) => {
            slide.draw(d, viewport);
        }
        _ if !view.loading || view.current_image.is_none() => {
            let y = viewport.y + viewport.height * 0.5 - TEXT_SIZE as f32 * 0.5;
            draw_centered_text(d, "No image available", viewport.x + viewport.width * 0.5, y, TEXT_SIZE, MUTED);
        }
        _ => {}
    }

    if view.loading {
        d.draw_rectangle_rec(viewport, OVERLAY);
        let y = viewport.y + viewport.height * 0.5 - TEXT_SIZE as f32 * 0.5;
        draw_centered_text(d, "Loading...", viewport.x + viewport.width * 0.5, y, TEXT_SIZE, Color::WHITE);
    }

    // Counter overlay
    let counter = Rectangle::new(viewport.x, viewport.y + viewport.height - COUNTER_HEIGHT, viewport.width, COUNTER_HEIGHT);
    d.draw_rectangle_rec(counter, OVERLAY);
    let text_y = (counter.y + (COUNTER_HEIGHT - SMALL_TEXT_SIZE as f32) * 0.5) as i32;
    d.draw_text(&view.counter(), (counter.x + 12.0) as i32, text_y, SMALL_TEXT_SIZE, Color::WHITE);
    if view.auto_play {
        let badge = format!("Auto: {}", view.interval_display);
        let badge_width = measure_text(&badge, SMALL_TEXT_SIZE) as f32 + 16.0;
        let badge_rect = Rectangle::new(counter.x + counter.width - badge_width - 12.0, counter.y + 6.0, badge_width, COUNTER_HEIGHT - 12.0);
        d.draw_rectangle_rec(badge_rect, ACTIVE);
        d.draw_text(&badge, (badge_rect.x + 8.0) as i32, text_y, SMALL_TEXT_SIZE, Color::WHITE);
    }

    // --- Settings panel ---
    if let (Some(panel), Some(display)) = (layout.settings_panel, layout.interval_display) {
        d.draw_rectangle_rec(panel, PANEL);
        d.draw_text("Gallery Settings", (panel.x + MARGIN) as i32, (panel.y + 12.0) as i32, TEXT_SIZE, Color::WHITE);
        d.draw_text("Auto-Transition Interval", (panel.x + MARGIN) as i32, (panel.y + 44.0) as i32, SMALL_TEXT_SIZE, MUTED);
        d.draw_rectangle_rec(display, BACKGROUND);
        let y = display.y + (display.height - TEXT_SIZE as f32) * 0.5;
        draw_centered_text(d, &view.interval_display, display.x + display.width * 0.5, y, TEXT_SIZE, Color::WHITE);
    }

    // --- Buttons ---
    for button in &layout.buttons {
        let fill = match (button.enabled, button.active) {
            (false, _) => DISABLED,
            (true, true) => ACTIVE,
            (true, false) => BUTTON,
        };
        d.draw_rectangle_rec(button.rect, fill);
        let y = button.rect.y + (button.rect.height - TEXT_SIZE as f32) * 0.5;
        let text = if button.enabled { Color::WHITE } else { MUTED };
        draw_centered_text(d, &button.label, button.rect.x + button.rect.width * 0.5, y, TEXT_SIZE, text);
    }

    // --- Footer ---
    let hint = "Arrow keys: Prev / Next   R: random   Space: auto-play   S: settings   1-3: category";
    draw_centered_text(d, hint, width as f32 * 0.5, layout.hint_y, SMALL_TEXT_SIZE, MUTED);
    if let Some(notice) = notice {
        draw_centered_text(d, notice, width as f32 * 0.5, layout.hint_y + SMALL_TEXT_SIZE as f32 + 6.0, SMALL_TEXT_SIZE, Color::RED);
    }
}

fn draw_centered_text(d: &mut RaylibDrawHandle, text: &str, center_x: f32, y: f32, size: i32, color: Color) {
    let text_width = measure_text(text, size);
    d.draw_text(text, center_x as i32 - text_width / 2, y as i32, size, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery::{Catalog, GalleryController, Settings};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn view(settings_visible: bool) -> GalleryView {
        let catalog = Catalog::new().with_images(Category::Drawing, ["a.png", "b.png"]);
        let mut controller = GalleryController::with_rng(catalog, Settings::default(), StdRng::seed_from_u64(3));
        if settings_visible {
            controller.toggle_settings();
        }
        controller.view()
    }

    #[test]
    fn clicking_a_category_button_selects_it() {
        let layout = Layout::new(&view(false), 960.0, 1080.0);
        let figure = layout
            .buttons
            .iter()
            .find(|b| b.event == Event::SelectCategory(Category::Figure))
            .expect("figure button");
        let center = Vector2::new(figure.rect.x + 5.0, figure.rect.y + 5.0);
        assert_eq!(layout.hit(center), Some(Event::SelectCategory(Category::Figure)));
        assert!(layout.buttons[0].active);
    }

    #[test]
    fn clicking_the_image_does_nothing() {
        let layout = Layout::new(&view(false), 960.0, 1080.0);
        let center = Vector2::new(
            layout.viewport.x + layout.viewport.width * 0.5,
            layout.viewport.y + layout.viewport.height * 0.5,
        );
        assert_eq!(layout.hit(center), None);
    }

    #[test]
    fn settings_panel_adds_interval_controls() {
        let closed = Layout::new(&view(false), 960.0, 1080.0);
        let open = Layout::new(&view(true), 960.0, 1080.0);

        assert!(closed.settings_panel.is_none());
        assert!(open.settings_panel.is_some());
        assert_eq!(open.buttons.len(), closed.buttons.len() + 3);
        assert!(open.buttons.iter().any(|b| b.event == Event::IncreaseInterval));
        assert!(open.viewport.height < closed.viewport.height);
    }

    #[test]
    fn interval_buttons_disable_at_the_bounds() {
        let mut view = view(true);
        view.interval_minutes = 0.5;
        let layout = Layout::new(&view, 960.0, 1080.0);
        let minus = layout
            .buttons
            .iter()
            .find(|b| b.event == Event::DecreaseInterval)
            .expect("minus button");
        let plus = layout
            .buttons
            .iter()
            .find(|b| b.event == Event::IncreaseInterval)
            .expect("plus button");

        assert!(!minus.enabled);
        assert!(plus.enabled);
        let inside = Vector2::new(minus.rect.x + 2.0, minus.rect.y + 2.0);
        assert_eq!(layout.hit(inside), None);

        view.interval_minutes = 60.0;
        let layout = Layout::new(&view, 960.0, 1080.0);
        let plus = layout.buttons.iter().find(|b| b.event == Event::IncreaseInterval).expect("plus button");
        assert!(!plus.enabled);
    }

    #[test]
    fn viewport_keeps_portrait_ratio() {
        let layout = Layout::new(&view(false), 1920.0, 1080.0);
        let ratio = layout.viewport.width / layout.viewport.height;
        assert!((ratio - 0.75).abs() < 1e-3);
    }
}
