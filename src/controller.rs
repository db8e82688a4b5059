use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::GalleryError;
use crate::event::{Event, Key};
use crate::interval::Interval;
use crate::state::{AutoPlay, GalleryState, GalleryView, LoadState};
use crate::timer::{AutoPlayTimer, Generation};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub category: Category,
    pub interval_minutes: f64,
    pub auto_play: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: Category::default(),
            interval_minutes: Interval::default().minutes(),
            auto_play: false,
        }
    }
}

pub struct GalleryController<R = StdRng> {
    catalog: Catalog,
    state: GalleryState,
    timer: AutoPlayTimer,
    queue: VecDeque<Event>,
    warnings: Vec<GalleryError>,
    rng: R,
    shut_down: bool,
}

impl GalleryController<StdRng> {
    pub fn new(catalog: Catalog, settings: Settings) -> Self {
        Self::with_rng(catalog, settings, StdRng::from_os_rng())
    }
}

impl<R: Rng> GalleryController<R> {
    pub fn with_rng(catalog: Catalog, settings: Settings, rng: R) -> Self {
        let images = catalog.images(settings.category).to_vec();
        let mut state = GalleryState::new(settings.category, images);
        state.interval = Interval::new(settings.interval_minutes);

        let mut controller = Self {
            catalog,
            state,
            timer: AutoPlayTimer::new(),
            queue: VecDeque::new(),
            warnings: Vec::new(),
            rng,
            shut_down: false,
        };
        if settings.auto_play {
            controller.toggle_auto_play();
        }
        controller
    }

    pub fn view(&self) -> GalleryView {
        self.state.view()
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_running()
    }

    pub fn timer_generation(&self) -> Generation {
        self.timer.generation()
    }

    pub fn time_to_next_tick(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    pub fn take_warnings(&mut self) -> Vec<GalleryError> {
        std::mem::take(&mut self.warnings)
    }

    // --- Event queue ---

    pub fn dispatch(&mut self, event: Event) {
        self.enqueue(event);
        self.process_pending();
    }

    pub fn enqueue(&mut self, event: Event) {
        if self.shut_down {
            debug!(?event, "controller shut down, dropping event");
            return;
        }
        self.queue.push_back(event);
    }

    /// Applies queued events in arrival order. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.queue.pop_front() {
            if self.shut_down {
                self.queue.clear();
                break;
            }
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Moves the controller clock forward by `dt`, delivering one tick per
    /// elapsed period, at most one full cycle of the current list.
    pub fn advance(&mut self, dt: Duration) {
        if self.shut_down {
            return;
        }
        let fired = self.timer.advance(dt);
        let cycle = self.state.images.len() as u64;
        let ticks = fired.min(cycle);
        if ticks < fired {
            debug!(fired, delivered = ticks, "auto-play catch-up capped");
        }
        let generation = self.timer.generation();
        for _ in 0..ticks {
            self.queue.push_back(Event::Tick(generation));
        }
        self.process_pending();
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::SelectCategory(category) => self.select_category(category),
            Event::Next => self.next(),
            Event::Previous => self.previous(),
            Event::Random => self.random_jump(),
            Event::ToggleAutoPlay => self.toggle_auto_play(),
            Event::IncreaseInterval => self.increase_interval(),
            Event::DecreaseInterval => self.decrease_interval(),
            Event::SetInterval(minutes) => self.set_interval(minutes),
            Event::ToggleSettings => self.toggle_settings(),
            Event::Key(key) => self.handle_key(key),
            Event::ImageLoaded => self.on_image_loaded(),
            Event::ImageError(reason) => self.on_image_error(reason),
            Event::Tick(generation) => self.on_tick(generation),
        }
    }

    // --- Operations ---

    pub fn select_category(&mut self, category: Category) {
        let images = self.catalog.images(category).to_vec();
        info!(category = %category, count = images.len(), "category selected");
        self.state.replace_images(category, images);
        self.reschedule();
    }

    pub fn next(&mut self) {
        let len = self.state.images.len();
        if let Some(index) = self.state.current_index {
            self.go_to((index + 1) % len);
        }
    }

    pub fn previous(&mut self) {
        let len = self.state.images.len();
        if let Some(index) = self.state.current_index {
            self.go_to((index + len - 1) % len);
        }
    }

    pub fn random_jump(&mut self) {
        let len = self.state.images.len();
        if len == 0 {
            return;
        }
        let index = self.rng.random_range(0..len);
        self.go_to(index);
    }

    pub fn toggle_auto_play(&mut self) {
        self.state.auto_play = self.state.auto_play.toggled();
        info!(enabled = self.state.auto_play.is_on(), "auto-play toggled");
        self.reschedule();
    }

    pub fn set_interval(&mut self, minutes: f64) {
        let interval = Interval::new(minutes);
        if interval.minutes() != minutes {
            debug!(requested = minutes, stored = interval.minutes(), "interval clamped");
        }
        self.update_interval(interval);
    }

    pub fn increase_interval(&mut self) {
        self.update_interval(self.state.interval.increased());
    }

    pub fn decrease_interval(&mut self) {
        self.update_interval(self.state.interval.decreased());
    }

    pub fn toggle_settings(&mut self) {
        self.state.settings_visible = !self.state.settings_visible;
    }

    pub fn on_image_loaded(&mut self) {
        self.state.load = LoadState::Idle;
    }

    pub fn on_image_error(&mut self, reason: impl Into<String>) {
        self.state.load = LoadState::Idle;
        let reason = reason.into();
        match self.state.current_image() {
            Some(image) => {
                let failure = GalleryError::ImageLoadFailure {
                    image: image.clone(),
                    reason,
                };
                warn!("{failure}");
                self.warnings.push(failure);
            }
            None => debug!(%reason, "image error with no current image"),
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Other => {}
        }
    }

    /// Releases the timer and stops accepting events.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.timer.cancel();
        self.queue.clear();
        self.shut_down = true;
        debug!("gallery controller shut down");
    }

    // --- Internals ---

    fn go_to(&mut self, index: usize) {
        debug!(from = ?self.state.current_index, to = index, "navigate");
        self.state.current_index = Some(index);
        self.state.load = LoadState::Loading;
    }

    fn update_interval(&mut self, interval: Interval) {
        self.state.interval = interval;
        if self.state.auto_play.is_on() {
            self.reschedule();
        }
    }

    fn on_tick(&mut self, generation: Generation) {
        if generation != self.timer.generation() || !self.timer.is_running() {
            debug!(generation, "dropping stale auto-play tick");
            return;
        }
        self.next();
    }

    /// Cancels the running timer and starts a new one if auto-play wants it.
    fn reschedule(&mut self) {
        self.timer.cancel();
        if self.shut_down || self.state.auto_play == AutoPlay::Off || self.state.images.is_empty() {
            return;
        }
        let period = self.state.interval.period();
        let generation = self.timer.start(period);
        debug!(generation, ?period, "auto-play timer started");
    }
}

impl<R> Drop for GalleryController<R> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
