use raylib::prelude::*;
use gallery::ImageRef;
use gallery::constants::FADE_DURATION;

/// The image currently on screen.
pub struct Slide {
    pub image: ImageRef,
    texture: Texture2D,

    fade_timer: f32,
}

impl Slide {
    pub fn new(image: ImageRef, texture: Texture2D) -> Self {
        Self {
            image,
            texture,
            fade_timer: 0.0,
        }
    }

    pub fn shows(&self, image: &ImageRef) -> bool {
        &self.image == image
    }

    pub fn update(&mut self, dt: f32) {
        if self.fade_timer < FADE_DURATION {
            self.fade_timer = (self.fade_timer + dt).min(FADE_DURATION);
        }
    }

    fn alpha(&self) -> u8 {
        let t = self.fade_timer / FADE_DURATION;
        // easeOutCubic
        let t = 1.0 - (1.0 - t).powi(3);
        (t * 255.0) as u8
    }

    /// Draws the texture centered in `viewport`, scaled down to fit it.
    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: Rectangle) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = fit_scale(tex_width, tex_height, viewport.width, viewport.height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            viewport.x + (viewport.width - scaled_width) * 0.5,
            viewport.y + (viewport.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, self.alpha()),
        );
    }
}

/// Largest scale (at most 1.0) at which the texture fits the viewport.
pub fn fit_scale(tex_width: f32, tex_height: f32, max_width: f32, max_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 1.0;
    }
    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}
