use std::process;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info, warn};

mod cli;
mod input;
mod slide;
mod texture_loader;
mod view;

use gallery::constants::*;
use gallery::logging::init_logging;
use gallery::{Catalog, Category, Config, Event, GalleryController, ImageRef};

use crate::cli::Args;
use crate::input::map_key;
use crate::slide::Slide;
use crate::texture_loader::load_texture;
use crate::view::{Layout, draw as draw_gallery};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // --- Configuration ---
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load_default()
            .context("failed to load default configuration")?
            .unwrap_or_default(),
    };
    args.apply(&mut config);

    // --- Image Lists ---
    let catalog = config.build_catalog().context("failed to build image lists")?;
    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }
    if catalog.is_empty() {
        warn!("no images found, pass --drawing/--figure/--real or a configuration file");
    }

    let settings = config.settings();
    info!(
        category = %settings.category,
        interval_minutes = settings.interval_minutes,
        autoplay = settings.auto_play,
        "starting gallery"
    );

    let mut controller = GalleryController::new(catalog, settings);
    run_window(&mut controller);
    controller.shutdown();
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for category in Category::ALL {
        println!("{} ({} images)", category.label(), catalog.len(category));
        for image in catalog.images(category) {
            println!("  {}", image);
        }
    }
}

fn run_window(controller: &mut GalleryController) {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Gallery")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // Declared after the window so textures are unloaded first
    let mut slide: Option<Slide> = None;
    let mut notice: Option<(String, f32)> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().max(0.0);

        // --- Input ---
        while let Some(key) = rl.get_key_pressed() {
            if let Some(event) = map_key(key) {
                controller.enqueue(event);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let layout = Layout::new(
                &controller.view(),
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
            );
            if let Some(event) = layout.hit(rl.get_mouse_position()) {
                controller.enqueue(event);
            }
        }
        controller.process_pending();

        // --- Update Logic ---
        controller.advance(Duration::from_secs_f32(dt));
        if let Some(slide) = slide.as_mut() {
            slide.update(dt);
        }

        if let Some(warning) = controller.take_warnings().pop() {
            notice = Some((warning.to_string(), NOTICE_DURATION));
        }
        if let Some((_, remaining)) = notice.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                notice = None;
            }
        }

        // --- Render ---
        let view = controller.view();
        let layout = Layout::new(&view, rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        {
            let mut d = rl.begin_drawing(&thread);
            draw_gallery(
                &mut d,
                &view,
                &layout,
                slide.as_ref(),
                notice.as_ref().map(|(text, _)| text.as_str()),
            );
        }

        // --- Load the image the controller is waiting for ---
        // Done after drawing so the loading overlay shows for at least a frame.
        match &view.current_image {
            Some(image) if view.loading => load_current(&mut rl, &thread, controller, &mut slide, image),
            None => slide = None,
            _ => {}
        }
    }
}

fn load_current(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    controller: &mut GalleryController,
    slide: &mut Option<Slide>,
    image: &ImageRef,
) {
    if slide.as_ref().is_some_and(|s| s.shows(image)) {
        controller.dispatch(Event::ImageLoaded);
        return;
    }

    match load_texture(rl, thread, image) {
        Ok(texture) => {
            *slide = Some(Slide::new(image.clone(), texture));
            controller.dispatch(Event::ImageLoaded);
        }
        Err(reason) => {
            *slide = None;
            controller.dispatch(Event::ImageError(reason));
        }
    }
}
