//! Legacy display demo
//!
//! Opens the window through the legacy-style facade and runs a paced frame
//! loop until the window is closed. Pass a `.toml` or `.ron` config path as
//! the first argument to override the defaults, and PNG files after it to
//! use as window icons.
//!
//! Keys: F toggles fullscreen, V toggles vsync, Escape quits.

use legacy_display::prelude::*;

const KEY_ESCAPE: i32 = 256;
const KEY_F: i32 = 70;
const KEY_V: i32 = 86;

fn load_config(path: Option<&String>) -> DisplayConfig {
    let Some(path) = path else {
        return DisplayConfig::new("Legacy Display Demo").with_target_fps(60);
    };

    match DisplayConfig::load_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {path}: {e}, using defaults");
            DisplayConfig::new("Legacy Display Demo").with_target_fps(60)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let config = load_config(args.get(1));
    legacy_display::foundation::logging::init_with_level(&config.log_level);

    let mut display = WindowSession::init(&config, |resolve| {
        let clear = resolve("glClear");
        log::info!("GL entry points resolvable: glClear {:?}", clear);
    })?;

    if args.len() > 2 {
        match IconSet::from_png_files(&args[2..]) {
            Ok(icons) => display.set_icon(icons),
            Err(e) => log::warn!("Icons not applied: {}", e),
        }
    }

    display.create();
    display.set_display_mode(DisplayMode::new(1280, 720))?;

    let modes = display.available_display_modes();
    log::info!("{} display modes available, desktop is {}", modes.len(), display.desktop_display_mode());

    let fps = config.target_fps.unwrap_or(60);
    let mut frames: u64 = 0;

    while !display.is_close_requested() {
        display.update();

        for event in display.drain_events().collect::<Vec<_>>() {
            match event {
                DisplayEvent::Key(KeyEvent { key, action: KeyAction::Press, .. }) => match key {
                    KEY_ESCAPE => display.release_context(),
                    KEY_F => {
                        let fullscreen = !display.is_fullscreen();
                        display.set_fullscreen(fullscreen);
                    }
                    KEY_V => {
                        let vsync = !display.is_vsync_enabled();
                        display.set_vsync_enabled(vsync);
                        log::info!("Vsync {}", if vsync { "on" } else { "off" });
                    }
                    _ => {}
                },
                DisplayEvent::Focused(focused) => log::debug!("Focus {}", focused),
                _ => {}
            }
        }

        if display.was_resized() {
            display.set_title(&format!(
                "{} ({}x{})",
                config.title,
                display.width(),
                display.height()
            ));
        }

        while let Some(event) = display.mouse_mut().next_event() {
            if let MouseEvent::Motion { dx, dy, .. } = event {
                log::trace!("Mouse moved {dx:.1}, {dy:.1}");
            }
        }

        display.sync(fps);
        frames += 1;
    }

    log::info!("Exiting after {} frames", frames);
    display.destroy();
    Ok(())
}
