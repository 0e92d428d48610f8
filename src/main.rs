//! Dungeon Crawl entry point
//!
//! In the browser: draws into the `#game` canvas every animation frame and
//! listens for arrow keys. Natively: walks a scripted route through the
//! dungeon on a software framebuffer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use dungeon_crawl::platform::CanvasSurface;
    use dungeon_crawl::sim::{Key, KeyEvent};
    use dungeon_crawl::{Game, Settings};

    /// Game instance plus the canvas it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }

        log::info!("Dungeon Crawl starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no #game canvas")?
            .dyn_into()?;

        // Fill the window; size is fixed from here on
        let width = window.inner_width()?.as_f64().unwrap_or(640.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(480.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Game::new(Settings::default()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas, ctx),
        }));

        log::info!("Canvas {}x{}", width, height);

        setup_input_handlers(&window, app.clone());
        request_animation_frame(app);

        log::info!("Dungeon Crawl running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                event.prevent_default();
                let event = if pressed {
                    KeyEvent::Pressed(key)
                } else {
                    KeyEvent::Released(key)
                };
                app.borrow_mut().game.handle_key(event);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, stopping frame loop");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut app = app.borrow_mut();
            let App { game, surface } = &mut *app;
            game.run_frame(surface);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;
    use std::process::ExitCode;

    use dungeon_crawl::renderer::Framebuffer;
    use dungeon_crawl::sim::{Key, KeyEvent};
    use dungeon_crawl::{Game, Settings};

    const WIDTH: u32 = 640;
    const HEIGHT: u32 = 480;

    /// Scripted tour: (key event, frames to run afterwards)
    const TOUR: &[(KeyEvent, u32)] = &[
        (KeyEvent::Pressed(Key::Up), 20),
        (KeyEvent::Released(Key::Up), 1),
        (KeyEvent::Pressed(Key::Left), 1),
        (KeyEvent::Pressed(Key::Left), 1),
        (KeyEvent::Pressed(Key::Up), 60),
        (KeyEvent::Released(Key::Up), 1),
        (KeyEvent::Pressed(Key::Right), 1),
        (KeyEvent::Pressed(Key::Right), 1),
        (KeyEvent::Pressed(Key::Right), 1),
        (KeyEvent::Pressed(Key::Right), 1),
        (KeyEvent::Pressed(Key::Down), 30),
        (KeyEvent::Released(Key::Down), 1),
    ];

    fn load_settings(path: Option<&Path>) -> Settings {
        let Some(path) = path else {
            return Settings::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Settings::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn run() -> ExitCode {
        let mut args = std::env::args_os().skip(1);
        let settings_path = args.next();
        let screenshot_path = args.next();

        let settings = load_settings(settings_path.as_deref().map(Path::new));
        let mut game = match Game::new(settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        };
        let mut fb = Framebuffer::new(WIDTH, HEIGHT);

        for &(event, frames) in TOUR {
            game.handle_key(event);
            let mut blocked = 0;
            for _ in 0..frames {
                let outcome = game.run_frame(&mut fb);
                if outcome.blocked() {
                    blocked += 1;
                }
            }
            let player = game.state.player;
            log::info!(
                "{:?} -> frame {}, at ({:.1}, {:.1}) facing {:.2} ({} blocked frames)",
                event,
                game.state.frame,
                player.pos.x,
                player.pos.y,
                player.angle,
                blocked
            );
        }

        match serde_json::to_string(&game.state.player) {
            Ok(pose) => log::info!("Final pose: {}", pose),
            Err(e) => log::warn!("Cannot encode final pose: {}", e),
        }

        if let Some(path) = screenshot_path {
            if let Err(e) = std::fs::write(&path, fb.to_ppm()) {
                log::error!("Cannot write {}: {}", Path::new(&path).display(), e);
                return ExitCode::FAILURE;
            }
            log::info!("Wrote final frame to {}", Path::new(&path).display());
        }

        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dungeon Crawl (native) starting...");
    native::run()
}
