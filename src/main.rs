//! Paddle Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use paddle_duel::platform::web::{CanvasSurface, IntervalTimer};
    use paddle_duel::{Game, Settings};

    type WebGame = Game<IntervalTimer, CanvasSurface>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Paddle Duel starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, giving up");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("table")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Missing <canvas id=\"table\">");
            return;
        };

        let settings = Settings::load();
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);

        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        // The interval callback only holds a weak reference; listeners keep the game alive
        let game = Rc::new_cyclic(|weak: &Weak<RefCell<WebGame>>| {
            let weak = weak.clone();
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(game) = weak.upgrade() {
                    game.borrow_mut().tick();
                }
            });
            RefCell::new(Game::new(settings, IntervalTimer::new(callback), surface))
        });

        game.borrow_mut().redraw();

        setup_keyboard(game.clone());
        setup_controls(&document, game);

        log::info!("Paddle Duel ready, press Start");
    }

    fn setup_keyboard(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_down(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(document: &Document, game: Rc<RefCell<WebGame>>) {
        let controls: [(&str, fn(&mut WebGame)); 3] = [
            ("start-btn", WebGame::start),
            ("pause-btn", WebGame::pause),
            ("restart-btn", WebGame::restart),
        ];

        for (id, action) in controls {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("No #{} button, control unavailable", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                action(&mut game.borrow_mut());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless match: nobody touches the keys, the ball decides
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_duel::platform::ManualTimer;
    use paddle_duel::renderer::RecordingSurface;
    use paddle_duel::sim::GameEvent;
    use paddle_duel::{Game, LoopState, Settings};

    env_logger::init();
    log::info!("Paddle Duel (native) starting...");
    log::info!("Native mode has no canvas - run with `trunk serve` for the playable web version");

    let realtime = std::env::args().any(|arg| arg == "--realtime");
    let mut game = Game::new(Settings::load(), ManualTimer::new(), RecordingSurface::new());
    let interval = game.settings().tick_interval();
    if let Ok(json) = game.settings().to_json() {
        log::debug!("Effective settings:\n{}", json);
    }
    game.start();

    let mut ticks = 0u64;
    let mut draws = 0usize;
    let mut hits = 0u32;
    while game.timer().is_active() {
        for event in game.tick() {
            if let GameEvent::PaddleHit { .. } = event {
                hits += 1;
            }
        }
        draws += game.surface_mut().take().len();
        ticks += 1;
        if realtime {
            std::thread::sleep(interval);
        }
    }

    if game.loop_state() == LoopState::Terminal {
        game.redraw();
        let texts: Vec<_> = game.surface().texts().collect();
        println!("{}", texts.join(" "));
    }

    let state = game.state();
    println!(
        "Final score {} - {} after {} ticks ({} paddle hits, {} draw calls)",
        state.left.score, state.right.score, ticks, hits, draws
    );
    match serde_json::to_string_pretty(state) {
        Ok(json) => log::debug!("Final state:\n{}", json),
        Err(e) => log::warn!("Couldn't serialize final state: {}", e),
    }
}
