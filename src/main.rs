//! Love Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use love_runner::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use love_runner::platform::web::WebHost;
    use love_runner::platform::{Element, InputAction, action_for_click, action_for_key};
    use love_runner::{Game, GameError, Settings};

    /// Game instance plus frame-loop bookkeeping
    struct Runner {
        game: Game<Box<dyn KeyValueStore>, WebHost>,
        last_time: Option<f64>,
        /// A frame callback is pending
        looping: bool,
    }

    type Shared = Rc<RefCell<Runner>>;

    pub fn run() -> Result<(), GameError> {
        log::info!("Love Runner starting...");

        let settings = Settings::load();
        let host = WebHost::attach(&settings)?;
        let layout = host.measure_layout();

        let store: Box<dyn KeyValueStore> = match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Highscore will not persist: {}", e);
                Box::new(MemoryStore::new())
            }
        };

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(settings, layout, seed, store, host)?;
        game.start();
        log::info!("Game initialized with seed: {}", seed);

        let runner = Rc::new(RefCell::new(Runner {
            game,
            last_time: None,
            looping: true,
        }));

        setup_click(Element::JumpButton, runner.clone())?;
        setup_click(Element::RestartButton, runner.clone())?;
        setup_keyboard(runner.clone())?;

        request_animation_frame(runner);

        log::info!("Love Runner running!");
        Ok(())
    }

    /// Apply an input action, restarting the frame chain after a restart
    fn dispatch(runner: &Shared, action: InputAction) {
        let resume = {
            let mut r = runner.borrow_mut();
            let resume = r.game.handle(action);
            if resume && !r.looping {
                r.looping = true;
                r.last_time = None;
                true
            } else {
                false
            }
        };
        if resume {
            request_animation_frame(runner.clone());
        }
    }

    fn setup_click(element: Element, runner: Shared) -> Result<(), GameError> {
        let Some(action) = action_for_click(element) else {
            return Ok(());
        };
        let document = web_sys::window()
            .ok_or(GameError::NoWindow)?
            .document()
            .ok_or(GameError::NoDocument)?;
        let target = document
            .get_element_by_id(element.id())
            .ok_or(GameError::MissingElement(element.id()))?;

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            dispatch(&runner, action);
        });
        target
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Dom(GameError::describe(&e)))?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(runner: Shared) -> Result<(), GameError> {
        let document = web_sys::window()
            .ok_or(GameError::NoWindow)?
            .document()
            .ok_or(GameError::NoDocument)?;

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(action) = action_for_key(&event.code()) {
                if action.suppresses_default() {
                    event.prevent_default();
                }
                dispatch(&runner, action);
            }
        });
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Dom(GameError::describe(&e)))?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(runner: Shared) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(runner, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(runner: Shared, time: f64) {
        let keep_going = {
            let mut r = runner.borrow_mut();

            let elapsed = match r.last_time {
                Some(last) => time - last,
                None => 0.0,
            };
            r.last_time = Some(time);

            let running = r.game.frame(elapsed);
            r.looping = running;
            running
        };

        // Once the run is over the chain ends; restart starts a new one
        if keep_going {
            request_animation_frame(runner);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    if let Err(e) = wasm_game::run() {
        log::error!("Initialization aborted: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Love Runner (native) starting...");
    log::info!("Native mode plays a headless autopilot run - build for wasm32 to play in the browser");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use love_runner::Game;
    use love_runner::highscores::load_highscore;
    use love_runner::persistence::MemoryStore;
    use love_runner::platform::{HeadlessHost, InputAction};
    use love_runner::settings::Settings;
    use love_runner::sim::Layout;

    /// Simulated wall time for the demo run
    const DEMO_SECONDS: f64 = 180.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    pub fn run() {
        let settings = Settings::load();
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut game = match Game::new(settings, Layout::default(), seed, MemoryStore::new(), HeadlessHost::new()) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        game.start();
        game.handle(InputAction::ToggleAutopilot);

        let frames = (DEMO_SECONDS * 1000.0 / FRAME_MS) as usize;
        let mut played = 0;
        for _ in 0..frames {
            played += 1;
            if !game.frame(FRAME_MS) {
                break;
            }
        }

        let state = game.state();
        println!(
            "Seed {}: {} after {:.1}s, score {} (assisted, stored best stays {}), obstacle speed {}",
            seed,
            if state.is_game_over() { "game over" } else { "still running" },
            played as f64 * FRAME_MS / 1000.0,
            state.score(),
            load_highscore(game.store()),
            state.session.obstacle_speed,
        );
        println!(
            "Jumps: {}, celebrations: {}, secret revealed: {}",
            game.host().cues.iter().filter(|c| **c == love_runner::audio::Cue::Jump).count(),
            game.host().bursts.len(),
            game.host().secret_reveals > 0,
        );
    }
}
