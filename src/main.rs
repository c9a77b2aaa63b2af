//! Spike Bounce entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use spike_bounce::driver::KeyAction;
    use spike_bounce::renderer::CanvasTarget;
    use spike_bounce::sim::{GameState, on_jump_requested};
    use spike_bounce::{Driver, GameConfig};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: Driver,
        target: CanvasTarget,
        last_time: f64,
        last_best: u32,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                self.driver.interval_ms()
            };
            self.last_time = time;

            if let Err(e) = self.driver.pump(&mut self.state, elapsed, &mut self.target) {
                log::warn!("Render error: {:?}", e);
            }

            if self.state.best_score > self.last_best {
                self.last_best = self.state.best_score;
                log::info!("New session best: {}", self.last_best);
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Spike Bounce starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = GameConfig::load();
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(config, seed);
        let driver = Driver::for_state(&state);
        let target = CanvasTarget::new(canvas.clone())?;

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            driver,
            target,
            last_time: 0.0,
            last_best: 0,
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Spike Bounce running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Mouse press - jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                on_jump_requested(&mut game.borrow_mut().state);
            });
            window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start - jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                on_jump_requested(&mut game.borrow_mut().state);
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(action) = KeyAction::from_key(&event.key()) else {
                    return;
                };
                if action.prevents_default() {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                match action {
                    KeyAction::Jump => on_jump_requested(&mut g.state),
                    KeyAction::ToggleIdle => {
                        g.driver.idle_mode = !g.driver.idle_mode;
                        log::info!("Idle mode: {}", g.driver.idle_mode);
                    }
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
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
fn main() {
    use spike_bounce::renderer::DrawList;
    use spike_bounce::{Driver, GameConfig, GameState};

    /// Headless demo length (one minute of game time)
    const DEMO_TICKS: u64 = 60 * 60;

    env_logger::init();
    log::info!("Spike Bounce (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let config = GameConfig::load();
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let mut state = GameState::new(config, seed);
    let mut driver = Driver::for_state(&state);
    driver.idle_mode = true;
    let mut frame = DrawList::default();

    log::info!("Autopilot run with seed {} for {} ticks", seed, DEMO_TICKS);

    let interval = driver.interval_ms();
    let mut bounces = 0u32;
    while state.time_ticks < DEMO_TICKS {
        let Ok(report) = driver.pump(&mut state, interval, &mut frame);
        bounces += report.bounces;
    }

    println!(
        "ticks: {}  bounces: {}  deaths: {}  best score: {}  current score: {}",
        state.time_ticks,
        bounces,
        state.deaths,
        state.best_score.max(state.score),
        state.score
    );
    log::info!("Last frame had {} draw calls", frame.calls.len());
}
