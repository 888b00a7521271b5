//! Platform Skirmish entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use platform_skirmish::platform::KeyState;
    use platform_skirmish::render::{CanvasSink, present};
    use platform_skirmish::sim::{TickOutcome, World, tick};
    use platform_skirmish::{Autopilot, FrameClock, Settings, consts::SIM_DT};

    /// Game instance holding all state
    struct Game {
        world: World,
        sink: CanvasSink,
        clock: FrameClock,
        keys: KeyState,
        settings: Settings,
        last_time: f64,
        /// Idle/demo mode - AI plays the game
        autopilot: Option<Autopilot>,
    }

    impl Game {
        /// Run simulation ticks for one animation frame. Returns false once
        /// the match is over.
        fn update(&mut self, dt: f32) -> bool {
            let mut running = true;
            for _ in 0..self.clock.ticks_for(dt) {
                // Sample input once per tick
                let input = match &mut self.autopilot {
                    Some(pilot) => pilot.next_input(&self.world),
                    None => self.keys.snapshot(),
                };
                let outcome = tick(&mut self.world, &input);
                present(&mut self.sink, &self.world, &outcome, self.settings.show_stats);
                if let TickOutcome::Finished(result) = outcome {
                    log::info!("{:?} after {} frames", result, self.world.frame_count);
                    running = false;
                    break;
                }
            }
            running
        }

        fn toggle_autopilot(&mut self) {
            self.autopilot = match self.autopilot {
                Some(_) => None,
                None => Some(Autopilot::new(self.settings.autopilot_seed)),
            };
            self.keys.clear();
            log::info!("Idle mode: {}", self.autopilot.is_some());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Platform Skirmish starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let sink = CanvasSink::from_document(&document, "canvas", "stats-hp-value", "stats-frame-value")
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let settings = Settings::default();
        let game = Rc::new(RefCell::new(Game {
            world: World::new(),
            sink,
            clock: FrameClock::from(&settings),
            keys: KeyState::new(),
            settings,
            last_time: 0.0,
            autopilot: None,
        }));

        setup_input_handlers(&document, game.clone())?;
        request_animation_frame(game);

        log::info!("Platform Skirmish running!");
        Ok(())
    }

    fn setup_input_handlers(document: &web_sys::Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let body = document.body().ok_or("no body")?;

        {
            let game = game.clone();
            let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if event.code() == "KeyI" {
                    g.toggle_autopilot();
                    return;
                }
                if g.keys.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            body.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
            on_down.forget();
        }

        {
            let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.code());
            });
            body.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
            on_up.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window for animation frame");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt)
        };

        // No frame is scheduled after the match ends
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Platform Skirmish (native) starting...");
    log::info!("Native mode runs a headless demo match - build for wasm32 to play");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => match platform_skirmish::Settings::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => platform_skirmish::Settings::default(),
    };
    if let Ok(mode) = std::env::var("SKIRMISH_TIMESTEP") {
        if let Err(e) = settings.override_timestep(&mode) {
            log::error!("SKIRMISH_TIMESTEP: {e}");
            std::process::exit(1);
        }
    }

    let snapshot = demo::run(&settings);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use platform_skirmish::render::{LogSink, present};
    use platform_skirmish::sim::{World, WorldSnapshot, tick};
    use platform_skirmish::{Autopilot, FrameClock, Settings, consts::SIM_DT};

    /// Play one match with the autopilot at a simulated 60 fps
    pub fn run(settings: &Settings) -> WorldSnapshot {
        let mut world = World::new();
        let mut pilot = Autopilot::new(settings.autopilot_seed);
        let mut clock = FrameClock::from(settings);
        let mut sink = LogSink::new(settings.log_every);

        log::info!(
            "Demo match: seed {:#x}, timestep {}",
            settings.autopilot_seed,
            settings.timestep.as_str()
        );

        'frames: while world.frame_count < settings.demo_tick_limit {
            for _ in 0..clock.ticks_for(SIM_DT) {
                let input = pilot.next_input(&world);
                let outcome = tick(&mut world, &input);
                present(&mut sink, &world, &outcome, settings.show_stats);
                if outcome.is_finished() {
                    break 'frames;
                }
            }
        }

        if sink.outcome.is_none() {
            log::warn!(
                "Demo stopped undecided after {} frames (hp {}, {} enemies left)",
                world.frame_count,
                world.character.display_hp(),
                world.enemies.len()
            );
        }
        world.snapshot()
    }
}
