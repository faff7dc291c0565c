//! Silly Fishing entry point
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

    use silly_fishing::consts::*;
    use silly_fishing::platform::InputState;
    use silly_fishing::renderer::RenderState;
    use silly_fishing::sim::{Game, GameEvent, tick};
    use silly_fishing::{Tuning, ui};

    /// Host-side state around the simulation
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        input: InputState,
        /// Last text written to the HUD element
        hud_text: String,
    }

    impl App {
        fn new(game: Game) -> Self {
            Self {
                game,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: InputState::new(),
                hud_text: String::new(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input.tick_input();
                tick(&mut self.game, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            for event in self.game.drain_events() {
                match event {
                    GameEvent::NewRecord { record } => log::info!("New session record: {}", record),
                    other => log::debug!("{:?}", other),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.game.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Write the debug text overlay when it changes
        fn update_hud(&mut self) {
            let text = ui::hud_text(&self.game.snapshot());
            if text == self.hud_text {
                return;
            }

            let hud = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("hud"));
            if let Some(el) = hud {
                el.set_text_content(Some(&text));
            }
            self.hud_text = text;
        }
    }

    /// Tuning from the `?tuning=<json>` query parameter, defaults otherwise
    fn load_tuning() -> Tuning {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
            return Tuning::default();
        };

        match params.get("tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Using tuning override");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Silly Fishing starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(WINDOW_TITLE);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = match Game::with_tuning(seed, load_tuning()) {
            Ok(game) => game,
            Err(e) => {
                log::warn!("Invalid tuning, using defaults: {}", e);
                Game::new(seed)
            }
        };
        let app = Rc::new(RefCell::new(App::new(game)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, app.clone());

        request_animation_frame(app);
        log::info!("Silly Fishing running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().input.key_down(&event.key()) {
                    // Space would otherwise scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().input.key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: press on the canvas, release anywhere
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.pointer_down(event.button());
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.pointer_up(event.button());
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: any finger down counts
        for name in ["touchstart", "touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().input.set_touches(event.touches().length());
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releases outside the page never arrive; drop held state on blur
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().input.clear();
                log::debug!("Input cleared (window blur)");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt);
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Silly Fishing (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let tuning = match std::env::var("SILLY_FISHING_TUNING") {
        Ok(json) => match silly_fishing::Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring SILLY_FISHING_TUNING: {}", e);
                silly_fishing::Tuning::default()
            }
        },
        Err(_) => silly_fishing::Tuning::default(),
    };

    match headless_demo(tuning) {
        Ok(record) => println!("Demo finished, record {}", record),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Play a few minutes of simulated time with a simple tracking autopilot
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(tuning: silly_fishing::Tuning) -> Result<u64, silly_fishing::TuningError> {
    use silly_fishing::consts::SIM_DT;
    use silly_fishing::sim::{Game, GameEvent, Stage, TickInput, tick};
    use silly_fishing::ui::hud_text;

    let mut game = Game::with_tuning(0x5111_F15E, tuning)?;
    let mut last_stage = game.stage;

    for _ in 0..(180.0 / SIM_DT) as u32 {
        let snapshot = game.snapshot();
        // Press (move up) while the target is above the band's centre
        let pressing = match snapshot.stage {
            Stage::Playing => {
                let target_mid = snapshot.target_position + snapshot.target_size / 2.0;
                let band_mid = snapshot.cursor_position + snapshot.cursor_size / 2.0;
                target_mid < band_mid
            }
            _ => true,
        };

        tick(&mut game, &TickInput { pressing }, SIM_DT);

        for event in game.drain_events() {
            if let GameEvent::GameOver { .. } = event {
                println!("{}", hud_text(&game.snapshot()));
            }
        }
        if game.stage != last_stage {
            log::debug!("Stage {:?} -> {:?}", last_stage, game.stage);
            last_stage = game.stage;
        }
    }

    Ok(game.record)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
