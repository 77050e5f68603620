//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use canvas_pong::Settings;
    use canvas_pong::renderer::{RenderState, scene};
    use canvas_pong::sim::{
        GameState, PlayerCommand, Score, ScoreSink, TickInput, VerticalDir, tick,
    };

    /// DOM score counters
    struct Hud {
        success_el: Option<Element>,
        error_el: Option<Element>,
    }

    impl Hud {
        fn new(document: &web_sys::Document) -> Self {
            Self {
                success_el: document.get_element_by_id("success-count"),
                error_el: document.get_element_by_id("error-count"),
            }
        }
    }

    impl ScoreSink for Hud {
        fn score_changed(&mut self, score: Score) {
            if let Some(el) = &self.success_el {
                el.set_text_content(Some(&score.success.to_string()));
            }
            if let Some(el) = &self.error_el {
                el.set_text_content(Some(&score.errors.to_string()));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        input: TickInput,
        hud: Hud,
    }

    impl Game {
        /// One tick, then drop the commands it consumed
        fn update(&mut self) {
            tick(&mut self.state, &self.input, &mut self.hud);
            self.input.clear();
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = scene::build(
                &self.state.entities,
                &self.state.surface,
                self.settings.show_net,
            );

            match render_state.render(&vertices, &self.state.surface) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("Surface lost, reconfiguring");
                    render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Pointer y in field coordinates
        fn pointer_y(canvas: &HtmlCanvasElement, client_y: i32) -> f32 {
            let rect = canvas.get_bounding_client_rect();
            client_y as f32 - rect.top() as f32
        }
    }

    /// Field size in CSS pixels and backing-store size in physical pixels
    fn measure(canvas: &HtmlCanvasElement) -> ((f32, f32), (u32, u32)) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let mut css_w = canvas.client_width() as f64;
        let mut css_h = canvas.client_height() as f64;
        if css_w <= 0.0 || css_h <= 0.0 {
            // Not laid out by CSS, fall back to the width/height attributes
            css_w = canvas.width() as f64;
            css_h = canvas.height() as f64;
        }
        let px_w = (css_w * dpr) as u32;
        let px_h = (css_h * dpr) as u32;
        ((css_w as f32, css_h as f32), (px_w, px_h))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();

        let ((field_w, field_h), (px_w, px_h)) = measure(&canvas);
        canvas.set_width(px_w);
        canvas.set_height(px_h);

        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(field_w, field_h, seed).with_tuning(settings.tuning());
        log::info!(
            "Game initialized with seed: {} on {}x{}",
            seed,
            state.surface.width,
            state.surface.height
        );

        let mut hud = Hud::new(&document);
        hud.score_changed(state.score);

        let game = Rc::new(RefCell::new(Game {
            state,
            settings,
            render_state: None,
            input: TickInput::default(),
            hud,
        }));

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

        match RenderState::new(surface, &adapter, px_w, px_h).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Arrow keys set a held velocity intent
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let dir = match event.key().as_str() {
                    "ArrowUp" => VerticalDir::Up,
                    "ArrowDown" => VerticalDir::Down,
                    _ => return,
                };
                event.prevent_default();
                game.borrow_mut().input.push(PlayerCommand::Move(dir));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releasing either arrow clears it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "ArrowUp" | "ArrowDown") {
                    game.borrow_mut().input.push(PlayerCommand::Stop);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - absolute paddle placement
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let y = Game::pointer_y(&canvas_clone, event.client_y());
                game.borrow_mut().input.push(PlayerCommand::SetCenter(y));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start/move - same as mouse, without scrolling the page
        for event_name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let y = Game::pointer_y(&canvas_clone, touch.client_y());
                    game.borrow_mut().input.push(PlayerCommand::SetCenter(y));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let ((field_w, field_h), (px_w, px_h)) = measure(&canvas_clone);
            canvas_clone.set_width(px_w);
            canvas_clone.set_height(px_h);

            let mut g = game.borrow_mut();
            if let Some(render_state) = g.render_state.as_mut() {
                render_state.resize(px_w, px_h);
            }
            g.state.resize(field_w, field_h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Tick, draw, then schedule the next frame
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::Settings;
    use canvas_pong::sim::{GameState, Score, ScoreSink, TickInput, tick};

    /// Headless score sink
    struct LogSink;

    impl ScoreSink for LogSink {
        fn score_changed(&mut self, score: Score) {
            log::info!("Score: {} hits, {} misses", score.success, score.errors);
        }
    }

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    let ticks: u64 = std::env::var("PONG_TICKS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600);

    let mut state = GameState::new(900.0, 550.0, seed).with_tuning(settings.tuning());
    log::info!("Simulating {} ticks with seed: {}", ticks, seed);

    // Player paddle is left idle, the computer plays alone
    let input = TickInput::default();
    let mut sink = LogSink;
    for _ in 0..ticks {
        tick(&mut state, &input, &mut sink);
    }

    log::info!(
        "Finished after {} ticks: {} hits, {} misses",
        state.time_ticks,
        state.score.success,
        state.score.errors
    );
    match serde_json::to_string_pretty(&state.entities) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
