//! Just Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use just_jump::platform::viewport::{self, DisplaySize};
    use just_jump::platform::{AssetError, AssetManifest};
    use just_jump::renderer::CanvasRenderer;
    use just_jump::{GameConfig, SceneManager, TapOutcome};

    /// Game instance holding all state
    struct Game {
        manager: SceneManager,
        renderer: CanvasRenderer,
        canvas: HtmlCanvasElement,
        display: DisplaySize,
    }

    impl Game {
        /// One rendered frame: tick the active scene, resize, draw
        fn frame(&mut self) {
            if let Some(kind) = self.manager.frame() {
                log::info!("Frame ended in {:?}", kind);
            }
            self.display = viewport::fit_canvas(&self.canvas);
            self.renderer.render(self.manager.stage());
        }

        /// Pointer down at an offset inside the canvas (CSS pixels)
        fn tap(&mut self, offset_x: f64, offset_y: f64) {
            let point = viewport::to_logical(offset_x, offset_y, self.display);
            match self.manager.tap(point) {
                TapOutcome::OpenLink(url) => open_link(&url),
                TapOutcome::SceneChanged(kind) => log::debug!("Tap switched to {:?}", kind),
                TapOutcome::Jumped | TapOutcome::Ignored => {}
            }
        }
    }

    fn open_link(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Could not open share link: {:?}", e);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Just Jump starting...");

        // No fallback visuals: any asset failure stops here
        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
            return;
        }

        log::info!("Just Jump running!");
    }

    async fn start() -> Result<(), AssetError> {
        let window = web_sys::window().ok_or(AssetError::Environment("no window"))?;
        let document = window
            .document()
            .ok_or(AssetError::Environment("no document"))?;

        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el
                .dyn_into()
                .map_err(|_| AssetError::Environment("#canvas is not a canvas"))?,
            None => {
                let el = document
                    .create_element("canvas")
                    .map_err(|_| AssetError::Environment("cannot create canvas"))?;
                let body = document.body().ok_or(AssetError::Environment("no body"))?;
                let _ = body.append_child(&el);
                el.dyn_into()
                    .map_err(|_| AssetError::Environment("cannot create canvas"))?
            }
        };
        let style = canvas.style();
        let _ = style.set_property("position", "relative");
        let _ = style.set_property("display", "block");
        let _ = style.set_property("border", "2px dashed black");

        let assets = AssetManifest::default().load().await?;
        let config = GameConfig::load();
        let renderer = CanvasRenderer::new(&canvas, assets)?;
        let display = viewport::fit_canvas(&canvas);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            manager: SceneManager::new(seed, config),
            renderer,
            canvas: canvas.clone(),
            display,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse and touch both arrive as pointer events
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            game.borrow_mut()
                .tap(event.offset_x() as f64, event.offset_y() as f64);
        });
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
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

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
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
    env_logger::init();
    log::info!("Just Jump (native) starting...");
    log::info!("Native mode plays a headless session - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);
    let config = just_jump::GameConfig::load();
    let mut manager = just_jump::SceneManager::new(seed, config);

    let score = autoplay(&mut manager, 100_000);
    println!("Autoplay (seed {}) survived {}m", seed, score);
    match serde_json::to_string_pretty(manager.session()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Press start, then tap every frame until the session ends or the frame
/// budget runs out. Returns the score reached.
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(manager: &mut just_jump::SceneManager, max_frames: u32) -> u64 {
    use glam::Vec2;
    use just_jump::{SceneKind, ui};

    manager.tap(ui::START_BUTTON_POS + ui::BUTTON_SIZE / 2.0);
    for _ in 0..max_frames {
        manager.tap(Vec2::new(250.0, 375.0));
        if manager.frame() == Some(SceneKind::End) {
            break;
        }
    }
    manager.session().score
}
