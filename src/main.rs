//! Canvas Pong entry point
//!
//! Browser: binds the session to the `#pong` canvas and drives it from
//! `requestAnimationFrame`. Native: runs a headless session for a fixed
//! number of frames and logs the final state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use canvas_pong::input::{PointerMove, SurfaceRect};
    use canvas_pong::render::CanvasSurface;
    use canvas_pong::{Config, Session, SetupError};

    const CANVAS_ID: &str = "pong";

    /// Game instance holding the session and where it draws
    struct Game {
        session: Session,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), SetupError> {
        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = window.document().ok_or(SetupError::NoWindow)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| SetupError::CanvasNotFound(CANVAS_ID.to_owned()))?;

        let surface = CanvasSurface::from_canvas(&canvas)?;
        let config = Config::with_surface(canvas.width() as f32, canvas.height() as f32);

        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(config, seed)?;
        session.start();

        log::info!(
            "Surface {}x{}, seed {}",
            config.surface_width,
            config.surface_height,
            seed
        );

        let game = Rc::new(RefCell::new(Game { session, surface }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - absolute position relative to the canvas
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let rect = SurfaceRect { top: rect.top() as f32 };
            let pointer = PointerMove { client_y: event.client_y() as f32 };
            game.borrow_mut().session.pointer_moved(pointer, rect);
        });
        if let Err(e) =
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach mousemove listener: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop halted");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            g.session.frame(&mut g.surface);
            g.session.is_running()
        };

        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game loop finished");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    if let Err(e) = wasm_game::run() {
        log::error!("Canvas Pong failed to start: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::Parser;

    use canvas_pong::render::RecordingSurface;
    use canvas_pong::{Config, Session};

    const SEED: u64 = 12345;

    #[derive(Parser, Debug)]
    #[command(about = "Run a headless Canvas Pong session and log the final state", version)]
    pub struct Args {
        /// JSON file overriding the default simulation constants
        pub config: Option<PathBuf>,
        /// Frames to simulate (600 is ten seconds at 60 Hz)
        #[arg(long, default_value_t = 600)]
        pub frames: u64,
    }

    fn load_config(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Config::from_json(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Run the session; returns the number of frames simulated
    pub fn run(args: &Args) -> Result<u64> {
        let config = load_config(args.config.as_deref())?;

        let mut session = Session::new(config, SEED)?;
        let mut surface = RecordingSurface::new();
        session.start();

        let mut ran = 0;
        while ran < args.frames {
            surface.clear();
            if session.frame(&mut surface).is_none() {
                break;
            }
            ran += 1;
        }
        session.stop();

        log::info!(
            "Ran {} frames, {} draw calls in the last one",
            ran,
            surface.commands.len()
        );
        log::info!("Final state: {}", serde_json::to_string(session.state())?);
        Ok(ran)
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    let args = headless::Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Canvas Pong (native) running headless - build for wasm32 to play");

    if let Err(e) = headless::run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
