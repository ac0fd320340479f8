//! WebGPU client for canvas Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API, driven by the
//! browser's animation frames. The simulation itself lives in `pong_core`.

pub mod camera;
pub mod error;
pub mod mesh;
pub mod renderer;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod simulation;

#[cfg(target_arch = "wasm32")]
pub use web::start;
#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dom::Dom;
    use crate::error::ClientError;
    use crate::renderer::Renderer;
    use crate::simulation::LocalGame;
    use pong_core::Config;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    thread_local! {
        pub(crate) static APP: RefCell<Option<LocalGame>> = const { RefCell::new(None) };
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Start the game on the canvas with the given element id
    #[wasm_bindgen]
    pub fn start(canvas_id: String) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            run(&canvas_id)
                .await
                .map(|_| JsValue::UNDEFINED)
                .map_err(JsValue::from)
        })
    }

    async fn run(canvas_id: &str) -> Result<(), ClientError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("Logger already installed");
        }

        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoWindow)?;
        let dom = Dom::lookup(&document, canvas_id)?;

        let config = Config::new();
        dom.canvas.set_width(config.width as u32);
        dom.canvas.set_height(config.height as u32);

        let renderer = Renderer::new(dom.canvas.clone(), config.width, config.height).await?;

        let canvas = dom.canvas.clone();
        let speed_range = dom.speed_range.clone();
        let seed = js_sys::Date::now() as u64;
        let game = LocalGame::new(config, seed, dom, renderer);
        APP.with(|app| *app.borrow_mut() = Some(game));

        crate::input::install_listeners(&canvas, &speed_range)?;
        start_loop(&window)?;

        log::info!("Pong running");
        Ok(())
    }

    fn start_loop(window: &web_sys::Window) -> Result<(), ClientError> {
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            APP.with(|app| {
                if let Some(game) = app.borrow_mut().as_mut() {
                    if let Err(e) = game.frame(now_ms) {
                        log::error!("Frame failed: {}", e);
                    }
                }
            });

            if let (Some(window), Some(callback)) = (web_sys::window(), f.borrow().as_ref()) {
                if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }));

        if let Some(callback) = g.borrow().as_ref() {
            window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use web::APP;
