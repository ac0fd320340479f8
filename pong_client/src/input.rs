//! Pointer and speed control listeners
//!
//! Listeners only write the pending input; the animation frame reads it.

use crate::error::ClientError;
use crate::APP;
use pong_core::SpeedMultiplier;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlInputElement, MouseEvent};

pub fn install_listeners(
    canvas: &HtmlCanvasElement,
    speed_range: &HtmlInputElement,
) -> Result<(), ClientError> {
    let on_move = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        APP.with(|app| {
            if let Some(game) = app.borrow_mut().as_mut() {
                game.pointer_moved(event.client_y() as f64);
            }
        });
    });
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let range = speed_range.clone();
    let on_speed = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        match SpeedMultiplier::parse(&range.value()) {
            Ok(speed) => APP.with(|app| {
                if let Some(game) = app.borrow_mut().as_mut() {
                    game.set_speed(speed);
                }
            }),
            Err(e) => log::warn!("Ignoring speed change: {}", e),
        }
    });
    speed_range.add_event_listener_with_callback("input", on_speed.as_ref().unchecked_ref())?;
    on_speed.forget();

    Ok(())
}
