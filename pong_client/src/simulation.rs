use crate::dom::Dom;
use crate::error::ClientError;
use crate::renderer::batch::batch_frame;
use crate::renderer::Renderer;
use pong_core::{input::surface_relative, Config, InputSnapshot, Simulation, SpeedMultiplier};

/// Everything the browser loop owns: simulation, pending input, page and GPU
pub struct LocalGame {
    pub sim: Simulation,
    pub input: InputSnapshot,
    pub dom: Dom,
    pub renderer: Renderer,
    last_time_ms: Option<f64>,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64, dom: Dom, renderer: Renderer) -> Self {
        let mut input = InputSnapshot::new(&config);
        input.set_speed(dom.read_speed());
        dom.show_speed(input.speed);

        Self {
            sim: Simulation::new(config, seed),
            input,
            dom,
            renderer,
            last_time_ms: None,
        }
    }

    /// Pointer moved over the canvas; coordinates are client (viewport) space
    pub fn pointer_moved(&mut self, client_y: f64) {
        let rect = self.dom.canvas.get_bounding_client_rect();
        let y = surface_relative(client_y as f32, rect.top() as f32);
        self.input.pointer_moved(y, &self.sim.config);
    }

    pub fn set_speed(&mut self, speed: SpeedMultiplier) {
        self.input.set_speed(speed);
        self.dom.show_speed(speed);
        log::info!("Speed set to {}", speed);
    }

    /// One animation frame: simulate elapsed time, update labels, draw
    pub fn frame(&mut self, now_ms: f64) -> Result<(), ClientError> {
        let dt = match self.last_time_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => pong_core::Params::FIXED_DT,
        };
        self.last_time_ms = Some(now_ms);

        self.sim.advance(dt, &self.input);
        if self.sim.events.any_score() {
            log::info!(
                "Score: player {} - AI {}",
                self.sim.state.score.player,
                self.sim.state.score.opponent
            );
        }

        self.dom.show_score(&self.sim.state.score);
        self.renderer.draw(&batch_frame(&self.sim.frame()))
    }
}
