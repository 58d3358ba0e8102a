//! Draw hand-off to the host rendering surface
//!
//! The simulation never paints anything itself. Once per frame, after
//! `tick`, the host passes its surface here and receives one filled-circle
//! request per ball, in spawn order.

use glam::Vec2;

use crate::sim::state::{Hsl, SimState};

/// Anything that can paint a filled circle.
pub trait CircleRenderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl);
}

/// Hand every ball's current position, radius, and color to the renderer.
pub fn render(state: &SimState, renderer: &mut impl CircleRenderer) {
    for ball in &state.balls {
        renderer.fill_circle(ball.pos, ball.radius, ball.color);
    }
}

/// Renderer that records draw requests; used by tests and the headless demo.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub circles: Vec<(Vec2, f32, Hsl)>,
}

impl CircleRenderer for RecordingRenderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl) {
        self.circles.push((center, radius, color));
    }
}
