//! Pointer-driven drag/flick interaction
//!
//! The host forwards `move`/`press`/`release` events between ticks; only the
//! latest pointer position matters (no event queue). A press picks at most
//! one ball, which is then pulled toward the pointer by a mass-scaled spring
//! rather than snapped to it. Release keeps the accumulated velocity, so a
//! fast drag ends in a flick.

use glam::Vec2;

use crate::distance;
use crate::sim::state::SimState;

/// A pointer event in arena-local coordinates.
///
/// Coordinates are not bounds-checked; an off-arena press simply picks
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Vec2),
    Press(Vec2),
    Release,
}

/// Transient interaction state
///
/// `dragged` is an index into the ball set - a weak handle. Clearing it
/// never touches the ball itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Latest pointer position, if one was ever reported
    pub pos: Option<Vec2>,
    /// Position at the previous move/press
    pub prev_pos: Option<Vec2>,
    /// Index of the ball being dragged, if any
    pub dragged: Option<usize>,
}

impl Pointer {
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}

impl SimState {
    /// Apply one pointer event by direct mutation.
    ///
    /// Called from the host's event handler on the same execution context as
    /// `tick`; effects are visible to the next tick.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(at) => self.pointer_press(at),
            PointerEvent::Move(to) => self.pointer_move(to),
            PointerEvent::Release => self.pointer_release(),
        }
    }

    /// Select the first ball (in spawn order) whose pick circle contains the
    /// press point. The pick circle is the ball radius plus a fixed slack so
    /// small balls stay grabbable.
    fn pointer_press(&mut self, at: Vec2) {
        let tolerance = self.config.pick_tolerance;
        let picked = self
            .balls
            .iter()
            .position(|ball| distance(at, ball.pos) < ball.radius + tolerance);

        if let Some(index) = picked {
            log::debug!("drag start: ball {index} at {at}");
        }
        self.pointer.dragged = picked;
        self.pointer.pos = Some(at);
        self.pointer.prev_pos = Some(at);
    }

    /// Track the pointer; while dragging, feed the spring.
    ///
    /// The spring adds `(pointer - ball.pos) * spring_k / mass` to the ball's
    /// velocity, so heavier balls chase the pointer more slowly for the same
    /// displacement. Position is never overridden here.
    fn pointer_move(&mut self, to: Vec2) {
        if let Some(index) = self.pointer.dragged {
            let ball = &mut self.balls[index];
            let accel = (to - ball.pos) * self.config.spring_k;
            ball.vel += accel / ball.mass;
        }
        self.pointer.prev_pos = self.pointer.pos;
        self.pointer.pos = Some(to);
    }

    /// Drop the selection, keeping whatever velocity the spring built up.
    fn pointer_release(&mut self) {
        if let Some(index) = self.pointer.dragged.take() {
            log::debug!("drag end: ball {index} released at {:?}", self.pointer.pos);
        }
    }
}
