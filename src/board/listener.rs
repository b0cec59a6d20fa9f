//! Board lifecycle notifications.
//!
//! The board owns its listener and calls it synchronously from inside
//! each mutating operation.

use super::piece::Piece;

/// Hooks fired after board mutations.
pub trait BoardListener {
    fn after_step(&mut self, piece: Piece);
    fn after_jump(&mut self, piece: Piece);
    fn after_picked(&mut self, piece: Piece);
    fn after_reset(&mut self);
}

/// Listener that ignores every event. Used for detached copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoListener;

impl BoardListener for NoListener {
    fn after_step(&mut self, _piece: Piece) {}
    fn after_jump(&mut self, _piece: Piece) {}
    fn after_picked(&mut self, _piece: Piece) {}
    fn after_reset(&mut self) {}
}

/// A recorded board notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Step(Piece),
    Jump(Piece),
    Picked(Piece),
    Reset,
}

/// Listener that keeps every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<BoardEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded events, returning them.
    pub fn take(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }
}

impl BoardListener for EventLog {
    fn after_step(&mut self, piece: Piece) {
        self.events.push(BoardEvent::Step(piece));
    }

    fn after_jump(&mut self, piece: Piece) {
        self.events.push(BoardEvent::Jump(piece));
    }

    fn after_picked(&mut self, piece: Piece) {
        self.events.push(BoardEvent::Picked(piece));
    }

    fn after_reset(&mut self) {
        self.events.push(BoardEvent::Reset);
    }
}

impl<L: BoardListener + ?Sized> BoardListener for &mut L {
    fn after_step(&mut self, piece: Piece) {
        (**self).after_step(piece);
    }

    fn after_jump(&mut self, piece: Piece) {
        (**self).after_jump(piece);
    }

    fn after_picked(&mut self, piece: Piece) {
        (**self).after_picked(piece);
    }

    fn after_reset(&mut self) {
        (**self).after_reset();
    }
}
