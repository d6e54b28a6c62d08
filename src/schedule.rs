//! Handler results: what the host must do after an event.
//!
//! Handlers never own timers or observers. They report back, and the host
//! (the wasm layer, or a test) carries it out.

/// Work to run later via [`Site::fire`](crate::Site::fire).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Move focus to the first project card after the modal closed.
    FocusFirstCard,
    /// Restore a button's label and enabled state, unless a newer click
    /// bumped its generation.
    RestoreButton { button: usize, generation: u64 },
}

impl Deferred {
    /// At most one pending timer per slot; a newer task replaces the older.
    pub fn slot(&self) -> TimerSlot {
        match self {
            Deferred::FocusFirstCard => TimerSlot::Focus,
            Deferred::RestoreButton { button, .. } => TimerSlot::Button(*button),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Focus,
    Button(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub delay_ms: u32,
    pub task: Deferred,
}

/// Result of dispatching one DOM event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub prevent_default: bool,
    pub schedule: Option<Schedule>,
}

impl Outcome {
    pub fn none() -> Self { Self::default() }
    pub fn prevented() -> Self { Self { prevent_default: true, schedule: None } }
    pub fn with_schedule(mut self, schedule: Option<Schedule>) -> Self { self.schedule = schedule; self }
}

/// Whether an observed element should stay observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Unobserve,
}
