//! Leaf-level behaviors, injected into the tree through [`LeafNode`].
//!
//! A strategy is the unit of actual behavior: a condition check, a one-shot
//! trigger, a timed action. It knows nothing about the tree shape; the
//! composites above it only ever see the [`NodeStatus`] it reports.
//!
//! [`LeafNode`]: crate::LeafNode

use crate::{Context, NodeStatus};

pub trait Strategy {
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus;

    /// Return to the initial, restartable state. Called whenever the wrapping
    /// leaf is reset; strategies with external side effects undo them here.
    fn reset_to_default(&mut self) {}
}

/// Evaluates a predicate against the context every tick.
pub struct Condition {
    predicate: Box<dyn FnMut(&Context) -> bool>,
}

impl Condition {
    pub fn new(predicate: impl FnMut(&Context) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl Strategy for Condition {
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if (self.predicate)(ctx) {
            NodeStatus::Success
        } else {
            NodeStatus::Failure
        }
    }
}

/// Runs a callback and immediately succeeds. Useful for blackboard writes and
/// other single-step side effects between longer-running siblings.
pub struct Action {
    action: Box<dyn FnMut(&mut Context)>,
}

impl Action {
    pub fn new(action: impl FnMut(&mut Context) + 'static) -> Self {
        Self {
            action: Box::new(action),
        }
    }
}

impl Strategy for Action {
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        (self.action)(ctx);
        NodeStatus::Success
    }
}

/// Invokes its action exactly once, then reports `Running` forever.
///
/// Models a terminal, non-repeatable transition; only a reset re-arms it.
pub struct FireOnce {
    action: Box<dyn FnMut(&mut Context)>,
    has_fired: bool,
}

impl FireOnce {
    pub fn new(action: impl FnMut(&mut Context) + 'static) -> Self {
        Self {
            action: Box::new(action),
            has_fired: false,
        }
    }
}

impl Strategy for FireOnce {
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if !self.has_fired {
            (self.action)(ctx);
        }
        self.has_fired = true;
        NodeStatus::Running
    }

    fn reset_to_default(&mut self) {
        self.has_fired = false;
    }
}

/// Runs for a fixed amount of real time, with callbacks at both boundaries.
///
/// The start callback fires on the first tick after a reset; the completion
/// callback fires once accumulated delta time exceeds `max_time`, at which
/// point the timer re-arms itself and the strategy succeeds.
pub struct TimedAction {
    on_start: Box<dyn FnMut(&mut Context)>,
    on_complete: Box<dyn FnMut(&mut Context)>,
    max_time: f32,
    elapsed: f32,
}

impl TimedAction {
    pub fn new(
        max_time: f32,
        on_start: impl FnMut(&mut Context) + 'static,
        on_complete: impl FnMut(&mut Context) + 'static,
    ) -> Self {
        Self {
            on_start: Box::new(on_start),
            on_complete: Box::new(on_complete),
            max_time,
            elapsed: 0.0,
        }
    }
}

impl Strategy for TimedAction {
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if self.elapsed == 0.0 {
            (self.on_start)(ctx);
        }

        self.elapsed += ctx.delta();

        if self.elapsed > self.max_time {
            (self.on_complete)(ctx);
            self.reset_to_default();
            return NodeStatus::Success;
        }
        NodeStatus::Running
    }

    fn reset_to_default(&mut self) {
        self.elapsed = 0.0;
    }
}
