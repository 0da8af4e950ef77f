use crate::Blackboard;
use std::fmt::{self, Debug, Formatter};

/// Per-tick evaluation context handed down the tree.
///
/// The driver publishes the elapsed seconds of the current step with
/// [`Context::set_delta`] before ticking the root; timer-bearing nodes read it
/// back with [`Context::delta`] so they track real elapsed time instead of
/// counting ticks.
#[derive(Default)]
pub struct Context {
    /// Keyed world state consulted and written by strategies.
    pub blackboard: Blackboard,
    delta: f32,
}

impl Context {
    pub fn new(blackboard: Blackboard) -> Self {
        Self {
            blackboard,
            delta: 0.0,
        }
    }

    /// Elapsed seconds since the previous tick, as published by the driver.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn set_delta(&mut self, seconds: f32) {
        self.delta = seconds;
    }

    pub fn take_blackboard(self) -> Blackboard {
        self.blackboard
    }
}

impl Debug for Context {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.debug_struct("Context")
            .field("blackboard", &self.blackboard)
            .field("delta", &self.delta)
            .finish()
    }
}
