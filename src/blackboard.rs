//! Keyed world-state store and its arbitration layer.
//!
//! The blackboard is the single place where sensors write what they observed
//! and where tree strategies read it back. Writes that should only happen once
//! per evaluation pass are queued as pending actions and drained by whoever
//! drives the pass, so sensor callbacks never mutate state mid-tick.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

/// A deferred side effect queued during an evaluation pass.
pub type PendingAction = Box<dyn FnOnce(&mut Blackboard)>;

/// A mapping of variable names to values of any type, plus a queue of pending
/// side effects.
///
/// The value is wrapped in an `Any` trait object, so it can be any type;
/// [`Blackboard::get`] downcasts back to the concrete type and reports a
/// missing key and a type mismatch the same way, as `None`.
#[derive(Default)]
pub struct Blackboard {
    values: HashMap<String, Box<dyn Any>>,
    pending: Vec<PendingAction>,
}

impl Blackboard {
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|val| val.downcast_ref())
    }

    pub fn set<T: 'static>(&mut self, key: impl Into<String>, val: T) {
        self.values.insert(key.into(), Box::new(val));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Queue a side effect to run after the current evaluation pass.
    pub fn queue_action(&mut self, action: impl FnOnce(&mut Blackboard) + 'static) {
        self.pending.push(Box::new(action));
    }

    /// Take every queued action, leaving the queue empty.
    pub fn drain_actions(&mut self) -> Vec<PendingAction> {
        std::mem::take(&mut self.pending)
    }
}

impl Debug for Blackboard {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        fmt.debug_struct("Blackboard")
            .field("keys", &keys)
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// A sensor-side participant in the arbitration pass.
///
/// Experts bid with an importance value; only the highest bidder of a pass
/// gets to write to the blackboard.
pub trait Expert {
    /// How urgently this expert wants to write, given the current state.
    /// A bid of zero or less never wins.
    fn importance(&self, blackboard: &Blackboard) -> i32;

    fn execute(&mut self, blackboard: &mut Blackboard);
}

/// Runs one arbitration pass per external step: the highest-bidding expert
/// writes, then the queued actions are handed back to the driver to invoke.
#[derive(Default)]
pub struct Arbiter {
    experts: Vec<Box<dyn Expert>>,
}

impl Arbiter {
    pub fn register(&mut self, expert: Box<dyn Expert>) {
        self.experts.push(expert);
    }

    /// Ask every expert for its bid, let the best one execute, and return the
    /// drained action queue. Ties go to the earliest registered expert.
    pub fn evaluate(&mut self, blackboard: &mut Blackboard) -> Vec<PendingAction> {
        let mut best: Option<usize> = None;
        let mut highest = 0;

        for (i, expert) in self.experts.iter().enumerate() {
            let bid = expert.importance(blackboard);
            if bid > highest {
                highest = bid;
                best = Some(i);
            }
        }

        if let Some(i) = best {
            self.experts[i].execute(blackboard);
        }

        blackboard.drain_actions()
    }
}
