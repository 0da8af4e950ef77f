//! # behavior-tree-engine
//!
//! A poll-based behavior tree execution engine for game agents.
//!
//!
//! ## Overview
//!
//! A behavior tree is an extension to finite state machines that makes
//! describing transitional behavior easier. The tree is a strict ownership
//! hierarchy of nodes; an external driver calls [`BehaviorNode::tick`] on the
//! root exactly once per simulation step, and every node answers with one of
//! three statuses:
//!
//! * [`NodeStatus::Success`] and [`NodeStatus::Failure`] mean the node
//!   finished this activation.
//! * [`NodeStatus::Running`] means "not finished, call me again next tick and
//!   preserve my state". It is the only suspension signal in the engine.
//!
//! Composite nodes ([`SequenceNode`], [`SelectorNode`],
//! [`PrioritySelectorNode`], [`RandomSelectorNode`], [`RepeaterNode`]) combine
//! child statuses into control flow without knowing anything about leaf
//! semantics. Leaf behavior is injected through the [`Strategy`] trait and
//! wrapped in a [`LeafNode`]. Cancellation is expressed purely through
//! [`BehaviorNode::reset`], which recursively returns a subtree to its
//! initial state.
//!
//!
//! ## How it looks like
//!
//! ```rust
//! use behavior_tree_engine::{
//!     BehaviorNode, BehaviorTree, Condition, Context, LeafNode, NodeStatus,
//!     PrioritySelectorNode, SequenceNode,
//! };
//!
//! let mut flee = SequenceNode::new("flee").with_priority(10);
//! flee.add_child(Box::new(LeafNode::new(
//!     "threat-spotted",
//!     Condition::new(|ctx: &Context| {
//!         ctx.blackboard
//!             .get::<bool>("threat_spotted")
//!             .copied()
//!             .unwrap_or(false)
//!     }),
//! )))
//! .unwrap();
//!
//! let mut logic = PrioritySelectorNode::new("logic");
//! logic.add_child(Box::new(flee)).unwrap();
//!
//! let mut tree = BehaviorTree::new("sentry", true);
//! tree.add_child(Box::new(logic)).unwrap();
//!
//! // The driver: once per frame, publish the frame delta and tick the root.
//! let mut ctx = Context::default();
//! ctx.blackboard.set("threat_spotted", true);
//! ctx.set_delta(1.0 / 60.0);
//! assert_eq!(tree.tick(&mut ctx), NodeStatus::Success);
//! ```
//!
//!
//! ## How to define your own behavior
//!
//! The [`Strategy`] trait is the extension point for leaf behavior. A
//! strategy must not assume it is ticked at a fixed rate; anything timed
//! reads the frame delta from the [`Context`] instead of counting ticks.
//!
//! ```rust
//! use behavior_tree_engine::{Context, NodeStatus, Strategy};
//!
//! struct Cooldown {
//!     duration: f32,
//!     remaining: f32,
//! }
//!
//! impl Strategy for Cooldown {
//!     fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
//!         self.remaining -= ctx.delta();
//!         if self.remaining <= 0.0 {
//!             NodeStatus::Success
//!         } else {
//!             NodeStatus::Running
//!         }
//!     }
//!
//!     fn reset_to_default(&mut self) {
//!         self.remaining = self.duration;
//!     }
//! }
//! ```
//!
//! Implementing [`BehaviorNode`] directly is also possible when a behavior
//! holds node-level state that no strategy should carry; [`RandomWaitNode`]
//! in this crate is written that way.
//!
//!
//! ## Loading a tree structure from a yaml file
//!
//! Trees can be described in a yaml document and instantiated at runtime.
//! Custom leaf types are registered on a [`Registry`] as constructor
//! closures, which lets them capture whatever environment their strategies
//! need; the built-in composites are pre-registered.
//!
//! ```rust
//! use behavior_tree_engine::{
//!     boxify, load_yaml, BehaviorNode, Condition, Context, LeafNode, NodeDef, Registry,
//! };
//!
//! let source = r#"
//! behavior_tree:
//!   main:
//!     type: Sequence
//!     children:
//!     - type: HasAmmo
//!     - type: RandomWait
//!       min_wait: 0.5
//!       max_wait: 2.0
//! "#;
//!
//! let mut registry = Registry::default();
//! registry.register(
//!     "HasAmmo",
//!     boxify(|def: &NodeDef| {
//!         LeafNode::new(def.name(), Condition::new(|_: &Context| true))
//!     }),
//! );
//!
//! let mut trees = load_yaml(source, &registry).unwrap();
//! let mut main = trees.remove("main").unwrap();
//! main.tick(&mut Context::default());
//! ```
//!
//!
//! ## Concurrency model
//!
//! The engine is single-threaded, cooperative and
//! poll-based: one driver, one `tick` per step, at most one root-to-leaf path
//! evaluated per tick. A multi-threaded host is responsible for serializing
//! all `tick`/`reset` calls on a given tree.

mod blackboard;
mod context;
pub mod error;
mod loader;
mod nodes;
mod registry;
mod strategy;

pub use crate::blackboard::{Arbiter, Blackboard, Expert, PendingAction};
pub use crate::context::Context;
pub use crate::error::{AddChildError, AddChildResult, LoadError};
pub use crate::loader::{load_yaml, NodeDef};
pub use crate::nodes::{
    BehaviorTree, LeafNode, PrioritySelectorNode, RandomSelectorNode, RandomWaitNode, RepeaterNode,
    SelectorNode, SequenceNode,
};
pub use crate::registry::{boxify, Constructor, Registry};
pub use crate::strategy::{Action, Condition, FireOnce, Strategy, TimedAction};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeStatus {
    Success,
    Failure,
    /// The node should keep running in the next tick
    Running,
}

/// The base contract every node in a tree satisfies.
///
/// A node owns its children exclusively; a tree is a strict ownership
/// hierarchy with no sharing and no cycles.
pub trait BehaviorNode {
    /// Identity, for diagnostics.
    fn name(&self) -> &str;

    /// Relative standing among siblings. The meaning is defined by the
    /// composite that reads it; higher is preferred.
    fn priority(&self) -> i32 {
        0
    }

    /// Advance this node by one external time step.
    fn tick(&mut self, ctx: &mut Context) -> NodeStatus;

    /// Return this node and every descendant to the initial, restartable
    /// state, discarding any `Running` progress. Must be idempotent.
    fn reset(&mut self);

    /// Append a child, transferring ownership. Childless nodes keep the
    /// default, which refuses.
    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        let _ = child;
        Err(AddChildError::TooManyChildren)
    }
}
