use crate::{error::AddChildResult, BehaviorNode, Context, NodeStatus, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cmp::Reverse;

fn reset_children(children: &mut [Box<dyn BehaviorNode>]) {
    for child in children {
        child.reset();
    }
}

/// Wraps a single [`Strategy`] as a childless node.
pub struct LeafNode {
    name: String,
    priority: i32,
    strategy: Box<dyn Strategy>,
}

impl LeafNode {
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            strategy: Box::new(strategy),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for LeafNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        self.strategy.tick(ctx)
    }

    fn reset(&mut self) {
        self.strategy.reset_to_default();
    }
}

/// Runs its children in order; any failure aborts and resets the whole
/// sequence. Advances past at most one child per external tick.
pub struct SequenceNode {
    name: String,
    priority: i32,
    children: Vec<Box<dyn BehaviorNode>>,
    cursor: usize,
}

impl SequenceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            children: vec![],
            cursor: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for SequenceNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if self.cursor < self.children.len() {
            return match self.children[self.cursor].tick(ctx) {
                NodeStatus::Running => NodeStatus::Running,
                NodeStatus::Failure => {
                    self.reset();
                    NodeStatus::Failure
                }
                NodeStatus::Success => {
                    self.cursor += 1;
                    if self.cursor == self.children.len() {
                        self.reset();
                        NodeStatus::Success
                    } else {
                        NodeStatus::Running
                    }
                }
            };
        }

        self.reset();
        NodeStatus::Success
    }

    fn reset(&mut self) {
        self.cursor = 0;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// Tries its children in order; the first success wins and resets the
/// selector. A failing child only advances the cursor by one, so the next
/// candidate is not tried until the following tick.
pub struct SelectorNode {
    name: String,
    priority: i32,
    children: Vec<Box<dyn BehaviorNode>>,
    cursor: usize,
}

impl SelectorNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            children: vec![],
            cursor: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for SelectorNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if self.cursor < self.children.len() {
            return match self.children[self.cursor].tick(ctx) {
                NodeStatus::Running => NodeStatus::Running,
                NodeStatus::Success => {
                    self.reset();
                    NodeStatus::Success
                }
                NodeStatus::Failure => {
                    self.cursor += 1;
                    NodeStatus::Running
                }
            };
        }

        self.reset();
        NodeStatus::Failure
    }

    fn reset(&mut self) {
        self.cursor = 0;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// Scans its children in descending priority order from the top on every
/// tick, returning the first non-failure status.
///
/// The sorted order is cached and rebuilt only after a reset. A lower
/// priority child left `Running` is simply never ticked again once a higher
/// priority sibling takes over; whatever it was doing stays suspended until
/// the next reset.
pub struct PrioritySelectorNode {
    name: String,
    priority: i32,
    children: Vec<Box<dyn BehaviorNode>>,
    sorted: Option<Vec<usize>>,
}

impl PrioritySelectorNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            children: vec![],
            sorted: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for PrioritySelectorNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        let order = self.sorted.take().unwrap_or_else(|| {
            let mut order: Vec<usize> = (0..self.children.len()).collect();
            // Stable sort, so insertion order breaks priority ties.
            order.sort_by_key(|&i| Reverse(self.children[i].priority()));
            order
        });

        let mut result = NodeStatus::Failure;
        for &i in &order {
            match self.children[i].tick(ctx) {
                NodeStatus::Failure => continue,
                status => {
                    result = status;
                    break;
                }
            }
        }

        self.sorted = Some(order);
        result
    }

    fn reset(&mut self) {
        self.sorted = None;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// Picks one child by weighted random draw and sticks with it until it
/// finishes.
///
/// The weight table is fixed at construction and validated against the child
/// list on every tick; a mismatch degrades to `Failure` without ticking
/// anything.
pub struct RandomSelectorNode {
    name: String,
    priority: i32,
    children: Vec<Box<dyn BehaviorNode>>,
    weights: Vec<f32>,
    total_weight: f32,
    active_child: Option<usize>,
    rng: StdRng,
}

impl RandomSelectorNode {
    pub fn new(name: impl Into<String>, weights: Vec<f32>) -> Self {
        let total_weight = weights.iter().sum();
        Self {
            name: name.into(),
            priority: 0,
            children: vec![],
            weights,
            total_weight,
            active_child: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    fn weights_valid(&self) -> bool {
        self.weights.len() == self.children.len() && self.total_weight > 0.0
    }

    fn select_random_child(&mut self) -> Option<usize> {
        let draw = self.rng.gen::<f32>() * self.total_weight;
        let mut cumulative = 0.0;

        for (i, weight) in self.weights.iter().enumerate() {
            cumulative += weight;
            if draw < cumulative {
                return Some(i);
            }
        }

        None
    }
}

impl BehaviorNode for RandomSelectorNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if self.children.is_empty() {
            return NodeStatus::Failure;
        }

        if !self.weights_valid() {
            tracing::error!(
                node = %self.name,
                "invalid weights: the weight table must match the child count and sum to a positive total"
            );
            return NodeStatus::Failure;
        }

        if let Some(active) = self.active_child {
            let status = self.children[active].tick(ctx);
            if status != NodeStatus::Running {
                self.active_child = None;
            }
            return status;
        }

        let selected = match self.select_random_child() {
            Some(selected) => selected,
            None => {
                tracing::error!(node = %self.name, "random selection failed: check the weight configuration");
                return NodeStatus::Failure;
            }
        };

        self.active_child = Some(selected);
        self.children[selected].tick(ctx)
    }

    fn reset(&mut self) {
        self.active_child = None;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// Runs its single child to success a fixed number of times, or forever when
/// constructed with `-1`.
pub struct RepeaterNode {
    name: String,
    priority: i32,
    children: Vec<Box<dyn BehaviorNode>>,
    repetitions: i32,
    completed: i32,
}

impl RepeaterNode {
    pub fn new(name: impl Into<String>, repetitions: i32) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            children: vec![],
            repetitions,
            completed: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for RepeaterNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if self.children.len() != 1 {
            tracing::error!(node = %self.name, "repeater must have one and only one child");
            return NodeStatus::Failure;
        }

        if self.repetitions == 0 {
            return NodeStatus::Success;
        }

        let child = &mut self.children[0];
        match child.tick(ctx) {
            NodeStatus::Running => NodeStatus::Running,
            // The completed count survives a failure; a parent that wants to
            // retry from iteration zero resets this node explicitly.
            NodeStatus::Failure => NodeStatus::Failure,
            NodeStatus::Success => {
                self.completed += 1;

                if self.repetitions == -1 || self.completed < self.repetitions {
                    child.reset();
                    NodeStatus::Running
                } else {
                    NodeStatus::Success
                }
            }
        }
    }

    fn reset(&mut self) {
        self.completed = 0;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// The top-level node an external driver ticks once per step.
///
/// Advances through consecutive succeeding children within a single tick and
/// parks on any child that reports `Running` or `Failure`. With `looping`
/// set, completing the last child resets the whole tree so the next tick
/// starts over from the first.
pub struct BehaviorTree {
    name: String,
    children: Vec<Box<dyn BehaviorNode>>,
    cursor: usize,
    looping: bool,
}

impl BehaviorTree {
    pub fn new(name: impl Into<String>, looping: bool) -> Self {
        Self {
            name: name.into(),
            children: vec![],
            cursor: 0,
            looping,
        }
    }
}

impl BehaviorNode for BehaviorTree {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        while self.cursor < self.children.len() {
            let status = self.children[self.cursor].tick(ctx);
            if status != NodeStatus::Success {
                return status;
            }
            self.cursor += 1;
        }

        if self.looping {
            self.reset();
        }
        NodeStatus::Success
    }

    fn reset(&mut self) {
        self.cursor = 0;
        reset_children(&mut self.children);
    }

    fn add_child(&mut self, child: Box<dyn BehaviorNode>) -> AddChildResult {
        self.children.push(child);
        Ok(())
    }
}

/// Pauses for a duration drawn uniformly from `[min_wait, max_wait]` seconds.
///
/// A childless two-state machine: the first tick after idle arms the timer
/// and reports `Running`; subsequent ticks count real elapsed time down until
/// the node succeeds and returns to idle.
pub struct RandomWaitNode {
    name: String,
    priority: i32,
    min_wait: f32,
    max_wait: f32,
    remaining: f32,
    waiting: bool,
    rng: StdRng,
}

impl RandomWaitNode {
    /// The bounds are clamped so that `max_wait >= min_wait >= 0`.
    pub fn new(name: impl Into<String>, min_wait: f32, max_wait: f32) -> Self {
        let min_wait = min_wait.max(0.0);
        let max_wait = max_wait.max(min_wait);
        Self {
            name: name.into(),
            priority: 0,
            min_wait,
            max_wait,
            remaining: 0.0,
            waiting: false,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl BehaviorNode for RandomWaitNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn tick(&mut self, ctx: &mut Context) -> NodeStatus {
        if !self.waiting {
            self.remaining = self.rng.gen_range(self.min_wait..=self.max_wait);
            self.waiting = true;
            return NodeStatus::Running;
        }

        self.remaining -= ctx.delta();

        if self.remaining <= 0.0 {
            self.waiting = false;
            return NodeStatus::Success;
        }
        NodeStatus::Running
    }

    fn reset(&mut self) {
        self.waiting = false;
    }
}
