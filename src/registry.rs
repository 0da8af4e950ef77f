use crate::{
    loader::NodeDef,
    nodes::{
        BehaviorTree, PrioritySelectorNode, RandomSelectorNode, RandomWaitNode, RepeaterNode,
        SelectorNode, SequenceNode,
    },
    BehaviorNode,
};
use std::collections::HashMap;

/// Builds a node from its definition. Constructors are closures so that host
/// code can capture whatever environment its strategies need.
pub type Constructor = Box<dyn Fn(&NodeDef) -> Box<dyn BehaviorNode>>;

pub fn boxify<T, F>(cons: F) -> Constructor
where
    T: BehaviorNode + 'static,
    F: Fn(&NodeDef) -> T + 'static,
{
    Box::new(move |def| Box::new(cons(def)))
}

pub struct Registry {
    node_types: HashMap<String, Constructor>,
}

impl Default for Registry {
    fn default() -> Self {
        let mut ret = Self {
            node_types: HashMap::new(),
        };
        ret.register(
            "Sequence",
            boxify(|def: &NodeDef| SequenceNode::new(def.name()).with_priority(def.priority)),
        );
        ret.register(
            "Selector",
            boxify(|def: &NodeDef| SelectorNode::new(def.name()).with_priority(def.priority)),
        );
        ret.register(
            "PrioritySelector",
            boxify(|def: &NodeDef| {
                PrioritySelectorNode::new(def.name()).with_priority(def.priority)
            }),
        );
        ret.register(
            "RandomSelector",
            boxify(|def: &NodeDef| {
                RandomSelectorNode::new(def.name(), def.weights.clone())
                    .with_priority(def.priority)
            }),
        );
        ret.register(
            "Repeater",
            boxify(|def: &NodeDef| {
                RepeaterNode::new(def.name(), def.repetitions).with_priority(def.priority)
            }),
        );
        ret.register(
            "RandomWait",
            boxify(|def: &NodeDef| {
                RandomWaitNode::new(def.name(), def.min_wait, def.max_wait)
                    .with_priority(def.priority)
            }),
        );
        ret.register(
            "BehaviorTree",
            boxify(|def: &NodeDef| BehaviorTree::new(def.name(), def.looping)),
        );
        ret
    }
}

impl Registry {
    pub fn register(&mut self, type_name: impl ToString, constructor: Constructor) {
        self.node_types.insert(type_name.to_string(), constructor);
    }

    pub fn build(&self, def: &NodeDef) -> Option<Box<dyn BehaviorNode>> {
        self.node_types
            .get(&def.ty)
            .map(|constructor| constructor(def))
    }
}
