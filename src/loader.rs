//! Instantiating trees from yaml documents.
//!
//! A document holds a `behavior_tree` mapping of named tree definitions.
//! Node types are resolved through a [`Registry`], so a host can mix the
//! built-in composites with its own registered leaf constructors:
//!
//! ```yaml
//! behavior_tree:
//!   main:
//!     type: Selector
//!     children:
//!     - type: HasTarget
//!     - type: RandomWait
//!       min_wait: 1.0
//!       max_wait: 3.0
//! ```

use crate::{error::LoadError, BehaviorNode, Registry};
use serde::Deserialize;
use std::collections::HashMap;

/// One node of a tree definition. Fields that a node type does not use are
/// simply ignored by its constructor.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDef {
    #[serde(rename = "type")]
    pub ty: String,
    /// Diagnostic name; the type name doubles as one when omitted.
    pub name: Option<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub weights: Vec<f32>,
    #[serde(default = "default_repetitions")]
    pub repetitions: i32,
    #[serde(default)]
    pub min_wait: f32,
    #[serde(default)]
    pub max_wait: f32,
    #[serde(default)]
    pub looping: bool,
    #[serde(default)]
    pub children: Vec<NodeDef>,
}

fn default_repetitions() -> i32 {
    1
}

impl NodeDef {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.ty)
    }
}

#[derive(Deserialize)]
struct TreeFile {
    behavior_tree: HashMap<String, NodeDef>,
}

/// Parse a yaml document and instantiate every tree it defines.
pub fn load_yaml(
    yaml: &str,
    registry: &Registry,
) -> Result<HashMap<String, Box<dyn BehaviorNode>>, LoadError> {
    let file: TreeFile = serde_yaml::from_str(yaml)?;
    file.behavior_tree
        .iter()
        .map(|(tree_name, def)| Ok((tree_name.clone(), build_node(def, registry)?)))
        .collect()
}

fn build_node(def: &NodeDef, registry: &Registry) -> Result<Box<dyn BehaviorNode>, LoadError> {
    let mut node = registry
        .build(def)
        .ok_or_else(|| LoadError::UnknownNodeType(def.ty.clone()))?;

    for child_def in &def.children {
        let child = build_node(child_def, registry)?;
        node.add_child(child)
            .map_err(|e| LoadError::AddChild(e, def.name().to_owned()))?;
    }

    Ok(node)
}
