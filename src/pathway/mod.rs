pub mod assessment;
pub mod node;
pub mod resolver;

pub use assessment::*;
pub use node::NodeId;
pub use resolver::*;

use crate::error::InputError;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Styling state of a single node or edge on the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Active,
    Normal,
    Dimmed,
}

/// The set of pathway nodes lit by one evaluation.
///
/// An `ActiveSet` is produced by [`resolve`], consumed by the renderer and the
/// recommendation table, and then thrown away. It carries no identity between
/// evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    nodes: AHashSet<NodeId>,
}

impl ActiveSet {
    /// The set shown before any answer differentiates the pathway: only the
    /// two header boxes. Rendering this set dims nothing.
    pub fn initial() -> Self {
        Self::from_iter(NodeId::HEADERS)
    }

    /// Parses a list of identifiers such as `["header", "stop_antibiotics"]`.
    pub fn parse<'a, I>(ids: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<NodeId>)
            .collect()
    }

    pub fn insert(&mut self, id: NodeId) -> bool {
        self.nodes.insert(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    pub fn contains_any(&self, ids: &[NodeId]) -> bool {
        ids.iter().any(|id| self.contains(*id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True once the set holds anything beyond the two header nodes.
    pub fn is_differentiated(&self) -> bool {
        self.nodes.len() > NodeId::HEADERS.len()
    }

    /// Applies the chart's styling rule to one identifier.
    pub fn style_of(&self, id: NodeId) -> Style {
        if self.contains(id) {
            Style::Active
        } else if self.is_differentiated() {
            Style::Dimmed
        } else {
            Style::Normal
        }
    }

    /// Styling rule for a connector: lit only when both ends are on the path.
    pub fn edge_style(&self, from: NodeId, to: NodeId) -> Style {
        if self.contains(from) && self.contains(to) {
            Style::Active
        } else if self.is_differentiated() {
            Style::Dimmed
        } else {
            Style::Normal
        }
    }

    /// Members in chart reading order.
    pub fn sorted(&self) -> Vec<NodeId> {
        self.nodes.iter().copied().sorted().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }
}

impl FromIterator<NodeId> for ActiveSet {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<NodeId> for ActiveSet {
    fn extend<T: IntoIterator<Item = NodeId>>(&mut self, iter: T) {
        self.nodes.extend(iter);
    }
}

// Serialized sorted so reports are stable across runs.
impl Serialize for ActiveSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}
