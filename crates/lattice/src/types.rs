use context_grid_clause::AxisSpec;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the single root node
pub const ROOT_ID: &str = "Nivel 0";

/// Display label of the root node
pub const ROOT_LABEL: &str = "Nivel 0";

/// Kind of lattice node. Also the presentation category a renderer styles by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Coarsest granularity, no grouping at all
    Root,

    /// Row prefix `[r1] X ... X [ri]`
    RowLevel,

    /// Column prefix `[c1] X ... X [cl]`
    ColumnLevel,

    /// Combined row prefix and column prefix
    Intersection,
}

impl NodeKind {
    /// Presentation category: `root`, `row`, `column` or `intersection`
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::RowLevel => "row",
            NodeKind::ColumnLevel => "column",
            NodeKind::Intersection => "intersection",
        }
    }
}

/// Node in the context grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeNode {
    /// Stable id (`Nivel 0`, `R_i`, `C_l`, `I_k_l`)
    pub id: String,

    pub kind: NodeKind,

    /// Display label derived from the aggregated field path
    pub label: String,

    /// Row depth (1-indexed) for row levels and intersections
    pub row_depth: Option<usize>,

    /// Column depth (1-indexed) for column levels and intersections
    pub column_depth: Option<usize>,
}

impl LatticeNode {
    pub const fn category(&self) -> &'static str {
        self.kind.category()
    }

    /// Row and column fields this node groups by, sliced from the spec it was
    /// built from
    pub fn fields<'a>(&self, spec: &'a AxisSpec) -> (&'a [String], &'a [String]) {
        fn prefix(fields: &[String], depth: Option<usize>) -> &[String] {
            &fields[..depth.unwrap_or(0).min(fields.len())]
        }
        (
            prefix(spec.rows(), self.row_depth),
            prefix(spec.columns(), self.column_depth),
        )
    }
}

/// Which part of the construction produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Root → R_1 or R_i → R_{i+1}
    RowChain,

    /// Root → C_1 or C_l → C_{l+1}
    ColumnChain,

    /// Any edge into an intersection node
    Grid,
}

/// "Refines into" edge, from coarser to finer granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatticeEdge {
    pub kind: EdgeKind,
}

/// Immutable lattice produced by [`LatticeBuilder`](crate::LatticeBuilder)
#[derive(Debug, Clone)]
pub struct LatticeGraph {
    graph: DiGraph<LatticeNode, LatticeEdge>,

    /// Node id -> NodeIndex mapping for fast lookup
    id_index: HashMap<String, NodeIndex>,
}

impl LatticeGraph {
    pub(crate) fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
        }
    }

    pub(crate) fn add_node(&mut self, node: LatticeNode) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        idx
    }

    pub(crate) fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) {
        self.graph.add_edge(from, to, LatticeEdge { kind });
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    /// Underlying petgraph graph, for renderers that lay it out directly
    pub fn inner(&self) -> &DiGraph<LatticeNode, LatticeEdge> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
