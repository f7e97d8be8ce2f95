//! # Context Grid Lattice
//!
//! Builds the context grid: the lattice of granularities over which a visual
//! calculation can be evaluated, derived from an [`AxisSpec`].
//!
//! ## Architecture
//!
//! ```text
//! AxisSpec (ROWS, COLUMNS)
//!     │
//!     ├──> Lattice Builder
//!     │      ├─ Root ("Nivel 0")
//!     │      ├─ Row chain     R_1 → R_2 → ... → R_R
//!     │      ├─ Column chain  C_1 → C_2 → ... → C_L
//!     │      └─ Grid          I_k_l, wired from the chains and its neighbours
//!     │
//!     ├──> LatticeGraph (petgraph)
//!     │      ├─ Nodes: Root, RowLevel, ColumnLevel, Intersection
//!     │      └─ Edges: "refines into" (coarser → finer)
//!     │
//!     └──> GraphView
//!            └─ ids, labels, categories and edges for an external renderer
//! ```
//!
//! Building is a pure function of the spec. A spec without rows and columns
//! produces no graph at all (`None`) rather than a lone root.
//!
//! ## Example
//!
//! ```rust
//! use context_grid_clause::parse;
//! use context_grid_lattice::build;
//!
//! let spec = parse("AXIS rows\nGROUP [Anio]\nAXIS columns\nGROUP [Categoria]");
//! let graph = build(&spec).expect("non-empty lattice");
//! assert_eq!(graph.node_count(), 4);
//! ```

mod builder;
mod error;
mod graph;
mod types;
mod view;

pub use builder::{build, LatticeBuilder};
pub use error::{LatticeError, Result};
pub use types::{EdgeKind, LatticeEdge, LatticeGraph, LatticeNode, NodeKind, ROOT_ID, ROOT_LABEL};
pub use view::{EdgeView, GraphView, NodeView};

pub use context_grid_clause::AxisSpec;
