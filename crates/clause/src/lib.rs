//! # Context Grid Clause
//!
//! Lenient parser for the axis clause: the small `AXIS` / `GROUP` text block that
//! declares how a visual calculation groups its rows and columns.
//!
//! ## Grammar
//!
//! ```text
//! AXIS rows
//!     GROUP [Anio]
//!     GROUP [Mes]
//! AXIS columns
//!     GROUP [Categoria]
//! ```
//!
//! - `AXIS <name>` moves the cursor to `<name>` (uppercased)
//! - `GROUP [<field>]` appends `<field>` to the axis under the cursor
//! - everything else is skipped, as are `GROUP` lines seen before any `AXIS`
//!
//! Parsing never fails. Malformed input yields a partial (possibly empty)
//! [`AxisSpec`]; [`parse_with_report`] additionally lists what was skipped.
//!
//! ## Example
//!
//! ```rust
//! use context_grid_clause::parse;
//!
//! let spec = parse("AXIS rows\n  GROUP [Anio]\nAXIS columns\n  GROUP [Categoria]");
//! assert_eq!(spec.rows(), ["Anio"]);
//! assert_eq!(spec.columns(), ["Categoria"]);
//! ```

mod parser;
mod types;

pub use parser::{parse, parse_with_report, ParseReport, SkipReason, SkippedLine};
pub use types::{Axis, AxisSpec};
