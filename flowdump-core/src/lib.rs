//! OpenFlow flow-dump parsing and PlantUML rendering.
//!
//! A flow dump (as printed by `ovs-ofctl dump-flows`) is read line by line
//! into a [`TableRegistry`]: every line with a `table=N` and a
//! `priority=N` field becomes a [`Rule`] of table `N`. Rules that
//! `resubmit(,M)` point at table `M`; rules with an upper-case
//! `actions=NAME[:PORT]` point at a pseudo-table `NAME_PORT`. The registry
//! is then drawn as one container per table with an edge per next hop.
//!
//! ```
//! use flowdump_core::{parse, render, RenderOptions};
//!
//! let registry = parse("table=0, priority=100,ip,actions=resubmit(,5)\n");
//! let diagram = String::from_utf8(render(&registry, &RenderOptions::default()).unwrap()).unwrap();
//! assert!(diagram.contains("Rule_0 --> Table_5"));
//! ```

pub mod extract;
pub mod format;
pub mod model;
pub mod parser;
pub mod render;

pub use format::{format_json, format_summary};
pub use model::{NextHop, Rule, Table, TableRegistry};
pub use parser::{
    parse, parse_file, parse_file_with_stats, parse_with_stats, ParseError, ParseOutcome,
    ParseStats,
};
pub use render::{render, render_file, render_to, RenderError, RenderOptions};
