use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Where a rule sends packets after it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextHop {
    /// `resubmit(,N)`: evaluation continues in table `N`.
    Resubmit { table: String },
    /// `actions=NAME[:PORT]`: terminal action, drawn as a pseudo-table.
    Output { action: String, port: Option<String> },
}

impl NextHop {
    /// Registry key of the table this hop points at.
    ///
    /// Output actions become pseudo-tables with `:` replaced by `_`, so
    /// `OUTPUT:2` maps to `OUTPUT_2`, `OUTPUT:` to `OUTPUT_` and `LOCAL`
    /// stays `LOCAL`.
    pub fn table_id(&self) -> String {
        match self {
            NextHop::Resubmit { table } => table.clone(),
            NextHop::Output { action, port: Some(port) } => format!("{action}_{port}"),
            NextHop::Output { action, port: None } => action.clone(),
        }
    }
}

impl Display for NextHop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NextHop::Resubmit { table } => write!(f, "resubmit(,{table})"),
            NextHop::Output { action, port: Some(port) } => write!(f, "{action}:{port}"),
            NextHop::Output { action, port: None } => write!(f, "{action}"),
        }
    }
}

/// A single flow-table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Sequence number among accepted lines, starting at 0.
    pub id: usize,
    /// Owning table, taken from the line's `table=N` field.
    pub table_id: String,
    /// Text following the `priority=N,` field.
    pub match_and_act: String,
    /// Recorded forwarding target; a resubmit wins over an output action.
    pub next_hop: Option<NextHop>,
    /// Every recognized target in evaluation order. Each one has a table.
    pub hops: Vec<NextHop>,
    /// The trimmed source line.
    pub raw: String,
}

impl Rule {
    /// Registry key of the next-hop table, if any.
    pub fn next_table_id(&self) -> Option<String> {
        self.next_hop.as_ref().map(NextHop::table_id)
    }
}

/// A named bucket of rules in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub id: String,
    pub rules: Vec<Rule>,
}

impl Table {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rules: Vec::new(),
        }
    }

    /// True for synthesized output tables such as `OUTPUT_2`.
    pub fn is_pseudo(&self) -> bool {
        self.id.is_empty() || !self.id.bytes().all(|b| b.is_ascii_digit())
    }
}

/// All tables of a dump keyed by table id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableRegistry {
    tables: BTreeMap<String, Table>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table for `id`, creating an empty one on first reference.
    pub fn ensure(&mut self, id: &str) -> &mut Table {
        self.tables
            .entry(id.to_string())
            .or_insert_with(|| Table::new(id))
    }

    /// Append a rule to its owning table and create every table it
    /// forwards to.
    pub fn insert_rule(&mut self, rule: Rule) {
        for hop in &rule.hops {
            self.ensure(&hop.table_id());
        }
        if let Some(target) = rule.next_table_id() {
            self.ensure(&target);
        }
        self.ensure(&rule.table_id).rules.push(rule);
    }

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// All rules across every table, ordered by table key then file order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.tables.values().flat_map(|table| table.rules.iter())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn rule_count(&self) -> usize {
        self.tables.values().map(|table| table.rules.len()).sum()
    }
}
