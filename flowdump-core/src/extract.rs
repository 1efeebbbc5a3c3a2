//! Field extraction for single flow-dump lines.
//!
//! Each function looks at one field in isolation and returns `None` when
//! the field is absent. Combining the results into a rule is left to
//! [`crate::parser`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::NextHop;

static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"table=([0-9]+)").expect("Invalid regex pattern"));
static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"priority=[0-9]+,?(.*)").expect("Invalid regex pattern"));
static RESUBMIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"resubmit\(,([0-9]+)\)").expect("Invalid regex pattern"));
static OUTPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"actions=([A-Z]+:?[0-9]*)").expect("Invalid regex pattern")
});

/// Table number from the first `table=N` field.
pub fn table_id(line: &str) -> Option<&str> {
    TABLE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Everything after the first `priority=N` field, minus one optional comma.
pub fn match_and_act(line: &str) -> Option<&str> {
    PRIORITY_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Target table of the first `resubmit(,N)` action.
pub fn resubmit_target(text: &str) -> Option<&str> {
    RESUBMIT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First upper-case `actions=NAME[:PORT]` action, e.g. `actions=OUTPUT:2`.
///
/// A bare colon is kept as an empty port, so `actions=OUTPUT:` names the
/// pseudo-table `OUTPUT_`. Lower-case actions (`actions=drop`,
/// `actions=output:1`) are not recognized.
pub fn output_action(text: &str) -> Option<NextHop> {
    let raw = OUTPUT_RE.captures(text)?.get(1)?.as_str();
    let (action, port) = match raw.split_once(':') {
        Some((action, port)) => (action, Some(port.to_string())),
        None => (raw, None),
    };
    Some(NextHop::Output {
        action: action.to_string(),
        port,
    })
}

/// Every next hop of a match-and-action text in evaluation order: the
/// output action first, then the resubmit target.
pub fn hops(text: &str) -> Vec<NextHop> {
    let mut hops = Vec::with_capacity(2);
    if let Some(hop) = output_action(text) {
        hops.push(hop);
    }
    if let Some(table) = resubmit_target(text) {
        hops.push(NextHop::Resubmit {
            table: table.to_string(),
        });
    }
    hops
}

/// The recorded next hop: the last one evaluated, so a resubmit target
/// wins over an output action.
pub fn next_hop(text: &str) -> Option<NextHop> {
    hops(text).pop()
}
