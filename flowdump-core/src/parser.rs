use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::extract;
use crate::model::{Rule, TableRegistry};

/// Errors that can occur while reading a flow dump.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file.
    #[error("failed to read flow dump: {0}")]
    Io(#[from] std::io::Error),
}

/// Line counts gathered while parsing a dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: usize,
    pub blank: usize,
    pub rules: usize,
    /// 1-based line numbers of lines missing `table=` or `priority=`.
    pub skipped: Vec<usize>,
}

/// A parsed registry together with its [`ParseStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub registry: TableRegistry,
    pub stats: ParseStats,
}

/// Parse flow-dump text into a [`TableRegistry`].
///
/// Lines without a `table=N` or `priority=N` field are skipped and do not
/// consume a rule id.
pub fn parse(input: &str) -> TableRegistry {
    parse_with_stats(input).registry
}

/// Parse flow-dump text, keeping per-line statistics.
pub fn parse_with_stats(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut next_id = 0;

    for (index, line) in input.lines().enumerate() {
        outcome.stats.lines += 1;
        let line = line.trim();
        if line.is_empty() {
            outcome.stats.blank += 1;
            continue;
        }

        match parse_line(line, next_id) {
            Some(rule) => {
                outcome.registry.insert_rule(rule);
                next_id += 1;
            }
            None => {
                debug!(line = index + 1, "skipping line without table/priority field");
                outcome.stats.skipped.push(index + 1);
            }
        }
    }

    outcome.stats.rules = next_id;
    info!(
        rules = outcome.stats.rules,
        tables = outcome.registry.len(),
        skipped = outcome.stats.skipped.len(),
        "parsed flow dump"
    );
    outcome
}

/// Build a rule from one trimmed, non-empty line.
///
/// Returns `None` when either required field is missing.
pub fn parse_line(line: &str, id: usize) -> Option<Rule> {
    let table_id = extract::table_id(line)?;
    let match_and_act = extract::match_and_act(line)?;

    let hops = extract::hops(match_and_act);
    Some(Rule {
        id,
        table_id: table_id.to_string(),
        match_and_act: match_and_act.to_string(),
        next_hop: hops.last().cloned(),
        hops,
        raw: line.to_string(),
    })
}

/// Parse a flow-dump file into a [`TableRegistry`].
pub fn parse_file(path: &Path) -> Result<TableRegistry, ParseError> {
    Ok(parse_file_with_stats(path)?.registry)
}

/// Parse a flow-dump file, keeping per-line statistics.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the
/// read, so only the lines they damage can end up skipped.
pub fn parse_file_with_stats(path: &Path) -> Result<ParseOutcome, ParseError> {
    let bytes = fs::read(path)?;
    Ok(parse_with_stats(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::parse_line;

    #[test]
    fn parse_line_keeps_raw_text_and_id() {
        let rule = parse_line("table=2, priority=10,arp,actions=NORMAL", 4).expect("rule");
        assert_eq!(rule.id, 4);
        assert_eq!(rule.table_id, "2");
        assert_eq!(rule.match_and_act, "arp,actions=NORMAL");
        assert_eq!(rule.raw, "table=2, priority=10,arp,actions=NORMAL");
        assert_eq!(rule.next_table_id().as_deref(), Some("NORMAL"));
    }

    #[test]
    fn parse_line_requires_both_fields() {
        assert!(parse_line("priority=10,actions=drop", 0).is_none());
        assert!(parse_line("table=1, actions=drop", 0).is_none());
    }
}
