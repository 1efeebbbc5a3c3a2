use crate::model::TableRegistry;

/// Format a one-line summary of table, rule and edge counts.
pub fn format_summary(registry: &TableRegistry) -> String {
    let tables = registry.len();
    let pseudo_tables = registry.tables().filter(|table| table.is_pseudo()).count();
    let rules = registry.rule_count();
    let edges = registry
        .rules()
        .filter(|rule| rule.next_hop.is_some())
        .count();

    format!("tables={tables} rules={rules} edges={edges} pseudo_tables={pseudo_tables}")
}
