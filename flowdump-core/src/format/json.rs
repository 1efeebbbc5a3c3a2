use crate::model::TableRegistry;

/// Format a registry as JSON, tables keyed by id.
pub fn format_json(registry: &TableRegistry) -> String {
    serde_json::to_string_pretty(registry).unwrap_or_else(|_| "{}".to_string())
}
