use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::TableRegistry;

/// Errors that can occur while writing a diagram.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to create or write the output.
    #[error("failed to write diagram: {0}")]
    Io(#[from] std::io::Error),
}

/// Options controlling diagram output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Layout directives written after `@startuml`, in order.
    pub directions: Vec<String>,
    /// Arrow used for next-hop edges.
    pub arrow: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            directions: vec![
                "left to right direction".to_string(),
                "top to bottom direction".to_string(),
            ],
            arrow: "-->".to_string(),
        }
    }
}

/// Node name of a table.
pub fn table_node(id: &str) -> String {
    format!("Table_{id}")
}

/// Node name of a rule.
pub fn rule_node(id: usize) -> String {
    format!("Rule_{id}")
}

/// Render a registry into PlantUML bytes.
pub fn render(
    registry: &TableRegistry,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    render_to(&mut out, registry, options)?;
    Ok(out)
}

/// Render a registry into any writer.
pub fn render_to<W: Write>(
    out: &mut W,
    registry: &TableRegistry,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    writeln!(out, "@startuml")?;
    for direction in &options.directions {
        writeln!(out, "{direction}")?;
    }

    for table in registry.tables() {
        writeln!(out, "rectangle {} {{", table_node(&table.id))?;
        for rule in &table.rules {
            let name = rule_node(rule.id);
            writeln!(out, "folder {name} [")?;
            writeln!(out, "name {name}")?;
            writeln!(out, "{}", rule.match_and_act)?;
            writeln!(out, "]")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    for rule in registry.rules() {
        if let Some(target) = rule.next_table_id() {
            writeln!(
                out,
                "{} {} {}",
                rule_node(rule.id),
                options.arrow,
                table_node(&target)
            )?;
        }
    }

    writeln!(out, "@enduml")?;
    Ok(())
}

/// Render a registry and write it to `path`, replacing any existing file.
pub fn render_file(
    registry: &TableRegistry,
    options: &RenderOptions,
    path: &Path,
) -> Result<(), RenderError> {
    let mut writer = BufWriter::new(File::create(path)?);
    render_to(&mut writer, registry, options)?;
    writer.flush()?;
    Ok(())
}
