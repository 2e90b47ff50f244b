use docmap_compiler::{Compiled, DocumentMapping, Severity};
use serde::Serialize;

use super::OutputFormat;

/// Result of compiling one root during `check`.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub fields: usize,
    pub diagnostics: usize,
}

pub fn format_compiled(compiled: &Compiled, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(compiled).unwrap_or_default(),
        OutputFormat::Text => format_compiled_text(compiled),
    }
}

fn format_compiled_text(compiled: &Compiled) -> String {
    let mapping = &compiled.mapping;
    let mut out = String::new();

    out.push_str(&format!(
        "Document: {} (index: {})\n",
        mapping.mapped_type,
        mapping.index_name.as_deref().unwrap_or(&mapping.mapped_type)
    ));
    if let Some(boost) = mapping.boost {
        out.push_str(&format!("Boost:    {boost}\n"));
    }
    if let Some(id) = &mapping.document_id {
        out.push_str(&format!(
            "Id:       {} <- {} [{}]\n",
            id.name,
            id.member,
            id.bridge.name()
        ));
    }
    write_mapping(&mut out, mapping, 1);

    if !mapping.filter_definitions.is_empty() {
        out.push_str("\n--- Filters ---\n");
        for filter in &mapping.filter_definitions {
            let cache = if filter.cache { "" } else { " (no cache)" };
            out.push_str(&format!(
                "  {} = {}{cache}\n",
                filter.name, filter.implementation
            ));
        }
    }

    if !compiled.diagnostics.is_empty() {
        out.push_str("\n--- Diagnostics ---\n");
        for d in compiled.diagnostics.iter() {
            let level = match d.severity {
                Severity::Error => "error",
                Severity::Debug => "debug",
            };
            out.push_str(&format!("  [{level}] {}: {}\n", d.type_name, d.message));
        }
    }
    out
}

fn write_mapping(out: &mut String, mapping: &DocumentMapping, level: usize) {
    let indent = "  ".repeat(level);

    for field in &mapping.fields {
        out.push_str(&format!(
            "{indent}field {} <- {} [{}] store={} index={}",
            field.name,
            field.getter.member,
            field.bridge.name(),
            lower(field.store),
            lower(field.index)
        ));
        if let Some(boost) = field.boost {
            out.push_str(&format!(" boost={boost}"));
        }
        if let Some(analyzer) = &field.analyzer {
            out.push_str(&format!(" analyzer={}", analyzer.name()));
        }
        out.push('\n');
    }

    for bridge in &mapping.class_bridges {
        out.push_str(&format!(
            "{indent}class bridge {} [{}]",
            bridge.name.as_deref().unwrap_or("(unnamed)"),
            bridge.bridge.name()
        ));
        for (name, value) in &bridge.parameters {
            out.push_str(&format!(" {name}={value}"));
        }
        out.push('\n');
    }

    for contained in &mapping.contained_in {
        out.push_str(&format!("{indent}contained in <- {}\n", contained.getter.member));
    }

    for embedded in &mapping.embedded {
        let collection = if embedded.is_collection {
            " (collection)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{indent}embedded {} -> {}{collection}\n",
            embedded.prefix, embedded.mapping.mapped_type
        ));
        write_mapping(out, &embedded.mapping, level + 1);
    }
}

fn lower(value: impl std::fmt::Debug) -> String {
    format!("{value:?}").to_lowercase()
}

pub fn format_check(outcomes: &[CheckOutcome], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(outcomes).unwrap_or_default(),
        OutputFormat::Text => format_check_text(outcomes),
    }
}

fn format_check_text(outcomes: &[CheckOutcome]) -> String {
    if outcomes.is_empty() {
        return "No indexed types found.".to_string();
    }

    let mut out = String::new();
    for o in outcomes {
        match &o.error {
            None => out.push_str(&format!(
                "ok    {} ({} field(s), {} diagnostic(s))\n",
                o.root, o.fields, o.diagnostics
            )),
            Some(error) => out.push_str(&format!("FAIL  {}: {error}\n", o.root)),
        }
    }
    out
}
