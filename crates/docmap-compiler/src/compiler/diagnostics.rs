use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Error,
}

/// A non-fatal issue found while compiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub type_name: String,
    pub message: String,
}

/// Non-fatal issues collected during one build, in the order found. Each
/// entry is also emitted through `tracing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn error(&mut self, type_name: &str, message: String) {
        tracing::error!("{type_name}: {message}");
        self.push(Severity::Error, type_name, message);
    }

    pub(crate) fn debug(&mut self, type_name: &str, message: String) {
        tracing::debug!("{type_name}: {message}");
        self.push(Severity::Debug, type_name, message);
    }

    fn push(&mut self, severity: Severity, type_name: &str, message: String) {
        self.entries.push(Diagnostic {
            severity,
            type_name: type_name.to_string(),
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
