use std::fmt;

/// Receives error reports from the scanner. Reporting never interrupts a scan.
pub trait DiagnosticSink {
    fn report(&mut self, line: usize, message: &str);
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Ordered record of every report made during one or more scans. Owned by the
/// driver and cleared explicitly between REPL lines.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.reported.is_empty()
    }

    pub fn count(&self) -> usize {
        self.reported.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.reported.iter()
    }

    pub fn clear(&mut self) {
        self.reported.clear();
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, line: usize, message: &str) {
        self.reported.push(Diagnostic {
            line,
            message: message.to_owned(),
        });
    }
}
