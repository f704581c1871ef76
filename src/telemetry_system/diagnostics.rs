use tracing::warn;

/// Destination for free-text diagnostic lines emitted by the simulator.
pub trait DiagnosticSink {
    fn record(&mut self, line: &str);
}

/// Forwards every line as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, line: &str) {
        warn!(target: "cargo_drop_simulation", "{}", line);
    }
}

/// Keeps lines in memory, for callers that want to inspect them afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub log: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink { log: Vec::new() }
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, line: &str) {
        self.log.push(line.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, line: &str) {
        (**self).record(line);
    }
}
