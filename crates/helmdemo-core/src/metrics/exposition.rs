//! Prometheus text exposition (format 0.0.4), counters only.

use std::fmt::Write;

use super::registry::CounterSample;

/// Content type served alongside rendered metrics.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape HELP text (backslash and newline only).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Render samples in the order given. Empty help skips the `# HELP` line.
pub fn render(samples: &[CounterSample]) -> String {
    let mut out = String::new();
    for s in samples {
        if !s.help.is_empty() {
            let _ = writeln!(out, "# HELP {} {}", s.name, escape_help(&s.help));
        }
        let _ = writeln!(out, "# TYPE {} counter", s.name);
        let _ = writeln!(out, "{} {}", s.name, s.value);
    }
    out
}
