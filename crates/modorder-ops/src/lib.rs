pub mod ops_check;
pub mod ops_inputs;
pub mod ops_resolve;

use std::collections::BTreeSet;

use modorder_resolver::diagnostic::Diagnostics;
use modorder_util::progress;

/// Print resolver diagnostics, cycles and cycled ids as warning lines on stderr.
pub(crate) fn report_problems(
    diagnostics: &Diagnostics,
    cycles: &[Vec<String>],
    cycled: &BTreeSet<String>,
) {
    for d in diagnostics {
        progress::status_warn("warning", &d.to_string());
    }
    for cycle in cycles {
        progress::status_warn(
            "cycle",
            &format!("hard dependency cycle between {}", cycle.join(", ")),
        );
    }
    if !cycled.is_empty() {
        let ids: Vec<&str> = cycled.iter().map(String::as_str).collect();
        progress::status_warn(
            "cycle",
            &format!("placed by priority only: {}", ids.join(", ")),
        );
    }
}
