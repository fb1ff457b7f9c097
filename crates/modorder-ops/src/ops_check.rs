//! Operation: check the persisted load order without changing it.

use std::path::{Path, PathBuf};

use modorder_core::config::{FailOn, GlobalConfig};
use modorder_resolver::OrderEvaluation;
use modorder_util::errors::{ModorderError, ModorderResult};
use modorder_util::progress;

use crate::ops_inputs;

/// Options for `modorder check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    pub mods_file: Option<PathBuf>,
    pub order_file: Option<PathBuf>,
    /// Overrides `resolve.fail-on` from the global config.
    pub fail_on: Option<FailOn>,
}

/// Evaluate the order file against the mods' dependencies.
///
/// Returns an error when the findings reach the `fail-on` threshold;
/// otherwise the evaluation is returned after being printed.
pub fn check(
    cwd: &Path,
    opts: &CheckOptions,
    config: &GlobalConfig,
) -> ModorderResult<OrderEvaluation> {
    let paths = ops_inputs::locate(
        cwd,
        opts.mods_file.as_deref(),
        opts.order_file.as_deref(),
        &config.resolve,
    )?;
    let inputs = ops_inputs::load(paths)?;

    progress::status(
        "Checking",
        &format!(
            "{} mods against {}",
            inputs.packages.len(),
            inputs.paths.order_file.display()
        ),
    );
    let eval = modorder_resolver::evaluate(&inputs.packages, &inputs.order.order);

    for id in &eval.hard_issues {
        progress::status_error("error", &format!("'{id}' loads before a hard dependency"));
    }
    for id in &eval.soft_issues {
        progress::status_warn(
            "warning",
            &format!("'{id}' loads against a load-before/load-after hint"),
        );
    }
    crate::report_problems(&eval.diagnostics, &eval.cycles, &eval.cycled);

    if eval.is_clean() && eval.matches_recommendation() {
        println!("Load order is valid.");
    } else if eval.is_clean() {
        println!("Load order is valid; mods missing from it would be placed as follows:");
        print_order(&eval.sorted_ids);
    } else {
        println!("Recommended order:");
        print_order(&eval.sorted_ids);
    }

    let fail_on = opts.fail_on.unwrap_or(config.resolve.fail_on);
    if threshold_reached(&eval, fail_on) {
        return Err(ModorderError::Resolution {
            message: format!(
                "{} hard issues, {} soft issues, {} cycled mods",
                eval.hard_issues.len(),
                eval.soft_issues.len(),
                eval.cycled.len()
            ),
        }
        .into());
    }

    progress::status("Finished", "check complete");
    Ok(eval)
}

/// Whether `eval` has findings at or above `fail_on`.
pub fn threshold_reached(eval: &OrderEvaluation, fail_on: FailOn) -> bool {
    let hard = eval.has_hard_issues() || eval.diagnostics.has_blocking();
    match fail_on {
        FailOn::Never => false,
        FailOn::Hard => hard,
        FailOn::Soft => hard || eval.has_soft_issues(),
    }
}

fn print_order(ids: &[String]) {
    for (i, id) in ids.iter().enumerate() {
        println!("{:>3}. {id}", i + 1);
    }
}
