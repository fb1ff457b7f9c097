use std::collections::BTreeSet;

use modorder_core::package::PackageDescriptor;
use modorder_resolver::graph::{build, EdgeKind};
use modorder_resolver::{evaluate, resolve};

const NO_HINT: &[&str] = &[];

fn pkg(id: &str) -> PackageDescriptor {
    PackageDescriptor::new(id)
}

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// Small deterministic generator so the acyclic cases are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

/// Random acyclic mod set: mod `m<i>` may only depend on, or load after,
/// mods with a smaller index.
fn random_dag(seed: u64, size: usize) -> Vec<PackageDescriptor> {
    let mut rng = Lcg(seed);
    (0..size)
        .map(|i| {
            let mut p = pkg(&format!("M{i:02}"));
            for j in 0..i {
                match rng.below(6) {
                    0 => p.depends_on.push(format!("m{j:02}")),
                    1 => p.load_after.push(format!("m{j:02}")),
                    _ => {}
                }
            }
            p
        })
        .collect()
}

fn hard_edges(packages: &[PackageDescriptor]) -> Vec<(String, String)> {
    let built = build(packages);
    built
        .graph
        .edges()
        .filter(|e| e.kind == EdgeKind::Hard)
        .map(|e| (e.from.to_string(), e.to.to_string()))
        .collect()
}

#[test]
fn no_cycle_soundness() {
    for seed in 0..40 {
        let packages = random_dag(seed, 12);
        let result = resolve(&packages, NO_HINT);

        let unique: BTreeSet<&String> = result.ids.iter().collect();
        assert_eq!(result.ids.len(), packages.len(), "seed {seed}");
        assert_eq!(unique.len(), packages.len(), "seed {seed}");
        assert!(result.cycled.is_empty(), "seed {seed}");

        for (from, to) in hard_edges(&packages) {
            assert!(
                result.position(&from) < result.position(&to),
                "seed {seed}: {from} must load before {to}"
            );
        }
    }
}

#[test]
fn evaluate_agrees_with_resolve() {
    for seed in 0..40 {
        let packages = random_dag(seed, 10);
        let resolved = resolve(&packages, NO_HINT);
        let eval = evaluate(&packages, &resolved.ids);
        assert!(eval.hard_issues.is_empty(), "seed {seed}");
        assert!(eval.soft_issues.is_empty(), "seed {seed}");
        assert_eq!(eval.sorted_ids, resolved.ids, "seed {seed}");
    }
}

#[test]
fn resolve_is_idempotent() {
    for seed in 0..40 {
        let packages = random_dag(seed, 10);
        let hint: Vec<String> = random_dag(seed + 1000, 10)
            .into_iter()
            .rev()
            .map(|p| p.id)
            .collect();
        let first = resolve(&packages, &hint);
        let second = resolve(&packages, &first.ids);
        assert_eq!(first.ids, second.ids, "seed {seed}");
    }
}

#[test]
fn unrelated_mods_sort_case_insensitively() {
    let result = resolve(&[pkg("Zebra"), pkg("apple"), pkg("Mango")], NO_HINT);
    assert_eq!(result.ids, vec!["apple", "mango", "zebra"]);
}

#[test]
fn hard_cycle_is_contained() {
    let result = resolve(
        &[pkg("A").with_depends_on(["b"]), pkg("B").with_depends_on(["a"])],
        NO_HINT,
    );
    assert_eq!(result.ids.len(), 2);
    let ids: BTreeSet<String> = result.ids.iter().cloned().collect();
    assert_eq!(ids, set(&["a", "b"]));
    assert_eq!(result.cycled, set(&["a", "b"]));
    assert!(result.has_cycles());
}

#[test]
fn missing_dependency_is_reported() {
    let result = resolve(&[pkg("A").with_depends_on(["ghost"])], NO_HINT);
    assert_eq!(result.ids, vec!["a"]);
    assert!(result
        .diagnostics
        .messages()
        .iter()
        .any(|m| m.contains("'ghost'")));
}

#[test]
fn misplaced_dependent_is_detected() {
    let eval = evaluate(&[pkg("A"), pkg("B").with_depends_on(["a"])], &["b", "a"]);
    assert_eq!(eval.hard_issues, set(&["b"]));
}

#[test]
fn soft_hint_respected_when_acyclic() {
    let result = resolve(&[pkg("B"), pkg("A").with_load_before(["b"])], NO_HINT);
    assert_eq!(result.ids, vec!["a", "b"]);

    // Even against the prior order.
    let result = resolve(&[pkg("B"), pkg("A").with_load_before(["b"])], &["b", "a"]);
    assert_eq!(result.ids, vec!["a", "b"]);
}

#[test]
fn version_gate_blocks_edge() {
    let packages = [
        pkg("A").with_depends_on(["x>=2.0.0"]),
        pkg("X").with_version("1.0.0"),
    ];
    assert!(hard_edges(&packages).is_empty());

    let result = resolve(&packages, NO_HINT);
    assert_eq!(
        result.diagnostics.messages(),
        vec!["Mod 'a' requires dependency 'x' version >=2.0.0, but found version 1.0.0."]
    );
    // Without the edge, plain alphabetical order applies.
    assert_eq!(result.ids, vec!["a", "x"]);
}
