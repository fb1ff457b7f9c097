//! Realistic mod lists exercising resolve and evaluate together.

use std::collections::BTreeSet;

use modorder_core::package::PackageDescriptor;
use modorder_resolver::{evaluate, resolve};

fn modpack() -> Vec<PackageDescriptor> {
    vec![
        PackageDescriptor::new("QualityOfLife")
            .with_version("2.3.1")
            .with_depends_on(["Harmony >= 2.0", "ModSettings"])
            .with_load_after(["UIOverhaul"]),
        PackageDescriptor::new("Harmony").with_version("2.2.2"),
        PackageDescriptor::new("ModSettings")
            .with_version("1.0")
            .with_depends_on(["harmony"]),
        PackageDescriptor::new("UIOverhaul")
            .with_version("0.9")
            .with_depends_on(["ModSettings<1.1"])
            .with_load_before(["Textures"]),
        PackageDescriptor::new("Textures"),
        PackageDescriptor::new("LegacyPatch").with_depends_on(["Harmony==1.2", "OldCore"]),
    ]
}

#[test]
fn modpack_resolves_in_dependency_order() {
    let result = resolve(&modpack(), &["textures", "legacypatch"]);
    assert_eq!(
        result.ids,
        vec![
            "legacypatch",
            "harmony",
            "modsettings",
            "uioverhaul",
            "textures",
            "qualityoflife"
        ]
    );
    assert!(result.cycled.is_empty());
    assert_eq!(
        result.diagnostics.messages(),
        vec![
            "Mod 'legacypatch' requires dependency 'harmony' version ==1.2, but found version 2.2.2.",
            "Mod 'legacypatch' has a missing hard dependency: 'oldcore'.",
        ]
    );
}

#[test]
fn user_order_with_problems_is_diagnosed() {
    let user_order = [
        "QualityOfLife",
        "harmony",
        "Textures",
        "uioverhaul",
        "modsettings",
        "NotInstalled",
        "harmony",
    ];
    let eval = evaluate(&modpack(), &user_order);

    assert_eq!(
        eval.enabled_order,
        vec!["qualityoflife", "harmony", "textures", "uioverhaul", "modsettings"]
    );
    let expected_hard: BTreeSet<String> = ["qualityoflife", "uioverhaul"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(eval.hard_issues, expected_hard);
    let expected_soft: BTreeSet<String> = ["qualityoflife", "textures"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(eval.soft_issues, expected_soft);
    assert!(eval.has_hard_issues());
    assert_eq!(eval.diagnostics.len(), 2);
}

#[test]
fn applying_the_recommendation_fixes_the_order() {
    let packages = modpack();
    let eval = evaluate(&packages, &["qualityoflife", "uioverhaul", "harmony"]);
    assert!(eval.has_hard_issues());

    let fixed = evaluate(&packages, &eval.sorted_ids);
    assert!(fixed.hard_issues.is_empty());
    assert!(fixed.soft_issues.is_empty());
    assert!(fixed.matches_recommendation());
}

#[test]
fn cycle_with_soft_conflict_still_orders_everything() {
    let packages = vec![
        PackageDescriptor::new("a").with_depends_on(["b"]),
        PackageDescriptor::new("b").with_depends_on(["c"]),
        PackageDescriptor::new("c").with_depends_on(["a"]),
        PackageDescriptor::new("d").with_depends_on(["e"]).with_load_before(["e"]),
        PackageDescriptor::new("e"),
    ];
    let result = resolve(&packages, &["c"]);

    let pos = |id: &str| result.position(id).unwrap();
    assert!(pos("e") < pos("d"));
    assert_eq!(result.ids.len(), 5);
    assert_eq!(result.cycles, vec![vec!["a", "b", "c"]]);
    // Residual cycle members follow priority: c first, then alphabetical.
    assert_eq!(&result.ids[2..], &["c", "a", "b"]);
}
