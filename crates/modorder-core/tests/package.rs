use modorder_core::package::PackageDescriptor;

#[test]
fn new_normalizes_id() {
    let pkg = PackageDescriptor::new("  HarmonyLib ");
    assert_eq!(pkg.id, "harmonylib");
    assert!(pkg.version.is_none());
    assert!(pkg.depends_on.is_empty());
}

#[test]
fn builder_collects_constraints() {
    let pkg = PackageDescriptor::new("ui-overhaul")
        .with_version("1.4.0")
        .with_depends_on(["core>=1.0", "harmony"])
        .with_load_before(["late-patches"])
        .with_load_after(["early-fixes"]);
    assert_eq!(pkg.version.as_deref(), Some("1.4.0"));
    assert_eq!(pkg.depends_on, vec!["core>=1.0", "harmony"]);
    assert_eq!(pkg.load_before, vec!["late-patches"]);
    assert_eq!(pkg.load_after, vec!["early-fixes"]);
}

#[test]
fn key_normalizes_directly_assigned_id() {
    let mut pkg = PackageDescriptor::new("x");
    pkg.id = " MixedCase ".to_string();
    assert_eq!(pkg.key(), "mixedcase");
}

#[test]
fn display_includes_version() {
    assert_eq!(PackageDescriptor::new("a").with_version("2.0").to_string(), "a v2.0");
    assert_eq!(PackageDescriptor::new("a").to_string(), "a");
}

#[test]
fn deserializes_camel_case_fields() {
    let pkg: PackageDescriptor =
        serde_json::from_str(r#"{ "id": "a", "dependsOn": ["b"], "loadAfter": ["c"] }"#).unwrap();
    assert_eq!(pkg.depends_on, vec!["b"]);
    assert_eq!(pkg.load_after, vec!["c"]);
    assert!(pkg.load_before.is_empty());
}
