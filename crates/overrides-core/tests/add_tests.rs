//! Override creation and first-run setup tests

use overrides_core::scaffold::{APPLY_BUILD_SCRIPT, APPLY_START_SCRIPT};
use overrides_core::{AddOutcome, Error, add_override};
use overrides_fs::ProjectLayout;
use overrides_test_utils::{OVERRIDE_STORE, TestProject};
use pretty_assertions::assert_eq;
use serde_json::json;

fn layout(project: &TestProject) -> ProjectLayout {
    ProjectLayout::new(project.root())
}

// =============================================================================
// Existing store
// =============================================================================

#[test]
fn test_add_appends_record_with_empty_manifest() {
    let project = TestProject::new().with_store(&json!({
        "prod": {"description": "Prod config", "manifest": {"title": "p"}}
    }));

    let outcome = add_override(&layout(&project), "dev", "Dev config").unwrap();

    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(
        project.read_json(OVERRIDE_STORE),
        json!({
            "prod": {"description": "Prod config", "manifest": {"title": "p"}},
            "dev": {"description": "Dev config", "manifest": {}}
        })
    );
}

#[test]
fn test_add_preserves_record_order() {
    let project = TestProject::new().with_store(&json!({
        "zeta": {"description": "z", "manifest": {}},
        "alpha": {"description": "a", "manifest": {}}
    }));

    add_override(&layout(&project), "mid", "m").unwrap();

    let content = project.read_file(OVERRIDE_STORE);
    let zeta = content.find("\"zeta\"").unwrap();
    let alpha = content.find("\"alpha\"").unwrap();
    let mid = content.find("\"mid\"").unwrap();
    assert!(zeta < alpha && alpha < mid, "order changed:\n{content}");
}

#[test]
fn test_add_duplicate_leaves_store_unmodified() {
    let project = TestProject::new().with_store(&json!({
        "prod": {"description": "Prod config", "manifest": {"title": "p"}}
    }));
    let before = project.read_file(OVERRIDE_STORE);

    let err = add_override(&layout(&project), "prod", "Other").unwrap_err();

    assert!(matches!(err, Error::DuplicateIdentifier { ref id } if id == "prod"));
    assert_eq!(project.read_file(OVERRIDE_STORE), before);
}

#[test]
fn test_add_trims_identifier() {
    let project = TestProject::new().with_store(&json!({}));

    add_override(&layout(&project), "  qa  ", "QA").unwrap();

    assert!(project.read_json(OVERRIDE_STORE).get("qa").is_some());
}

#[test]
fn test_add_empty_identifier_rejected_before_io() {
    let project = TestProject::new();

    let err = add_override(&layout(&project), "  ", "desc").unwrap_err();

    assert!(matches!(err, Error::InvalidIdentifier { .. }));
    project.assert_file_not_exists(OVERRIDE_STORE);
}

#[test]
fn test_add_malformed_store_is_not_overwritten() {
    let project = TestProject::new();
    project.write_file(OVERRIDE_STORE, "not json");

    let err = add_override(&layout(&project), "prod", "Prod").unwrap_err();

    assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
    assert_eq!(project.read_file(OVERRIDE_STORE), "not json");
}

// =============================================================================
// First-run setup
// =============================================================================

#[test]
fn test_first_add_scaffolds_store() {
    let project = TestProject::new();

    let outcome = add_override(&layout(&project), "prod", "Prod config").unwrap();

    let AddOutcome::Scaffolded(report) = outcome else {
        panic!("Expected Scaffolded outcome");
    };
    assert_eq!(report.store.to_native(), project.root().join(OVERRIDE_STORE));
    assert!(report.scripts_added.is_empty());
    assert!(!report.proxy_patched);
    assert_eq!(
        project.read_json(OVERRIDE_STORE),
        json!({"prod": {"description": "Prod config", "manifest": {}}})
    );
}

#[test]
fn test_first_add_wires_package_scripts() {
    let project = TestProject::new();
    project.write_json(
        "package.json",
        &json!({
            "name": "web",
            "scripts": {
                "start": "react-scripts start",
                "build": "react-scripts build",
                "test": "react-scripts test"
            }
        }),
    );

    let outcome = add_override(&layout(&project), "prod", "Prod").unwrap();

    let AddOutcome::Scaffolded(report) = outcome else {
        panic!("Expected Scaffolded outcome");
    };
    assert_eq!(report.scripts_added, vec!["prestart", "postbuild"]);

    let package = project.read_json("package.json");
    assert_eq!(package["scripts"]["prestart"], json!(APPLY_START_SCRIPT));
    assert_eq!(package["scripts"]["postbuild"], json!(APPLY_BUILD_SCRIPT));
    assert_eq!(package["scripts"]["start"], json!("react-scripts start"));
    assert_eq!(package["name"], json!("web"));
}

#[test]
fn test_first_add_skips_package_without_scripts() {
    let project = TestProject::new();
    project.write_json("package.json", &json!({"name": "web"}));

    add_override(&layout(&project), "prod", "Prod").unwrap();

    assert_eq!(project.read_json("package.json"), json!({"name": "web"}));
}

#[test]
fn test_first_add_skips_malformed_package_json() {
    let project = TestProject::new();
    project.write_file("package.json", "{ not json");

    let outcome = add_override(&layout(&project), "prod", "Prod").unwrap();

    let AddOutcome::Scaffolded(report) = outcome else {
        panic!("Expected Scaffolded outcome");
    };
    assert!(report.scripts_added.is_empty());
    assert_eq!(project.read_file("package.json"), "{ not json");
    assert_eq!(
        project.read_json(OVERRIDE_STORE),
        json!({"prod": {"description": "Prod", "manifest": {}}})
    );
}

#[test]
fn test_first_add_with_unreadable_proxy_writes_nothing() {
    let project = TestProject::new();
    project.write_json("package.json", &json!({"scripts": {"start": "s", "build": "b"}}));
    let package_before = project.read_file("package.json");
    // A directory where the proxy script should be cannot be read as text
    std::fs::create_dir_all(project.root().join("src/setupProxy.js")).unwrap();

    let err = add_override(&layout(&project), "prod", "Prod").unwrap_err();

    assert!(matches!(err, Error::Fs(_)), "got {err:?}");
    project.assert_file_not_exists(OVERRIDE_STORE);
    assert_eq!(project.read_file("package.json"), package_before);
}

#[test]
fn test_first_add_patches_setup_proxy() {
    let project = TestProject::new();
    project.write_file(
        "src/setupProxy.js",
        "const manifest = require('../public/manifest.json');\nconst config = { manifest };\nmodule.exports = (app) => app.get('/config', (_, res) => res.json(config));\n",
    );

    let outcome = add_override(&layout(&project), "prod", "Prod").unwrap();

    let AddOutcome::Scaffolded(report) = outcome else {
        panic!("Expected Scaffolded outcome");
    };
    assert!(report.proxy_patched);
    project.assert_file_contains("src/setupProxy.js", "manifest.tmp.json");
    project.assert_file_contains("src/setupProxy.js", "module.exports");
}

#[test]
fn test_first_add_leaves_unrecognized_proxy_alone() {
    let project = TestProject::new();
    let proxy = "module.exports = () => {};\n";
    project.write_file("src/setupProxy.js", proxy);

    add_override(&layout(&project), "prod", "Prod").unwrap();

    assert_eq!(project.read_file("src/setupProxy.js"), proxy);
}

#[test]
fn test_second_add_does_not_scaffold_again() {
    let project = TestProject::new();
    project.write_json("package.json", &json!({"scripts": {"start": "vite"}}));

    add_override(&layout(&project), "prod", "Prod").unwrap();
    let package_after_setup = project.read_file("package.json");
    let outcome = add_override(&layout(&project), "dev", "Dev").unwrap();

    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(project.read_file("package.json"), package_after_setup);
}
