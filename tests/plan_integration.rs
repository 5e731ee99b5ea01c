//! Plan construction tests over real directory trees

mod support;

use packplan::rules::OutputMode;
use packplan::{Environment, PackplanConfig, PlanError, PlanOrchestrator, Rule};
use serial_test::serial;
use std::path::Path;
use support::{entry_root, project_with, sample_project, source_root};
use yare::parameterized;

fn config(environment: Environment) -> PackplanConfig {
    PackplanConfig::default().with_environment(environment)
}

fn plan_error(err: &anyhow::Error) -> Option<&PlanError> {
    err.chain().find_map(|cause| cause.downcast_ref::<PlanError>())
}

#[test]
fn test_sample_project_entry_map() {
    let project = sample_project();
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Development))
        .unwrap();

    let root = entry_root(project.path());
    let names: Vec<&str> = plan.entry.names().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["admin/dashboard", "application"]);
    assert_eq!(
        plan.entry.get("application"),
        Some(root.join("application.js").as_path())
    );
    assert_eq!(
        plan.entry.get("admin/dashboard"),
        Some(root.join("admin").join("dashboard.ts").as_path())
    );
}

#[test]
fn test_module_stylesheet_routes_to_scoped_sass_rule() {
    let project = sample_project();
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Production))
        .unwrap();

    let stylesheet = source_root(project.path()).join("styles/app.module.scss");
    let rule = plan
        .rule_for(&stylesheet)
        .and_then(Rule::as_style)
        .expect("module stylesheet should be routed to a style rule");

    assert!(rule.scoped);
    assert_eq!(rule.mode(), OutputMode::ExtractToFile);
    assert_eq!(rule.loaders().last(), Some(&"sass-loader"));

    let plain_css_rules = plan
        .style_rules()
        .filter(|r| !r.scoped)
        .filter(|r| r.predicate.matches(&stylesheet))
        .count();
    assert_eq!(plain_css_rules, 0);
}

#[test]
fn test_component_and_script_routing() {
    let project = sample_project();
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Development))
        .unwrap();
    let source = source_root(project.path());

    assert!(matches!(
        plan.rule_for(&source.join("components/Card.vue")),
        Some(Rule::Component(c)) if c.name == "vue"
    ));
    assert!(matches!(
        plan.rule_for(&source.join("packs/application.js")),
        Some(Rule::Script(s)) if s.loader == "babel-loader"
    ));
    assert!(matches!(
        plan.rule_for(&source.join("images/logo.PNG")),
        Some(Rule::Asset(_))
    ));
}

#[test]
fn test_plan_is_deterministic() {
    let project = sample_project();
    let orchestrator = PlanOrchestrator::new(None);
    let config = config(Environment::Production);

    let first = orchestrator.plan(project.path(), &config).unwrap();
    let second = orchestrator.plan(project.path(), &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}

#[test]
fn test_environments_differ_only_in_environment_dependent_parts() {
    let project = sample_project();
    let orchestrator = PlanOrchestrator::new(None);

    let dev = orchestrator
        .plan(project.path(), &config(Environment::Development))
        .unwrap();
    let prod = orchestrator
        .plan(project.path(), &config(Environment::Production))
        .unwrap();

    assert_eq!(dev.entry, prod.entry);
    assert_eq!(dev.output, prod.output);
    assert_eq!(dev.rules.len(), prod.rules.len());
    assert_ne!(dev.fingerprint().unwrap(), prod.fingerprint().unwrap());

    for (d, p) in dev.style_rules().zip(prod.style_rules()) {
        assert_eq!(d.scoped, p.scoped);
        assert_eq!(d.predicate, p.predicate);
        assert_eq!(d.preprocessor_steps(), p.preprocessor_steps());
        assert_ne!(d.mode(), p.mode());
    }
}

#[test]
fn test_collision_is_reported() {
    let project = project_with(&["packs/application.js", "packs/application.ts"]);
    let err = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Development))
        .unwrap_err();

    match plan_error(&err) {
        Some(PlanError::Collision { name, .. }) => assert_eq!(name, "application"),
        other => panic!("Expected collision, got {:?}", other),
    }
    assert!(err.to_string().contains("Phase"));
}

#[test]
fn test_empty_source_tree_is_a_configuration_error() {
    let project = project_with(&["packs/notes.txt"]);
    let err = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Production))
        .unwrap_err();

    assert!(matches!(
        plan_error(&err),
        Some(PlanError::Configuration { .. })
    ));
}

#[test]
fn test_missing_entry_root_is_a_file_system_error() {
    let project = tempfile::TempDir::new().unwrap();
    let err = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Development))
        .unwrap_err();

    assert!(matches!(
        plan_error(&err),
        Some(PlanError::FileSystem { .. })
    ));
}

#[test]
fn test_hidden_files_are_skipped() {
    let project = project_with(&["packs/application.js", "packs/.draft.js"]);
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &config(Environment::Development))
        .unwrap();

    assert_eq!(plan.entry.len(), 1);
    assert!(plan.entry.get(".draft").is_none());
}

#[test]
#[serial]
fn test_environment_resolved_from_env() {
    let previous = std::env::var("PACKPLAN_ENV").ok();
    std::env::set_var("PACKPLAN_ENV", "production");

    let project = sample_project();
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &PackplanConfig::default())
        .unwrap();

    match previous {
        Some(value) => std::env::set_var("PACKPLAN_ENV", value),
        None => std::env::remove_var("PACKPLAN_ENV"),
    }

    assert_eq!(plan.environment, Environment::Production);
    assert!(plan
        .style_rules()
        .all(|r| r.mode() == OutputMode::ExtractToFile));
}

// Every stylesheet is claimed by at most one style rule, and scoped rules only claim
// files carrying the module marker.
#[parameterized(
    plain_css_dev = { "styles/base.css", Environment::Development, Some(false) },
    plain_css_prod = { "styles/base.css", Environment::Production, Some(false) },
    module_css_dev = { "styles/base.module.css", Environment::Development, Some(true) },
    module_css_prod = { "styles/base.module.css", Environment::Production, Some(true) },
    module_scss_dev = { "styles/app.module.scss", Environment::Development, Some(true) },
    module_sass_prod = { "styles/app.module.sass", Environment::Production, Some(true) },
    upper_case_css = { "styles/LEGACY.CSS", Environment::Production, Some(false) },
    plain_scss = { "styles/theme.scss", Environment::Development, None },
    not_a_stylesheet = { "packs/application.js", Environment::Production, None },
)]
fn test_style_rules_partition(file: &str, environment: Environment, scoped: Option<bool>) {
    let project = sample_project();
    let plan = PlanOrchestrator::new(None)
        .plan(project.path(), &config(environment))
        .unwrap();
    let path = source_root(project.path()).join(file);

    let matching: Vec<bool> = plan
        .style_rules()
        .filter(|r| r.predicate.matches(&path))
        .map(|r| r.scoped)
        .collect();

    assert!(matching.len() <= 1, "{} matched {:?}", file, matching);
    assert_eq!(matching.first().copied(), scoped);
    assert_eq!(
        plan.rule_for(Path::new(&path))
            .and_then(Rule::as_style)
            .map(|r| r.scoped),
        scoped
    );
}
