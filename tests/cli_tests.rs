use clap::Parser;
use locator_model::cli::commands::{build_registry, scan_document};
use locator_model::cli::config::{AppConfig, Cli, Commands, load_config, resolve_settings};
use locator_model::{BuildError, Document, ModelBuilder, ProfileRegistry};

use crate::common::utils::{el, names, page, temp_path};

mod common;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_scan_minimal() {
    let cli = Cli::parse_from(["locator-model", "scan", "--snapshot", "page.json"]);
    match cli.command {
        Commands::Scan {
            snapshot,
            profile,
            root_id,
            append_ids,
        } => {
            assert_eq!(snapshot, "page.json");
            assert_eq!(profile, None);
            assert_eq!(root_id, None);
            assert!(append_ids.is_empty());
        }
        _ => panic!("Expected Scan command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_scan_all_args() {
    let cli = Cli::parse_from([
        "locator-model",
        "-vv",
        "scan",
        "--snapshot",
        "page.json",
        "--profile",
        "css",
        "--root-id",
        "main",
        "--append-id",
        "a",
        "--append-id",
        "b",
        "--trace",
        "trace.jsonl",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.trace.as_deref(), Some("trace.jsonl"), "Global flag after subcommand");
    match cli.command {
        Commands::Scan {
            profile,
            root_id,
            append_ids,
            ..
        } => {
            assert_eq!(profile.as_deref(), Some("css"));
            assert_eq!(root_id.as_deref(), Some("main"));
            assert_eq!(append_ids, vec!["a", "b"]);
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn cli_parse_profiles() {
    let cli = Cli::parse_from(["locator-model", "profiles", "--profiles-file", "p.yaml"]);
    assert!(matches!(cli.command, Commands::Profiles));
    assert_eq!(cli.profiles_file.as_deref(), Some("p.yaml"));
}

#[test]
fn cli_scan_requires_snapshot() {
    assert!(Cli::try_parse_from(["locator-model", "scan"]).is_err());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn load_config_missing_file_returns_defaults() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    assert_eq!(config.profile, "selenium");
    assert_eq!(config.profiles_file, None);
    assert_eq!(config.trace, None);
}

#[test]
fn load_config_reads_yaml() {
    let path = temp_path("locator-model.yaml");
    std::fs::write(&path, "profile: css\ntrace: out.jsonl\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.profile, "css");
    assert_eq!(config.trace.as_deref(), Some("out.jsonl"));
    assert_eq!(config.profiles_file, None);
}

#[test]
fn load_config_malformed_yaml_returns_defaults() {
    let path = temp_path("broken.yaml");
    std::fs::write(&path, "profile: [unclosed\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.profile, "selenium");
}

#[test]
fn cli_flags_override_config() {
    let config = AppConfig {
        profile: "xpath".into(),
        profiles_file: Some("from-config.yaml".into()),
        trace: Some("config.jsonl".into()),
    };

    let resolved = resolve_settings(&config, Some("css"), None, Some("cli.jsonl"));
    assert_eq!(resolved.profile, "css");
    assert_eq!(resolved.profiles_file.as_deref(), Some("from-config.yaml"));
    assert_eq!(resolved.trace.as_deref(), Some("cli.jsonl"));

    let resolved = resolve_settings(&config, None, None, None);
    assert_eq!(resolved.profile, "xpath");
}

// ============================================================================
// Command helpers
// ============================================================================

#[test]
fn build_registry_merges_profiles_file() {
    let path = temp_path("cli_profiles.yaml");
    std::fs::write(&path, "profiles:\n  - name: names\n    locators: [name]\n").unwrap();

    let registry = build_registry(path.to_str()).unwrap();
    assert!(registry.lookup("names").is_ok());
    assert!(registry.lookup("selenium").is_ok(), "Built-ins are kept");

    assert!(build_registry(None).unwrap().lookup("names").is_err());
}

#[test]
fn scan_document_from_root_id_then_appends() {
    // html0 body1 a2#nav-home form3#login input4 button5 a6#help
    let doc = page(vec![
        el("a").attr("id", "nav-home").text("Home"),
        el("form")
            .attr("id", "login")
            .child(el("input").attr("name", "username"))
            .child(el("button").text("Log in")),
        el("a").attr("id", "help").text("Help"),
    ]);
    let registry = ProfileRegistry::builtin();
    let builder = ModelBuilder::new(&registry);

    let model = scan_document(&builder, &doc, "selenium", Some("login"), &["help".to_string()])
        .unwrap()
        .unwrap();
    assert_eq!(names(&model), vec!["Username", "LogIn", "Help"]);
}

#[test]
fn scan_document_appends_even_when_scan_is_empty() {
    let doc = page(vec![el("div").attr("id", "empty"), el("a").attr("id", "solo")]);
    let registry = ProfileRegistry::builtin();
    let builder = ModelBuilder::new(&registry);

    let model = scan_document(&builder, &doc, "selenium", Some("empty"), &["solo".to_string()])
        .unwrap()
        .unwrap();
    assert_eq!(names(&model), vec!["Solo"]);

    let nothing = scan_document(&builder, &doc, "selenium", Some("empty"), &[]).unwrap();
    assert!(nothing.is_none());
}

#[test]
fn scan_document_unknown_root_id() {
    let doc = page(vec![]);
    let registry = ProfileRegistry::builtin();
    let builder = ModelBuilder::new(&registry);

    let err = scan_document(&builder, &doc, "selenium", Some("ghost"), &[]).unwrap_err();
    match err {
        BuildError::ElementNotFound { id } => assert_eq!(id, "ghost"),
        other => panic!("Expected ElementNotFound, got {:?}", other),
    }
}

#[test]
fn snapshot_file_round_trip_through_load() {
    let path = temp_path("snapshot.json");
    let snapshot = serde_json::json!({
        "tag": "html",
        "children": [{"tag": "body", "children": [
            {"tag": "button", "attributes": {"id": "go"}, "children": [{"text": "Go"}]}
        ]}]
    });
    std::fs::write(&path, snapshot.to_string()).unwrap();

    let doc = Document::load(&path).unwrap();
    let registry = ProfileRegistry::builtin();
    let builder = ModelBuilder::new(&registry);
    let model = scan_document(&builder, &doc, "css", None, &[]).unwrap().unwrap();

    assert_eq!(names(&model), vec!["Go"]);
}
