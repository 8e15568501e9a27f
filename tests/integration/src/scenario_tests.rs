//! Scenario tests for council sync
//!
//! Each test sets up a temporary project, runs the sync engine through the
//! library crates and checks the resulting tree and report.

use council_adapters::AdapterRegistry;
use council_core::{Error, SyncEngine, SyncOptions, SyncReport, TargetOutcome, TargetReport};
use council_fs::NormalizedPath;
use council_meta::{CouncilConfig, load_config};
use council_test_utils::TestCouncil;
use pretty_assertions::assert_eq;
use rstest::rstest;

const DHH: &str = "---
id: dhh
name: David Heinemeier Hansson
focus: Rails, simplicity and convention over configuration
philosophy: Optimize for programmer happiness. Majestic monoliths beat premature microservices.
principles:
  - Convention over configuration
  - No needless abstraction
red_flags:
  - Service objects wrapping a single call
---
";

const ALL_TARGETS: [&str; 5] = ["claude", "codex", "gemini", "generic", "opencode"];

fn run(council: &TestCouncil, options: SyncOptions) -> SyncReport {
    let registry = AdapterRegistry::with_builtins();
    let root = NormalizedPath::new(council.root());
    let config = load_config(&root).unwrap();
    SyncEngine::new(root, &registry)
        .sync_all(&config, options)
        .unwrap()
}

fn target<'a>(report: &'a SyncReport, name: &str) -> &'a TargetReport {
    report
        .get(name)
        .unwrap_or_else(|| panic!("no result for {name}"))
        .report()
        .unwrap_or_else(|| panic!("{name} failed"))
}

fn clean() -> SyncOptions {
    SyncOptions {
        clean: true,
        ..Default::default()
    }
}

fn all_targets_config(council: &TestCouncil) {
    council.write_config("targets = [\"claude\", \"codex\", \"gemini\", \"generic\", \"opencode\"]\n");
}

// =============================================================================
// Full record through every tool
// =============================================================================

#[test]
fn test_dhh_reaches_every_tool() {
    let council = TestCouncil::new();
    council.add_expert_raw("", "dhh", DHH);
    all_targets_config(&council);

    let report = run(&council, SyncOptions::default());
    assert!(report.is_success());

    let claude = council.read_file(".claude/agents/dhh.md");
    assert!(claude.starts_with("---\nname: dhh\n"));
    assert!(claude.contains("<!-- council:generated -->\n\n# David Heinemeier Hansson"));
    assert!(claude.contains("## Philosophy\n\nOptimize for programmer happiness."));
    assert!(claude.contains("- Convention over configuration\n"));
    assert!(claude.contains("Watch for these patterns:\n\n- Service objects wrapping a single call\n"));

    council.assert_file_contains(".codex/agents/dhh.md", "name: dhh");
    council.assert_file_contains(".opencode/agent/dhh.md", "mode: subagent");

    let review = council.read_file(".gemini/commands/council.toml");
    assert!(review.starts_with("# council:generated\n"));
    assert!(review.contains("**David Heinemeier Hansson** (`dhh`)"));

    let aggregate = council.read_file("COUNCIL.md");
    assert!(aggregate.starts_with("<!-- council:generated -->\n# Council\n"));
    assert!(aggregate.contains("## David Heinemeier Hansson\n\n_Focus: Rails, simplicity"));
    assert!(aggregate.contains("### Principles"));
}

#[test]
fn test_explicit_body_is_used_verbatim() {
    let council = TestCouncil::new();
    council.create_dir(".claude");
    council.add_expert_raw(
        "",
        "beck",
        "---\nid: beck\nname: Kent Beck\nfocus: TDD\nprinciples:\n  - ignored\n---\n\nMake it work, make it right, make it fast.\n",
    );

    run(&council, SyncOptions::default());

    let agent = council.read_file(".claude/agents/beck.md");
    assert!(agent.ends_with("<!-- council:generated -->\n\nMake it work, make it right, make it fast.\n"));
    assert!(!agent.contains("ignored"));
}

// =============================================================================
// Idempotence and determinism
// =============================================================================

#[rstest]
#[case(SyncOptions::default())]
#[case(clean())]
fn test_second_sync_is_a_no_op(#[case] options: SyncOptions) {
    let council = TestCouncil::new();
    council.add_expert_raw("", "dhh", DHH);
    council.add_expert("custom", "beck", "Kent Beck", "TDD");
    all_targets_config(&council);

    let first = run(&council, options);
    assert!(first.change_count() > 0);

    let second = run(&council, options);
    assert_eq!(second.change_count(), 0);
    for name in ALL_TARGETS {
        let report = target(&second, name);
        assert!(report.created.is_empty() && report.updated.is_empty(), "{name}");
        assert!(!report.unchanged.is_empty(), "{name}");
    }
}

#[test]
fn test_same_input_gives_identical_bytes() {
    let setup = || {
        let council = TestCouncil::new();
        council.add_expert_raw("", "dhh", DHH);
        council.add_expert("installed:xp", "fowler", "Martin Fowler", "Refactoring");
        all_targets_config(&council);
        run(&council, SyncOptions::default());
        council
    };
    let a = setup();
    let b = setup();

    for path in [
        ".claude/agents/dhh.md",
        ".claude/agents/installed-fowler.md",
        ".claude/commands/council.md",
        ".codex/prompts/council-detect.md",
        ".gemini/commands/council.toml",
        ".opencode/agent/installed-fowler.md",
        "COUNCIL.md",
    ] {
        assert_eq!(a.read_file(path), b.read_file(path), "{path}");
    }
}

// =============================================================================
// Provenance
// =============================================================================

#[test]
fn test_same_id_from_three_sources_never_collides() {
    let council = TestCouncil::new();
    council.create_dir(".claude");
    council.add_expert("", "dhh", "DHH", "Rails");
    council.add_expert("custom", "dhh", "My DHH", "Rails, my way");
    council.add_expert("installed:rails-pack", "dhh", "Pack DHH", "Rails, packaged");

    let report = run(&council, SyncOptions::default());
    assert!(report.is_success());

    assert_eq!(
        council.list_dir(".claude/agents"),
        vec!["custom-dhh.md", "dhh.md", "installed-dhh.md"]
    );
    council.assert_file_contains(".claude/agents/custom-dhh.md", "name: custom-dhh");
    council.assert_file_contains(".claude/commands/council.md", "**Pack DHH** (`installed-dhh`)");
}

// =============================================================================
// Ownership
// =============================================================================

#[test]
fn test_hand_written_files_survive_clean() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.write_file(".claude/agents/reviewer.md", "---\nname: reviewer\n---\n\nMine.\n");
    council.write_file(".claude/commands/deploy.md", "Deploy it.\n");
    council.write_file(".claude/agents/notes.txt", "not markdown");

    let report = run(&council, clean());
    let claude = target(&report, "claude");
    assert!(claude.deleted.is_empty());
    assert!(claude.stale.is_empty());

    assert_eq!(council.read_file(".claude/agents/reviewer.md"), "---\nname: reviewer\n---\n\nMine.\n");
    assert_eq!(council.read_file(".claude/commands/deploy.md"), "Deploy it.\n");
    council.assert_file_exists(".claude/agents/notes.txt");
}

#[test]
fn test_foreign_file_at_desired_path() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.write_file(".claude/commands/council.md", "My own review command\n");

    let report = run(&council, SyncOptions::default());
    let claude = target(&report, "claude");
    assert_eq!(claude.skipped, vec![".claude/commands/council.md"]);
    assert!(report.is_success());
    assert_eq!(council.read_file(".claude/commands/council.md"), "My own review command\n");

    let report = run(
        &council,
        SyncOptions {
            force: true,
            ..Default::default()
        },
    );
    let claude = target(&report, "claude");
    assert!(claude.skipped.is_empty());
    let updated: Vec<_> = claude.updated.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(updated, vec![".claude/commands/council.md"]);
    council.assert_file_contains(".claude/commands/council.md", "<!-- council:generated -->");
}

#[test]
fn test_modified_generated_file_is_restored() {
    let council = TestCouncil::new();
    council.create_dir(".opencode");
    council.add_expert("", "dhh", "DHH", "Rails");
    run(&council, SyncOptions::default());
    let original = council.read_file(".opencode/agent/dhh.md");

    council.write_file(".opencode/agent/dhh.md", &format!("{original}\nlocal edit\n"));
    let report = run(
        &council,
        SyncOptions {
            diff: true,
            ..Default::default()
        },
    );

    let opencode = target(&report, "opencode");
    assert_eq!(opencode.updated.len(), 1);
    let diff = opencode.updated[0].diff.as_deref().unwrap();
    assert!(diff.contains("-local edit"));
    assert_eq!(council.read_file(".opencode/agent/dhh.md"), original);
}

// =============================================================================
// Deprecated layouts
// =============================================================================

#[test]
fn test_deprecated_layout_removed_only_with_clean() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.write_file(".claude/agents/council/dhh.md", "old layout");
    council.write_file(".council/generated/COUNCIL.md", "old aggregate");
    council.write_config("targets = [\"claude\", \"generic\"]\n");

    let report = run(&council, SyncOptions::default());
    assert!(target(&report, "claude").deprecated_removed.is_empty());
    council.assert_file_exists(".claude/agents/council/dhh.md");

    let report = run(&council, clean());
    assert_eq!(
        target(&report, "claude").deprecated_removed,
        vec![".claude/agents/council"]
    );
    assert_eq!(
        target(&report, "generic").deprecated_removed,
        vec![".council/generated"]
    );
    council.assert_file_not_exists(".claude/agents/council");
    council.assert_file_not_exists(".council/generated");
    council.assert_file_exists(".claude/agents/dhh.md");
}

// =============================================================================
// Failure isolation
// =============================================================================

#[test]
fn test_blocked_target_does_not_stop_others() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.create_dir(".claude");
    council.create_dir(".codex");
    council.block_path(".codex/prompts");

    let report = run(&council, SyncOptions::default());

    assert!(report.has_failures());
    assert!(!report.is_success());
    match &report.get("codex").unwrap().outcome {
        TargetOutcome::Failed { error } => assert!(error.contains(".codex/prompts"), "{error}"),
        other => panic!("expected codex to fail, got {other:?}"),
    }
    assert!(target(&report, "claude").has_changes());
    council.assert_file_exists(".claude/agents/dhh.md");
}

#[test]
fn test_invalid_expert_is_reported_and_left_out() {
    let council = TestCouncil::new();
    council.create_dir(".claude");
    council.add_expert("", "dhh", "DHH", "Rails");
    council.add_expert_raw("", "nobody", "---\nid: nobody\nname: Nobody\n---\n");

    let report = run(&council, SyncOptions::default());
    assert!(!report.is_success());
    assert!(!report.has_failures());

    let claude = target(&report, "claude");
    let errors: Vec<_> = claude.errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(errors, vec![".claude/agents/nobody.md"]);
    council.assert_file_not_exists(".claude/agents/nobody.md");
    let review = council.read_file(".claude/commands/council.md");
    assert!(review.contains("**DHH**"));
    assert!(!review.contains("Nobody"));
}

// =============================================================================
// Targets and commands
// =============================================================================

#[test]
fn test_empty_council_falls_back_to_generic() {
    let council = TestCouncil::new();
    council.init_council_root();

    let report = run(&council, SyncOptions::default());
    let names: Vec<_> = report.targets.iter().map(|t| t.target.as_str()).collect();
    assert_eq!(names, vec!["generic"]);
    council.assert_file_contains("COUNCIL.md", "# Council");
    assert_eq!(council.list_dir("."), vec![".council", "COUNCIL.md"]);
}

#[test]
fn test_empty_council_review_command() {
    let council = TestCouncil::new();
    council.init_council_root();
    council.create_dir(".claude");

    run(&council, SyncOptions::default());
    council.assert_file_contains(".claude/commands/council.md", "_The council has no members yet._");
}

#[test]
fn test_command_selection() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.create_dir(".claude");
    council.write_config("commands = [\"council\"]\n");

    run(&council, SyncOptions::default());
    assert_eq!(council.list_dir(".claude/commands"), vec!["council.md"]);
}

#[test]
fn test_unknown_command_rejected_before_writing() {
    let council = TestCouncil::new();
    council.add_expert("", "dhh", "DHH", "Rails");
    council.create_dir(".claude");
    council.write_config("commands = [\"council-deploy\"]\n");

    let registry = AdapterRegistry::with_builtins();
    let root = NormalizedPath::new(council.root());
    let config = load_config(&root).unwrap();
    let err = SyncEngine::new(root, &registry)
        .sync_all(&config, SyncOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::UnknownCommand { ref name, .. } if name == "council-deploy"));
    council.assert_file_not_exists(".claude/agents");
}

#[test]
fn test_missing_council_root_fails() {
    let council = TestCouncil::new();
    council.create_dir(".claude");

    let registry = AdapterRegistry::with_builtins();
    let engine = SyncEngine::new(NormalizedPath::new(council.root()), &registry);
    let result = engine.sync_all(&CouncilConfig::default(), SyncOptions::default());

    assert!(matches!(result, Err(Error::Meta(_))));
    council.assert_file_not_exists(".claude/agents");
}
