//! Output format of the built-in adapters

use council_adapters::templates::REVIEW_COMMAND;
use council_adapters::{
    Adapter, builtin_adapters, claude_adapter, gemini_adapter, opencode_adapter, render_review,
};
use council_meta::{Expert, Source};
use pretty_assertions::assert_eq;

fn dhh() -> Expert {
    Expert::new("dhh", "David Heinemeier Hansson", "Rails and simplicity")
        .with_philosophy("Convention over configuration.")
        .with_principles(["Majestic monolith", "Programmer happiness"])
}

#[test]
fn test_claude_agent() {
    insta::assert_snapshot!(claude_adapter().format_agent(&dhh()).unwrap(), @r"
    ---
    name: dhh
    description: Channel David Heinemeier Hansson (Rails and simplicity)
    ---
    <!-- council:generated -->

    # David Heinemeier Hansson

    You are channeling David Heinemeier Hansson, an expert in Rails and simplicity.

    ## Philosophy

    Convention over configuration.

    ## Principles

    - Majestic monolith
    - Programmer happiness
    ");
}

#[test]
fn test_opencode_agent() {
    let expert = dhh().with_source(Source::Installed("rails".into()));
    insta::assert_snapshot!(opencode_adapter().format_agent(&expert).unwrap(), @r"
    ---
    description: Channel David Heinemeier Hansson (Rails and simplicity)
    mode: subagent
    ---
    <!-- council:generated -->

    # David Heinemeier Hansson

    You are channeling David Heinemeier Hansson, an expert in Rails and simplicity.

    ## Philosophy

    Convention over configuration.

    ## Principles

    - Majestic monolith
    - Programmer happiness
    ");
}

#[test]
fn test_every_generated_file_is_owned() {
    let expert = dhh();
    for adapter in builtin_adapters() {
        if adapter.is_fallback() {
            let doc = adapter.format_aggregate(std::slice::from_ref(&expert)).unwrap();
            assert!(adapter.owns(&doc), "{} aggregate", adapter.name());
            continue;
        }

        let agent = adapter.format_agent(&expert).unwrap();
        assert!(adapter.owns(&agent), "{} agent", adapter.name());

        for (name, template) in &adapter.templates().commands {
            let command = adapter
                .format_command(name, &template.description, &template.body)
                .unwrap();
            assert!(adapter.owns(&command), "{} command {}", adapter.name(), name);
        }
    }
}

#[test]
fn test_hand_written_files_are_not_owned() {
    for adapter in builtin_adapters() {
        assert!(!adapter.owns("---\nname: mine\n---\n\n# My agent\n"));
    }
}

#[test]
fn test_gemini_review_command_round_trips_through_toml() {
    let adapter = gemini_adapter();
    let template = &adapter.templates().commands[REVIEW_COMMAND];
    let body = render_review(&template.body, &[dhh()]);

    let content = adapter
        .format_command(REVIEW_COMMAND, &template.description, &body)
        .unwrap();
    let parsed: toml::Table = toml::from_str(&content).unwrap();

    let prompt = parsed["prompt"].as_str().unwrap();
    assert!(prompt.contains("- **David Heinemeier Hansson** (`dhh`): Rails and simplicity"));
    assert!(prompt.contains("{{args}}"));
    assert_eq!(
        parsed["description"].as_str(),
        Some(template.description.as_str())
    );
}
