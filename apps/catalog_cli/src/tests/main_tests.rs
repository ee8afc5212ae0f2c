use catalog_core::{AppContext, Settings};
use clap::Parser;
use shared::{
    domain::{ProjectId, WebsiteId},
    protocol::{Intent, SubmissionOutcome},
};

use super::{
    render_outcome, run_intents, run_submissions, submission_intents, write_catalog, Cli, Command,
};

#[test]
fn submit_command_parses_flags() {
    let cli = Cli::try_parse_from([
        "catalog_cli",
        "--json",
        "submit",
        "--name",
        "X",
        "--website-id",
        "1",
        "--repeat",
        "2",
    ])
    .expect("parse");

    assert!(cli.json);
    match cli.command {
        Command::Submit {
            name,
            description,
            website_id,
            repeat,
        } => {
            assert_eq!(name, "X");
            assert_eq!(description, "");
            assert_eq!(website_id, "1");
            assert_eq!(repeat, 2);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn submission_intents_run_end_to_end() {
    let mut context = AppContext::new(&Settings::default());

    let outcomes =
        run_intents(&mut context, submission_intents("X", "Y", "1")).expect("intents apply");

    assert_eq!(
        outcomes,
        vec![SubmissionOutcome::Appended {
            website_id: WebsiteId(1),
            project_id: ProjectId(3),
        }]
    );
    let catalog = context.catalog();
    assert_eq!(
        catalog.website(WebsiteId(1)).map(|w| w.projects.len()),
        Some(3)
    );
}

#[test]
fn repeated_submission_yields_one_outcome_per_round() {
    let mut context = AppContext::new(&Settings::default());

    let outcomes =
        run_submissions(&mut context, "X", "Y", "1", 3).expect("submissions apply");

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|outcome| matches!(
        outcome,
        SubmissionOutcome::Appended { website_id, .. } if *website_id == WebsiteId(1)
    )));
    assert_eq!(
        context.catalog().website(WebsiteId(1)).map(|w| w.projects.len()),
        Some(5)
    );
    assert!(!context.form().is_visible());
}

#[test]
fn zero_repeat_submits_nothing() {
    let mut context = AppContext::new(&Settings::default());
    let before = context.catalog();

    let outcomes =
        run_submissions(&mut context, "X", "Y", "1", 0).expect("submissions apply");

    assert!(outcomes.is_empty());
    assert_eq!(*context.catalog(), *before);
    assert_eq!(context.revision(), 0);
}

#[test]
fn replayed_json_intents_are_applied() {
    let raw = r#"[
        {"type": "toggle_form"},
        {"type": "edit_field", "payload": {"field": "name", "value": "Clinics"}},
        {"type": "edit_field", "payload": {"field": "websiteId", "value": "99"}},
        {"type": "submit"}
    ]"#;
    let intents: Vec<Intent> = serde_json::from_str(raw).expect("intents json");
    let mut context = AppContext::new(&Settings::default());
    let before = context.catalog();

    let outcomes = run_intents(&mut context, intents).expect("intents apply");

    assert_eq!(
        outcomes,
        vec![SubmissionOutcome::NoMatchingWebsite {
            website_id: WebsiteId(99)
        }]
    );
    assert_eq!(*context.catalog(), *before);
}

#[test]
fn rejected_intent_names_its_position() {
    let mut context = AppContext::new(&Settings::default());
    let err = run_intents(
        &mut context,
        vec![Intent::ToggleForm, Intent::edit("owner", "x")],
    )
    .expect_err("unknown field");

    assert!(err.to_string().contains("intent #1 (edit_field)"));
}

#[test]
fn renders_catalog_and_outcomes_as_text() {
    let context = AppContext::new(&Settings::default());
    let mut text = String::new();
    write_catalog(&mut text, &context.catalog()).expect("write to string");

    assert!(text.starts_with("[1] Ministry of Education <https://www.india.gov.in/>\n"));
    assert!(text.contains("      [2] Vaccine Distribution (Completed)\n"));
    assert_eq!(
        render_outcome(&SubmissionOutcome::NoMatchingWebsite {
            website_id: WebsiteId(99)
        }),
        "no website with id=99; catalog unchanged"
    );
}
