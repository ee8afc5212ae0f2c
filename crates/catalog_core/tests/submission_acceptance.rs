use catalog_core::{AppContext, CatalogStore, ProjectIdStrategy, Settings};
use shared::{
    domain::{ProjectId, ProjectStatus, WebsiteId},
    error::CatalogError,
    protocol::{Intent, SubmissionOutcome},
};

fn fill_form(ctx: &mut AppContext, name: &str, description: &str, website_id: &str) {
    if !ctx.form().is_visible() {
        ctx.toggle_form();
    }
    ctx.edit_field("name", name).expect("name field");
    ctx.edit_field("description", description).expect("description field");
    ctx.edit_field("websiteId", website_id).expect("websiteId field");
}

#[test]
fn submitting_against_seed_appends_project_with_website_count_id() {
    let mut ctx = AppContext::new(&Settings::default());
    let before = ctx.catalog();

    fill_form(&mut ctx, "X", "Y", "1");
    let outcome = ctx.submit();

    assert_eq!(
        outcome,
        SubmissionOutcome::Appended {
            website_id: WebsiteId(1),
            project_id: ProjectId(3),
        }
    );
    let after = ctx.catalog();
    let education = after.website(WebsiteId(1)).expect("website 1");
    assert_eq!(education.projects.len(), 3);
    let added = education.projects.last().expect("appended");
    assert_eq!(added.id, ProjectId(3));
    assert_eq!(added.name, "X");
    assert_eq!(added.description, "Y");
    assert_eq!(added.status, ProjectStatus::InProgress);

    assert_eq!(after.website(WebsiteId(2)), before.website(WebsiteId(2)));
    assert!(!ctx.form().is_visible());
    assert!(ctx.form().draft().is_empty());
}

#[test]
fn unknown_website_leaves_catalog_unchanged_but_still_resets_form() {
    let mut ctx = AppContext::new(&Settings::default());
    let before = ctx.catalog();

    fill_form(&mut ctx, "X", "Y", "99");
    let outcome = ctx.submit();

    assert_eq!(
        outcome,
        SubmissionOutcome::NoMatchingWebsite {
            website_id: WebsiteId(99)
        }
    );
    assert_eq!(*ctx.catalog(), *before);
    assert!(!ctx.form().is_visible());
    assert!(ctx.form().draft().is_empty());
}

#[test]
fn empty_fields_are_still_appended() {
    let mut ctx = AppContext::new(&Settings::default());

    fill_form(&mut ctx, "", "", "2");
    ctx.submit();

    let catalog = ctx.catalog();
    let health = catalog.website(WebsiteId(2)).expect("website 2");
    assert_eq!(health.projects.len(), 3);
    let added = health.projects.last().expect("appended");
    assert!(added.name.is_empty());
    assert!(added.description.is_empty());
}

#[test]
fn repeated_submission_is_not_deduplicated() {
    let mut ctx = AppContext::new(&Settings::default());

    fill_form(&mut ctx, "Same", "Same", "1");
    ctx.submit();
    fill_form(&mut ctx, "Same", "Same", "1");
    ctx.submit();

    let catalog = ctx.catalog();
    let education = catalog.website(WebsiteId(1)).expect("website 1");
    assert_eq!(education.projects.len(), 4);
    assert_eq!(
        education.projects.iter().filter(|p| p.name == "Same").count(),
        2
    );
    assert_eq!(ctx.revision(), 2);
}

#[test]
fn submitting_without_selecting_a_website_is_a_no_op() {
    let mut ctx = AppContext::new(&Settings::default());
    let before = ctx.catalog();

    ctx.toggle_form();
    ctx.edit_field("name", "Orphan").expect("name");
    let outcome = ctx.submit();

    assert!(!outcome.appended());
    assert_eq!(*ctx.catalog(), *before);
}

#[test]
fn dispatch_replays_forwarded_intents_in_order() {
    let mut ctx = AppContext::with_store(
        CatalogStore::initialize(),
        ProjectIdStrategy::NextInWebsite,
    );
    let intents = vec![
        Intent::ToggleForm,
        Intent::edit("name", "Clinics"),
        Intent::edit("description", "Rural clinics"),
        Intent::edit("websiteId", "2"),
    ];
    for intent in intents {
        assert_eq!(ctx.dispatch(intent), Ok(None));
    }

    let outcome = ctx.dispatch(Intent::Submit).expect("submit");

    assert_eq!(
        outcome,
        Some(SubmissionOutcome::Appended {
            website_id: WebsiteId(2),
            project_id: ProjectId(3),
        })
    );
}

#[test]
fn dispatch_surfaces_unknown_field_errors() {
    let mut ctx = AppContext::new(&Settings::default());
    ctx.dispatch(Intent::ToggleForm).expect("toggle");

    let err = ctx
        .dispatch(Intent::edit("owner", "nobody"))
        .expect_err("unknown field");

    assert_eq!(err, CatalogError::UnknownField("owner".to_string()));
    assert!(ctx.form().is_visible());
}
