use catalog_core::{AppContext, Settings};
use clap::Parser;
use crossbeam_channel::bounded;
use shared::{
    domain::{Catalog, WebsiteId},
    protocol::Intent,
};

use super::Args;
use crate::controller::{
    events::{UiErrorCategory, UiErrorContext},
    orchestration::{drain_intents, queue_intent},
};
use crate::ui::{
    app::{catalog_summary, toggle_label, website_option_label},
    theme::{PersistedDesktopSettings, ThemePreset, MAX_TEXT_SCALE},
};

#[test]
fn queued_intents_drain_into_context_in_order() {
    let (tx, rx) = bounded::<Intent>(8);
    let mut context = AppContext::new(&Settings::default());
    let mut status = None;

    for intent in [
        Intent::ToggleForm,
        Intent::edit("name", "Library"),
        Intent::edit("websiteId", "1"),
        Intent::Submit,
    ] {
        queue_intent(&tx, intent, &mut status);
    }
    let applied = drain_intents(&rx, &mut context, &mut status);

    assert_eq!(applied, 4);
    assert!(status.is_none());
    let catalog = context.catalog();
    let education = catalog.website(WebsiteId(1)).expect("website 1");
    assert_eq!(
        education.projects.last().map(|p| p.name.as_str()),
        Some("Library")
    );
    assert!(!context.form().is_visible());
}

#[test]
fn full_queue_reports_banner_instead_of_blocking() {
    let (tx, _rx) = bounded::<Intent>(1);
    let mut status = None;

    queue_intent(&tx, Intent::ToggleForm, &mut status);
    assert!(status.is_none());
    queue_intent(&tx, Intent::ToggleForm, &mut status);

    let err = status.expect("queue full banner");
    assert_eq!(err.category(), UiErrorCategory::Queue);
    assert_eq!(err.context(), UiErrorContext::QueueIntent);
    assert!(err.message().contains("full"));
}

#[test]
fn disconnected_queue_reports_banner() {
    let (tx, rx) = bounded::<Intent>(1);
    drop(rx);
    let mut status = None;

    queue_intent(&tx, Intent::Submit, &mut status);

    assert!(status
        .expect("disconnect banner")
        .message()
        .contains("disconnected"));
}

#[test]
fn rejected_field_edit_surfaces_as_validation_banner() {
    let (tx, rx) = bounded::<Intent>(4);
    let mut context = AppContext::new(&Settings::default());
    let mut status = None;

    queue_intent(&tx, Intent::ToggleForm, &mut status);
    queue_intent(&tx, Intent::edit("priority", "high"), &mut status);
    let applied = drain_intents(&rx, &mut context, &mut status);

    assert_eq!(applied, 1);
    let err = status.expect("validation banner");
    assert_eq!(err.category(), UiErrorCategory::Validation);
    assert!(err.message().contains("priority"));
}

#[test]
fn toggle_button_label_follows_visibility() {
    assert_eq!(toggle_label(false), "Submit a project");
    assert_eq!(toggle_label(true), "Hide form");
}

#[test]
fn website_selector_label_falls_back_to_placeholder() {
    let context = AppContext::new(&Settings::default());
    let catalog = context.catalog();

    assert_eq!(
        website_option_label(&catalog, WebsiteId(2)),
        "Ministry of Health"
    );
    assert_eq!(
        website_option_label(&catalog, WebsiteId::UNSELECTED),
        "Select a website"
    );
    assert_eq!(
        website_option_label(&catalog, WebsiteId(99)),
        "Select a website"
    );
}

#[test]
fn catalog_summary_pluralizes() {
    let context = AppContext::new(&Settings::default());
    assert_eq!(catalog_summary(&context.catalog()), "2 websites · 4 projects");
    assert_eq!(catalog_summary(&Catalog::default()), "0 websites · 0 projects");
}

#[test]
fn persisted_settings_clamp_text_scale_and_tolerate_missing_keys() {
    let settings = PersistedDesktopSettings::from_storage_text(r#"{"text_scale": 9.0}"#)
        .expect("partial settings parse");
    let theme = settings.into_runtime();
    assert_eq!(theme.preset, ThemePreset::Light);
    assert_eq!(theme.text_scale, MAX_TEXT_SCALE);

    assert!(PersistedDesktopSettings::from_storage_text("not json").is_none());
}

#[test]
fn cli_args_accept_config_and_log_filter() {
    let args = Args::try_parse_from([
        "desktop_gui",
        "--config",
        "custom.toml",
        "--log-filter",
        "debug",
    ])
    .expect("args parse");
    assert_eq!(
        args.config.as_deref(),
        Some(std::path::Path::new("custom.toml"))
    );
    assert_eq!(args.log_filter.as_deref(), Some("debug"));
}
