use catalog_core::{AppContext, SubmissionField};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{Catalog, PendingSubmission, Website, WebsiteId},
    protocol::Intent,
};

use crate::controller::events::{UiError, UiErrorCategory};
use crate::controller::orchestration::{drain_intents, queue_intent};
use crate::ui::theme::{
    card_fill, muted_text, scaled_text_styles, visuals_for_theme, PersistedDesktopSettings,
    ThemePreset, ThemeSettings, ACCENT, MAX_TEXT_SCALE, MIN_TEXT_SCALE, SETTINGS_STORAGE_KEY,
};

const CONTENT_MAX_WIDTH: f32 = 896.0;
const UNSELECTED_WEBSITE_LABEL: &str = "Select a website";

pub struct CatalogApp {
    context: AppContext,
    intent_tx: Sender<Intent>,
    intent_rx: Receiver<Intent>,

    status_banner: Option<UiError>,

    settings_open: bool,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
}

impl CatalogApp {
    pub fn new(
        context: AppContext,
        intent_tx: Sender<Intent>,
        intent_rx: Receiver<Intent>,
        persisted_settings: Option<PersistedDesktopSettings>,
    ) -> Self {
        Self {
            context,
            intent_tx,
            intent_rx,
            status_banner: None,
            settings_open: false,
            theme: persisted_settings.unwrap_or_default().into_runtime(),
            applied_theme: None,
        }
    }

    fn queue(&mut self, intent: Intent) {
        queue_intent(&self.intent_tx, intent, &mut self.status_banner);
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.theme.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("Government Services")
                        .strong()
                        .size(28.0 * self.theme.text_scale),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_open = !self.settings_open;
                    }
                });
            });
        });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut settings_open = self.settings_open;
        egui::Window::new("Settings")
            .open(&mut settings_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_salt("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::ALL {
                            ui.selectable_value(&mut self.theme.preset, preset, preset.label());
                        }
                    });
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, MIN_TEXT_SCALE..=MAX_TEXT_SCALE)
                        .text("Text scale")
                        .step_by(0.05),
                );
                if ui.button("Reset to defaults").clicked() {
                    self.theme = ThemeSettings::default();
                }
            });
        self.settings_open = settings_open;
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };

        let (fill, stroke) = match banner.category() {
            UiErrorCategory::Validation => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
            UiErrorCategory::Queue => (
                egui::Color32::from_rgb(120, 84, 30),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(190, 140, 60)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(banner.message()).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn render_website_card(&self, ui: &mut egui::Ui, website: &Website) {
        let scale = self.theme.text_scale;
        let muted = muted_text(self.theme);

        egui::Frame::NONE
            .fill(card_fill(self.theme))
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&website.name).strong().size(18.0 * scale));
                ui.label(egui::RichText::new(&website.description).color(muted));
                ui.hyperlink_to("Visit website", &website.url);

                ui.add_space(12.0);
                ui.label(egui::RichText::new("Projects:").strong().size(18.0 * scale));
                for project in &website.projects {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(&project.name).strong().size(15.0 * scale));
                    ui.label(egui::RichText::new(&project.description).color(muted));
                    ui.label(egui::RichText::new(format!("Status: {}", project.status)).color(muted));
                }
            });
        ui.add_space(16.0);
    }

    fn show_submission_form(&mut self, ui: &mut egui::Ui, catalog: &Catalog) {
        let draft: PendingSubmission = self.context.form().draft().clone();
        let muted = muted_text(self.theme);

        let mut name = draft.name.clone();
        ui.label(egui::RichText::new("Project Name:").color(muted));
        let name_resp = ui.add(
            egui::TextEdit::singleline(&mut name)
                .id_salt("project_name")
                .desired_width(f32::INFINITY),
        );
        if name_resp.changed() {
            self.queue(Intent::edit(SubmissionField::Name.as_str(), name));
        }

        let mut description = draft.description.clone();
        ui.label(egui::RichText::new("Project Description:").color(muted));
        let description_resp = ui.add(
            egui::TextEdit::singleline(&mut description)
                .id_salt("project_description")
                .desired_width(f32::INFINITY),
        );
        if description_resp.changed() {
            self.queue(Intent::edit(
                SubmissionField::Description.as_str(),
                description,
            ));
        }

        let mut selected = draft.website_id;
        ui.label(egui::RichText::new("Website:").color(muted));
        egui::ComboBox::from_id_salt("project_website")
            .selected_text(website_option_label(catalog, selected))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                ui.selectable_value(
                    &mut selected,
                    WebsiteId::UNSELECTED,
                    UNSELECTED_WEBSITE_LABEL,
                );
                for website in catalog.websites() {
                    ui.selectable_value(&mut selected, website.id, website.name.as_str());
                }
            });
        if selected != draft.website_id {
            self.queue(Intent::edit(
                SubmissionField::WebsiteId.as_str(),
                selected.to_string(),
            ));
        }

        ui.add_space(8.0);
        let submit_on_enter = (name_resp.lost_focus() || description_resp.lost_focus())
            && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add(primary_button("Submit project")).clicked() || submit_on_enter {
            self.queue(Intent::Submit);
        }
        ui.add_space(16.0);
    }

    fn show_catalog(&mut self, ctx: &egui::Context) {
        let catalog = self.context.catalog();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail = ui.available_width();
                    let content_width = avail.min(CONTENT_MAX_WIDTH);
                    ui.horizontal(|ui| {
                        ui.add_space(((avail - content_width) / 2.0).max(0.0));
                        ui.vertical(|ui| {
                            ui.set_width(content_width);
                            ui.add_space(16.0);
                            self.show_status_banner(ui);

                            for website in catalog.websites() {
                                self.render_website_card(ui, website);
                            }

                            let visible = self.context.form().is_visible();
                            if ui.add(primary_button(toggle_label(visible))).clicked() {
                                self.queue(Intent::ToggleForm);
                            }
                            ui.add_space(16.0);

                            if visible {
                                self.show_submission_form(ui, &catalog);
                            }

                            ui.small(
                                egui::RichText::new(catalog_summary(&catalog))
                                    .color(muted_text(self.theme)),
                            );
                        });
                    });
                });
        });
    }
}

fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_string())
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT)
    .corner_radius(8.0)
}

pub(crate) fn toggle_label(form_visible: bool) -> &'static str {
    if form_visible {
        "Hide form"
    } else {
        "Submit a project"
    }
}

pub(crate) fn website_option_label(catalog: &Catalog, selected: WebsiteId) -> String {
    catalog
        .website(selected)
        .map(|website| website.name.clone())
        .unwrap_or_else(|| UNSELECTED_WEBSITE_LABEL.to_string())
}

pub(crate) fn catalog_summary(catalog: &Catalog) -> String {
    let websites = catalog.len();
    let projects = catalog.project_count();
    format!(
        "{websites} website{} · {projects} project{}",
        if websites == 1 { "" } else { "s" },
        if projects == 1 { "" } else { "s" },
    )
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        self.show_top_bar(ctx);
        self.show_catalog(ctx);
        self.show_settings_window(ctx);

        let applied = drain_intents(&self.intent_rx, &mut self.context, &mut self.status_banner);
        if applied > 0 {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedDesktopSettings::from_runtime(self.theme);
        if let Ok(serialized) = serde_json::to_string(&settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
