//! Theme presets and persisted view preferences.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};

pub const SETTINGS_STORAGE_KEY: &str = "gov_catalog.settings";
pub const MIN_TEXT_SCALE: f32 = 0.8;
pub const MAX_TEXT_SCALE: f32 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 2] = [ThemePreset::Light, ThemePreset::Dark];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::Light => "Light",
            ThemePreset::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Light,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedDesktopSettings {
    pub theme_preset: ThemePreset,
    pub text_scale: f32,
}

impl Default for PersistedDesktopSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::default())
    }
}

impl PersistedDesktopSettings {
    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            theme_preset: theme.preset,
            text_scale: theme.text_scale,
        }
    }

    pub fn into_runtime(self) -> ThemeSettings {
        let text_scale = if self.text_scale.is_finite() {
            self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE)
        } else {
            1.0
        };
        ThemeSettings {
            preset: self.theme_preset,
            text_scale,
        }
    }

    pub fn from_storage_text(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

/// Accent used for links and the primary buttons.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const ACCENT_HOVER: egui::Color32 = egui::Color32::from_rgb(30, 64, 175);

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(243, 244, 246);
            v.window_fill = egui::Color32::WHITE;
            v
        }
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(24, 26, 31);
            v.window_fill = egui::Color32::from_rgb(33, 37, 43);
            v
        }
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT_HOVER.gamma_multiply(0.85);
    visuals
}

pub fn card_fill(theme: ThemeSettings) -> egui::Color32 {
    match theme.preset {
        ThemePreset::Light => egui::Color32::WHITE,
        ThemePreset::Dark => egui::Color32::from_rgb(40, 44, 52),
    }
}

pub fn muted_text(theme: ThemeSettings) -> egui::Color32 {
    match theme.preset {
        ThemePreset::Light => egui::Color32::from_rgb(75, 85, 99),
        ThemePreset::Dark => egui::Color32::from_rgb(171, 178, 191),
    }
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}
