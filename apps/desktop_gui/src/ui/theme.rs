//! Light palette matching the TasteHub brand colors.

use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub input_background: egui::Color32,
    pub border: egui::Color32,
    pub accent: egui::Color32,
    pub positive: egui::Color32,
    pub text_strong: egui::Color32,
    pub text_body: egui::Color32,
    pub text_muted: egui::Color32,
    pub text_faint: egui::Color32,
}

pub const PALETTE: Palette = Palette {
    app_background: egui::Color32::from_rgb(248, 249, 250),
    card_background: egui::Color32::WHITE,
    input_background: egui::Color32::from_rgb(248, 249, 250),
    border: egui::Color32::from_rgb(224, 224, 224),
    accent: egui::Color32::from_rgb(231, 76, 60),
    positive: egui::Color32::from_rgb(39, 174, 96),
    text_strong: egui::Color32::from_rgb(26, 26, 26),
    text_body: egui::Color32::from_rgb(68, 68, 68),
    text_muted: egui::Color32::from_rgb(102, 102, 102),
    text_faint: egui::Color32::from_rgb(153, 153, 153),
};

pub const CARD_RADIUS: u8 = 12;
pub const CHIP_RADIUS: u8 = 20;

pub fn visuals(palette: Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(palette.text_strong);
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.app_background;
    visuals.extreme_bg_color = palette.input_background;
    visuals.faint_bg_color = palette.input_background;
    visuals.selection.bg_fill = palette.accent;
    visuals.hyperlink_color = palette.accent;
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.hovered.bg_fill = palette.accent.gamma_multiply(0.85);

    let radius = egui::CornerRadius::same(8);
    visuals.widgets.noninteractive.corner_radius = radius;
    visuals.widgets.inactive.corner_radius = radius;
    visuals.widgets.hovered.corner_radius = radius;
    visuals.widgets.active.corner_radius = radius;
    visuals.widgets.open.corner_radius = radius;

    visuals
}
