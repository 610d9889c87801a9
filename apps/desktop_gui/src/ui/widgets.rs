//! Reusable cards, chips and empty states shared by the tab panels.

use eframe::egui;
use shared::domain::MenuItem;

use crate::ui::theme::{Palette, CARD_RADIUS, CHIP_RADIUS};

pub fn format_price(currency_prefix: &str, price: f64) -> String {
    format!("{currency_prefix}{price:.2}")
}

pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} items")
}

pub fn card_frame(palette: Palette) -> egui::Frame {
    egui::Frame::NONE
        .fill(palette.card_background)
        .corner_radius(CARD_RADIUS)
        .inner_margin(egui::Margin::same(16))
}

pub fn section_header(ui: &mut egui::Ui, palette: Palette, title: &str) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(title)
            .strong()
            .size(18.0)
            .color(palette.text_strong),
    );
    ui.add_space(4.0);
}

/// Returns true when clicked.
pub fn chip(ui: &mut egui::Ui, palette: Palette, label: &str, selected: bool) -> bool {
    let (fill, stroke, text) = if selected {
        (
            palette.accent,
            palette.accent,
            egui::RichText::new(label).strong().color(egui::Color32::WHITE),
        )
    } else {
        (
            palette.input_background,
            palette.border,
            egui::RichText::new(label).color(palette.text_muted),
        )
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(CHIP_RADIUS)
            .min_size(egui::vec2(72.0, 30.0)),
    )
    .clicked()
}

pub fn menu_card(ui: &mut egui::Ui, palette: Palette, currency_prefix: &str, item: &MenuItem) {
    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&item.name)
                    .strong()
                    .size(16.0)
                    .color(palette.text_strong),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format_price(currency_prefix, item.price))
                        .strong()
                        .size(16.0)
                        .color(palette.accent),
                );
            });
        });
        ui.label(
            egui::RichText::new(item.course.label())
                .size(12.0)
                .color(palette.text_muted),
        );
        ui.label(egui::RichText::new(&item.description).color(palette.text_body));
    });
    ui.add_space(12.0);
}

pub fn empty_state(
    ui: &mut egui::Ui,
    palette: Palette,
    icon: Option<&str>,
    text: &str,
    subtext: Option<&str>,
) {
    card_frame(palette)
        .inner_margin(egui::Margin::same(40))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                if let Some(icon) = icon {
                    ui.label(egui::RichText::new(icon).size(48.0));
                }
                ui.label(egui::RichText::new(text).size(16.0).color(palette.text_faint));
                if let Some(subtext) = subtext {
                    ui.small(subtext);
                }
            });
        });
}
