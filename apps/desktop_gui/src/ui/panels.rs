//! Home, Add and Filter tab bodies. Panels only read the snapshot and queue
//! actions; the app applies them after the frame.

use eframe::egui;
use shared::{
    domain::Course,
    protocol::{UserAction, ViewSnapshot},
};

use crate::ui::{
    theme::Palette,
    widgets::{
        card_frame, chip, empty_state, format_price, item_count_label, menu_card,
        section_header, showing_label,
    },
};

pub struct PanelContext<'a> {
    pub view: &'a ViewSnapshot,
    pub palette: Palette,
    pub currency_prefix: &'a str,
}

pub fn show_home(ui: &mut egui::Ui, cx: &PanelContext<'_>) {
    let palette = cx.palette;

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("🍽").size(48.0));
            ui.heading("TasteHub Menu");
            ui.label(egui::RichText::new("Professional Menu Manager").color(palette.text_muted));
        });
    });
    ui.add_space(16.0);

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(cx.view.total_items.to_string())
                    .strong()
                    .size(36.0)
                    .color(palette.accent),
            );
            ui.label(egui::RichText::new("Total Menu Items").color(palette.text_muted));
        });
    });
    ui.add_space(16.0);

    section_header(ui, palette, "Price Averages by Course");
    for avg in &cx.view.averages {
        egui::Frame::NONE
            .fill(palette.card_background)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(avg.course.label()).strong().size(16.0));
                        ui.label(
                            egui::RichText::new(item_count_label(avg.count))
                                .size(12.0)
                                .color(palette.text_faint),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format_price(cx.currency_prefix, avg.average))
                                .strong()
                                .size(18.0)
                                .color(palette.positive),
                        );
                    });
                });
            });
        ui.add_space(8.0);
    }

    section_header(ui, palette, "All Menu Items");
    if cx.view.items.is_empty() {
        empty_state(
            ui,
            palette,
            Some("📋"),
            "No menu items yet",
            Some("Add items using the Add tab"),
        );
    } else {
        for item in &cx.view.items {
            menu_card(ui, palette, cx.currency_prefix, item);
        }
    }
}

fn form_text_field(
    ui: &mut egui::Ui,
    palette: Palette,
    id: &'static str,
    label: &str,
    hint: &str,
    current: &str,
    multiline: bool,
) -> Option<String> {
    ui.label(egui::RichText::new(label).strong().color(palette.text_body));
    let mut buf = current.to_string();
    let edit = if multiline {
        egui::TextEdit::multiline(&mut buf).desired_rows(4)
    } else {
        egui::TextEdit::singleline(&mut buf)
    }
    .id_salt(id)
    .hint_text(hint)
    .desired_width(f32::INFINITY);
    let response = ui.add(edit);
    ui.add_space(12.0);
    response.changed().then_some(buf)
}

pub fn show_add(ui: &mut egui::Ui, cx: &PanelContext<'_>, actions: &mut Vec<UserAction>) {
    let palette = cx.palette;
    let form = &cx.view.form;

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Add New Menu Item").strong().size(20.0));
        ui.add_space(16.0);

        if let Some(value) = form_text_field(
            ui,
            palette,
            "add_item_name",
            "Item Name",
            "e.g., Caesar Salad",
            &form.name,
            false,
        ) {
            actions.push(UserAction::SetName { value });
        }

        ui.label(egui::RichText::new("Course Type").strong().color(palette.text_body));
        ui.horizontal_wrapped(|ui| {
            for course in Course::FORM_CHOICES {
                let selected = form.course == Some(course);
                if chip(ui, palette, course.label(), selected) {
                    actions.push(UserAction::SetCourse {
                        course: Some(course),
                    });
                }
            }
        });
        ui.add_space(12.0);

        if let Some(value) = form_text_field(
            ui,
            palette,
            "add_item_description",
            "Description",
            "Describe the dish...",
            &form.description,
            true,
        ) {
            actions.push(UserAction::SetDescription { value });
        }

        let price_label = format!("Price ({})", cx.currency_prefix.trim());
        if let Some(value) = form_text_field(
            ui,
            palette,
            "add_item_price",
            &price_label,
            "0.00",
            &form.price,
            false,
        ) {
            actions.push(UserAction::SetPrice { value });
        }

        let submit = egui::Button::new(
            egui::RichText::new("✓ Add to Menu")
                .strong()
                .size(16.0)
                .color(egui::Color32::WHITE),
        )
        .fill(palette.positive)
        .min_size(egui::vec2(ui.available_width(), 44.0));
        if ui.add(submit).clicked() {
            actions.push(UserAction::SubmitAddForm);
        }
    });
    ui.add_space(20.0);

    section_header(
        ui,
        palette,
        &format!("Manage Items ({})", cx.view.total_items),
    );
    if cx.view.items.is_empty() {
        empty_state(ui, palette, None, "No items to manage", None);
        return;
    }

    for item in &cx.view.items {
        egui::Frame::NONE
            .fill(palette.input_background)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&item.name).strong());
                        ui.label(
                            egui::RichText::new(format!(
                                "{} • {}",
                                item.course,
                                format_price(cx.currency_prefix, item.price)
                            ))
                            .size(12.0)
                            .color(palette.text_muted),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new(
                            egui::RichText::new("Delete")
                                .strong()
                                .size(12.0)
                                .color(egui::Color32::WHITE),
                        )
                        .fill(palette.accent);
                        if ui.add(delete).clicked() {
                            actions.push(UserAction::DeleteItem { id: item.id });
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }
}

pub fn show_filter(ui: &mut egui::Ui, cx: &PanelContext<'_>, actions: &mut Vec<UserAction>) {
    let palette = cx.palette;
    let current = cx.view.filter_course;

    card_frame(palette).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Filter Menu Items").strong().size(20.0));
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            if chip(ui, palette, "All", current.is_none()) {
                actions.push(UserAction::SetFilterCourse { course: None });
            }
            for course in Course::FORM_CHOICES {
                if chip(ui, palette, course.label(), current == Some(course)) {
                    actions.push(UserAction::SetFilterCourse {
                        course: Some(course),
                    });
                }
            }
        });

        ui.add_space(12.0);
        egui::Frame::NONE
            .fill(palette.input_background)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(showing_label(
                            cx.view.filtered_items.len(),
                            cx.view.total_items,
                        ))
                        .color(palette.text_muted),
                    );
                });
            });
    });
    ui.add_space(20.0);

    if cx.view.filtered_items.is_empty() {
        empty_state(
            ui,
            palette,
            Some("🔍"),
            "No items found",
            Some("Try a different filter"),
        );
    } else {
        for item in &cx.view.filtered_items {
            menu_card(ui, palette, cx.currency_prefix, item);
        }
    }
}
