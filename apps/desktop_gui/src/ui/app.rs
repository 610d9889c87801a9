use eframe::egui;
use menu_core::ViewController;
use shared::protocol::{Tab, UserAction};

use crate::config::Settings;
use crate::controller::events::{StatusBanner, StatusBannerSeverity};
use crate::controller::orchestration::dispatch_user_actions;
use crate::ui::{
    panels::{show_add, show_filter, show_home, PanelContext},
    theme::{self, Palette, PALETTE},
};

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "🏠",
        Tab::Add => "➕",
        Tab::Filter => "🔍",
    }
}

pub struct MenuGuiApp {
    controller: ViewController,
    settings: Settings,
    palette: Palette,
    pending_actions: Vec<UserAction>,
    status: String,
    status_banner: Option<StatusBanner>,
    theme_applied: bool,
}

impl MenuGuiApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: ViewController::new(),
            settings,
            palette: PALETTE,
            pending_actions: Vec::new(),
            status: "Ready".to_string(),
            status_banner: None,
            theme_applied: false,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals(self.palette));
            self.theme_applied = true;
        }
    }

    fn show_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("app_header")
            .frame(
                egui::Frame::NONE
                    .fill(self.palette.card_background)
                    .inner_margin(egui::Margin::same(16))
                    .stroke(egui::Stroke::new(1.0, self.palette.border)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.settings.window_title)
                            .strong()
                            .size(22.0)
                            .color(self.palette.text_strong),
                    );
                });
            });
    }

    fn show_bottom_nav(&mut self, ctx: &egui::Context) {
        let active = self.controller.active_tab();
        let palette = self.palette;
        let pending = &mut self.pending_actions;

        egui::TopBottomPanel::bottom("bottom_nav")
            .frame(
                egui::Frame::NONE
                    .fill(palette.card_background)
                    .inner_margin(egui::Margin::symmetric(0, 8))
                    .stroke(egui::Stroke::new(1.0, palette.border)),
            )
            .show(ctx, |ui| {
                ui.columns(Tab::ALL.len(), |columns| {
                    for (column, tab) in columns.iter_mut().zip(Tab::ALL) {
                        column.vertical_centered(|ui| {
                            let is_active = tab == active;
                            let label_color = if is_active {
                                palette.accent
                            } else {
                                palette.text_faint
                            };
                            let mut label = egui::RichText::new(format!(
                                "{}\n{}",
                                tab_icon(tab),
                                tab.label()
                            ))
                            .color(label_color);
                            if is_active {
                                label = label.strong();
                            }
                            let button = egui::Button::new(label).frame(false);
                            if ui.add(button).clicked() {
                                pending.push(UserAction::SelectTab { tab });
                            }
                        });
                    }
                });
            });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let (fill, stroke) = match banner.severity {
            StatusBannerSeverity::Success => (
                egui::Color32::from_rgb(39, 174, 96),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(30, 132, 73)),
            ),
            StatusBannerSeverity::Info => (
                egui::Color32::from_rgb(84, 110, 122),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(55, 71, 79)),
            ),
            StatusBannerSeverity::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}: {}", banner.title, banner.message))
                            .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                            self.pending_actions.push(UserAction::DismissNotice);
                        }
                    });
                });
            });
        ui.add_space(12.0);
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        let view = self.controller.snapshot();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(self.palette.app_background)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_status_banner(ui);

                        let cx = PanelContext {
                            view: &view,
                            palette: self.palette,
                            currency_prefix: &self.settings.currency_prefix,
                        };
                        match view.active_tab {
                            Tab::Home => show_home(ui, &cx),
                            Tab::Add => show_add(ui, &cx, &mut self.pending_actions),
                            Tab::Filter => show_filter(ui, &cx, &mut self.pending_actions),
                        }

                        ui.add_space(8.0);
                        ui.small(egui::RichText::new(&self.status).weak());
                    });
            });
    }

    fn flush_pending_actions(&mut self) {
        if self.pending_actions.is_empty() {
            return;
        }
        if let Some(banner) = dispatch_user_actions(
            &mut self.controller,
            &mut self.pending_actions,
            &mut self.status,
        ) {
            self.status_banner = Some(banner);
        }
    }
}

impl eframe::App for MenuGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);

        self.show_header(ctx);
        self.show_bottom_nav(ctx);
        self.show_content(ctx);

        if !self.pending_actions.is_empty() {
            self.flush_pending_actions();
            ctx.request_repaint();
        }
    }
}
