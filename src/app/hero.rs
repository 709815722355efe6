//! Hero view - headline, search box, feature cards, footer

use super::LandingApp;
use crate::theme::colors;
use eframe::egui;

/// "How It Works" cards
const FEATURES: &[(&str, &str)] = &[
    (
        "Semantic Search",
        "Find articles using natural language queries that understand your intent.",
    ),
    (
        "AI Summaries",
        "Get instant, concise TL;DR summaries of any article to save time.",
    ),
    (
        "Chat Interface",
        "Ask specific, nuanced questions about the content of an article and get answers.",
    ),
];

impl LandingApp {
    pub(crate) fn render_hero(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);

                    egui::Frame::new()
                        .stroke(egui::Stroke::new(1.0, colors::ACCENT_SOFT))
                        .corner_radius(12.0)
                        .inner_margin(egui::Margin::symmetric(12, 6))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new("Skip the reading, get the knowledge")
                                    .color(colors::ACCENT)
                                    .size(12.0),
                            );
                        });

                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("find the article,")
                            .color(colors::TEXT_PRIMARY)
                            .strong()
                            .size(40.0),
                    );
                    ui.label(
                        egui::RichText::new("skip the reading.")
                            .color(colors::ACCENT)
                            .strong()
                            .size(40.0),
                    );

                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "An intelligent bot that cuts through the internet's noise. \
                             Find articles with semantic search and get instant summaries.",
                        )
                        .color(colors::TEXT_SECONDARY)
                        .size(15.0),
                    );

                    ui.add_space(28.0);
                    self.render_search_box(ui);

                    if self.pending_search() {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Searching...")
                                .color(colors::TEXT_MUTED)
                                .size(12.0),
                        );
                    }

                    ui.add_space(70.0);
                    self.render_features(ui);

                    ui.add_space(30.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("© 2024 TLDR Bot. Built with passion by a solo developer.")
                            .color(colors::TEXT_MUTED)
                            .size(11.0),
                    );
                    ui.add_space(12.0);
                });
            });
    }

    fn render_search_box(&mut self, ui: &mut egui::Ui) {
        let search_width = ui.available_width().min(560.0);
        ui.allocate_ui(egui::vec2(search_width, 40.0), |ui| {
            ui.horizontal(|ui| {
                let input = ui.add_sized(
                    egui::vec2(ui.available_width() - 90.0, 36.0),
                    egui::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Search for any topic..."),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let clicked = ui
                    .add_sized(
                        egui::vec2(82.0, 36.0),
                        egui::Button::new(
                            egui::RichText::new("Search").color(colors::TEXT_PRIMARY),
                        )
                        .fill(colors::ACCENT),
                    )
                    .clicked();

                if submitted || clicked {
                    self.start_search();
                }
            });
        });
    }

    fn render_features(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("How It Works")
                .color(colors::TEXT_PRIMARY)
                .strong()
                .size(24.0),
        );
        ui.label(
            egui::RichText::new("Powered by cutting-edge AI technology")
                .color(colors::TEXT_SECONDARY)
                .size(13.0),
        );
        ui.add_space(16.0);

        ui.columns(FEATURES.len(), |columns| {
            for (column, (title, blurb)) in columns.iter_mut().zip(FEATURES) {
                egui::Frame::new()
                    .fill(colors::BG_ELEVATED)
                    .stroke(egui::Stroke::new(1.0, colors::ACCENT_SOFT))
                    .corner_radius(8.0)
                    .inner_margin(14.0)
                    .show(column, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(
                            egui::RichText::new(*title)
                                .color(colors::ACCENT)
                                .strong()
                                .size(15.0),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            egui::RichText::new(*blurb)
                                .color(colors::TEXT_SECONDARY)
                                .size(12.0),
                        );
                    });
            }
        });
    }
}
