//! Results view - one card per article with summary expansion

use super::{LandingApp, View};
use crate::api::Article;
use crate::theme::colors;
use eframe::egui;

impl LandingApp {
    pub(crate) fn render_results(&mut self, ui: &mut egui::Ui) {
        if ui.button("<  New Search").clicked() {
            self.view = View::Hero;
            return;
        }

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("Top Results")
                .color(colors::TEXT_PRIMARY)
                .strong()
                .size(24.0),
        );
        ui.add_space(10.0);

        if self.articles.is_empty() {
            ui.label(
                egui::RichText::new("No articles matched your search.")
                    .color(colors::TEXT_MUTED),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let articles = self.articles.clone();
                for article in &articles {
                    self.render_article_card(ui, article);
                    ui.add_space(8.0);
                }
            });
    }

    fn render_article_card(&mut self, ui: &mut egui::Ui, article: &Article) {
        egui::Frame::new()
            .fill(colors::BG_ELEVATED)
            .stroke(egui::Stroke::new(1.0, colors::ACCENT_SOFT))
            .corner_radius(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    egui::RichText::new(&article.headline)
                        .color(colors::TEXT_PRIMARY)
                        .strong()
                        .size(16.0),
                );
                ui.label(
                    egui::RichText::new(article.source())
                        .color(colors::TEXT_SECONDARY)
                        .size(12.0),
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let summary_label = if self.expanded_card == Some(article.id) {
                        "Hide Summary"
                    } else {
                        "View Summary"
                    };
                    if ui.button(summary_label).clicked() {
                        self.toggle_summary(article.id);
                    }

                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new("Chat with this Article")
                                    .color(colors::TEXT_PRIMARY),
                            )
                            .fill(colors::ACCENT),
                        )
                        .clicked()
                    {
                        self.start_chat(article.clone());
                    }

                    if self.pending_summary_for(article.id) {
                        ui.label(
                            egui::RichText::new("Summarizing...")
                                .color(colors::TEXT_MUTED)
                                .size(12.0),
                        );
                    }
                });

                if self.expanded_card == Some(article.id) {
                    if let Some(summary) = self.summaries.get(&article.id) {
                        ui.add_space(8.0);
                        ui.separator();
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(summary).color(colors::TEXT_SECONDARY),
                        );
                    }
                }
            });
    }
}
