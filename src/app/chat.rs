//! Chat view - per-article question and answer thread

use super::{LandingApp, View};
use crate::theme::colors;
use eframe::egui;

impl LandingApp {
    pub(crate) fn render_chat(&mut self, ui: &mut egui::Ui) {
        let Some(article) = self.active_article.clone() else {
            // No article selected, nothing to chat about
            self.view = View::Results;
            return;
        };

        if ui.button("<  Back to Results").clicked() {
            self.view = View::Results;
            return;
        }

        ui.add_space(10.0);
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
                ui.separator();

                let input_height = 48.0;
                let history_height = (ui.available_height() - input_height).max(120.0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .max_height(history_height)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &self.chat_messages {
                            render_bubble(ui, message.from_user, &message.text);
                            ui.add_space(6.0);
                        }
                        if self.pending_chat() {
                            render_bubble(ui, false, "Thinking...");
                        }
                    });

                ui.separator();
                self.render_chat_input(ui);
            });
    }

    fn render_chat_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let input = ui.add_sized(
                egui::vec2(ui.available_width() - 70.0, 32.0),
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("Ask about this article..."),
            );
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let clicked = ui
                .add_sized(
                    egui::vec2(62.0, 32.0),
                    egui::Button::new(egui::RichText::new("Send").color(colors::TEXT_PRIMARY))
                        .fill(colors::ACCENT),
                )
                .clicked();

            if submitted || clicked {
                self.send_chat_message();
            }
        });
    }
}

/// One message bubble; user messages on the right in accent color, bot
/// answers on the left.
fn render_bubble(ui: &mut egui::Ui, from_user: bool, text: &str) {
    let layout = if from_user {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        let fill = if from_user {
            colors::ACCENT
        } else {
            colors::BG_HOVER
        };
        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.7);
                ui.label(egui::RichText::new(text).color(colors::TEXT_PRIMARY));
            });
    });
}
