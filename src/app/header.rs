//! Header bar with the brand and request status

use super::{LandingApp, View};
use crate::theme::colors;
use crate::time::now_seconds;
use eframe::egui;

impl LandingApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        ui.horizontal(|ui| {
            // LEFT: brand, click returns to the hero page
            let brand = egui::RichText::new("TLDR Bot")
                .color(colors::ACCENT)
                .strong()
                .size(16.0);
            if ui
                .add(egui::Label::new(brand).sense(egui::Sense::click()))
                .clicked()
            {
                self.view = View::Hero;
            }

            ui.label(
                egui::RichText::new("skip the reading, get the knowledge")
                    .color(colors::TEXT_MUTED)
                    .size(11.0),
            );

            // RIGHT: status and stats (right-to-left order)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (status_color, status_text) = if self.request_in_flight() {
                    (egui::Color32::from_rgb(200, 200, 100), "Working...")
                } else if self.error.is_some() {
                    (colors::ERROR, "Error")
                } else {
                    (egui::Color32::from_rgb(100, 200, 100), "Ready")
                };
                ui.colored_label(status_color, egui::RichText::new(status_text).size(11.0));

                ui.add_space(10.0);

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY)
                        .monospace()
                        .size(11.0),
                );

                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));

                ui.label(
                    egui::RichText::new(format!("{} dots", self.dot_count()))
                        .color(colors::TEXT_MUTED)
                        .monospace()
                        .size(11.0),
                );

                if !self.articles.is_empty() {
                    ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED).size(11.0));
                    ui.label(
                        egui::RichText::new(format!("{} results", self.articles.len()))
                            .color(colors::TEXT_MUTED)
                            .monospace()
                            .size(11.0),
                    );
                }
            });
        });
    }
}

/// FPS counter using platform-agnostic time
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        let now = now_seconds() * 1000.0;
        self.frames.push(now);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frames.len() < 2 {
            return 0.0;
        }
        let elapsed = self.frames.last().unwrap() - self.frames.first().unwrap();
        if elapsed == 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
