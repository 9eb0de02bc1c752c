use eframe::egui;

use super::nav::Section;
use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{card, section_header, Page};

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let header = page.animated(ui, "experience_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(
            ui,
            "Professional Experience",
            Some("A proven track record of delivering innovative blockchain solutions across diverse industries."),
        )
    });
    page.anchor(Section::Experience, &header.inner);
    ui.add_space(PADDING * 2.0);

    let sequence = page.stagger(200, Animation::FadeLeft);
    page.staggered(ui, "experience", sequence, &portfolio.experience, 1, |ui, page, exp| {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&exp.company).size(CARD_TITLE_SIZE).strong());
                    ui.label(egui::RichText::new(&exp.role).color(ACCENT));
                    ui.label(egui::RichText::new(format!("📅 {}", exp.period)).small().weak());
                });
                if let Some(website) = &exp.website {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.button("↗").on_hover_text(website).clicked() {
                            page.open_url(ui, website);
                        }
                    });
                }
            });
            ui.add_space(ITEM_SPACING);
            ui.label(&exp.description);
            if !exp.achievements.is_empty() {
                ui.add_space(ITEM_SPACING);
                for achievement in &exp.achievements {
                    ui.label(format!("• {achievement}"));
                }
            }
        });
    });
    ui.add_space(SECTION_SPACING);
}
