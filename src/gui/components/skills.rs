use eframe::egui;

use super::nav::Section;
use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{badge, card, columns_for, section_header, Page};

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let header = page.animated(ui, "skills_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(
            ui,
            "Technical Expertise",
            Some("Comprehensive skill set spanning blockchain development, modern web technologies, and enterprise-grade infrastructure."),
        )
    });
    page.anchor(Section::Expertise, &header.inner);
    ui.add_space(PADDING * 2.0);

    let columns = columns_for(ui.available_width(), 3);
    let sequence = page.stagger(150, Animation::RotateIn);
    page.staggered(ui, "skills", sequence, &portfolio.skills, columns, |ui, _, category| {
        card(ui, |ui| {
            ui.label(egui::RichText::new(&category.title).size(CARD_TITLE_SIZE).strong());
            if !category.description.is_empty() {
                ui.label(egui::RichText::new(&category.description).small().weak());
            }
            ui.add_space(ITEM_SPACING);
            ui.horizontal_wrapped(|ui| {
                for skill in &category.skills {
                    badge(ui, skill);
                }
            });
        });
    });
    ui.add_space(SECTION_SPACING);
}
