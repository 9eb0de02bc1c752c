use eframe::egui;

use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{card, columns_for, section_header, Page};

enum Panel {
    Education,
    Certifications,
}

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    page.animated(ui, "education_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(ui, "Education & Certifications", None)
    });
    ui.add_space(PADDING * 2.0);

    let panels = [Panel::Education, Panel::Certifications];
    let columns = columns_for(ui.available_width(), 2);
    let sequence = page.stagger(300, Animation::RotateIn);
    page.staggered(ui, "education", sequence, &panels, columns, |ui, _, panel| {
        card(ui, |ui| match panel {
            Panel::Education => {
                ui.label(egui::RichText::new("🎓 Education").size(CARD_TITLE_SIZE).strong());
                ui.label(egui::RichText::new("Academic Foundation").small().weak());
                ui.add_space(ITEM_SPACING);
                for entry in &portfolio.education {
                    ui.label(egui::RichText::new(&entry.degree).strong());
                    ui.label(&entry.school);
                    ui.label(egui::RichText::new(&entry.period).small().weak());
                    ui.add_space(ITEM_SPACING);
                }
            }
            Panel::Certifications => {
                ui.label(egui::RichText::new("🏅 Certifications").size(CARD_TITLE_SIZE).strong());
                ui.label(egui::RichText::new("Professional Credentials").small().weak());
                ui.add_space(ITEM_SPACING);
                for cert in &portfolio.certifications {
                    ui.label(egui::RichText::new(&cert.name).strong());
                    if let Some(abbreviation) = &cert.abbreviation {
                        ui.label(egui::RichText::new(format!("({abbreviation})")).small().weak());
                    }
                    ui.add_space(ITEM_SPACING);
                }
            }
        });
    });
    ui.add_space(SECTION_SPACING);
}
