use eframe::egui;

use super::nav::{is_compact, Section};
use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{card, section_header, Page};

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let header = page.animated(ui, "about_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(ui, "About Me", None)
    });
    page.anchor(Section::About, &header.inner);
    ui.add_space(PADDING * 2.0);

    if is_compact(ui.available_width()) {
        story(ui, page, portfolio);
        ui.add_space(PADDING);
        portrait(ui, page, portfolio);
    } else {
        ui.columns(2, |cols| {
            story(&mut cols[0], page, portfolio);
            portrait(&mut cols[1], page, portfolio);
        });
    }
    ui.add_space(SECTION_SPACING);
}

fn story(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let about = &portfolio.about;
    page.animated(ui, "about_story", page.section(Animation::FadeRight), |ui, page| {
        for paragraph in &about.paragraphs {
            ui.label(egui::RichText::new(paragraph).size(BODY_SIZE));
            ui.add_space(ITEM_SPACING * 2.0);
        }

        let highlights = page.stagger(200, Animation::ScaleUp);
        page.staggered(ui, "about_highlights", highlights, &about.highlights, 2, |ui, _, highlight| {
            card(ui, |ui| {
                ui.label(egui::RichText::new(&highlight.title).strong());
                ui.label(egui::RichText::new(&highlight.subtitle).small().weak());
            });
        });
    });
}

/// Stand-in for a photo: monogram and headline
fn portrait(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let profile = &portfolio.profile;
    page.animated(ui, "about_portrait", page.section(Animation::FadeLeft), |ui, _| {
        card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(PADDING);
                ui.label(
                    egui::RichText::new(monogram(&profile.name))
                        .size(HERO_TITLE_SIZE * 1.5)
                        .strong()
                        .color(ACCENT_SECONDARY),
                );
                ui.label(egui::RichText::new(&profile.name).size(CARD_TITLE_SIZE).strong());
                ui.label(egui::RichText::new(&profile.headline).weak());
                ui.add_space(PADDING);
            });
        });
    });
}

/// "Lucas Wang" -> "LW"
fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
