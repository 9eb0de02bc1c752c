use eframe::egui;

use super::nav::Section;
use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{card, Page};
use crate::toast::Toast;
use crate::visibility::RegionSpec;

/// Landing block; visible from the first frame, so every region skips the
/// initial reveal
pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let profile = &portfolio.profile;
    ui.add_space(SECTION_SPACING);

    let title = page.animated(ui, "hero_title", RegionSpec::new(Animation::ScaleUp).skip_initial(true), |ui, _| {
        ui.vertical_centered(|ui| {
            let response = ui.label(
                egui::RichText::new(&profile.name)
                    .size(HERO_TITLE_SIZE)
                    .strong()
                    .color(ACCENT),
            );
            ui.add_space(ITEM_SPACING);
            ui.label(egui::RichText::new(&profile.headline).size(HERO_SUBTITLE_SIZE));
            response
        })
        .inner
    });
    page.anchor(Section::Home, &title.inner);

    ui.add_space(PADDING);
    page.animated(ui, "hero_summary", RegionSpec::new(Animation::FadeUp).delay(200).skip_initial(true), |ui, _| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&profile.summary).size(BODY_SIZE).weak());
        });
    });

    ui.add_space(PADDING);
    page.animated(ui, "hero_actions", RegionSpec::new(Animation::SlideUp).delay(400).skip_initial(true), |ui, page| {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                if let Some(url) = &profile.resume_url {
                    if ui.button("⬇ Download Resume").clicked() {
                        page.open_url(ui, url);
                        page.toast(Toast::info("Resume Download", "Opening resume in a new tab..."));
                    }
                }
                if ui.button("✉ Get In Touch").clicked() {
                    page.request_scroll(Section::Contact);
                }
            });
        });
    });

    ui.add_space(SECTION_SPACING / 2.0);
    let stats = page.stagger(150, Animation::ScaleUp).skip_initial(true);
    page.staggered(ui, "hero_stats", stats, &portfolio.stats, portfolio.stats.len(), |ui, _, stat| {
        card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(&stat.number).size(STAT_SIZE).strong().color(ACCENT_SECONDARY));
                ui.label(egui::RichText::new(&stat.label).weak());
            });
        });
    });
    ui.add_space(SECTION_SPACING);
}
