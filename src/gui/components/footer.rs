use chrono::Datelike;
use eframe::egui;

use crate::animation::Animation;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::Page;

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let profile = &portfolio.profile;
    ui.separator();
    ui.add_space(PADDING);

    page.animated(ui, "footer", page.section(Animation::FadeUp), |ui, page| {
        ui.vertical_centered(|ui| {
            let sequence = page.stagger(150, Animation::ScaleUp);
            let columns = profile.socials.len();
            page.staggered(ui, "footer_socials", sequence, &profile.socials, columns, |ui, page, social| {
                ui.vertical_centered(|ui| {
                    if ui.button(&social.label).clicked() {
                        page.open_url(ui, &social.url);
                    }
                });
            });

            ui.label(copyright(chrono::Local::now().year(), &profile.name));
            if !profile.tagline.is_empty() {
                ui.label(egui::RichText::new(&profile.tagline).small().weak());
            }
        });
    });
    ui.add_space(PADDING);
}

fn copyright(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026, "Lucas Wang"), "© 2026 Lucas Wang. All rights reserved.");
    }
}
