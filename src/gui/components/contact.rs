use eframe::egui;

use super::nav::{is_compact, Section};
use crate::animation::Animation;
use crate::contact::ContactForm;
use crate::content::Portfolio;
use crate::gui::constants::*;
use crate::gui::page::{card, section_header, Page};

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio, form: &mut ContactForm) {
    let header = page.animated(ui, "contact_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(
            ui,
            "Let's Work Together",
            Some("Ready to discuss your next blockchain project? I'm always interested in innovative opportunities and collaborations."),
        )
    });
    page.anchor(Section::Contact, &header.inner);
    ui.add_space(PADDING * 2.0);

    if is_compact(ui.available_width()) {
        channels(ui, page, portfolio);
        ui.add_space(PADDING);
        message_form(ui, page, form);
    } else {
        ui.columns(2, |cols| {
            channels(&mut cols[0], page, portfolio);
            message_form(&mut cols[1], page, form);
        });
    }
    ui.add_space(SECTION_SPACING);
}

fn channels(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio) {
    let contact = &portfolio.contact;
    page.animated(ui, "contact_channels", page.section(Animation::FadeRight), |ui, page| {
        ui.label(egui::RichText::new("Get In Touch").size(CARD_TITLE_SIZE).strong());
        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new(&contact.pitch).size(BODY_SIZE).weak());
        ui.add_space(PADDING);

        let sequence = page.stagger(200, Animation::SlideUp);
        page.staggered(ui, "contact_channel", sequence, &contact.channels, 1, |ui, page, channel| {
            let text = format!("{}\n{}", channel.title, channel.subtitle);
            let button = egui::Button::new(egui::RichText::new(text)).min_size(egui::vec2(ui.available_width(), 0.0));
            if ui.add(button).clicked() {
                page.open_url(ui, &channel.url);
            }
        });
    });
}

fn message_form(ui: &mut egui::Ui, page: &mut Page, form: &mut ContactForm) {
    page.animated(ui, "contact_form", page.section(Animation::FadeLeft), |ui, page| {
        card(ui, |ui| {
            ui.label(egui::RichText::new("Send a Message").size(CARD_TITLE_SIZE).strong());
            ui.label(egui::RichText::new("Fill out the form below and I'll get back to you within 24 hours.").weak());
            ui.add_space(PADDING);

            let enabled = !form.is_submitting();
            let width = ui.available_width();
            let fields = &mut form.fields;
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut fields.name)
                    .hint_text("Your Name")
                    .desired_width(width),
            );
            ui.add_space(ITEM_SPACING);
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut fields.email)
                    .hint_text("Your Email")
                    .desired_width(width),
            );
            ui.add_space(ITEM_SPACING);
            ui.add_enabled(
                enabled,
                egui::TextEdit::multiline(&mut fields.message)
                    .hint_text("Tell me about your project...")
                    .desired_rows(6)
                    .desired_width(width),
            );
            ui.add_space(PADDING);

            let label = if enabled { "➤ Send Message" } else { "Sending Message..." };
            let button = egui::Button::new(label).min_size(egui::vec2(width, 32.0));
            if ui.add_enabled(enabled, button).clicked() {
                if let Some(toast) = form.submit(page.now) {
                    page.toast(toast);
                }
            }
            if !enabled {
                ui.add(egui::Spinner::new());
            }
        });
    });
}
