//! Featured projects and the remotely loaded project list

use eframe::egui;

use super::nav::Section;
use crate::animation::Animation;
use crate::content::{FeaturedProject, Portfolio};
use crate::gui::constants::*;
use crate::gui::page::{badge, card, columns_for, section_header, Page};
use crate::projects::{showing_label, LoadState, Project, ProjectLoader};
use crate::toast::Toast;

pub fn ui(ui: &mut egui::Ui, page: &mut Page, portfolio: &Portfolio, loader: &mut ProjectLoader) {
    let header = page.animated(ui, "projects_header", page.section(Animation::FadeUp), |ui, _| {
        section_header(
            ui,
            "Featured Projects",
            Some("Showcasing innovative blockchain solutions that have collectively raised millions and served thousands of users."),
        )
    });
    page.anchor(Section::Portfolio, &header.inner);
    ui.add_space(PADDING * 2.0);

    let columns = columns_for(ui.available_width(), 3);
    let sequence = page.stagger(200, Animation::ScaleUp);
    page.staggered(ui, "featured_projects", sequence, &portfolio.projects, columns, featured_card);

    ui.add_space(SECTION_SPACING / 2.0);
    remote_projects(ui, page, loader);
    ui.add_space(SECTION_SPACING);
}

fn open_project(ui: &egui::Ui, page: &mut Page, project: &FeaturedProject) {
    page.open_url(ui, &project.link);
    page.toast(Toast::info("Opening Project", format!("Redirecting to {}...", project.title)));
}

fn featured_card(ui: &mut egui::Ui, page: &mut Page, project: &FeaturedProject) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            let title = egui::RichText::new(&project.title).size(CARD_TITLE_SIZE).strong();
            if ui.add(egui::Button::new(title).frame(false)).clicked() {
                open_project(ui, page, project);
            }
            if let Some(funding) = &project.funding {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    badge(ui, funding);
                });
            }
        });
        ui.add_space(ITEM_SPACING);
        ui.label(&project.description);
        ui.add_space(ITEM_SPACING);
        ui.horizontal_wrapped(|ui| {
            for tag in &project.tags {
                badge(ui, tag);
            }
        });
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if let Some(github) = &project.github {
                if ui.button("GitHub").clicked() {
                    page.open_url(ui, github);
                }
            }
            if ui.button("↗ View Live Project").clicked() {
                open_project(ui, page, project);
            }
        });
    });
}

fn remote_projects(ui: &mut egui::Ui, page: &mut Page, loader: &mut ProjectLoader) {
    let mut retry = false;

    match loader.state() {
        LoadState::Loading => {
            page.animated(ui, "remote_loading", page.section(Animation::FadeIn), |ui, _| {
                ui.vertical_centered(|ui| {
                    section_header(ui, "My Projects", Some("Fetching my latest projects from GitHub..."));
                    ui.add_space(PADDING);
                    ui.add(egui::Spinner::new().size(32.0));
                    ui.label(egui::RichText::new("Loading projects...").weak());
                });
            });
        }
        LoadState::Error(message) => {
            page.animated(ui, "remote_error", page.section(Animation::FadeIn), |ui, _| {
                ui.vertical_centered(|ui| {
                    section_header(ui, "My Projects", Some("Something went wrong while loading projects"));
                    ui.add_space(PADDING);
                    card(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new("⚠ Error Loading Projects").strong().color(TOAST_ERROR));
                            ui.label(message);
                            ui.add_space(ITEM_SPACING);
                            if ui.button("Try Again").clicked() {
                                retry = true;
                            }
                        });
                    });
                });
            });
        }
        LoadState::Ready(projects) => {
            page.animated(ui, "remote_header", page.section(Animation::FadeUp), |ui, _| {
                ui.vertical_centered(|ui| {
                    section_header(
                        ui,
                        "My Projects",
                        Some("Here are some of the projects I've been working on. Each one represents a unique challenge and learning experience."),
                    );
                    ui.add_space(ITEM_SPACING);
                    ui.label(egui::RichText::new(showing_label(projects.len())).small().color(ACCENT));
                });
            });
            ui.add_space(PADDING);

            let columns = columns_for(ui.available_width(), 3);
            let sequence = page.stagger(100, Animation::FadeUp);
            page.staggered(ui, "remote_projects", sequence, projects, columns, remote_card);
        }
    }

    if retry {
        loader.retry();
    }
}

fn remote_card(ui: &mut egui::Ui, page: &mut Page, project: &Project) {
    card(ui, |ui| {
        ui.label(egui::RichText::new(&project.title).size(CARD_TITLE_SIZE).strong());
        ui.add_space(ITEM_SPACING);
        ui.label(&project.description);
        ui.add_space(ITEM_SPACING);
        if ui.button("↗ View Project").clicked() {
            page.open_url(ui, &project.link);
        }
    });
}
