use eframe::egui;
use tracing::debug;

use crate::constants::nav::{COMPACT_WIDTH, SCROLLED_OFFSET};
use crate::gui::constants::*;

/// Page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Expertise,
    Experience,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Expertise,
        Section::Experience,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Expertise => "Expertise",
            Section::Experience => "Experience",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Default)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    /// Feed the page's scroll offset from the last frame
    pub fn set_scroll_offset(&mut self, offset: f32) {
        let scrolled = offset > SCROLLED_OFFSET;
        if scrolled != self.scrolled {
            debug!(scrolled, "navigation style changed");
            self.scrolled = scrolled;
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the compact menu after an entry was picked
    pub fn choose(&mut self, section: Section) -> Section {
        self.menu_open = false;
        section
    }
}

pub fn is_compact(width: f32) -> bool {
    width < COMPACT_WIDTH
}

/// Navigation bar; returns the section the user picked, if any
pub fn ui(ctx: &egui::Context, state: &mut NavState, owner: &str) -> Option<Section> {
    let mut frame = egui::Frame::side_top_panel(&ctx.style())
        .inner_margin(egui::Margin::symmetric(NAV_MARGIN_X, NAV_MARGIN_Y));
    if state.is_scrolled() {
        frame = frame.shadow(ctx.style().visuals.popup_shadow);
    }

    let compact = is_compact(ctx.available_rect().width());
    let mut picked = None;

    egui::TopBottomPanel::top("navigation").frame(frame).show(ctx, |ui| {
        ui.horizontal(|ui| {
            let name = egui::RichText::new(owner).size(CARD_TITLE_SIZE).strong();
            if ui.add(egui::Button::new(name).frame(false)).clicked() {
                picked = Some(state.choose(Section::Home));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if compact {
                    let icon = if state.is_menu_open() { "✕" } else { "☰" };
                    if ui.button(icon).clicked() {
                        state.toggle_menu();
                    }
                    theme_toggle(ui);
                } else {
                    theme_toggle(ui);
                    ui.separator();
                    for section in Section::ALL.iter().rev() {
                        if ui.add(egui::Button::new(section.label()).frame(false)).clicked() {
                            picked = Some(state.choose(*section));
                        }
                    }
                }
            });
        });

        if compact && state.is_menu_open() {
            ui.separator();
            for section in Section::ALL {
                if ui.add(egui::Button::new(section.label()).frame(false)).clicked() {
                    picked = Some(state.choose(section));
                }
            }
        }
    });

    picked
}

fn theme_toggle(ui: &mut egui::Ui) {
    let dark = ui.ctx().theme() == egui::Theme::Dark;
    let icon = if dark { "☀" } else { "🌙" };
    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
        let next = if dark { egui::Theme::Light } else { egui::Theme::Dark };
        debug!(theme = ?next, "theme toggled");
        ui.ctx().set_theme(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_after_offset() {
        let mut state = NavState::default();
        state.set_scroll_offset(50.0);
        assert!(!state.is_scrolled());
        state.set_scroll_offset(50.5);
        assert!(state.is_scrolled());
        state.set_scroll_offset(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_choosing_closes_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        assert_eq!(state.choose(Section::Contact), Section::Contact);
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_compact_breakpoint() {
        assert!(is_compact(767.0));
        assert!(!is_compact(768.0));
    }

    #[test]
    fn test_nav_labels() {
        let labels: Vec<_> = Section::ALL.iter().map(Section::label).collect();
        assert_eq!(labels, ["Home", "About", "Expertise", "Experience", "Portfolio", "Contact"]);
    }
}
