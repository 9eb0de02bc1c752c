use eframe::egui;

use crate::gui::constants::*;
use crate::toast::{ToastKind, Toasts};

fn accent(kind: ToastKind) -> egui::Color32 {
    match kind {
        ToastKind::Info => TOAST_INFO,
        ToastKind::Success => TOAST_SUCCESS,
        ToastKind::Error => TOAST_ERROR,
    }
}

/// Overlay in the bottom-right corner, above the page
pub fn ui(ctx: &egui::Context, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-TOAST_MARGIN, -TOAST_MARGIN))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for toast in toasts.visible() {
                egui::Frame::popup(ui.style())
                    .stroke(egui::Stroke::new(1.5, accent(toast.kind)))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.label(egui::RichText::new(&toast.title).strong().color(accent(toast.kind)));
                        if !toast.description.is_empty() {
                            ui.label(&toast.description);
                        }
                    });
                ui.add_space(ITEM_SPACING);
            }
        });
}
