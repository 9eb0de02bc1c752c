//! Per-frame render context for the page
//!
//! Wraps the stage so sections can declare animated regions while they lay
//! themselves out, and carries the few pieces of shared state (toasts, pending
//! navigation) that widgets deep in the tree need to reach.

use std::hash::Hash;

use eframe::egui;
use egui::emath::TSTransform;
use tracing::info;

use super::components::nav::Section;
use super::constants::*;
use crate::animation::{Animation, AnimationStyle};
use crate::toast::{Toast, Toasts};
use crate::visibility::{RegionId, RegionSpec, Stage, StaggeredSequence};

pub struct Page<'a> {
    pub stage: &'a mut Stage,
    pub toasts: &'a mut Toasts,
    /// Section the page should scroll to once its anchor is laid out
    pub scroll_to: &'a mut Option<Section>,
    pub now: f64,
    pub section_threshold: f32,
    pub stagger_threshold: f32,
}

impl Page<'_> {
    /// Settings for a standalone section block
    pub fn section(&self, animation: Animation) -> RegionSpec {
        RegionSpec::new(animation).threshold(self.section_threshold)
    }

    pub fn stagger(&self, increment_ms: u64, animation: Animation) -> StaggeredSequence {
        StaggeredSequence::new(increment_ms, animation).threshold(self.stagger_threshold)
    }

    /// Lay out `add_contents` as one animated region
    pub fn animated<R>(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl Hash,
        spec: RegionSpec,
        add_contents: impl FnOnce(&mut egui::Ui, &mut Self) -> R,
    ) -> egui::InnerResponse<R> {
        let region = RegionId::from(egui::Id::new(id_salt));
        let style = self.stage.enter(region, spec);

        let start = ui.painter().add(egui::Shape::Noop);
        let inner = ui.scope(|ui| {
            if style.opacity < 1.0 {
                ui.multiply_opacity(style.opacity);
            }
            add_contents(ui, self)
        });
        let end = ui.painter().add(egui::Shape::Noop);

        let rect = inner.response.rect;
        self.stage.report(region, rect.into());

        if !style.is_resting() {
            let transform = style_transform(&style, rect);
            let layer = ui.layer_id();
            ui.ctx()
                .graphics_mut(|graphics| graphics.entry(layer).transform_range(start, end, transform));
        }
        inner
    }

    /// Lay out `items` as independently tracked regions, spread over `columns`
    pub fn staggered<T>(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl Hash,
        sequence: StaggeredSequence,
        items: &[T],
        columns: usize,
        mut add_item: impl FnMut(&mut egui::Ui, &mut Self, &T),
    ) {
        let base = egui::Id::new(id_salt);
        let columns = columns.clamp(1, items.len().max(1));

        if columns == 1 {
            for (index, item) in items.iter().enumerate() {
                self.animated(ui, base.with(index), sequence.item(index), |ui, page| {
                    add_item(ui, page, item)
                });
                ui.add_space(CARD_SPACING);
            }
            return;
        }

        ui.columns(columns, |cols| {
            for (index, item) in items.iter().enumerate() {
                let col = &mut cols[index % columns];
                self.animated(col, base.with(index), sequence.item(index), |ui, page| {
                    add_item(ui, page, item)
                });
                col.add_space(CARD_SPACING);
            }
        });
    }

    /// Scroll to `response` if its section was requested from the nav bar
    pub fn anchor(&mut self, section: Section, response: &egui::Response) {
        if *self.scroll_to == Some(section) {
            response.scroll_to_me(Some(egui::Align::Min));
            *self.scroll_to = None;
        }
    }

    pub fn request_scroll(&mut self, section: Section) {
        *self.scroll_to = Some(section);
    }

    pub fn open_url(&self, ui: &egui::Ui, url: &str) {
        info!(url = %url, "Opening link");
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }

    pub fn toast(&mut self, toast: Toast) {
        self.toasts.push(toast, self.now);
    }
}

/// Translation and scale about the region's center
///
/// egui paint transforms cannot rotate, so rotated variants render with their
/// scale and fade only.
pub fn style_transform(style: &AnimationStyle, rect: egui::Rect) -> TSTransform {
    let center = rect.center().to_vec2();
    TSTransform::from_translation(egui::Vec2::from(style.offset) + center)
        * TSTransform::from_scaling(style.scale)
        * TSTransform::from_translation(-center)
}

/// Grid columns that fit `width` with cards at least `MIN_CARD_WIDTH` wide
pub fn columns_for(width: f32, max_columns: usize) -> usize {
    let fit = ((width + CARD_SPACING) / (MIN_CARD_WIDTH + CARD_SPACING)).floor() as usize;
    fit.clamp(1, max_columns.max(1))
}

/// Section title block shared by every page section
pub fn section_header(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) -> egui::Response {
    ui.vertical_centered(|ui| {
        let response = ui.label(egui::RichText::new(title).size(HEADING_SIZE).strong());
        if let Some(subtitle) = subtitle {
            ui.add_space(ITEM_SPACING);
            ui.label(egui::RichText::new(subtitle).size(BODY_SIZE).weak());
        }
        response
    })
    .inner
}

/// Small rounded tag
pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}

pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_style_is_identity() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 200.0), egui::vec2(50.0, 40.0));
        let transform = style_transform(&AnimationStyle::RESTING, rect);
        let p = egui::pos2(110.0, 215.0);
        assert!((transform * p - p).length() < 1e-4);
    }

    #[test]
    fn test_hidden_fade_up_shifts_down() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let transform = style_transform(&Animation::FadeUp.hidden_style(), rect);
        let moved = transform * rect.center();
        assert_eq!(moved, rect.center() + egui::vec2(0.0, 64.0));
    }

    #[test]
    fn test_scale_keeps_center() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 10.0), egui::vec2(100.0, 60.0));
        let transform = style_transform(&Animation::ScaleUp.hidden_style(), rect);
        assert!((transform * rect.center() - rect.center()).length() < 1e-4);
        let corner = transform * rect.min;
        assert!(corner.x > rect.min.x && corner.y > rect.min.y);
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for(200.0, 3), 1);
        assert_eq!(columns_for(700.0, 3), 2);
        assert_eq!(columns_for(2000.0, 3), 3);
        assert_eq!(columns_for(2000.0, 0), 1);
    }
}
