//! GUI-specific constants for layout, typography and colors

use egui;

/// Window limits
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 480.0;

/// Layout spacing
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const PADDING: f32 = 24.0;
pub const SECTION_SPACING: f32 = 96.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CARD_SPACING: f32 = 16.0;
pub const NAV_MARGIN_X: i8 = 24;
pub const NAV_MARGIN_Y: i8 = 12;

/// Cards narrower than this wrap into fewer columns
pub const MIN_CARD_WIDTH: f32 = 300.0;

/// Typography
pub const HERO_TITLE_SIZE: f32 = 56.0;
pub const HERO_SUBTITLE_SIZE: f32 = 24.0;
pub const HEADING_SIZE: f32 = 34.0;
pub const CARD_TITLE_SIZE: f32 = 19.0;
pub const BODY_SIZE: f32 = 16.0;
pub const STAT_SIZE: f32 = 32.0;

/// Colors
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
pub const TOAST_SUCCESS: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
pub const TOAST_ERROR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
pub const TOAST_INFO: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

/// Toast overlay
pub const TOAST_WIDTH: f32 = 320.0;
pub const TOAST_MARGIN: f32 = 16.0;
