//! Rectangle math for intersection checks

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Edge-inclusive overlap test, so a region touching the root counts
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Overlapping area of two rectangles (0 when disjoint)
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = self.right().min(other.right()) - self.left().max(other.left());
        let h = self.bottom().min(other.bottom()) - self.top().max(other.top());
        w.max(0.0) * h.max(0.0)
    }

    /// Pull the bottom edge up by `margin` pixels (never below zero height)
    pub fn inset_bottom(&self, margin: f32) -> Rect {
        Rect {
            height: (self.height - margin).max(0.0),
            ..*self
        }
    }
}

impl From<egui::Rect> for Rect {
    fn from(rect: egui::Rect) -> Self {
        Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }
}

/// Fraction of `region` that lies inside `root`
///
/// Zero-area regions report 1.0 while touching the root and 0.0 otherwise.
pub fn intersection_ratio(region: &Rect, root: &Rect) -> f32 {
    let area = region.area();
    if area <= 0.0 {
        return if region.touches(root) { 1.0 } else { 0.0 };
    }
    (region.overlap_area(root) / area).clamp(0.0, 1.0)
}

/// A threshold outside [0, 1] (or NaN) can never be satisfied
pub fn is_valid_threshold(threshold: f32) -> bool {
    threshold.is_finite() && (0.0..=1.0).contains(&threshold)
}

/// Whether `region` counts as visible inside `viewport`
///
/// The viewport bottom is pulled up by `root_margin_bottom` first.
pub fn is_intersecting(region: &Rect, viewport: &Rect, threshold: f32, root_margin_bottom: f32) -> bool {
    if !is_valid_threshold(threshold) {
        return false;
    }
    let root = viewport.inset_bottom(root_margin_bottom);
    region.touches(&root) && intersection_ratio(region, &root) >= threshold
}
