//! Intersection observation seam and the scroll-polling implementation
//!
//! Presentation code reports where each region was laid out; once per frame the
//! observer compares those rectangles against the viewport and notifies every
//! registration whose visibility changed since the last poll.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use super::geometry::{is_intersecting, Rect};

/// Identifies a displayed region across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    #[cfg(test)]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<egui::Id> for RegionId {
    fn from(id: egui::Id) -> Self {
        Self(id.value())
    }
}

/// Returned by `attach`, consumed by `detach`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverHandle(u64);

impl ObserverHandle {
    #[cfg(test)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the region that must be inside the root
    pub threshold: f32,
    /// Pixels subtracted from the bottom of the viewport
    pub root_margin_bottom: f32,
}

/// Invoked with the new intersection state on every change
pub type ChangeCallback = Box<dyn FnMut(bool)>;

/// Platform seam for intersection detection
pub trait IntersectionObserver {
    /// Start observing `region`; `on_change` fires whenever its state flips
    fn attach(&mut self, region: RegionId, options: ObserveOptions, on_change: ChangeCallback) -> ObserverHandle;

    /// Stop observing. Returns false when the handle was not attached.
    fn detach(&mut self, handle: ObserverHandle) -> bool;
}

struct Registration {
    region: RegionId,
    options: ObserveOptions,
    last: Option<bool>,
    on_change: ChangeCallback,
}

/// Polls reported region rectangles against a viewport
#[derive(Default)]
pub struct ScrollObserver {
    next_handle: u64,
    // BTreeMap keeps callback order stable (attach order)
    registrations: BTreeMap<ObserverHandle, Registration>,
    layout: HashMap<RegionId, Rect>,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `region` was laid out, in the coordinate space of the viewport given to `poll`
    pub fn report(&mut self, region: RegionId, rect: Rect) {
        self.layout.insert(region, rect);
    }

    /// Drop the last known layout of `region`
    pub fn forget(&mut self, region: RegionId) {
        self.layout.remove(&region);
    }

    #[cfg(test)]
    pub fn attached(&self) -> usize {
        self.registrations.len()
    }

    /// Evaluate every registration against `viewport`.
    ///
    /// Returns how many callbacks fired. Regions that were never reported are
    /// treated as off-screen.
    pub fn poll(&mut self, viewport: Rect) -> usize {
        let mut fired = 0;
        for (handle, reg) in self.registrations.iter_mut() {
            let current = self
                .layout
                .get(&reg.region)
                .map(|rect| {
                    is_intersecting(rect, &viewport, reg.options.threshold, reg.options.root_margin_bottom)
                })
                .unwrap_or(false);

            if reg.last != Some(current) {
                trace!(handle = handle.0, region = reg.region.raw(), visible = current, "intersection changed");
                reg.last = Some(current);
                (reg.on_change)(current);
                fired += 1;
            }
        }
        fired
    }
}

impl IntersectionObserver for ScrollObserver {
    fn attach(&mut self, region: RegionId, options: ObserveOptions, on_change: ChangeCallback) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        debug!(handle = handle.0, region = region.raw(), threshold = options.threshold, "observer attached");
        self.registrations.insert(
            handle,
            Registration {
                region,
                options,
                last: None,
                on_change,
            },
        );
        handle
    }

    fn detach(&mut self, handle: ObserverHandle) -> bool {
        match self.registrations.remove(&handle) {
            Some(reg) => {
                debug!(handle = handle.0, region = reg.region.raw(), "observer detached");
                // Layout is shared by region id; only drop it once nobody watches it
                if !self.registrations.values().any(|r| r.region == reg.region) {
                    self.layout.remove(&reg.region);
                }
                true
            }
            None => false,
        }
    }
}
