use std::cell::Cell;
use std::rc::Rc;

use super::observer::{IntersectionObserver, ObserveOptions, ObserverHandle, RegionId};
use crate::constants::visibility::{ROOT_MARGIN_BOTTOM, SECTION_THRESHOLD};

#[derive(Debug, Clone, Copy)]
pub struct TrackerOptions {
    pub threshold: f32,
    /// Start visible and never observe (above-the-fold content)
    pub skip_initial: bool,
    pub root_margin_bottom: f32,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: SECTION_THRESHOLD,
            skip_initial: false,
            root_margin_bottom: ROOT_MARGIN_BOTTOM,
        }
    }
}

// Bitwise on the floats so an unusable threshold (NaN) still equals itself
impl PartialEq for TrackerOptions {
    fn eq(&self, other: &Self) -> bool {
        self.threshold.to_bits() == other.threshold.to_bits()
            && self.skip_initial == other.skip_initial
            && self.root_margin_bottom.to_bits() == other.root_margin_bottom.to_bits()
    }
}

impl TrackerOptions {
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn skip_initial(mut self, skip: bool) -> Self {
        self.skip_initial = skip;
        self
    }
}

/// Live visibility signal for one mounted region
///
/// The signal follows every threshold crossing in both directions, so a
/// section scrolled away goes back to hidden and replays when it returns.
#[derive(Debug)]
pub struct VisibilityTracker {
    visible: Rc<Cell<bool>>,
    handle: Option<ObserverHandle>,
}

impl VisibilityTracker {
    pub fn mount<O>(observer: &mut O, region: RegionId, options: TrackerOptions) -> Self
    where
        O: IntersectionObserver + ?Sized,
    {
        if options.skip_initial {
            return Self {
                visible: Rc::new(Cell::new(true)),
                handle: None,
            };
        }

        let visible = Rc::new(Cell::new(false));
        let signal = Rc::clone(&visible);
        let handle = observer.attach(
            region,
            ObserveOptions {
                threshold: options.threshold,
                root_margin_bottom: options.root_margin_bottom,
            },
            Box::new(move |state| signal.set(state)),
        );

        Self {
            visible,
            handle: Some(handle),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the observation. Consumes the tracker so it cannot be read afterwards.
    pub fn unmount<O>(mut self, observer: &mut O)
    where
        O: IntersectionObserver + ?Sized,
    {
        if let Some(handle) = self.handle.take() {
            observer.detach(handle);
        }
    }
}
