//! Per-frame mount/unmount bookkeeping for animated regions
//!
//! Immediate-mode rendering has no mount or unmount events, so the stage
//! derives them: a region entered during a frame is mounted (or kept), and any
//! region not entered by `end_frame` is unmounted and its observation released.

use std::collections::HashMap;

use tracing::debug;

use super::geometry::Rect;
use super::observer::{RegionId, ScrollObserver};
use super::tracker::{TrackerOptions, VisibilityTracker};
use crate::animation::{Animation, AnimationStyle, Transition, TransitionTiming};

/// Everything that defines how one region animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpec {
    pub animation: Animation,
    pub delay_ms: u64,
    pub tracker: TrackerOptions,
}

impl RegionSpec {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            delay_ms: 0,
            tracker: TrackerOptions::default(),
        }
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.tracker.threshold = threshold;
        self
    }

    pub fn skip_initial(mut self, skip: bool) -> Self {
        self.tracker.skip_initial = skip;
        self
    }
}

struct MountedRegion {
    spec: RegionSpec,
    tracker: VisibilityTracker,
    transition: Transition,
    seen_frame: u64,
}

pub struct Stage {
    observer: ScrollObserver,
    regions: HashMap<RegionId, MountedRegion>,
    timing: TransitionTiming,
    frame: u64,
    now: f64,
}

impl Stage {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            observer: ScrollObserver::new(),
            regions: HashMap::new(),
            timing,
            frame: 0,
            now: 0.0,
        }
    }

    /// Start a frame at time `now` (seconds)
    pub fn begin_frame(&mut self, now: f64) {
        self.frame += 1;
        self.now = now;
    }

    /// Declare that `id` is displayed this frame and get its current style
    pub fn enter(&mut self, id: RegionId, spec: RegionSpec) -> AnimationStyle {
        // Changed settings behave like a remount
        if self.regions.get(&id).is_some_and(|r| r.spec != spec) {
            self.unmount(id);
        }

        let (observer, timing, frame, now) = (&mut self.observer, self.timing, self.frame, self.now);
        let region = self.regions.entry(id).or_insert_with(|| {
            let tracker = VisibilityTracker::mount(observer, id, spec.tracker);
            debug!(region = id.raw(), animation = %spec.animation, delay_ms = spec.delay_ms, "region mounted");
            MountedRegion {
                spec,
                transition: Transition::settled(tracker.is_visible(), spec.delay_ms, timing),
                tracker,
                seen_frame: frame,
            }
        });

        region.seen_frame = frame;
        region.transition.tick(now);
        region.transition.style(spec.animation, now)
    }

    /// Record the laid-out rectangle of a region entered this frame
    pub fn report(&mut self, id: RegionId, rect: Rect) {
        if self.regions.contains_key(&id) {
            self.observer.report(id, rect);
        }
    }

    /// Unmount regions that were not entered, then poll visibility.
    ///
    /// Returns true while any transition is still running, i.e. when the
    /// caller should schedule another frame.
    pub fn end_frame(&mut self, viewport: Rect) -> bool {
        let stale: Vec<RegionId> = self
            .regions
            .iter()
            .filter(|(_, r)| r.seen_frame != self.frame)
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            self.unmount(id);
        }

        self.observer.poll(viewport);

        let now = self.now;
        let mut animating = false;
        for region in self.regions.values_mut() {
            region.transition.set_target(region.tracker.is_visible(), now);
            animating |= region.transition.is_animating(now);
        }
        animating
    }

    fn unmount(&mut self, id: RegionId) {
        if let Some(region) = self.regions.remove(&id) {
            region.tracker.unmount(&mut self.observer);
            self.observer.forget(id);
            debug!(region = id.raw(), "region unmounted");
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self, id: RegionId) -> Option<bool> {
        self.regions.get(&id).map(|r| r.tracker.is_visible())
    }

    pub fn mounted(&self) -> usize {
        self.regions.len()
    }

    /// Live observer registrations
    #[cfg(test)]
    pub fn observing(&self) -> usize {
        self.observer.attached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::StaggeredSequence;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn stage() -> Stage {
        Stage::new(TransitionTiming {
            duration_secs: 0.7,
            replay_cooldown_secs: 0.0,
        })
    }

    /// Render one frame with the given regions at the given rectangles
    fn frame(stage: &mut Stage, now: f64, regions: &[(RegionId, RegionSpec, Rect)]) -> Vec<AnimationStyle> {
        stage.begin_frame(now);
        let styles = regions
            .iter()
            .map(|(id, spec, rect)| {
                let style = stage.enter(*id, *spec);
                stage.report(*id, *rect);
                style
            })
            .collect();
        stage.end_frame(VIEWPORT);
        styles
    }

    #[test]
    fn test_region_reveals_after_scrolling_into_view() {
        let mut stage = stage();
        let id = RegionId::new(1);
        let spec = RegionSpec::new(Animation::FadeUp);
        let below = Rect::new(0.0, 900.0, 400.0, 200.0);
        let inside = Rect::new(0.0, 100.0, 400.0, 200.0);

        let styles = frame(&mut stage, 0.0, &[(id, spec, below)]);
        assert_eq!(styles[0], Animation::FadeUp.hidden_style());
        assert_eq!(stage.is_visible(id), Some(false));

        frame(&mut stage, 1.0, &[(id, spec, inside)]);
        assert_eq!(stage.is_visible(id), Some(true));

        let styles = frame(&mut stage, 2.0, &[(id, spec, inside)]);
        assert!(styles[0].is_resting());

        // Scrolled away again: back to hidden
        frame(&mut stage, 3.0, &[(id, spec, below)]);
        let styles = frame(&mut stage, 4.0, &[(id, spec, below)]);
        assert_eq!(styles[0], Animation::FadeUp.hidden_style());
    }

    #[test]
    fn test_skip_initial_region_is_resting_without_observer() {
        let mut stage = stage();
        let id = RegionId::new(2);
        let spec = RegionSpec::new(Animation::ScaleUp).skip_initial(true);

        let styles = frame(&mut stage, 0.0, &[(id, spec, Rect::new(0.0, 5000.0, 10.0, 10.0))]);
        assert!(styles[0].is_resting());
        assert_eq!(stage.observing(), 0);
    }

    #[test]
    fn test_regions_not_entered_are_unmounted() {
        let mut stage = stage();
        let a = RegionId::new(1);
        let b = RegionId::new(2);
        let spec = RegionSpec::new(Animation::FadeIn);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        frame(&mut stage, 0.0, &[(a, spec, rect), (b, spec, rect)]);
        assert_eq!(stage.observing(), 2);

        frame(&mut stage, 0.1, &[(a, spec, rect)]);
        assert_eq!(stage.mounted(), 1);
        assert_eq!(stage.observing(), 1);
        assert_eq!(stage.is_visible(b), None);
    }

    #[test]
    fn test_changed_spec_remounts() {
        let mut stage = stage();
        let id = RegionId::new(3);
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        frame(&mut stage, 0.0, &[(id, RegionSpec::new(Animation::FadeIn), rect)]);
        frame(&mut stage, 0.1, &[(id, RegionSpec::new(Animation::FadeIn).skip_initial(true), rect)]);
        assert_eq!(stage.observing(), 0);
        assert_eq!(stage.mounted(), 1);
    }

    #[test]
    fn test_stagger_items_track_independently() {
        let mut stage = stage();
        let sequence = StaggeredSequence::new(200, Animation::SlideUp);
        let ids: Vec<RegionId> = (0..3).map(|i| RegionId::new(10 + i)).collect();
        // Only the last item is on screen
        let rects = [
            Rect::new(0.0, 2000.0, 100.0, 100.0),
            Rect::new(0.0, 2200.0, 100.0, 100.0),
            Rect::new(0.0, 100.0, 100.0, 100.0),
        ];
        let regions: Vec<_> = (0..3).map(|i| (ids[i], sequence.item(i), rects[i])).collect();

        frame(&mut stage, 0.0, &regions);
        assert_eq!(stage.is_visible(ids[0]), Some(false));
        assert_eq!(stage.is_visible(ids[1]), Some(false));
        assert_eq!(stage.is_visible(ids[2]), Some(true));

        // Third item waits out its 400ms delay before moving
        let styles = frame(&mut stage, 0.3, &regions);
        assert_eq!(styles[2], Animation::SlideUp.hidden_style());
        let styles = frame(&mut stage, 2.0, &regions);
        assert!(styles[2].is_resting());
    }

    #[test]
    fn test_nan_threshold_keeps_region_mounted() {
        let spec = RegionSpec::new(Animation::FadeUp).threshold(f32::NAN);
        assert_eq!(spec, spec);

        let mut stage = stage();
        let id = RegionId::new(4);
        let rect = Rect::new(0.0, 100.0, 100.0, 100.0);
        for frame_index in 0..3 {
            let styles = frame(&mut stage, frame_index as f64 * 0.1, &[(id, spec, rect)]);
            assert_eq!(styles[0], Animation::FadeUp.hidden_style());
        }
        assert_eq!(stage.mounted(), 1);
        assert_eq!(stage.observing(), 1);
        assert_eq!(stage.is_visible(id), Some(false));
    }
}
