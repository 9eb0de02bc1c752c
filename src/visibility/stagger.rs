use super::stage::RegionSpec;
use super::tracker::TrackerOptions;
use crate::animation::Animation;
use crate::constants::visibility::STAGGER_THRESHOLD;

/// Shared settings for a list of independently tracked items
///
/// Item `i` is revealed `i × increment_ms` after its own tracker turns
/// visible; items never wait on each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggeredSequence {
    pub increment_ms: u64,
    pub animation: Animation,
    pub threshold: f32,
    pub skip_initial: bool,
}

impl StaggeredSequence {
    pub fn new(increment_ms: u64, animation: Animation) -> Self {
        Self {
            increment_ms,
            animation,
            threshold: STAGGER_THRESHOLD,
            skip_initial: false,
        }
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn skip_initial(mut self, skip: bool) -> Self {
        self.skip_initial = skip;
        self
    }

    pub fn delay_for(&self, index: usize) -> u64 {
        index as u64 * self.increment_ms
    }

    #[cfg(test)]
    pub fn delays(&self, count: usize) -> Vec<u64> {
        (0..count).map(|i| self.delay_for(i)).collect()
    }

    /// Region settings for the item at `index`
    pub fn item(&self, index: usize) -> RegionSpec {
        RegionSpec {
            animation: self.animation,
            delay_ms: self.delay_for(index),
            tracker: TrackerOptions::with_threshold(self.threshold).skip_initial(self.skip_initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_are_linear_in_index() {
        let sequence = StaggeredSequence::new(150, Animation::ScaleUp);
        assert_eq!(sequence.delays(4), vec![0, 150, 300, 450]);
        assert!(sequence.delays(0).is_empty());
    }

    #[test]
    fn test_items_share_variant_threshold_and_override() {
        let sequence = StaggeredSequence::new(200, Animation::RotateIn).skip_initial(true);
        for index in 0..3 {
            let spec = sequence.item(index);
            assert_eq!(spec.animation, Animation::RotateIn);
            assert_eq!(spec.delay_ms, index as u64 * 200);
            assert_eq!(spec.tracker.threshold, STAGGER_THRESHOLD);
            assert!(spec.tracker.skip_initial);
        }
    }
}
