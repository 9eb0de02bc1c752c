//! Scroll-driven visibility tracking
//!
//! - **observer**: the `IntersectionObserver` seam and the scroll-polling implementation
//! - **tracker**: one live `is_visible` signal per mounted region
//! - **stagger**: incremental delays for lists of tracked items
//! - **stage**: derives mount/unmount from immediate-mode frames

pub mod geometry;
pub mod observer;
pub mod stage;
pub mod stagger;
pub mod tracker;

pub use observer::RegionId;
pub use stage::{RegionSpec, Stage};
pub use stagger::StaggeredSequence;
