//! Scroll progress tracking and section geometry.

use crate::constants::{NAV_SCROLLED_THRESHOLD_PX, SCROLL_SECTION_HEIGHT_VH};

/// Normalise an absolute scroll offset against the scrollable range.
///
/// `max_offset` is document height minus viewport height. A zero, negative or
/// non-finite range (page shorter than the viewport) yields 0, as does a
/// non-finite offset. The result is always in \[0, 1\].
#[inline]
pub fn scroll_progress(offset: f64, max_offset: f64) -> f32 {
    if !(max_offset.is_finite() && max_offset > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0) as f32
}

/// Samples the external scroll signal and holds the latest progress.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    progress: f32,
    offset: f64,
    max_offset: f64,
    samples: u64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll notification and return the new progress.
    pub fn sample(&mut self, offset: f64, max_offset: f64) -> f32 {
        if max_offset <= 0.0 && self.samples == 0 {
            log::debug!("[scroll] degenerate range {max_offset}, progress pinned to 0");
        }
        self.progress = scroll_progress(offset, max_offset);
        self.offset = offset;
        self.max_offset = max_offset;
        self.samples += 1;
        self.progress
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[inline]
    pub fn samples(&self) -> u64 {
        self.samples
    }
}

/// Total height of the scroll track, in viewport-height units.
#[inline]
pub fn total_scroll_height_vh(item_count: usize) -> u32 {
    item_count as u32 * SCROLL_SECTION_HEIGHT_VH
}

/// Progress at the centre of item `index`'s section. `None` for an empty catalog.
pub fn progress_for_index(index: usize, item_count: usize) -> Option<f32> {
    if item_count == 0 {
        return None;
    }
    let i = index.min(item_count - 1) as f32;
    Some(((i + 0.5) / item_count as f32).clamp(0.0, 1.0))
}

/// Scroll offset that produces `progress` over the given range.
#[inline]
pub fn offset_for_progress(progress: f32, max_offset: f64) -> f64 {
    if !(max_offset.is_finite() && max_offset > 0.0) {
        return 0.0;
    }
    f64::from(progress.clamp(0.0, 1.0)) * max_offset
}

/// Whether the nav bar should switch to its "scrolled" look.
#[inline]
pub fn nav_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLLED_THRESHOLD_PX
}
