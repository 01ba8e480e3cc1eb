use serde::Serialize;

/// Distance in pixels moved by one arrow click.
pub const SCROLL_STEP: f64 = 200.0;

/// Slack before the right edge at which the right arrow disappears.
const RIGHT_EDGE_TOLERANCE: f64 = 10.0;

/// Scroll geometry of the tag strip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
  /// Current horizontal offset.
  pub scroll_left: f64,
  /// Total content width.
  pub scroll_width: f64,
  /// Visible width.
  pub client_width: f64,
}

/// Direction of an arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
  /// Towards the start of the strip.
  Left,
  /// Towards the end of the strip.
  Right,
}

/// Which scroll arrows are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScrollArrows {
  /// More content to the left.
  pub left: bool,
  /// More content to the right.
  pub right: bool,
}

impl ScrollMetrics {
  /// Largest reachable offset.
  pub fn max_scroll(&self) -> f64 {
    (self.scroll_width - self.client_width).max(0.0)
  }

  /// Arrow visibility for the current offset. Recompute on scroll and on resize.
  pub fn arrows(&self) -> ScrollArrows {
    ScrollArrows {
      left: self.scroll_left > 0.0,
      right: self.scroll_left < self.scroll_width - self.client_width - RIGHT_EDGE_TOLERANCE,
    }
  }

  /// Offset to scroll to after clicking the arrow pointing in `direction`.
  pub fn scroll_target(&self, direction: ScrollDirection) -> f64 {
    let target = match direction {
      ScrollDirection::Left => self.scroll_left - SCROLL_STEP,
      ScrollDirection::Right => self.scroll_left + SCROLL_STEP,
    };
    target.clamp(0.0, self.max_scroll())
  }
}
