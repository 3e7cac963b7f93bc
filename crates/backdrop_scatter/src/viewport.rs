//! Viewport measurement as an injected capability.
//!
//! Cameras and scene assembly consult a [`ViewportProvider`] instead of any
//! ambient window state, so tests and headless callers can supply their own
//! dimensions.
use std::sync::{Arc, Mutex};

/// Coarse viewport orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Source of the currently visible viewport dimensions.
pub trait ViewportProvider: Send + Sync {
    /// Current (width, height) of the viewport in CSS-pixel-like units.
    fn dimensions(&self) -> (f64, f64);

    /// Current viewport width.
    fn width(&self) -> f64 {
        self.dimensions().0
    }

    /// Current viewport height.
    fn height(&self) -> f64 {
        self.dimensions().1
    }

    /// Larger of the two dimensions; useful when sizing a backdrop that must
    /// survive reorientation.
    fn max_dimension(&self) -> f64 {
        let (w, h) = self.dimensions();
        w.max(h)
    }

    /// Orientation implied by the current dimensions. Square viewports
    /// report landscape.
    fn orientation(&self) -> Orientation {
        let (w, h) = self.dimensions();
        if h > w {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Viewport with constant dimensions.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport {
    pub width: f64,
    pub height: f64,
}

impl FixedViewport {
    /// Create a viewport that always reports the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl ViewportProvider for FixedViewport {
    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Shared, settable viewport; stands in for a live window in demos and
/// resize tests.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    inner: Arc<Mutex<(f64, f64)>>,
}

impl SharedViewport {
    /// Create a shared viewport with initial dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new((width, height))),
        }
    }

    /// Replace the current dimensions; all clones observe the new value.
    pub fn set(&self, width: f64, height: f64) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = (width, height);
    }
}

impl ViewportProvider for SharedViewport {
    fn dimensions(&self) -> (f64, f64) {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_viewport_reports_constant_dimensions() {
        let viewport = FixedViewport::new(1280.0, 720.0);
        assert_eq!(viewport.dimensions(), (1280.0, 720.0));
        assert_eq!(viewport.width(), 1280.0);
        assert_eq!(viewport.height(), 720.0);
    }

    #[test]
    fn max_dimension_picks_the_larger_axis() {
        assert_eq!(FixedViewport::new(1280.0, 720.0).max_dimension(), 1280.0);
        assert_eq!(FixedViewport::new(360.0, 640.0).max_dimension(), 640.0);
    }

    #[test]
    fn orientation_follows_dimensions() {
        assert_eq!(
            FixedViewport::new(1280.0, 720.0).orientation(),
            Orientation::Landscape
        );
        assert_eq!(
            FixedViewport::new(360.0, 640.0).orientation(),
            Orientation::Portrait
        );
        assert_eq!(
            FixedViewport::new(500.0, 500.0).orientation(),
            Orientation::Landscape
        );
    }

    #[test]
    fn shared_viewport_clones_observe_updates() {
        let viewport = SharedViewport::new(800.0, 600.0);
        let clone = viewport.clone();

        viewport.set(1024.0, 768.0);
        assert_eq!(clone.dimensions(), (1024.0, 768.0));
    }
}
