//! Track measurement with debounced re-measurement on resize.

use parking_lot::Mutex;
use slidekit_core::conversion::{clamp_percent, clamp_pixel_to_step_grid, pixel_to_percent};
use slidekit_core::{Debouncer, Point, Rect, SliderConfig, TrackGeometry};
use std::fmt;
use std::sync::Arc;
use web_time::{Duration, Instant};
use tracing::{debug, warn};

/// Something that can report the on-screen rectangle of a track element.
pub trait TrackSource: Send {
    /// Current bounding rectangle, or `None` when the element is not attached.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl TrackSource for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

/// A track that is never attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedTrack;

impl TrackSource for DetachedTrack {
    fn bounding_rect(&self) -> Option<Rect> {
        None
    }
}

/// A track rectangle shared with the host, which may move or resize it.
#[derive(Debug, Clone, Default)]
pub struct SharedTrack {
    rect: Arc<Mutex<Option<Rect>>>,
}

impl SharedTrack {
    /// Create an attached track.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Arc::new(Mutex::new(Some(rect))),
        }
    }

    /// Replace the rectangle.
    pub fn set(&self, rect: Rect) {
        *self.rect.lock() = Some(rect);
    }

    /// Mark the element as detached.
    pub fn detach(&self) {
        *self.rect.lock() = None;
    }
}

impl TrackSource for SharedTrack {
    fn bounding_rect(&self) -> Option<Rect> {
        *self.rect.lock()
    }
}

/// Measures a track and keeps the last measurement.
///
/// A failed measurement degrades to [`TrackGeometry::DETACHED`]; callers must
/// treat an invalid geometry as "no valid position".
pub struct GeometryProvider {
    source: Box<dyn TrackSource>,
    geometry: TrackGeometry,
    bounds: Rect,
    debouncer: Debouncer,
    measure_count: u64,
}

impl fmt::Debug for GeometryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryProvider")
            .field("geometry", &self.geometry)
            .field("bounds", &self.bounds)
            .field("debouncer", &self.debouncer)
            .field("measure_count", &self.measure_count)
            .finish_non_exhaustive()
    }
}

impl Default for GeometryProvider {
    fn default() -> Self {
        Self::new(DetachedTrack)
    }
}

impl GeometryProvider {
    /// Create a provider reading from `source`. Nothing is measured yet.
    pub fn new(source: impl TrackSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            geometry: TrackGeometry::DETACHED,
            bounds: Rect::default(),
            debouncer: Debouncer::default(),
            measure_count: 0,
        }
    }

    /// Override the resize quiet period.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Swap the measurement source. The old geometry is kept until the next
    /// [`measure`](Self::measure).
    pub fn set_source(&mut self, source: impl TrackSource + 'static) {
        self.source = Box::new(source);
    }

    /// Read the source now.
    pub fn measure(&mut self) -> TrackGeometry {
        self.measure_count += 1;
        if let Some(rect) = self.source.bounding_rect() {
            self.bounds = rect;
            self.geometry = TrackGeometry::from_rect(&rect);
            debug!(
                width = self.geometry.width,
                offset_x = self.geometry.offset_x,
                "track measured"
            );
        } else {
            warn!("track is not attached; positions are unavailable");
            self.bounds = Rect::default();
            self.geometry = TrackGeometry::DETACHED;
        }
        self.geometry
    }

    /// Note a resize; the re-measure happens on a later [`poll`](Self::poll).
    pub fn on_resize(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Re-measure if a resize burst has gone quiet. Returns whether it did.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debouncer.poll(now) {
            self.measure();
            true
        } else {
            false
        }
    }

    /// Drop a pending re-measure.
    pub fn cancel_resize(&mut self) {
        self.debouncer.cancel();
    }

    /// Whether a resize is waiting for its quiet period.
    #[must_use]
    pub const fn is_resize_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Last measured geometry.
    #[must_use]
    pub const fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Last measured bounding rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// How many measurements were taken.
    #[must_use]
    pub const fn measure_count(&self) -> u64 {
        self.measure_count
    }

    /// Grid-snapped percent under `client_x`, or `None` without a valid track.
    #[must_use]
    pub fn percent_at(&self, client_x: f64, config: &SliderConfig) -> Option<f64> {
        if !self.geometry.is_valid() {
            return None;
        }
        let width = self.geometry.width;
        let pixel = clamp_pixel_to_step_grid(
            self.geometry.relative_x(client_x),
            width,
            config.min(),
            config.max(),
            config.step(),
        );
        Some(clamp_percent(pixel_to_percent(pixel, width)))
    }

    /// Client X coordinate of `percent` along the track.
    #[must_use]
    pub fn client_x_of(&self, percent: f64) -> f64 {
        self.geometry.offset_x + self.geometry.width * clamp_percent(percent) / 100.0
    }

    /// Whether `point` lies on the track element.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.geometry.is_valid() && self.bounds.contains_point(point)
    }
}
