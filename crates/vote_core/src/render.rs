//! Seam between the list controller and whatever draws the list.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};

use crate::snapshot::ProductSnapshot;

/// Something that redraws the list after the controller installs a new
/// snapshot. Implementations pull the display order themselves; the snapshot
/// is passed along for surfaces that want to diff against the previous one.
pub trait RenderSurface {
    fn request_render(&self, snapshot: &ProductSnapshot);
}

/// Render surface that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl RenderSurface for NoRender {
    fn request_render(&self, _snapshot: &ProductSnapshot) {}
}

/// Counts render requests and remembers the last revision it was asked to draw.
#[derive(Debug, Default)]
pub struct RenderCounter {
    renders: AtomicUsize,
    last_revision: AtomicU64,
}

impl RenderCounter {
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    pub fn last_revision(&self) -> u64 {
        self.last_revision.load(Ordering::Relaxed)
    }
}

impl RenderSurface for RenderCounter {
    fn request_render(&self, snapshot: &ProductSnapshot) {
        self.renders.fetch_add(1, Ordering::Relaxed);
        self.last_revision.store(snapshot.revision(), Ordering::Relaxed);
        tracing::trace!(revision = snapshot.revision(), "render requested");
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for &T {
    fn request_render(&self, snapshot: &ProductSnapshot) {
        (**self).request_render(snapshot);
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for Arc<T> {
    fn request_render(&self, snapshot: &ProductSnapshot) {
        (**self).request_render(snapshot);
    }
}
