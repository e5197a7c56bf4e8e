use glam::Vec3;

/// Debug marker that follows the picked world point.
///
/// Only exists while the debug option is on; the host reads
/// [`position`](Self::position) to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Crosshair {
    position: Option<Vec3>,
}

impl Crosshair {
    /// Move the marker.
    pub fn follow(&mut self, point: Vec3) {
        self.position = Some(point);
    }

    /// Last picked point, `None` before the first frame.
    #[must_use]
    pub fn position(&self) -> Option<Vec3> {
        self.position
    }
}
