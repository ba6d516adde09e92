use crate::foundation::core::{Affine, BezPath, Rect, Rgba8Premul, Surface};

/// A draw operation, consumed by the rasterizer in painter's order.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle after applying `transform`.
    FillRect {
        /// Rectangle in local coordinates.
        rect: Rect,
        /// Local-to-surface transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8Premul,
    },
    /// Fill an arbitrary path after applying `transform`.
    FillPath {
        /// Path in local coordinates.
        path: BezPath,
        /// Local-to-surface transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8Premul,
    },
}

/// The shared drawing surface: current dimensions plus ordered draw ops.
///
/// Clearing the scene is the `clearRect`-over-everything analog; whichever
/// component owns a scene owns the surface it describes.
#[derive(Clone, Debug)]
pub struct Scene {
    surface: Surface,
    ops: Vec<DrawOp>,
}

impl Scene {
    /// Empty scene sized to `surface`.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            ops: Vec::new(),
        }
    }

    /// Current surface dimensions.
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Resync the surface dimensions (resize handling).
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
    }

    /// Drop every draw op.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Draw ops in painter's order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Append a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, transform: Affine, color: Rgba8Premul) {
        self.ops.push(DrawOp::FillRect {
            rect,
            transform,
            color,
        });
    }

    /// Append a filled path.
    pub fn fill_path(&mut self, path: BezPath, transform: Affine, color: Rgba8Premul) {
        self.ops.push(DrawOp::FillPath {
            path,
            transform,
            color,
        });
    }

    /// Append every op of `other` on top of this scene.
    pub fn extend_from(&mut self, other: &Scene) {
        self.ops.extend(other.ops.iter().cloned());
    }
}

/// A rendered frame: premultiplied RGBA8 pixels, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of premultiplied RGBA8.
    pub data: Vec<u8>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
