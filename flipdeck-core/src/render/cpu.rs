use crate::{
    foundation::core::{Affine, BezPath},
    foundation::error::{FlipdeckError, FlipdeckResult},
    render::scene::{DrawOp, FrameRgba, Scene},
};

/// CPU backend turning a [`Scene`] into RGBA8 frames via `vello_cpu`.
///
/// The render context is kept between frames and recreated only when the
/// surface dimensions change.
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRasterizer {
    /// Build a rasterizer with no cached context.
    pub fn new() -> Self {
        Self { ctx: None }
    }

    /// Rasterize `scene` into a premultiplied RGBA8 frame.
    #[tracing::instrument(skip(self, scene))]
    pub fn render(&mut self, scene: &Scene) -> FlipdeckResult<FrameRgba> {
        let surface = scene.surface();
        let width: u16 = surface
            .width
            .try_into()
            .map_err(|_| FlipdeckError::validation("surface width exceeds u16"))?;
        let height: u16 = surface
            .height
            .try_into()
            .map_err(|_| FlipdeckError::validation("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(FlipdeckError::validation("surface must be non-empty"));
        }

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        for op in scene.ops() {
            match op {
                DrawOp::FillRect {
                    rect,
                    transform,
                    color,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        color.r, color.g, color.b, color.a,
                    ));
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                        rect.x0, rect.y0, rect.x1, rect.y1,
                    ));
                }
                DrawOp::FillPath {
                    path,
                    transform,
                    color,
                } => {
                    ctx.set_transform(affine_to_cpu(*transform));
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        color.r, color.g, color.b, color.a,
                    ));
                    ctx.fill_path(&bezpath_to_cpu(path));
                }
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        let out = FrameRgba {
            width: surface.width,
            height: surface.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        };
        self.ctx = Some(ctx);
        Ok(out)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
