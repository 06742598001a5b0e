mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::core::Viewport;
use crate::error::TimelineResult;

/// Drawing-surface capability implemented by any rendering backend.
///
/// Backends report their current pixel size and receive a fully materialized
/// `RenderFrame`, so drawing code stays isolated from timeline geometry and
/// interaction logic.
pub trait Renderer {
    /// Current pixel size of the surface; zero while the host is not laid out.
    fn surface_size(&self) -> Viewport;

    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
