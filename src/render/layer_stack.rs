use serde::{Deserialize, Serialize};

/// Draw passes of one timeline frame.
///
/// Axes come last so the pinned gutters occlude grid lines and bars that
/// scroll underneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Bars,
    Axis,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Background, Self::Grid, Self::Bars, Self::Axis];
}
