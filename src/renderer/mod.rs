//! Toolkit-neutral rendering output

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Frame, RenderSink, Scene, ScaleBar, TextAlign, TextItem};
pub use vertex::{Vertex, colors};
