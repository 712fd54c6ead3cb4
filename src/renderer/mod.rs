//! WebGPU rendering module
//!
//! Bodies are tessellated on the CPU into colored triangles and drawn with a
//! single alpha-blended pipeline.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::FrameBuilder;
pub use pipeline::RenderState;
pub use vertex::Vertex;
