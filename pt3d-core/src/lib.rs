/// pt3d Core Library - software 3D geometry pipeline
///
/// This library provides the per-frame geometry pipeline for painter's-
/// algorithm rendering: homogeneous vector and matrix algebra, triangle
/// plane clipping, luminance quantization, mesh loading, and the frame
/// orchestrator that turns an object-space mesh into a depth-ordered list
/// of screen-space shaded triangles.

pub mod clip;
pub mod geometry;
pub mod matrix;
pub mod mesh_text;
pub mod pipeline;
pub mod shading;
pub mod vector;

// Re-export commonly used types
pub use clip::{clip_against_plane, ClipResult};
pub use geometry::{Mesh, Triangle};
pub use matrix::Mat4;
pub use mesh_text::{load_mesh, MeshError};
pub use pipeline::{CameraState, InputState, Pipeline, DEFAULT_FOV};
pub use shading::{quantize, SHADE_LEVELS};
pub use vector::Vec4;
