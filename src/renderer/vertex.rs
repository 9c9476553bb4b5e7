//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color, ready for a vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.078, 0.078, 0.078, 1.0];
    pub const RAMP: [f32; 4] = [0.392, 0.392, 0.392, 1.0];
    pub const BLOCK: [f32; 4] = [0.267, 0.667, 1.0, 1.0];
    pub const SCALE_BAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const FINAL_STATS: [f32; 4] = [1.0, 0.8, 0.0, 1.0];
}
