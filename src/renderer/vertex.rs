//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert 8-bit RGBA to float color, keeping the sRGB encoding
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements (four-shade handheld palette)
pub mod colors {
    use super::rgba8;

    pub const BACKGROUND: [f32; 4] = rgba8(48, 98, 48, 255);
    pub const BORDER: [f32; 4] = rgba8(15, 56, 15, 255);
    /// Cursor band and progress fill while the target is outside
    pub const BAND: [f32; 4] = rgba8(155, 188, 15, 255);
    /// Cursor band and progress fill while catching
    pub const BAND_ACTIVE: [f32; 4] = rgba8(155, 188, 15, 100);
    pub const TARGET: [f32; 4] = rgba8(255, 0, 0, 255);
}
