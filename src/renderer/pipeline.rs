//! WebGPU render pipeline setup

use wgpu::util::DeviceExt;

use super::layout::scene;
use super::shapes::tessellate;
use super::vertex::{Vertex, colors};
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::sim::Snapshot;

/// Errors while bringing up the GPU device
#[derive(Debug, thiserror::Error)]
pub enum RenderInitError {
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    /// Vertices the current buffer can hold
    pub vertex_capacity: usize,
    pub vertex_count: u32,
    /// Viewport size in pixels
    pub size: (u32, u32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderInitError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("silly-fishing-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = pick_surface_format(&surface_caps.formats);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // A full playing frame is well under this
        let vertex_capacity = 256;
        let vertex_buffer = create_vertex_buffer(&device, vertex_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity,
            vertex_count: 0,
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Convert logical screen pixels (origin top-left, y down) to NDC,
    /// letterboxing to keep the 4:3 screen undistorted
    pub fn screen_to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        screen_to_ndc(self.size, x, y)
    }

    /// Draw one frame from a snapshot
    pub fn render(&mut self, snapshot: &Snapshot) -> Result<(), wgpu::SurfaceError> {
        let ndc_vertices: Vec<Vertex> = tessellate(&scene(snapshot))
            .iter()
            .map(|v| {
                let (x, y) = self.screen_to_ndc(v.position[0], v.position[1]);
                Vertex::new(x, y, v.color)
            })
            .collect();

        if ndc_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = ndc_vertices.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
        }
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&ndc_vertices));
        self.vertex_count = ndc_vertices.len() as u32;

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            // Letterbox bars take the border shade
            let [r, g, b, a] = colors::BORDER;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    let zeroed = vec![Vertex::new(0.0, 0.0, [0.0; 4]); capacity];
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("vertex_buffer"),
        contents: bytemuck::cast_slice(&zeroed),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}

/// Palette bytes are already sRGB-encoded; a non-sRGB target stores them as is
fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .find(|f| !f.is_srgb())
        .copied()
        .unwrap_or(formats[0])
}

/// Map logical screen coordinates into NDC for a viewport of `size` pixels
pub fn screen_to_ndc(size: (u32, u32), x: f32, y: f32) -> (f32, f32) {
    let (w, h) = size;
    let viewport_aspect = w as f32 / h as f32;
    let screen_aspect = SCREEN_W / SCREEN_H;

    let nx = x / SCREEN_W * 2.0 - 1.0;
    let ny = 1.0 - y / SCREEN_H * 2.0;

    if viewport_aspect > screen_aspect {
        // Wider than 4:3, bars left and right
        (nx * screen_aspect / viewport_aspect, ny)
    } else {
        // Taller than 4:3, bars top and bottom
        (nx, ny * viewport_aspect / screen_aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners_exact_aspect() {
        assert_eq!(screen_to_ndc((640, 480), 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(screen_to_ndc((640, 480), SCREEN_W, SCREEN_H), (1.0, -1.0));
        assert_eq!(screen_to_ndc((1280, 960), SCREEN_W / 2.0, SCREEN_H / 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_prefers_non_srgb_format() {
        use wgpu::TextureFormat;

        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(pick_surface_format(&formats), TextureFormat::Bgra8Unorm);

        let srgb_only = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(pick_surface_format(&srgb_only), TextureFormat::Rgba8UnormSrgb);
    }

    #[test]
    fn test_ndc_letterbox() {
        // Twice as wide as 4:3: x range halves
        let (x, y) = screen_to_ndc((1280, 480), SCREEN_W, 0.0);
        assert!((x - 0.5).abs() < 1e-6);
        assert_eq!(y, 1.0);

        // Square viewport: y range shrinks to 3/4
        let (x, y) = screen_to_ndc((480, 480), 0.0, 0.0);
        assert_eq!(x, -1.0);
        assert!((y - 0.75).abs() < 1e-6);
    }
}
