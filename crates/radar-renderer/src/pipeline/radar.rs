use wgpu::util::DeviceExt;

use super::depth::{DepthTarget, DEPTH_FORMAT};
use super::uniforms::RadarUniforms;
use crate::blips::Blip;
use crate::geometry::{RadarVertex, StaticGeometry};
use crate::gpu::RendererError;
use crate::shaders::{validated, BLIP_SHADER, RADAR_SHADER};

/// Corners per blip quad (two triangles).
const BLIP_QUAD_VERTICES: u32 = 6;

/// Pipelines, static buffers and depth target for one radar view.
pub struct RadarPipelines {
    disc_pipeline: wgpu::RenderPipeline,
    ring_pipeline: wgpu::RenderPipeline,
    blip_pipeline: wgpu::RenderPipeline,
    disc_vertices: wgpu::Buffer,
    disc_indices: wgpu::Buffer,
    disc_index_count: u32,
    ring_vertices: wgpu::Buffer,
    ring_indices: wgpu::Buffer,
    ring_index_count: u32,
    blip_instances: wgpu::Buffer,
    blip_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth: DepthTarget,
}

impl RadarPipelines {
    /// Compile both shaders, link the three pipelines and upload the
    /// static geometry and blip instances.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        geometry: &StaticGeometry,
        blips: &[Blip],
        width: u32,
        height: u32,
    ) -> Result<Self, RendererError> {
        let radar_shader = RADAR_SHADER.compile(device)?;
        let blip_shader = BLIP_SHADER.compile(device)?;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("radar uniforms"),
            size: std::mem::size_of::<RadarUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("radar bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(
                        std::mem::size_of::<RadarUniforms>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("radar bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("radar pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let [disc_entry, ring_entry] = RADAR_SHADER.fragment_entry_points::<2>()?;
        let [blip_entry] = BLIP_SHADER.fragment_entry_points::<1>()?;

        let disc_pipeline = validated(device, "disc pipeline", || {
            create_pipeline(
                device,
                &PipelineDesc {
                    label: "disc pipeline",
                    layout: &layout,
                    shader: &radar_shader,
                    vertex_entry: RADAR_SHADER.vertex_entry,
                    fragment_entry: disc_entry,
                    buffers: &[RadarVertex::LAYOUT],
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    depth_write: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    format,
                },
            )
        })?;

        // Rings are coplanar with the disc, so they skip the depth test.
        let ring_pipeline = validated(device, "ring pipeline", || {
            create_pipeline(
                device,
                &PipelineDesc {
                    label: "ring pipeline",
                    layout: &layout,
                    shader: &radar_shader,
                    vertex_entry: RADAR_SHADER.vertex_entry,
                    fragment_entry: ring_entry,
                    buffers: &[RadarVertex::LAYOUT],
                    topology: wgpu::PrimitiveTopology::LineList,
                    depth_write: false,
                    depth_compare: wgpu::CompareFunction::Always,
                    format,
                },
            )
        })?;

        let blip_pipeline = validated(device, "blip pipeline", || {
            create_pipeline(
                device,
                &PipelineDesc {
                    label: "blip pipeline",
                    layout: &layout,
                    shader: &blip_shader,
                    vertex_entry: BLIP_SHADER.vertex_entry,
                    fragment_entry: blip_entry,
                    buffers: &[Blip::LAYOUT],
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    depth_write: false,
                    depth_compare: wgpu::CompareFunction::Less,
                    format,
                },
            )
        })?;

        let disc_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("disc vertex buffer"),
            contents: bytemuck::cast_slice(&geometry.disc),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let disc_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("disc index buffer"),
            contents: bytemuck::cast_slice(&geometry.disc_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let ring_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring vertex buffer"),
            contents: bytemuck::cast_slice(&geometry.rings),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ring_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring index buffer"),
            contents: bytemuck::cast_slice(&geometry.ring_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let blip_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blip instance buffer"),
            contents: bytemuck::cast_slice(blips),
            usage: wgpu::BufferUsages::VERTEX,
        });

        tracing::debug!(
            disc_indices = geometry.disc_indices.len(),
            ring_indices = geometry.ring_indices.len(),
            blips = blips.len(),
            "Radar buffers uploaded"
        );

        Ok(Self {
            disc_pipeline,
            ring_pipeline,
            blip_pipeline,
            disc_vertices,
            disc_indices,
            disc_index_count: geometry.disc_indices.len() as u32,
            ring_vertices,
            ring_indices,
            ring_index_count: geometry.ring_indices.len() as u32,
            blip_instances,
            blip_count: blips.len() as u32,
            uniform_buffer,
            bind_group,
            depth: DepthTarget::new(device, width, height),
        })
    }

    /// Recreate the depth target after a resize.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTarget::new(device, width, height);
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &RadarUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record the radar pass: clear, disc, rings, blips.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("radar pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_bind_group(0, &self.bind_group, &[]);

        pass.set_pipeline(&self.disc_pipeline);
        pass.set_vertex_buffer(0, self.disc_vertices.slice(..));
        pass.set_index_buffer(self.disc_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.disc_index_count, 0, 0..1);

        pass.set_pipeline(&self.ring_pipeline);
        pass.set_vertex_buffer(0, self.ring_vertices.slice(..));
        pass.set_index_buffer(self.ring_indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..self.ring_index_count, 0, 0..1);

        pass.set_pipeline(&self.blip_pipeline);
        pass.set_vertex_buffer(0, self.blip_instances.slice(..));
        pass.draw(0..BLIP_QUAD_VERTICES, 0..self.blip_count);
    }
}

struct PipelineDesc<'a> {
    label: &'a str,
    layout: &'a wgpu::PipelineLayout,
    shader: &'a wgpu::ShaderModule,
    vertex_entry: &'a str,
    fragment_entry: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    topology: wgpu::PrimitiveTopology,
    depth_write: bool,
    depth_compare: wgpu::CompareFunction,
    format: wgpu::TextureFormat,
}

fn create_pipeline(device: &wgpu::Device, desc: &PipelineDesc<'_>) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(desc.layout),
        vertex: wgpu::VertexState {
            module: desc.shader,
            entry_point: Some(desc.vertex_entry),
            buffers: desc.buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: desc.shader,
            entry_point: Some(desc.fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: desc.depth_write,
            depth_compare: desc.depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
