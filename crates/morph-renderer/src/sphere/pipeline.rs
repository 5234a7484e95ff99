//! wgpu render pipeline for the displaced sphere.
//!
//! Owns the static mesh buffers, both uniform buffers and the depth
//! target. Bind group 0 holds [`CameraUniforms`], group 1 [`SphereUniforms`].

use wgpu::util::DeviceExt;

use super::types::{SphereMesh, SphereVertex};
use crate::gpu::{
    create_depth_view, verify_shader_slots, CameraUniforms, RendererError, SphereUniforms,
    DEPTH_FORMAT, SPHERE_PROGRAM,
};

/// WGSL source of both stages.
pub const SPHERE_SHADER: &str = include_str!("../shaders/sphere.wgsl");

/// Check the shader declares every uniform slot the CPU blocks carry.
pub fn verify_sphere_shader(source: &str) -> Result<(), RendererError> {
    verify_shader_slots(source, "CameraUniforms", CameraUniforms::SLOTS, SPHERE_PROGRAM)?;
    verify_shader_slots(source, "SphereUniforms", SphereUniforms::SLOTS, SPHERE_PROGRAM)?;
    Ok(())
}

pub struct SpherePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub camera_buffer: wgpu::Buffer,
    pub camera_bind_group: wgpu::BindGroup,
    pub sphere_buffer: wgpu::Buffer,
    pub sphere_bind_group: wgpu::BindGroup,
    pub depth_view: wgpu::TextureView,
}

impl SpherePipeline {
    /// Create the sphere pipeline for a surface of `format`.
    ///
    /// Fails before touching the device if the shader lacks a uniform slot.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        mesh: &SphereMesh,
        width: u32,
        height: u32,
    ) -> Result<Self, RendererError> {
        verify_sphere_shader(SPHERE_SHADER)?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere shader"),
            source: wgpu::ShaderSource::Wgsl(SPHERE_SHADER.into()),
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere vertex buffer"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere index buffer"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        let (camera_buffer, camera_layout, camera_bind_group) =
            uniform_binding::<CameraUniforms>(device, "camera", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let (sphere_buffer, sphere_layout, sphere_bind_group) =
            uniform_binding::<SphereUniforms>(device, "sphere", wgpu::ShaderStages::VERTEX_FRAGMENT);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere pipeline layout"),
            bind_group_layouts: &[&camera_layout, &sphere_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[SphereVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        tracing::info!(
            "Sphere pipeline created ({} vertices, {} triangles)",
            mesh.vertices().len(),
            mesh.indices().len() / 3,
        );

        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices().len() as u32,
            camera_buffer,
            camera_bind_group,
            sphere_buffer,
            sphere_bind_group,
            depth_view: create_depth_view(device, width, height),
        })
    }

    /// Recreate the depth target after a resize.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = create_depth_view(device, width, height);
    }

    /// Record the sphere pass into `target`, clearing it first.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sphere pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        pass.set_bind_group(1, &self.sphere_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// One uniform buffer of `T` with its layout and bind group at binding 0.
fn uniform_binding<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> (wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup) {
    let size = std::mem::size_of::<T>() as u64;

    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label} uniforms")),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(&format!("{label} bind group layout")),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: std::num::NonZeroU64::new(size),
            },
            count: None,
        }],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{label} bind group")),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });

    (buffer, layout, bind_group)
}
