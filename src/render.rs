use crate::core::mesh::{cylinder, uv_sphere, MeshData};
use crate::core::{
    InstanceData, SceneLayout, LINK_SEGMENTS, SHININESS, SPHERE_RADIUS, SPHERE_RINGS,
    SPHERE_SEGMENTS,
};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod pipelines;
mod targets;
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    group: [[f32; 4]; 4],
    eye: [f32; 4],
    material: [f32; 4],
}

/// Per-frame inputs the renderer needs besides instance data.
pub struct FrameView {
    pub view_proj: Mat4,
    pub group: Mat4,
    pub eye: Vec3,
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex,
            index,
            index_count: mesh.indices.len() as u32,
        }
    }

    fn destroy(&self) {
        self.vertex.destroy();
        self.index.destroy();
    }
}

struct InstanceBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl InstanceBuffer {
    fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (std::mem::size_of::<InstanceData>() * capacity.max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer, count: 0 }
    }

    fn write(&mut self, queue: &wgpu::Queue, data: &[InstanceData]) {
        let capacity = (self.buffer.size() as usize) / std::mem::size_of::<InstanceData>();
        let data = &data[..data.len().min(capacity)];
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        self.count = data.len() as u32;
    }
}

/// Every GPU resource the helix owns. Built once per widget; released by
/// [`GpuState::dispose`].
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    sphere_mesh: MeshBuffers,
    link_mesh: MeshBuffers,
    spheres: InstanceBuffer,
    links: InstanceBuffer,
    backbone: wgpu::Buffer,
    backbone_count: u32,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, layout: &SceneLayout) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                // Decorative layer; do not wake a discrete GPU for it
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("helix_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = helpers::preferred_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::preferred_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("helix_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::HELIX_WGSL.into()),
        });
        let pipes = pipelines::create_pipelines(&device, &shader, format);

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("helix_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("helix_bg"),
            layout: &pipes.bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let sphere_mesh = MeshBuffers::upload(
            &device,
            "sphere_mesh",
            &uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS),
        );
        let link_mesh = MeshBuffers::upload(&device, "link_mesh", &cylinder(1.0, 1.0, LINK_SEGMENTS));
        let spheres = InstanceBuffer::new(&device, "sphere_instances", layout.sphere_count());
        let links = InstanceBuffer::new(&device, "link_instances", layout.link_count());

        let lines = layout.backbone_vertices();
        let backbone = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("backbone_vb"),
            contents: bytemuck::cast_slice(&lines),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::info!(
            "[gpu] ready {}x{} format={:?} spheres={} links={} backbone_vertices={}",
            width,
            height,
            format,
            layout.sphere_count(),
            layout.link_count(),
            lines.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            mesh_pipeline: pipes.mesh,
            line_pipeline: pipes.line,
            uniform_buffer,
            bind_group,
            sphere_mesh,
            link_mesh,
            spheres,
            links,
            backbone,
            backbone_count: lines.len() as u32,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn upload_instances(&mut self, spheres: &[InstanceData], links: &[InstanceData]) {
        self.spheres.write(&self.queue, spheres);
        self.links.write(&self.queue, links);
    }

    pub fn render(&mut self, view: &FrameView) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms {
            view_proj: view.view_proj.to_cols_array_2d(),
            group: view.group.to_cols_array_2d(),
            eye: view.eye.extend(1.0).to_array(),
            material: [SHININESS, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("helix_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("helix_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.backbone.slice(..));
            rpass.draw(0..self.backbone_count, 0..1);

            rpass.set_pipeline(&self.mesh_pipeline);
            for (mesh, instances) in [(&self.link_mesh, &self.links), (&self.sphere_mesh, &self.spheres)] {
                if instances.count == 0 {
                    continue;
                }
                rpass.set_vertex_buffer(0, mesh.vertex.slice(..));
                rpass.set_vertex_buffer(1, instances.buffer.slice(..));
                rpass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..instances.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Release every buffer and texture this state created.
    pub fn dispose(self) {
        self.sphere_mesh.destroy();
        self.link_mesh.destroy();
        self.spheres.buffer.destroy();
        self.links.buffer.destroy();
        self.backbone.destroy();
        self.uniform_buffer.destroy();
        self.depth.destroy();
        self.device.destroy();
        log::info!("[gpu] disposed");
    }
}
