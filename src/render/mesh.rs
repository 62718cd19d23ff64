use super::helpers;
use super::targets::SCENE_FORMAT;
use crate::constants::{AMBIENT_TINT, INSTANCE_CAPACITY, OUTLINE_ALPHA, TRAIL_ALPHA, TRAIL_RGB};
use crate::core::{box_edge_lines, box_triangles, StructureInstance};
use glam::Mat4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    trail: [f32; 4],
    shade: [f32; 4],
}

impl SceneUniforms {
    pub(crate) fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            trail: [TRAIL_RGB[0], TRAIL_RGB[1], TRAIL_RGB[2], TRAIL_ALPHA],
            shade: [OUTLINE_ALPHA, AMBIENT_TINT, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceData {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

impl From<&StructureInstance> for InstanceData {
    fn from(inst: &StructureInstance) -> Self {
        Self {
            model: inst.model.to_cols_array_2d(),
            color: inst.fill.to_unit_array(),
        }
    }
}

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 1] = [wgpu::VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 0,
        shader_location: 2,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 16,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 32,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 48,
        shader_location: 5,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 64,
        shader_location: 6,
    },
];

/// Pipelines and buffers for the trail fade, box fills and outlines.
pub(crate) struct SceneResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) fade_pipeline: wgpu::RenderPipeline,
    pub(crate) fill_pipeline: wgpu::RenderPipeline,
    pub(crate) outline_pipeline: wgpu::RenderPipeline,
    pub(crate) box_vb: wgpu::Buffer,
    pub(crate) box_vertex_count: u32,
    pub(crate) edge_vb: wgpu::Buffer,
    pub(crate) edge_vertex_count: u32,
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) instance_capacity: usize,
    pub(crate) instance_count: u32,
}

impl SceneResources {
    pub(crate) fn new(device: &wgpu::Device, shader: &wgpu::ShaderModule) -> Self {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let box_positions = box_triangles();
        let box_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("box_vb"),
            contents: bytemuck::cast_slice(&box_positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let edge_positions = box_edge_lines();
        let edge_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("edge_vb"),
            contents: bytemuck::cast_slice(&edge_positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = create_instance_buffer(device, INSTANCE_CAPACITY);

        // Trails: translucent background over last frame, ignores depth
        let fade_pipeline = helpers::make_fullscreen_pipeline(
            device,
            "fade_pipeline",
            &layout,
            shader,
            "fs_fade",
            SCENE_FORMAT,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(helpers::scene_depth(wgpu::CompareFunction::Always, false)),
        );
        let fill_pipeline = make_mesh_pipeline(
            device,
            "fill_pipeline",
            &layout,
            shader,
            "fs_fill",
            wgpu::PrimitiveTopology::TriangleList,
            helpers::scene_depth(wgpu::CompareFunction::Less, true),
        );
        let outline_pipeline = make_mesh_pipeline(
            device,
            "outline_pipeline",
            &layout,
            shader,
            "fs_outline",
            wgpu::PrimitiveTopology::LineList,
            helpers::scene_depth(wgpu::CompareFunction::LessEqual, false),
        );

        Self {
            uniform_buffer,
            bind_group,
            fade_pipeline,
            fill_pipeline,
            outline_pipeline,
            box_vb,
            box_vertex_count: box_positions.len() as u32,
            edge_vb,
            edge_vertex_count: edge_positions.len() as u32,
            instance_vb,
            instance_capacity: INSTANCE_CAPACITY,
            instance_count: 0,
        }
    }

    /// Upload this frame's instances, growing the buffer when the pool outruns it.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        instances: &[StructureInstance],
    ) {
        let data: Vec<InstanceData> = instances.iter().map(InstanceData::from).collect();
        if data.len() > self.instance_capacity {
            let capacity = data.len().next_power_of_two();
            log::debug!(
                "[render] growing instance buffer {} -> {}",
                self.instance_capacity,
                capacity
            );
            self.instance_vb = create_instance_buffer(device, capacity);
            self.instance_capacity = capacity;
        }
        if !data.is_empty() {
            queue.write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&data));
        }
        self.instance_count = data.len() as u32;
        let uniforms = SceneUniforms::new(view_proj);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);

        rpass.set_pipeline(&self.fade_pipeline);
        rpass.draw(0..3, 0..1);

        if self.instance_count == 0 {
            return;
        }
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));

        rpass.set_pipeline(&self.fill_pipeline);
        rpass.set_vertex_buffer(0, self.box_vb.slice(..));
        rpass.draw(0..self.box_vertex_count, 0..self.instance_count);

        rpass.set_pipeline(&self.outline_pipeline);
        rpass.set_vertex_buffer(0, self.edge_vb.slice(..));
        rpass.draw(0..self.edge_vertex_count, 0..self.instance_count);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_vb"),
        size: (std::mem::size_of::<InstanceData>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn make_mesh_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    frag_entry: &str,
    topology: wgpu::PrimitiveTopology,
    depth: wgpu::DepthStencilState,
) -> wgpu::RenderPipeline {
    let vertex_buffers = [
        // slot 0: unit box positions
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        },
        // slot 1: per-structure model matrix + fill
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        },
    ];
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(depth),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(frag_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: SCENE_FORMAT,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
