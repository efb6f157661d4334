use super::helpers;
use super::targets::HDR_FORMAT;
use crate::scene::{MaterialUniform, SceneUniforms};
use wgpu::util::DeviceExt;
use wish_tree_core::mesh::{self, MeshVertex};
use wish_tree_core::{GroupMaterial, ParticleGroup, ParticleInstance};

/// GPU buffers for one instanced particle group.
struct GroupBuffers {
    mesh: wgpu::Buffer,
    mesh_len: u32,
    instances: wgpu::Buffer,
    instance_count: u32,
    material: wgpu::Buffer,
    material_bg: wgpu::BindGroup,
}

pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    scene_uniforms: wgpu::Buffer,
    scene_bg: wgpu::BindGroup,
    groups: [GroupBuffers; 3],
}

fn mesh_for(group: ParticleGroup) -> Vec<MeshVertex> {
    match group {
        ParticleGroup::Leaf => mesh::octahedron(),
        ParticleGroup::Ornament => mesh::icosahedron(),
        ParticleGroup::Ribbon => mesh::tetrahedron(),
    }
}

const MESH_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
// position, scale, rotation (XYZ Euler), padding
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![2 => Float32x3, 3 => Float32, 4 => Float32x3];

pub(crate) fn create_particle_resources(device: &wgpu::Device) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(super::PARTICLES_WGSL.into()),
    });
    let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[helpers::uniform_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let material_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("material_bgl"),
        entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&scene_bgl, &material_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let scene_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &scene_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: scene_uniforms.as_entire_binding(),
        }],
    });

    let groups = ParticleGroup::ALL.map(|group| {
        let verts = mesh_for(group);
        let mesh = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(group.label()),
            contents: bytemuck::cast_slice(&verts),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_instances"),
            size: (group.count() * std::mem::size_of::<ParticleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let material = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("group_material"),
            size: std::mem::size_of::<MaterialUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let material_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("material_bg"),
            layout: &material_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material.as_entire_binding(),
            }],
        });
        GroupBuffers {
            mesh,
            mesh_len: verts.len() as u32,
            instances,
            instance_count: 0,
            material,
            material_bg,
        }
    });
    log::info!(
        "[gpu] particle buffers ready for {} instances",
        ParticleGroup::ALL.iter().map(|g| g.count()).sum::<usize>()
    );

    ParticleResources {
        pipeline,
        scene_uniforms,
        scene_bg,
        groups,
    }
}

impl ParticleResources {
    pub(crate) fn write_scene(&self, queue: &wgpu::Queue, scene: &SceneUniforms) {
        queue.write_buffer(&self.scene_uniforms, 0, bytemuck::bytes_of(scene));
    }

    /// Overwrite one group's instances and material in place.
    pub(crate) fn upload(
        &mut self,
        queue: &wgpu::Queue,
        group: ParticleGroup,
        instances: &[ParticleInstance],
        material: &GroupMaterial,
    ) {
        let g = &mut self.groups[group.index()];
        let n = instances.len().min(group.count());
        queue.write_buffer(&g.instances, 0, bytemuck::cast_slice(&instances[..n]));
        queue.write_buffer(
            &g.material,
            0,
            bytemuck::bytes_of(&MaterialUniform::from(material)),
        );
        g.instance_count = n as u32;
    }

    /// Leaves and ornaments first; the translucent ribbon last.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.scene_bg, &[]);
        for g in &self.groups {
            if g.instance_count == 0 {
                continue;
            }
            rpass.set_bind_group(1, &g.material_bg, &[]);
            rpass.set_vertex_buffer(0, g.mesh.slice(..));
            rpass.set_vertex_buffer(1, g.instances.slice(..));
            rpass.draw(0..g.mesh_len, 0..g.instance_count);
        }
    }
}
