use std::path::Path;
use std::sync::Arc;

use ash::vk;
use thiserror::Error;
use ultraviolet::{Mat4, Vec3, Vec4};

use crate::buffer::{Buffer, GpuError};
use crate::context::Context;
use crate::offset_of;
use crate::texture::Texture;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("could not parse glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("could not upload model data: {0}")]
    Upload(#[from] GpuError),
    #[error("model contains no geometry")]
    Empty,
}

#[derive(Clone, Debug, Copy)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn binding_descriptions() -> [vk::VertexInputBindingDescription; 1] {
        [vk::VertexInputBindingDescription {
            binding: 0,
            stride: std::mem::size_of::<Self>() as u32,
            input_rate: vk::VertexInputRate::VERTEX,
        }]
    }

    pub fn attribute_descriptions() -> [vk::VertexInputAttributeDescription; 4] {
        [
            vk::VertexInputAttributeDescription {
                location: 0,
                binding: 0,
                format: vk::Format::R32G32B32_SFLOAT,
                offset: offset_of!(Self, position) as u32,
            },
            vk::VertexInputAttributeDescription {
                location: 1,
                binding: 0,
                format: vk::Format::R32G32B32_SFLOAT,
                offset: offset_of!(Self, normal) as u32,
            },
            vk::VertexInputAttributeDescription {
                location: 2,
                binding: 0,
                format: vk::Format::R32G32_SFLOAT,
                offset: offset_of!(Self, uv) as u32,
            },
            vk::VertexInputAttributeDescription {
                location: 3,
                binding: 0,
                format: vk::Format::R32G32B32A32_SFLOAT,
                offset: offset_of!(Self, color) as u32,
            },
        ]
    }
}

/// A drawable sub-range of the model's shared vertex/index buffers.
///
/// Indices are primitive-relative: index value + `first_vertex` addresses the
/// shared vertex buffer, which is what both `vertex_offset` in indexed draws
/// and `first_vertex` in acceleration structure build ranges expect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Primitive {
    pub first_index: u32,
    pub index_count: u32,
    pub first_vertex: u32,
    pub vertex_count: u32,
    pub material_index: u32,
}

#[derive(Clone, Debug)]
pub struct Material {
    pub base_color_factor: Vec4,
    /// Index into the model's texture list.
    pub base_color_texture: Option<u32>,
    pub emissive_factor: Vec3,
}

pub struct Node {
    pub local_transform: Mat4,
    pub primitives: Vec<Primitive>,
    pub children: Vec<Node>,
}

/// One loaded glTF asset with its geometry uploaded to GPU buffers.
///
/// Node transforms are baked into the vertex data at load time, so the whole
/// model can be treated as one rigid object: per-instance placement is the
/// only transform applied at draw/trace time.
pub struct GltfModel {
    pub vertex_buffer: Buffer<Vertex>,
    pub index_buffer: Buffer<u32>,
    pub vertex_count: u32,
    pub index_count: u32,
    pub nodes: Vec<Node>,
    pub materials: Vec<Material>,
    pub textures: Vec<Texture>,
}

impl GltfModel {
    pub fn load(context: &Arc<Context>, path: &Path) -> Result<GltfModel, ModelLoadError> {
        let (document, buffers, images) = gltf::import(path)?;

        let mut vertices: Vec<Vertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::new();

        let mut materials: Vec<Material> = document
            .materials()
            .map(|material| {
                let pbr = material.pbr_metallic_roughness();
                Material {
                    base_color_factor: Vec4::from(pbr.base_color_factor()),
                    base_color_texture: pbr
                        .base_color_texture()
                        .map(|info| info.texture().index() as u32),
                    emissive_factor: Vec3::from(material.emissive_factor()),
                }
            })
            .collect();
        // Primitives without a material fall back to plain white.
        let default_material_index = materials.len() as u32;
        materials.push(Material {
            base_color_factor: Vec4::one(),
            base_color_texture: None,
            emissive_factor: Vec3::zero(),
        });

        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(ModelLoadError::Empty)?;

        let nodes = scene
            .nodes()
            .map(|node| {
                flatten_node(
                    &node,
                    Mat4::identity(),
                    &buffers,
                    default_material_index,
                    &mut vertices,
                    &mut indices,
                )
            })
            .collect::<Vec<_>>();

        if vertices.is_empty() || indices.is_empty() {
            return Err(ModelLoadError::Empty);
        }

        let geometry_usage = vk::BufferUsageFlags::ACCELERATION_STRUCTURE_BUILD_INPUT_READ_ONLY_KHR
            | vk::BufferUsageFlags::SHADER_DEVICE_ADDRESS
            | vk::BufferUsageFlags::STORAGE_BUFFER;

        let vertex_buffer = Buffer::device_local_with_data(
            context.clone(),
            geometry_usage | vk::BufferUsageFlags::VERTEX_BUFFER,
            &vertices,
        )?;
        let index_buffer = Buffer::device_local_with_data(
            context.clone(),
            geometry_usage | vk::BufferUsageFlags::INDEX_BUFFER,
            &indices,
        )?;

        let textures = document
            .textures()
            .map(|texture| {
                let image = &images[texture.source().index()];
                let (width, height, pixels) = to_rgba8(image);
                Texture::from_rgba8(context.clone(), width, height, &pixels)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GltfModel {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: indices.len() as u32,
            nodes,
            materials,
            textures,
        })
    }

    /// All primitives of this model, walking the node tree in depth-first
    /// pre-order. This is the canonical traversal: acceleration structure
    /// geometry emission and indirect draw emission both use it, which keeps
    /// per-draw metadata positionally consistent across the two paths.
    pub fn primitives(&self) -> Vec<Primitive> {
        fn visit(node: &Node, out: &mut Vec<Primitive>) {
            out.extend_from_slice(&node.primitives);
            for child in &node.children {
                visit(child, out);
            }
        }

        let mut out = Vec::new();
        for node in &self.nodes {
            visit(node, &mut out);
        }
        out
    }
}

fn flatten_node(
    node: &gltf::Node,
    parent_transform: Mat4,
    buffers: &[gltf::buffer::Data],
    default_material_index: u32,
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
) -> Node {
    let local_transform = {
        let columns = node.transform().matrix();
        Mat4::new(
            Vec4::from(columns[0]),
            Vec4::from(columns[1]),
            Vec4::from(columns[2]),
            Vec4::from(columns[3]),
        )
    };
    let world_transform = parent_transform * local_transform;
    let normal_transform = world_transform.inversed().transposed();

    let mut primitives = Vec::new();
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|v| &v.0[..]));

            let positions: Vec<[f32; 3]> = match reader.read_positions() {
                Some(positions) => positions.collect(),
                None => continue,
            };

            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|normals| normals.collect())
                .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);

            let uvs: Vec<[f32; 2]> = reader
                .read_tex_coords(0)
                .map(|uvs| uvs.into_f32().collect())
                .unwrap_or_else(|| vec![[0.0, 0.0]; positions.len()]);

            let colors: Vec<[f32; 4]> = reader
                .read_colors(0)
                .map(|colors| colors.into_rgba_f32().collect())
                .unwrap_or_else(|| vec![[1.0, 1.0, 1.0, 1.0]; positions.len()]);

            let primitive_indices: Vec<u32> = reader
                .read_indices()
                .map(|read| read.into_u32().collect())
                .unwrap_or_else(|| (0..positions.len() as u32).collect());

            let first_vertex = vertices.len() as u32;
            let first_index = indices.len() as u32;

            for i in 0..positions.len() {
                let [px, py, pz] = positions[i];
                let [nx, ny, nz] = normals[i];
                let position = world_transform * Vec4::new(px, py, pz, 1.0);
                let rotated = normal_transform * Vec4::new(nx, ny, nz, 0.0);
                let normal = Vec3::new(rotated.x, rotated.y, rotated.z).normalized();
                vertices.push(Vertex {
                    position: [position.x, position.y, position.z],
                    normal: [normal.x, normal.y, normal.z],
                    uv: uvs[i],
                    color: colors[i],
                });
            }
            indices.extend_from_slice(&primitive_indices);

            primitives.push(Primitive {
                first_index,
                index_count: primitive_indices.len() as u32,
                first_vertex,
                vertex_count: positions.len() as u32,
                material_index: primitive
                    .material()
                    .index()
                    .map(|index| index as u32)
                    .unwrap_or(default_material_index),
            });
        }
    }

    let children = node
        .children()
        .map(|child| {
            flatten_node(
                &child,
                world_transform,
                buffers,
                default_material_index,
                vertices,
                indices,
            )
        })
        .collect();

    Node {
        local_transform,
        primitives,
        children,
    }
}

fn to_rgba8(image: &gltf::image::Data) -> (u32, u32, Vec<u8>) {
    use gltf::image::Format;

    let pixel_count = (image.width * image.height) as usize;
    let pixels = match image.format {
        Format::R8G8B8A8 => image.pixels.clone(),
        Format::R8G8B8 => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for rgb in image.pixels.chunks_exact(3) {
                out.extend_from_slice(rgb);
                out.push(0xFF);
            }
            out
        }
        Format::R8 => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for &gray in &image.pixels {
                out.extend_from_slice(&[gray, gray, gray, 0xFF]);
            }
            out
        }
        Format::R8G8 => {
            let mut out = Vec::with_capacity(pixel_count * 4);
            for pair in image.pixels.chunks_exact(2) {
                out.extend_from_slice(&[pair[0], pair[1], 0, 0xFF]);
            }
            out
        }
        other => {
            log::warn!("Unsupported texture format {:?}, substituting white", other);
            vec![0xFF; pixel_count * 4]
        }
    };

    (image.width, image.height, pixels)
}
