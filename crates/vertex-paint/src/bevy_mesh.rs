//! Bevy host adapter
//!
//! Wraps a `bevy::mesh::Mesh` so it can be painted by a [`PaintSession`](crate::PaintSession)
//! or the free functions. Positions are read once from `ATTRIBUTE_POSITION`;
//! colors live in `ATTRIBUTE_COLOR` as `Float32x4`.

use bevy::math::{Affine3A, Vec3};
use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;

use crate::mesh::{MeshGeometry, VertexColorStorage};
use crate::types::VertexColor;

/// A Bevy mesh plus the world transform of the entity that renders it
pub struct BevyPaintTarget<'a> {
    mesh: &'a mut Mesh,
    local_to_world: Affine3A,
    positions: Vec<Vec3>,
}

impl<'a> BevyPaintTarget<'a> {
    /// Wrap `mesh`; pass `GlobalTransform::affine()` of the owning entity.
    ///
    /// A mesh without float3 positions is treated as having no vertices.
    pub fn new(mesh: &'a mut Mesh, local_to_world: Affine3A) -> Self {
        let positions: Vec<Vec3> = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .map(|p| p.iter().map(|v| Vec3::from_array(*v)).collect())
            .unwrap_or_default();

        if positions.is_empty() {
            tracing::debug!("BevyPaintTarget::new: mesh has no positions");
        }

        Self {
            mesh,
            local_to_world,
            positions,
        }
    }

    /// The wrapped mesh
    pub fn mesh(&self) -> &Mesh {
        self.mesh
    }
}

impl MeshGeometry for BevyPaintTarget<'_> {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn local_vertex(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }
}

impl VertexColorStorage for BevyPaintTarget<'_> {
    fn vertex_colors(&self) -> Option<&[VertexColor]> {
        match self.mesh.attribute(Mesh::ATTRIBUTE_COLOR)? {
            VertexAttributeValues::Float32x4(colors) => Some(bytemuck::cast_slice(colors)),
            _ => None,
        }
    }

    fn set_vertex_colors(&mut self, colors: Vec<VertexColor>) {
        let colors: Vec<[f32; 4]> = colors.into_iter().map(VertexColor::to_array).collect();
        self.mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    }
}
