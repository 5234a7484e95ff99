//! CPU reference of the vertex stage.
//!
//! Mirrors `vs_main` in `shaders/sphere.wgsl`: domain warp, displacement
//! along the normal, then a finite-difference normal rebuilt from two
//! displaced neighbours. Used to check the deformation contract without
//! a GPU and to report the displaced bounding radius.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

use super::noise::gradient_noise;
use super::types::SphereMesh;
use crate::gpu::SphereUniforms;

/// Offsets decorrelating the three warp components. Must match the shader.
pub const WARP_OFFSET_Y: Vec3 = Vec3::new(31.416, -47.853, 12.793);
pub const WARP_OFFSET_Z: Vec3 = Vec3::new(-23.719, 5.281, 67.137);

/// The uniform values the vertex stage reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementParams {
    pub time: f32,
    pub distortion_frequency: f32,
    pub distortion_strength: f32,
    pub displacement_frequency: f32,
    pub displacement_strength: f32,
    pub subdivision: Vec2,
}

impl From<&SphereUniforms> for DisplacementParams {
    fn from(u: &SphereUniforms) -> Self {
        Self {
            time: u.time,
            distortion_frequency: u.distortion_frequency,
            distortion_strength: u.distortion_strength,
            displacement_frequency: u.displacement_frequency,
            displacement_strength: u.displacement_strength,
            subdivision: Vec2::from_array(u.subdivision),
        }
    }
}

/// A vertex after the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacedVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl DisplacementParams {
    /// Domain-warped sampling coordinate. Each component moves by at most
    /// `distortion_strength`.
    pub fn warp(&self, p: Vec3) -> Vec3 {
        let q = p * self.distortion_frequency + Vec3::splat(self.time);
        let offset = Vec3::new(
            gradient_noise(q),
            gradient_noise(q + WARP_OFFSET_Y),
            gradient_noise(q + WARP_OFFSET_Z),
        );
        p + offset * self.distortion_strength
    }

    /// Signed offset along the normal, in `[-displacement_strength, displacement_strength]`.
    pub fn displacement(&self, p: Vec3) -> f32 {
        let warped = self.warp(p);
        gradient_noise(warped * self.displacement_frequency + Vec3::splat(self.time))
            * self.displacement_strength
    }

    /// Push `p` along its radial direction by the displacement at `p`.
    pub fn displaced_position(&self, p: Vec3) -> Vec3 {
        p + p.normalize_or_zero() * self.displacement(p)
    }

    /// Finite-difference steps along tangent and bitangent. One grid cell
    /// in each direction, so they shrink as the mesh gets denser.
    pub fn neighbour_steps(&self) -> Vec2 {
        Vec2::new(TAU / self.subdivision.x, PI / self.subdivision.y)
    }

    /// Run the full vertex stage on one base vertex.
    pub fn displace_vertex(&self, position: Vec3, normal: Vec3, tangent: Vec4) -> DisplacedVertex {
        let displaced = self.displaced_position(position);

        let bitangent = normal.cross(tangent.xyz()) * tangent.w;
        let steps = self.neighbour_steps();
        let neighbour_a = self.displaced_position(position + tangent.xyz() * steps.x);
        let neighbour_b = self.displaced_position(position + bitangent * steps.y);

        let computed = (neighbour_a - displaced).cross(neighbour_b - displaced);

        DisplacedVertex {
            position: displaced,
            normal: computed.try_normalize().unwrap_or(normal),
        }
    }

    /// Displace every vertex of `mesh`.
    pub fn displace_mesh(&self, mesh: &SphereMesh) -> Vec<DisplacedVertex> {
        mesh.vertices()
            .iter()
            .map(|v| {
                self.displace_vertex(
                    Vec3::from_array(v.position),
                    Vec3::from_array(v.normal),
                    Vec4::from_array(v.tangent),
                )
            })
            .collect()
    }

    /// Smallest and largest distance from the origin over the displaced mesh.
    pub fn radius_range(&self, mesh: &SphereMesh) -> (f32, f32) {
        mesh.vertices()
            .iter()
            .map(|v| self.displaced_position(Vec3::from_array(v.position)).length())
            .fold((f32::MAX, f32::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }
}

// =============================================================================
// Tests
// =============================================================================
