//! Sphere mesh generation.
//!
//! Generates an indexed UV sphere of radius 1 with position, normal, uv,
//! and a per-vertex tangent that follows the UV parameterisation. The
//! tangent lets the vertex shader step across the surface when it
//! rebuilds normals after displacement.

use std::f32::consts::{PI, TAU};

use morph_common::ConstructionError;

use super::types::{SphereMesh, SphereVertex, Subdivision};

/// Build a unit UV sphere with `width` longitude and `height` latitude segments.
pub fn build_sphere_mesh(width: u32, height: u32) -> Result<SphereMesh, ConstructionError> {
    let subdivision = Subdivision::new(width, height)?;
    Ok(generate_sphere_mesh(subdivision))
}

/// Generate the mesh for an already validated subdivision.
///
/// The grid has `height + 1` rings (both poles included) of `width + 1`
/// vertices (the seam column is duplicated so uv stays continuous).
/// `u` runs around the equator, `v` from the north pole (0, 1, 0) to the
/// south pole. Polar quads collapse to a single triangle.
pub fn generate_sphere_mesh(subdivision: Subdivision) -> SphereMesh {
    let w = subdivision.width();
    let h = subdivision.height();

    let mut vertices = Vec::with_capacity(subdivision.vertex_count());
    for iy in 0..=h {
        let v = iy as f32 / h as f32;

        // Pole vertices sit halfway across their quad in texture space
        let u_offset = if iy == 0 {
            0.5 / w as f32
        } else if iy == h {
            -0.5 / w as f32
        } else {
            0.0
        };

        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            vertices.push(sphere_vertex(u, v, u_offset));
        }
    }

    let mut indices = Vec::with_capacity(subdivision.index_count());
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh {
        vertices,
        indices,
        subdivision,
    }
}

/// Compute the vertex at parameter `(u, v)` on the unit sphere.
fn sphere_vertex(u: f32, v: f32, u_offset: f32) -> SphereVertex {
    let phi = u * TAU;
    let theta = v * PI;

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    let position = [-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];

    SphereVertex {
        position,
        normal: position, // unit sphere: normal == position
        uv: [u + u_offset, 1.0 - v],
        // d(position)/d(phi) normalized; defined at the poles too
        tangent: [sin_phi, 0.0, cos_phi, 1.0],
    }
}

// =============================================================================
// Tests
// =============================================================================
