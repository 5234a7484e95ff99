//! Sphere mesh vertex types, subdivision and buffer layout.

use morph_common::ConstructionError;

/// A single vertex of the sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) + tangent(vec4) = 48 bytes.
/// `tangent.w` carries the handedness of the UV basis so the shader can
/// rebuild the bitangent as `cross(normal, tangent.xyz) * tangent.w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 4],
}

impl SphereVertex {
    /// wgpu vertex buffer layout for `SphereVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
            // tangent: vec4<f32> at offset 32
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 32,
                shader_location: 3,
            },
        ],
    };
}

/// Width × height segment counts of the UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    width: u32,
    height: u32,
}

impl Subdivision {
    /// Upper bound per axis, the same limit config validation applies.
    pub const MAX_SEGMENTS: u32 = morph_common::MAX_SUBDIVISION;

    /// The density the scene is built with.
    pub const DEFAULT: Self = Self {
        width: 512,
        height: 512,
    };

    /// Validate segment counts. Zero (or absurdly large) counts are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self, ConstructionError> {
        let valid = |n: u32| (1..=Self::MAX_SEGMENTS).contains(&n);
        if !valid(width) || !valid(height) {
            return Err(ConstructionError::InvalidSubdivision {
                width,
                height,
                max: Self::MAX_SEGMENTS,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` as floats, the form the shader receives.
    pub fn as_uniform(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    /// Number of vertices the mesh will contain: one grid row per latitude
    /// ring including both poles, one seam-duplicated column per longitude.
    pub fn vertex_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }

    /// Number of indices the mesh will contain. Polar rows emit one
    /// triangle per quad, every other row two.
    pub fn index_count(&self) -> usize {
        6 * self.width as usize * (self.height as usize - 1)
    }
}

impl Default for Subdivision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable indexed sphere mesh.
///
/// Built once; displacement happens per frame on the GPU, never by
/// mutating this data.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    pub(super) vertices: Vec<SphereVertex>,
    pub(super) indices: Vec<u32>,
    pub(super) subdivision: Subdivision,
}

impl SphereMesh {
    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn subdivision(&self) -> Subdivision {
        self.subdivision
    }

    /// Iterate the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

// =============================================================================
// Tests
// =============================================================================
