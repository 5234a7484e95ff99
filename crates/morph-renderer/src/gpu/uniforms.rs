//! CPU mirrors of the WGSL uniform blocks and the push-on-change uplink.
//!
//! Every field of [`SphereUniforms`] has a slot of the same name in the
//! `SphereUniforms` struct of `shaders/sphere.wgsl`. The slot lists are
//! checked against the shader text before a pipeline is built.

use morph_common::UniformBindingError;

/// Name under which the sphere program reports binding faults.
pub const SPHERE_PROGRAM: &str = "sphere.wgsl";

/// Group 1: everything the deformation and lighting stages read.
///
/// Layout: 4 × vec4 + vec2 + 7 × f32 + 3 × f32 padding = 112 bytes,
/// matching WGSL uniform alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    /// Light A linear RGB (`w` unused).
    pub light_a_color: [f32; 4],
    /// Light A unit-sphere position (`w` unused).
    pub light_a_position: [f32; 4],
    pub light_b_color: [f32; 4],
    pub light_b_position: [f32; 4],
    /// Width and height segment counts of the mesh.
    pub subdivision: [f32; 2],
    pub light_a_intensity: f32,
    pub light_b_intensity: f32,
    /// Accumulated time, already scaled by the time frequency.
    pub time: f32,
    pub distortion_frequency: f32,
    pub distortion_strength: f32,
    pub displacement_frequency: f32,
    pub displacement_strength: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl SphereUniforms {
    /// Slot names the shader must declare.
    pub const SLOTS: &'static [&'static str] = &[
        "light_a_color",
        "light_a_position",
        "light_b_color",
        "light_b_position",
        "subdivision",
        "light_a_intensity",
        "light_b_intensity",
        "time",
        "distortion_frequency",
        "distortion_strength",
        "displacement_frequency",
        "displacement_strength",
    ];
}

/// Group 0: camera and model transform.
///
/// Layout: 2 × mat4 + vec4 = 144 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// Projection × view (column-major).
    pub view_projection: [f32; 16],
    /// Model matrix (column-major).
    pub model: [f32; 16],
    /// World-space eye position (`w` unused).
    pub camera_position: [f32; 4],
}

impl CameraUniforms {
    pub const SLOTS: &'static [&'static str] = &["view_projection", "model", "camera_position"];
}

/// Field names declared by `struct <name> { ... }` in WGSL source.
pub fn shader_struct_fields<'a>(source: &'a str, struct_name: &str) -> Option<Vec<&'a str>> {
    let header = format!("struct {struct_name}");
    let body = source.match_indices(&header).find_map(|(start, _)| {
        let rest = &source[start + header.len()..];
        let open = rest.find('{')?;
        if !rest[..open].trim().is_empty() {
            return None;
        }
        let close = rest.find('}')?;
        Some(&rest[open + 1..close])
    })?;

    Some(
        body.lines()
            .map(|line| line.split("//").next().unwrap_or_default())
            .flat_map(|line| line.split(','))
            .filter_map(|field| field.split_once(':'))
            .map(|(name, _)| name.trim())
            .filter(|name| !name.is_empty())
            .collect(),
    )
}

/// Check that every slot is declared by `struct_name` in `source`.
///
/// Returns the first missing slot. A missing struct reports its first slot.
pub fn verify_shader_slots(
    source: &str,
    struct_name: &str,
    slots: &'static [&'static str],
    program: &'static str,
) -> Result<(), UniformBindingError> {
    let fields = shader_struct_fields(source, struct_name).unwrap_or_default();
    match slots.iter().copied().find(|slot| !fields.contains(slot)) {
        Some(slot) => Err(UniformBindingError { slot, program }),
        None => Ok(()),
    }
}

/// Push-on-change staging for one uniform buffer.
///
/// `stage` records a new block only when it differs from what the GPU
/// already holds; `flush` writes it before the next submit.
#[derive(Debug)]
pub struct UniformUplink<T: bytemuck::Pod + PartialEq> {
    pushed: Option<T>,
    pending: Option<T>,
    upload_count: u64,
}

impl<T: bytemuck::Pod + PartialEq> UniformUplink<T> {
    pub fn new() -> Self {
        Self {
            pushed: None,
            pending: None,
            upload_count: 0,
        }
    }

    /// Queue `value` for upload unless it is already on the GPU.
    pub fn stage(&mut self, value: T) {
        if self.pushed.as_ref() == Some(&value) {
            self.pending = None;
        } else {
            self.pending = Some(value);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the staged block and record it as pushed.
    pub fn take_pending(&mut self) -> Option<T> {
        let value = self.pending.take()?;
        self.pushed = Some(value);
        self.upload_count += 1;
        Some(value)
    }

    /// Write the staged block, if any. Returns whether a write happened.
    pub fn flush(&mut self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) -> bool {
        match self.take_pending() {
            Some(value) => {
                queue.write_buffer(buffer, 0, bytemuck::bytes_of(&value));
                true
            }
            None => false,
        }
    }

    /// Number of blocks written so far.
    pub fn upload_count(&self) -> u64 {
        self.upload_count
    }

    /// Last block handed to the GPU.
    pub fn pushed(&self) -> Option<&T> {
        self.pushed.as_ref()
    }
}

impl<T: bytemuck::Pod + PartialEq> Default for UniformUplink<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADER: &str = include_str!("../shaders/sphere.wgsl");

    #[test]
    fn block_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<SphereUniforms>(), 112);
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 144);
        assert_eq!(std::mem::size_of::<SphereUniforms>() % 16, 0);
    }

    #[test]
    fn shader_declares_every_sphere_slot() {
        verify_shader_slots(SHADER, "SphereUniforms", SphereUniforms::SLOTS, SPHERE_PROGRAM)
            .unwrap();
        verify_shader_slots(SHADER, "CameraUniforms", CameraUniforms::SLOTS, SPHERE_PROGRAM)
            .unwrap();
    }

    #[test]
    fn shader_fields_follow_cpu_order() {
        let fields = shader_struct_fields(SHADER, "SphereUniforms").unwrap();
        let declared: Vec<&str> = fields
            .into_iter()
            .filter(|f| !f.starts_with('_'))
            .collect();
        assert_eq!(declared, SphereUniforms::SLOTS);
    }

    #[test]
    fn shader_has_both_entry_points() {
        assert!(SHADER.contains("fn vs_main("));
        assert!(SHADER.contains("fn fs_main("));
    }

    #[test]
    fn missing_slot_is_reported() {
        let source = "struct SphereUniforms {\n    time: f32,\n    subdivision: vec2<f32>,\n}\n";
        let err = verify_shader_slots(source, "SphereUniforms", SphereUniforms::SLOTS, "test.wgsl")
            .unwrap_err();
        assert_eq!(err.slot, "light_a_color");
        assert_eq!(err.program, "test.wgsl");
    }

    #[test]
    fn missing_struct_is_reported() {
        let err = verify_shader_slots("", "CameraUniforms", CameraUniforms::SLOTS, "empty.wgsl")
            .unwrap_err();
        assert_eq!(err.slot, "view_projection");
    }

    #[test]
    fn field_parser_ignores_comments_and_similar_names() {
        let source = "struct SphereUniformsExtra { nope: f32 }\n\
                      struct SphereUniforms {\n    // time: f32,\n    a: f32, b: vec2<f32>,\n}";
        let fields = shader_struct_fields(source, "SphereUniforms").unwrap();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn uplink_skips_unchanged_blocks() {
        let mut uplink = UniformUplink::<SphereUniforms>::new();
        let block = SphereUniforms {
            time: 1.0,
            ..bytemuck::Zeroable::zeroed()
        };

        uplink.stage(block);
        assert!(uplink.is_pending());
        assert_eq!(uplink.take_pending(), Some(block));
        assert_eq!(uplink.upload_count(), 1);

        uplink.stage(block);
        assert!(!uplink.is_pending());
        assert_eq!(uplink.take_pending(), None);

        let changed = SphereUniforms { time: 2.0, ..block };
        uplink.stage(changed);
        assert_eq!(uplink.take_pending(), Some(changed));
        assert_eq!(uplink.upload_count(), 2);
        assert_eq!(uplink.pushed(), Some(&changed));
    }

    #[test]
    fn restaging_the_pushed_value_cancels_pending() {
        let mut uplink = UniformUplink::<CameraUniforms>::new();
        let a: CameraUniforms = bytemuck::Zeroable::zeroed();
        let b = CameraUniforms {
            camera_position: [0.0, 0.0, 6.0, 1.0],
            ..a
        };
        uplink.stage(a);
        uplink.take_pending();
        uplink.stage(b);
        uplink.stage(a);
        assert!(!uplink.is_pending());
    }
}
