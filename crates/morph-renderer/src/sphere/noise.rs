//! 3D gradient noise shared by the displacement stage.
//!
//! Lattice gradients come from an integer hash instead of a permutation
//! table so the identical function can be written in WGSL. Every
//! operation here has a one-to-one counterpart in `shaders/sphere.wgsl`.

use glam::{IVec3, Vec3};

/// PCG-style integer hash.
fn pcg(v: u32) -> u32 {
    let state = v.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(277_803_737);
    (word >> 22) ^ word
}

/// Hash a lattice corner.
fn lattice_hash(c: IVec3) -> u32 {
    pcg(c.x as u32 ^ pcg(c.y as u32 ^ pcg(c.z as u32)))
}

/// Dot product of `f` with one of 12 cube-edge gradients picked by `h`.
fn gradient_dot(h: u32, f: Vec3) -> f32 {
    let h = h & 15;
    let u = if h < 8 { f.x } else { f.y };
    let v = if h < 4 {
        f.y
    } else if h == 12 || h == 14 {
        f.x
    } else {
        f.z
    };
    let u = if (h & 1) == 0 { u } else { -u };
    let v = if (h & 2) == 0 { v } else { -v };
    u + v
}

/// Quintic smoothstep: C2-continuous interpolation weight.
fn fade(t: Vec3) -> Vec3 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Sample gradient noise at `p`.
///
/// Continuous everywhere, zero on integer lattice points, and clamped to
/// `[-1, 1]`.
pub fn gradient_noise(p: Vec3) -> f32 {
    let cell = p.floor();
    let f = p - cell;
    let i = cell.as_ivec3();

    let corner = |dx: i32, dy: i32, dz: i32| {
        let offset = IVec3::new(dx, dy, dz);
        gradient_dot(lattice_hash(i + offset), f - offset.as_vec3())
    };

    let n000 = corner(0, 0, 0);
    let n100 = corner(1, 0, 0);
    let n010 = corner(0, 1, 0);
    let n110 = corner(1, 1, 0);
    let n001 = corner(0, 0, 1);
    let n101 = corner(1, 0, 1);
    let n011 = corner(0, 1, 1);
    let n111 = corner(1, 1, 1);

    let u = fade(f);
    let x00 = mix(n000, n100, u.x);
    let x10 = mix(n010, n110, u.x);
    let x01 = mix(n001, n101, u.x);
    let x11 = mix(n011, n111, u.x);
    let y0 = mix(x00, x10, u.y);
    let y1 = mix(x01, x11, u.y);
    mix(y0, y1, u.z).clamp(-1.0, 1.0)
}
