use super::*;
use crate::clock::{Clock, FixedClock};
use crate::sphere::{build_sphere_mesh, shade};
use glam::{Vec3, Vec4};

fn defaults() -> ParameterSet {
    ParameterSet::from_config(&MorphConfig::default()).unwrap()
}

#[test]
fn defaults_reproduce_reference_scene() {
    let p = defaults();
    assert_eq!(p.surface().time_frequency(), 0.0002);
    assert_eq!(p.surface().distortion_frequency(), 2.0);
    assert_eq!(p.surface().distortion_strength(), 1.0);
    assert_eq!(p.surface().displacement_frequency(), 2.0);
    assert_eq!(p.surface().displacement_strength(), 0.2);
    assert_eq!(p.subdivision(), Subdivision::DEFAULT);
    assert_eq!(p.light(LightId::A).color().to_hex(), "#ff2900");
    assert_eq!(p.light(LightId::B).color().to_hex(), "#3158ff");
    assert_eq!(p.light(LightId::A).phi(), 0.615);
    assert_eq!(p.light(LightId::B).theta(), -1.844);
    assert_eq!(p.time(), 0.0);
}

#[test]
fn config_surface_values_are_clamped_to_tunable_ranges() {
    let mut config = MorphConfig::default();
    config.surface.displacement_strength = 3.0;
    config.surface.distortion_strength = 40.0;
    config.surface.time_frequency = -1.0;
    config.surface.displacement_frequency = 4.5;

    let p = ParameterSet::from_config(&config).unwrap();
    assert_eq!(p.surface().displacement_strength(), 1.0);
    assert_eq!(p.surface().distortion_strength(), 5.0);
    assert_eq!(p.surface().time_frequency(), 0.0);
    // In-range values pass through untouched
    assert_eq!(p.surface().displacement_frequency(), 4.5);
    assert_eq!(p.uniforms().displacement_strength, 1.0);
}

#[test]
fn thousand_frames_scenario() {
    let mut p = defaults();
    let a = p.light(LightId::A).position();
    let b = p.light(LightId::B).position();
    let mut clock = FixedClock::new(0.016);

    let mut previous = p.time();
    for _ in 0..1000 {
        p.advance(clock.frame_delta());
        assert!(p.time() >= previous);
        previous = p.time();
    }

    assert!((p.time() - 0.0032).abs() < 1e-6, "time = {}", p.time());
    assert_eq!(p.light(LightId::A).position(), a);
    assert_eq!(p.light(LightId::B).position(), b);

    let displacement = p.displacement_params();
    let mesh = build_sphere_mesh(96, 96).unwrap();
    let (lo, hi) = displacement.radius_range(&mesh);
    let s = p.surface().displacement_strength();
    assert!(lo >= 1.0 - s - 1e-5 && hi <= 1.0 + s + 1e-5, "{lo}..{hi}");
}

#[test]
fn flat_sphere_baseline() {
    let mut p = defaults();
    p.set_distortion_strength(0.0);
    p.set_displacement_strength(0.0);
    p.advance(1234.0);

    let params = p.displacement_params();
    let mesh = build_sphere_mesh(40, 20).unwrap();
    for (base, out) in mesh.vertices().iter().zip(params.displace_mesh(&mesh)) {
        let analytic = Vec3::from_array(base.position).normalize();
        assert!((out.normal - analytic).length() < 1e-3);
    }
}

#[test]
fn uniforms_mirror_parameters() {
    let mut p = defaults();
    p.advance(100.0);
    let u = p.uniforms();

    assert_eq!(u.time, p.time());
    assert_eq!(u.subdivision, [512.0, 512.0]);
    assert_eq!(u.distortion_frequency, 2.0);
    assert_eq!(u.displacement_strength, 0.2);
    assert_eq!(u.light_a_intensity, 1.0);
    assert_eq!(
        Vec4::from_array(u.light_a_position).truncate(),
        p.light(LightId::A).position()
    );
    assert_eq!(
        Vec4::from_array(u.light_b_color).truncate(),
        p.light(LightId::B).color_instance()
    );
    assert_eq!([u._pad0, u._pad1, u._pad2], [0.0; 3]);
}

#[test]
fn every_setter_marks_dirty() {
    let mut p = defaults();
    assert!(p.take_dirty(), "fresh parameters must be uploaded once");
    assert!(!p.take_dirty());

    let setters: [fn(&mut ParameterSet); 9] = [
        |p| p.set_time_frequency(0.0005),
        |p| p.set_distortion_frequency(3.0),
        |p| p.set_distortion_strength(2.0),
        |p| p.set_displacement_frequency(4.0),
        |p| p.set_displacement_strength(0.5),
        |p| p.set_light_phi(LightId::A, 1.0),
        |p| p.set_light_theta(LightId::B, 1.0),
        |p| p.set_light_intensity(LightId::A, 3.0),
        |p| p.set_light_color_value(LightId::B, Color::WHITE),
    ];
    for set in setters {
        set(&mut p);
        assert!(p.take_dirty());
        assert!(!p.take_dirty());
    }
}

#[test]
fn advance_marks_dirty_only_when_time_moves() {
    let mut p = defaults();
    p.take_dirty();
    p.advance(0.0);
    assert!(!p.take_dirty());
    p.advance(16.0);
    assert!(p.take_dirty());

    p.set_time_frequency(0.0);
    p.take_dirty();
    p.advance(16.0);
    assert!(!p.take_dirty());
}

#[test]
fn failed_color_write_leaves_state_clean() {
    let mut p = defaults();
    p.take_dirty();
    assert!(p.set_light_color(LightId::A, "nope").is_err());
    assert!(!p.take_dirty());
    assert_eq!(p.light(LightId::A).color().to_hex(), "#ff2900");
}

#[test]
fn surface_setters_reject_negative_and_non_finite() {
    let mut p = defaults();
    p.set_displacement_strength(-1.0);
    assert_eq!(p.surface().displacement_strength(), 0.0);
    p.set_distortion_frequency(f32::INFINITY);
    assert_eq!(p.surface().distortion_frequency(), 0.0);
}

#[test]
fn from_config_rejects_bad_input() {
    let mut config = MorphConfig::default();
    config.surface.subdivision_width = 0;
    assert!(matches!(
        ParameterSet::from_config(&config),
        Err(ConstructionError::InvalidSubdivision { width: 0, .. })
    ));

    let mut config = MorphConfig::default();
    config.lights.b.color = "blue".into();
    assert!(matches!(
        ParameterSet::from_config(&config),
        Err(ConstructionError::InvalidColor(_))
    ));
}

#[test]
fn restore_keeps_time_running() {
    let reference = defaults();
    let mut p = defaults();
    p.advance(50.0);
    let time = p.time();
    p.set_displacement_strength(0.9);
    p.set_light_color_value(LightId::A, Color::BLACK);

    p.restore_tunables(&reference);
    assert_eq!(p.surface(), reference.surface());
    assert_eq!(p.lights(), reference.lights());
    assert_eq!(p.time(), time);
}

#[test]
fn write_to_config_captures_tuning() {
    let mut p = defaults();
    p.set_displacement_strength(0.5);
    p.set_light_intensity(LightId::B, 2.5);
    p.set_light_color_value(LightId::A, Color::from_rgb(0, 255, 0));

    let mut config = MorphConfig::default();
    p.write_to_config(&mut config);
    assert!((config.surface.displacement_strength - 0.5).abs() < 1e-6);
    assert!((config.lights.b.intensity - 2.5).abs() < 1e-6);
    assert_eq!(config.lights.a.color, "#00ff00");
    assert_eq!(config.surface.subdivision_width, 512);
}

#[test]
fn zero_intensity_light_is_dark() {
    let mut p = defaults();
    p.set_light_intensity(LightId::B, 0.0);
    let [a, b] = p.light_samples();
    for n in [Vec3::X, Vec3::Y, -Vec3::Z, Vec3::new(1.0, -1.0, 1.0)] {
        let both = shade(n, Vec3::Z, &[a, b]);
        let a_only = shade(n, Vec3::Z, &[a, LightSample { intensity: 0.0, ..a }]);
        assert_eq!(both, a_only);
    }
}
