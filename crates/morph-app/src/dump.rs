//! Headless `--dump-params`: step the scene with a fixed clock and report.

use morph_config::MorphConfig;
use morph_renderer::binding::{self, NullPanel};
use morph_renderer::{Camera, FixedClock, LightId, ParameterSet, SphereScene};
use serde_json::{json, Value};

/// Step `frames` frames at 60 Hz and describe the resulting state.
pub fn dump_params(config: &MorphConfig, params: ParameterSet, frames: u32) -> Value {
    let delta = config.clock.delta_scale as f32 / 60.0;
    let camera = Camera::from_config(&config.camera, config.window.width, config.window.height);
    let mut scene = SphereScene::new(params, camera, Box::new(FixedClock::new(delta)), &mut NullPanel);

    for _ in 0..frames {
        scene.tick();
    }

    let params = scene.params();
    let (min_radius, max_radius) = params.displacement_params().radius_range(scene.mesh());
    let lights: serde_json::Map<String, Value> = LightId::ALL
        .iter()
        .map(|&id| {
            let light = params.light(id);
            (
                id.name().to_string(),
                json!({
                    "position": light.position().to_array(),
                    "color_linear": light.color_instance().to_array(),
                }),
            )
        })
        .collect();

    json!({
        "frames": frames,
        "time": params.time(),
        "radius": { "min": min_radius, "max": max_radius },
        "lights": lights,
        "bindings": binding::snapshot(params),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> MorphConfig {
        let mut config = MorphConfig::default();
        config.surface.subdivision_width = 32;
        config.surface.subdivision_height = 32;
        config
    }

    #[test]
    fn dump_reports_time_and_bindings() {
        let config = small_config();
        let params = ParameterSet::from_config(&config).unwrap();
        let value = dump_params(&config, params, 60);

        assert_eq!(value["frames"], 60);
        // 60 frames of 1000/60 ms at 0.0002 per ms
        let time = value["time"].as_f64().unwrap();
        assert!((time - 0.2).abs() < 1e-4, "time = {time}");
        assert_eq!(value["bindings"].as_array().unwrap().len(), 13);
        assert_eq!(value["bindings"][5]["value"], "#ff2900");
    }

    #[test]
    fn dump_radius_stays_within_strength() {
        let config = small_config();
        let params = ParameterSet::from_config(&config).unwrap();
        let value = dump_params(&config, params, 0);
        let min = value["radius"]["min"].as_f64().unwrap();
        let max = value["radius"]["max"].as_f64().unwrap();
        assert!(min >= 0.8 - 1e-5 && max <= 1.2 + 1e-5);
    }

    #[test]
    fn dump_includes_both_lights() {
        let config = small_config();
        let params = ParameterSet::from_config(&config).unwrap();
        let value = dump_params(&config, params, 0);
        assert!(value["lights"]["a"]["position"].is_array());
        assert!(value["lights"]["b"]["color_linear"].is_array());
    }
}
