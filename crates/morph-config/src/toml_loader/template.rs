//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# morph configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[surface]
# time_frequency = 0.0002          # 0.0-0.001, clock delta -> shader time
# distortion_frequency = 2.0       # 0.0-10.0
# distortion_strength = 1.0        # 0.0-5.0
# displacement_frequency = 2.0     # 0.0-10.0
# displacement_strength = 0.2      # 0.0-1.0
# subdivision_width = 512          # 1-2048, fixed at startup
# subdivision_height = 512         # 1-2048, fixed at startup

# When overriding a light, set all four fields: a partially written
# light table falls back to a white light on the equator.
#
# [lights.a]
# color = "#ff2900"
# intensity = 1.0                  # >= 0 (debug panel: 0-10)
# phi = 0.615                      # 0-pi, polar angle
# theta = 2.049                    # -pi-pi, azimuth
#
# [lights.b]
# color = "#3158ff"
# intensity = 1.0
# phi = 2.561
# theta = -1.844

[window]
# title = "morph"
# width = 1280
# height = 800
# clear_color = "#000000"

[camera]
# fov_degrees = 35.0               # 10-120
# distance = 6.0                   # 1.5-20

[clock]
# delta_scale = 1000.0             # seconds -> clock units (1000 = milliseconds)

[logging]
# level = "INFO"                   # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
