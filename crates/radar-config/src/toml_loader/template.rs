//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# Radar Scope Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[radar]
# rotation_speed = 30.0  # degrees per second, 0-720
# pulse_enabled = true
# pulse_rate = 0.5       # scale units per second, 0-5
# pulse_min = 0.8        # 0.1-pulse_max
# pulse_max = 1.2        # pulse_min-3.0

[appearance]
# background = "#0d1424"
# disc_inner = "#1a4d66"
# disc_outer = "#4dcccc"
# ring = "#4dcccc"
# blip = "#ff4d4d"
# disc_alpha = 0.8       # 0.0-1.0

[blips]
# seed = 42              # omit for a different layout every launch
# pick_radius_px = 24.0  # 1-256

[window]
# title = "Radar"
# width = 800            # 64-8192
# height = 800

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
