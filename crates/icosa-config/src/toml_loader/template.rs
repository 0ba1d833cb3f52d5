//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# icosa configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[geometry]
# size = 180.0             # 1.0-2000.0, object-space scale
# edge_threshold = 2.1     # 2.01-3.2, edge cutoff as a multiple of size

[camera]
# distance = 1000.0        # 100.0-100000.0, must exceed the circumradius

[motion]
# All rates are per frame.
# smoothing = 0.05         # (0, 1], fraction of the gap to the target closed per frame
# drift_x = 0.001          # -0.1-0.1, radians of pitch per frame
# drift_y = 0.003          # -0.1-0.1, radians of yaw per frame
# pointer_gain = 0.5       # 0.0-3.14, max pointer swing in radians

[style]
# background = "#000000"
# edge_color = "rgba(255,255,255,0.12)"
# edge_width = 1.0         # 0.1-10.0
# vertex_color = "#ffffff"
# vertex_radius = 2.5      # 0.0-50.0, at projection scale 1.0

[logging]
level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}
