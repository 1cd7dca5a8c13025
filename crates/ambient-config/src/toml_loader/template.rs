//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Ambient background configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Ambient"
# width = 1280           # 320-7680 (logical pixels)
# height = 800           # 240-4320 (logical pixels)
# startup_mode = "windowed"  # windowed, maximized, fullscreen
# backdrop = false       # stay below other windows, let clicks pass through

[rendering]
# vsync = true
# power_preference = "high"  # high, low

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
