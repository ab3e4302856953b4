//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::distance::format_distance;
use super::keys::ConfigKey;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let tiers: String = ConfigKey::all()
        .iter()
        .filter_map(|key| key.tier().map(|tier| (key, tier)))
        .map(|(key, tier)| {
            format!(
                "; {}\n{} = {}\n",
                tier.label(),
                key.key_name(),
                format_distance(config.tiers.radii.radius(tier))
            )
        })
        .collect();

    format!(
        r#"[proximity]
; Fraction added to the search radius when sizing geohash cells (0.0 - 1.0)
coverage_margin = {}
; Maximum prefix lookups sent to the store concurrently per query
max_concurrent_lookups = {}
; Results per page when the caller does not specify a page size
default_page_size = {}
; Largest page size a caller may request
max_page_size = {}

[tiers]
; Search radius per proximity tier. Accepts meters ("5000", "5000m") or kilometers ("5km").
{}
[logging]
; Log file location
file = {}
; Enable debug-level logging (true/false)
debug = {}
"#,
        config.proximity.coverage_margin,
        config.proximity.max_concurrent_lookups,
        config.proximity.default_page_size,
        config.proximity.max_page_size,
        tiers,
        path_to_string(&config.logging.file),
        config.logging.debug,
    )
}

pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
