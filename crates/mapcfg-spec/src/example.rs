use serde_json::{Value, json};

/// A complete example configuration.
///
/// Validates cleanly against [`default_spec`](crate::default_spec): every
/// rule's companions are present and every constraint is satisfied.
pub fn example_config() -> Value {
    json!({
        "title": "Italian Cities by Population",
        "viztype": "CHART|BUBBLE",
        "maptype": "VT_TONER_LITE",
        "center": { "lat": 42.5, "lng": 12.5 },
        "zoom": 6,
        "cluster": false,
        "colorscheme": ["#0066cc", "#66a3ff", "#cce0ff"]
    })
}
