use super::MapAction;

/// Fixed keyboard surface of the map. Anything else passes through.
pub fn key_action(key: &str) -> Option<MapAction> {
    match key {
        "+" | "=" => Some(MapAction::ZoomIn),
        "-" => Some(MapAction::ZoomOut),
        "f" | "F" => Some(MapAction::ToggleFullscreen),
        _ => None,
    }
}
