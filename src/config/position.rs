//! Counter text placement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in world space, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Default counter placement, just above the floor in front of the player.
    pub const DEFAULT_COUNTER_POSITION: Vector3 = Vector3::new(0.0, 0.3, 2.5);
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parse `"x,y,z"` into a vector.
///
/// Malformed input is logged and replaced by
/// [`Vector3::DEFAULT_COUNTER_POSITION`].
pub fn parse_position(value: &str) -> Vector3 {
    match try_parse_position(value) {
        Ok(v) => v,
        Err(reason) => {
            tracing::error!(
                value = %value,
                reason = %reason,
                "Cannot convert value to a vector, needs to be in the format #,#,#"
            );
            Vector3::DEFAULT_COUNTER_POSITION
        }
    }
}

fn try_parse_position(value: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 components, found {}", parts.len()));
    }

    let mut coords = [0.0f32; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("'{}': {}", part, e))?;
    }

    Ok(Vector3::new(coords[0], coords[1], coords[2]))
}
