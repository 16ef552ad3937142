//! Counter text formatting and placement.

use crate::config::{parse_position, BailOutConfig, Vector3};
use crate::error::PresentationError;
use crate::presentation::{CounterText, Placement};

/// World units per text unit.
pub const TEXT_SCALE: f32 = 0.01;

/// Counter label, e.g. "Bailed Out 2 times".
pub fn counter_label(fail_count: u32) -> String {
    let plural = if fail_count == 1 { "" } else { "s" };
    format!("Bailed Out {} time{}", fail_count, plural)
}

/// Center the text horizontally on `anchor`, sit it on top of it, and face
/// it towards a player standing at the origin.
pub fn compute_placement(anchor: Vector3, rendered: (f32, f32), player_height: f32) -> Placement {
    let (width, height) = rendered;
    let position = Vector3::new(
        anchor.x - (width * TEXT_SCALE) / 2.0,
        anchor.y + height * TEXT_SCALE,
        anchor.z,
    );
    let facing = Vector3::new(anchor.x, anchor.y - player_height, anchor.z);

    Placement { position, facing }
}

/// Write the current count to the counter text and reposition it.
pub fn update_counter(
    text: &dyn CounterText,
    config: &BailOutConfig,
    fail_count: u32,
) -> Result<(), PresentationError> {
    text.set_text(&counter_label(fail_count))?;

    if text.font_size() != config.counter_text_size {
        text.set_font_size(config.counter_text_size)?;
    }

    let anchor = parse_position(&config.counter_text_position);
    text.place(compute_placement(anchor, text.rendered_size(), config.player_height))
}
