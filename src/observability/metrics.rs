//! Metrics recording.
//!
//! # Metrics
//! - `bailout_fails_total` (counter): local failures handled while enabled
//! - `bailout_fail_count` (gauge): bail-outs so far in the current match
//! - `bailout_forced_match_end_total` (counter): last-standing forced ends
//! - `bailout_monitor_ticks_total` (counter): monitor ticks by outcome
//! - `bailout_fail_effect_visible` (gauge): 1 while the indicator is shown
//!
//! The library only records through the `metrics` facade; installing an
//! exporter is up to the host.

use metrics::{counter, gauge};

pub fn record_fail(fail_count: u32) {
    counter!("bailout_fails_total").increment(1);
    gauge!("bailout_fail_count").set(f64::from(fail_count));
}

pub fn record_forced_match_end() {
    counter!("bailout_forced_match_end_total").increment(1);
}

pub fn record_monitor_tick(outcome: &'static str) {
    counter!("bailout_monitor_ticks_total", "outcome" => outcome).increment(1);
}

pub fn record_effect_visible(visible: bool) {
    gauge!("bailout_fail_effect_visible").set(if visible { 1.0 } else { 0.0 });
}
