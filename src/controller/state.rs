//! Per-match failure state.

/// Snapshot of the bail-out state of a match.
///
/// `fail_count` never decreases within a match. `visible` is true only while
/// a hide timer is pending or the indicator is configured to never hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FailureState {
    pub fail_count: u32,
    pub visible: bool,
}
