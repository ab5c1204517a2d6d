//! Base trait for actions.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (slider moved, submit tapped)
/// - System events (network responses)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {
    /// Stable, human-readable name used in log lines.
    fn name(&self) -> &'static str;
}
