use crate::Combination;

/// Event emitted once per combination by the observed drivers.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Zero-based position of this combination in enumeration order.
    pub ordinal: usize,
    /// The combination at this position.
    pub combination: Combination,
}
