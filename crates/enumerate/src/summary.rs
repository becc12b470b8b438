/// Indicates how an observed enumeration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every combination was emitted (possibly none).
    Completed,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an observed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Final status.
    pub status: Status,
    /// Number of combinations emitted, including the one that stopped the walk.
    pub emitted: usize,
}

impl Summary {
    pub(crate) fn completed(emitted: usize) -> Self {
        Self {
            status: Status::Completed,
            emitted,
        }
    }

    pub(crate) fn stopped(emitted: usize) -> Self {
        Self {
            status: Status::StoppedByObserver,
            emitted,
        }
    }
}
