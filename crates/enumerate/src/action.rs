/// Actions an observer can take during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current combination.
    ///
    /// No further combinations are built and the step and stop closures of
    /// the axes are not called again.
    StopEarly,
}
