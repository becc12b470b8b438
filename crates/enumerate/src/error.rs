use thiserror::Error;

/// Errors returned by [`try_enumerate`](crate::try_enumerate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("axis `{name}` is invalid")]
    Axis {
        name: String,
        #[source]
        source: incrementator_core::Error,
    },
}
