use rangeview_semiregular_box::EmptyBoxError;
use thiserror::Error;

/// A broken precondition of a cursor or view.
///
/// These are programming errors. The panicking accessors report them through
/// [`violated`](crate::contract::violated); the `try_` accessors return them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("cursor read at the end of its sequence")]
    ReadAtEnd,

    #[error("cursor advanced past the end of its sequence")]
    AdvanceAtEnd,

    #[error("view has no mapping function")]
    EmptyFunction,
}

impl From<EmptyBoxError> for ContractError {
    fn from(_: EmptyBoxError) -> Self {
        ContractError::EmptyFunction
    }
}
