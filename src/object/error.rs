use derive_more::{Display, Error};

/// The failure of a single slot invocation.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// The slot ran but reported a failure.
    #[display("slot failed: {_0}")]
    Failed(#[error(not(source))] String),
    /// The receiver has no method with the requested name.
    #[display("receiver has no slot named {_0}")]
    UnknownMethod(#[error(not(source))] String),
}

impl SlotError {
    pub fn failed<M: Into<String>>(message: M) -> SlotError {
        SlotError::Failed(message.into())
    }

    pub fn unknown_method(method: &str) -> SlotError {
        SlotError::UnknownMethod(method.to_owned())
    }
}

/// A slot failed during [`emit`](super::Signals::emit). Slots registered after the failing one
/// were not invoked.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("slot {index} of signal {signal} failed: {source}")]
pub struct EmitError {
    pub signal: String,
    pub index: usize,
    pub source: SlotError,
}
