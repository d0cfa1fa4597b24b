//! Base trait for intents (actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are plain data: they describe a change and carry everything the
/// reducer needs to apply it. They are moved into the reducer, so they must
/// be sendable to wherever the state container lives.
pub trait Intent: Send + 'static {
    /// Stable wire name of the intent, used for logging and decoding.
    fn kind(&self) -> &'static str;
}
