/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (keystrokes, modal selections)
/// - System events (fetch started, fetch completed)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
