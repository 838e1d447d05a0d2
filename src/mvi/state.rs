/// Snapshot a view renders from.
///
/// `Default` is the state before the first fetch starts. `PartialEq` lets
/// callers skip a redraw when a dispatch changed nothing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
