use crate::grid::Position;

/// Events emitted while a session is driven that renderers can handle
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Session scrambled and ready
    Started,

    /// A panel was pressed
    Pressed { at: Position },

    /// Every panel points the same way
    Cleared,
}
