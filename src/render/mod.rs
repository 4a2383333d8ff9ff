pub mod events;
pub mod text_renderer;

pub use events::SessionEvent;

use crate::session::Session;

/// Core trait for presenting session progress to the player
pub trait Renderer {
    type Error;

    /// Initialize the renderer for a freshly scrambled session
    fn initialize(&mut self, session: &Session) -> Result<(), Self::Error>;

    /// Handle a session event
    fn handle_event(&mut self, event: &SessionEvent) -> Result<(), Self::Error>;

    /// Redraw from the current session state
    fn update(&mut self, session: &Session) -> Result<(), Self::Error> {
        let _ = session;
        Ok(())
    }

    /// Check if the user wants to quit (for interactive renderers)
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Present the final state once the run ends
    fn finalize(&mut self, session: &Session) -> Result<(), Self::Error>;
}
