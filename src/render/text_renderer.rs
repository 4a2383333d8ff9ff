use super::{Renderer, SessionEvent};
use crate::orientation::Orientation;
use crate::session::Session;

/// Terminal renderer that draws the board as a block of arrow glyphs
pub struct TextRenderer {
    redraw_every_press: bool,
}

impl TextRenderer {
    pub fn new(redraw_every_press: bool) -> Self {
        Self { redraw_every_press }
    }

    fn glyph(orientation: Orientation) -> char {
        match orientation {
            Orientation::Up => '▲',
            Orientation::Right => '▶',
            Orientation::Down => '▼',
            Orientation::Left => '◀',
        }
    }

    fn draw_board(&self, session: &Session) {
        let grid = &session.board().grid;
        let mut row = String::new();

        for (x, _, &orientation) in grid {
            if !row.is_empty() {
                row.push(' ');
            }

            row.push(Self::glyph(orientation));

            if x + 1 == grid.width() {
                println!("{}", row);
                row.clear();
            }
        }

        println!();
    }
}

impl Renderer for TextRenderer {
    type Error = String;

    fn initialize(&mut self, session: &Session) -> Result<(), Self::Error> {
        let size = session.board().size();

        println!(
            "{}x{} board, scrambled with {} presses",
            size.width,
            size.height,
            session.scramble_presses()
        );
        println!();
        self.draw_board(session);

        Ok(())
    }

    fn handle_event(&mut self, event: &SessionEvent) -> Result<(), Self::Error> {
        match event {
            SessionEvent::Pressed { at: (x, y) } if self.redraw_every_press => {
                println!("press ({}, {})", x, y);
            }
            SessionEvent::Cleared => println!("Cleared!"),
            _ => {}
        }

        Ok(())
    }

    fn update(&mut self, session: &Session) -> Result<(), Self::Error> {
        if self.redraw_every_press {
            self.draw_board(session);
        }

        Ok(())
    }

    fn finalize(&mut self, session: &Session) -> Result<(), Self::Error> {
        self.draw_board(session);

        if session.solved() {
            println!(
                "Time: {}s ({} presses)",
                session.elapsed().as_secs(),
                session.presses()
            );
        } else {
            println!("Unsolved after {} presses", session.presses());
        }

        Ok(())
    }
}
