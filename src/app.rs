use crate::cli::AppConfig;
use crate::grid::Position;
use crate::render::text_renderer::TextRenderer;
use crate::render::{Renderer, SessionEvent};
use crate::session::Session;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::rngs::OsRng;
use rand::Rng;
use std::time::Duration;

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let size = self.config.size;
        let presses = self.config.scramble_presses.unwrap_or_else(|| size.area());
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        if let Some(name) = &self.config.stage_name {
            info!("Stage: {}", name);
        }

        info!("Using seed: {}", seed);

        let mut session = Session::new(size, presses, seed);

        if session.solved() {
            info!("Scramble landed on a cleared board");
        }

        let mut renderers = self.create_renderers();

        for renderer in &mut renderers {
            renderer.initialize(&session)?;
        }

        let start_event = SessionEvent::Started;

        for renderer in &mut renderers {
            renderer.handle_event(&start_event)?;
        }

        for mv in &self.config.moves {
            if mv.x >= size.width || mv.y >= size.height {
                return Err(format!("move out of bounds: {},{}", mv.x, mv.y).into());
            }

            if self.press(&mut session, mv.position(), &mut renderers)?.is_none() {
                warn!("Board already cleared; ignoring remaining moves");
                break;
            }
        }

        if self.config.autoplay && !session.solved() {
            let solution = session.solution();

            info!("Replaying {} presses to clear the board", solution.len());

            let progress = ProgressBar::new(solution.len() as u64);
            progress.enable_steady_tick(Duration::from_millis(200));
            progress.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len} {per_sec:>12}",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );

            for position in solution {
                if renderers.iter_mut().any(|r| r.should_quit()) {
                    return Ok(());
                }

                if session.solved() {
                    break;
                }

                self.press(&mut session, position, &mut renderers)?;
                progress.inc(1);
            }

            progress.finish();
        }

        if session.solved() {
            let cleared_event = SessionEvent::Cleared;

            for renderer in &mut renderers {
                renderer.handle_event(&cleared_event)?;
            }
        }

        for renderer in &mut renderers {
            renderer.finalize(&session)?;
        }

        info!("Session finished in {}s", session.elapsed().as_secs());
        Ok(())
    }

    fn press(
        &self,
        session: &mut Session,
        (x, y): Position,
        renderers: &mut [Box<dyn Renderer<Error = String>>],
    ) -> Result<Option<bool>, Box<dyn std::error::Error>> {
        let outcome = match session.press(x, y) {
            Some(outcome) => outcome,
            None => return Ok(None),
        };

        debug!("Pressed ({}, {}); {} panels turned", x, y, outcome.affected.len());

        let event = SessionEvent::Pressed { at: (x, y) };

        for renderer in renderers.iter_mut() {
            renderer.handle_event(&event)?;
            renderer.update(session)?;
        }

        Ok(Some(outcome.solved))
    }

    fn create_renderers(&self) -> Vec<Box<dyn Renderer<Error = String>>> {
        vec![Box::new(TextRenderer::new(self.config.show_steps))]
    }
}
