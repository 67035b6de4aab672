//! Keyboard polling and held-key tracking.
//!
//! Terminals deliver key repeats rather than key-up events, so a
//! direction counts as held while its last press or repeat is younger
//! than a short hold window. Arrow keys and hjkl both steer; q or Esc
//! quits.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::error::Result;
use crate::game::Dir;

const INPUT_HOLD_MS: u64 = 160;

pub struct InputSource {
    last_seen: [Option<Instant>; 4],
    hold: Duration,
    quit: bool,
}

impl InputSource {
    pub fn new() -> Self {
        Self {
            last_seen: [None; 4],
            hold: Duration::from_millis(INPUT_HOLD_MS),
            quit: false,
        }
    }

    /// Drain pending terminal events without blocking.
    pub fn poll(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                        KeyCode::Up | KeyCode::Char('k') => self.mark(Dir::Up),
                        KeyCode::Down | KeyCode::Char('j') => self.mark(Dir::Down),
                        KeyCode::Left | KeyCode::Char('h') => self.mark(Dir::Left),
                        KeyCode::Right | KeyCode::Char('l') => self.mark(Dir::Right),
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn mark(&mut self, dir: Dir) {
        self.last_seen[dir.index()] = Some(Instant::now());
    }

    /// Every direction currently held, in up/down/left/right order.
    pub fn held_dirs(&self) -> Vec<Dir> {
        let now = Instant::now();
        Dir::ALL
            .into_iter()
            .filter(|dir| match self.last_seen[dir.index()] {
                Some(seen) => now.duration_since(seen) <= self.hold,
                None => false,
            })
            .collect()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl Default for InputSource {
    fn default() -> Self {
        Self::new()
    }
}
