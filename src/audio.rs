//! Sound cues for game events.
//!
//! A plain terminal has no sample playback, so the default sink rings
//! the bell; cues are fire-and-forget and playback failures are ignored.

use std::io::{self, Write};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cue {
    Move,
    Win,
}

pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell, twice for a win.
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        let chime: &[u8] = match cue {
            Cue::Move => b"\x07",
            Cue::Win => b"\x07\x07",
        };
        let mut stdout = io::stdout();
        let _ = stdout.write_all(chime).and_then(|()| stdout.flush());
    }
}

/// Sink for `--mute`.
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}
