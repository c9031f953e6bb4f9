//! TerminalBell: the only sound a terminal reliably makes.
//!
//! One-shot tracks ring the bell. Terminals cannot loop audio, so looping
//! requests fail with `Unsupported` and the game loop logs and moves on.

use std::io::{self, Write};

use crate::engine::AudioDevice;
use crate::types::Track;

pub struct TerminalBell<W: Write> {
    out: W,
    muted: bool,
    rings: u32,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            muted: false,
            rings: 0,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// How many times the bell actually rang.
    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioDevice for TerminalBell<W> {
    type Error = io::Error;

    fn play_loop(&mut self, track: Track) -> Result<(), Self::Error> {
        if self.muted {
            return Ok(());
        }
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("cannot loop {:?} on a terminal", track),
        ))
    }

    fn pause(&mut self, _track: Track) -> Result<(), Self::Error> {
        Ok(())
    }

    fn play_once(&mut self, track: Track) -> Result<(), Self::Error> {
        if self.muted || track.volume() <= 0.0 {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        self.rings += 1;
        Ok(())
    }
}
