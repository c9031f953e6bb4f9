//! Host-facing seams: the render surface and the audio device.
//!
//! The core only ever produces data (a [`DrawList`], a list of [`AudioCue`]s).
//! These traits are where that data meets a real terminal, window, or
//! speaker.

use std::convert::Infallible;
use std::fmt;

use crate::core::{DrawCommand, DrawList};
use crate::types::{AudioCue, Rect, Sprite, Track};

/// Something the game can be drawn onto.
///
/// Drawing is infallible from the game's point of view; surfaces that can
/// fail should record the failure and report it when flushed.
pub trait RenderSurface {
    fn clear(&mut self, region: Rect);
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// Fire-and-forget audio playback.
///
/// Errors are reported so the game loop can log them, but they never affect
/// the simulation.
pub trait AudioDevice {
    type Error: fmt::Display;

    fn play_loop(&mut self, track: Track) -> Result<(), Self::Error>;
    fn pause(&mut self, track: Track) -> Result<(), Self::Error>;
    fn play_once(&mut self, track: Track) -> Result<(), Self::Error>;

    /// Seek a track back to its start. Devices without seeking ignore it.
    fn rewind(&mut self, _track: Track) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Audio device that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioDevice for NullAudio {
    type Error = Infallible;

    fn play_loop(&mut self, _track: Track) -> Result<(), Self::Error> {
        Ok(())
    }

    fn pause(&mut self, _track: Track) -> Result<(), Self::Error> {
        Ok(())
    }

    fn play_once(&mut self, _track: Track) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Replay a draw list onto a surface.
///
/// `text_buf` is scratch space for label formatting so repeated frames do
/// not allocate.
pub fn replay<S: RenderSurface + ?Sized>(list: &DrawList, surface: &mut S, text_buf: &mut String) {
    for command in list {
        match *command {
            DrawCommand::Clear(region) => surface.clear(region),
            DrawCommand::Sprite { sprite, rect } => surface.draw_sprite(sprite, rect),
            DrawCommand::Text { label, x, y } => {
                text_buf.clear();
                label.write_into(text_buf);
                surface.draw_text(text_buf, x, y);
            }
        }
    }
}

/// Send audio cues to a device, swallowing failures.
///
/// Returns how many cues failed.
pub fn play_cues<A: AudioDevice + ?Sized>(device: &mut A, cues: &[AudioCue]) -> usize {
    let mut failed = 0;
    for cue in cues {
        let result = match *cue {
            AudioCue::Rewind(track) => device.rewind(track),
            AudioCue::PlayLoop(track) => device.play_loop(track),
            AudioCue::Pause(track) => device.pause(track),
            AudioCue::PlayOnce(track) => device.play_once(track),
        };
        if let Err(e) = result {
            failed += 1;
            log::debug!("audio: {:?} failed: {}", cue, e);
        }
    }
    failed
}
