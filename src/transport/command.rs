//! Command dispatch table.
//!
//! Hosts bind their triggers (board buttons, keys, remote controls) to a
//! [`Command`] and hand it to [`Sequencer::dispatch`].

use std::path::PathBuf;

use crate::error::Result;

use super::ports::{AudioBackend, FileLister};
use super::sequencer::Sequencer;
use super::types::LoadTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    /// Resume if paused, otherwise start the selected track.
    Play,
    Pause,
    Resume,
    Select(usize),
    Rescan(PathBuf),
}

impl Command {
    /// Map a board button name to its command.
    pub fn from_button(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "next" => Some(Self::Next),
            "back" | "prev" | "previous" => Some(Self::Back),
            "play" => Some(Self::Play),
            "pause" => Some(Self::Pause),
            "resume" => Some(Self::Resume),
            _ => None,
        }
    }
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Nothing to do in the current state.
    Nothing,
    /// A track load was started.
    Loading(LoadTicket),
    /// Play/pause state was changed in place.
    Transport,
    /// The playlist was replaced with this many tracks.
    Rescanned(usize),
}

impl From<Option<LoadTicket>> for Dispatched {
    fn from(ticket: Option<LoadTicket>) -> Self {
        ticket.map_or(Self::Nothing, Self::Loading)
    }
}

impl<L: FileLister, B: AudioBackend> Sequencer<L, B> {
    pub fn dispatch(&mut self, cmd: Command) -> Result<Dispatched> {
        let before = self.state();
        let dispatched = match cmd {
            Command::Next => self.next()?.into(),
            Command::Back => self.previous()?.into(),
            Command::Play => self.play()?.into(),
            Command::Pause => {
                self.pause();
                Dispatched::Nothing
            }
            Command::Resume => {
                self.resume();
                Dispatched::Nothing
            }
            Command::Select(index) => Dispatched::Loading(self.select_and_play(index)?),
            Command::Rescan(dir) => Dispatched::Rescanned(self.load_directory(&dir)?),
        };

        if dispatched == Dispatched::Nothing && self.state() != before {
            return Ok(Dispatched::Transport);
        }
        Ok(dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_button_names_map_to_commands() {
        assert_eq!(Command::from_button("Next"), Some(Command::Next));
        assert_eq!(Command::from_button("Back"), Some(Command::Back));
        assert_eq!(Command::from_button("Play"), Some(Command::Play));
        assert_eq!(Command::from_button("Pause"), Some(Command::Pause));
        assert_eq!(Command::from_button(" previous "), Some(Command::Back));
        assert_eq!(Command::from_button("PREV"), Some(Command::Back));
        assert_eq!(Command::from_button("resume"), Some(Command::Resume));
        assert_eq!(Command::from_button("Eject"), None);
        assert_eq!(Command::from_button(""), None);
    }
}
