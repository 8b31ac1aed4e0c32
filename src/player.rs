//! Mock playback state behind the episode player UI.
//!
//! No audio is decoded anywhere on the page; a one-second ticker simulates
//! progress through the current episode and the UI renders this state. The
//! wasm layer owns that ticker and its single outstanding handle.

pub const DEFAULT_DURATION_SECS: f64 = 2142.0;

/// Outcome of one simulated playback second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Advanced,
    Finished,
}

/// What a play-button press decided, so the UI can flip the right labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Started,
    Paused,
}

#[derive(Clone, Debug)]
pub struct Player {
    episode: Option<String>,
    playing: bool,
    position: f64,
    duration: f64,
}

impl Player {
    pub fn new() -> Player {
        Player::with_duration(DEFAULT_DURATION_SECS)
    }

    pub fn with_duration(duration: f64) -> Player {
        Player {
            episode: None,
            playing: false,
            position: 0.0,
            duration,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn episode(&self) -> Option<&str> {
        self.episode.as_deref()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The logic behind every play button: pressing the episode that is
    /// already playing pauses it, anything else starts (or switches to)
    /// `episode`. Switching keeps the current position.
    pub fn toggle(&mut self, episode: &str) -> Toggle {
        if self.playing && self.episode.as_deref() == Some(episode) {
            self.pause();
            Toggle::Paused
        } else {
            self.play(episode);
            Toggle::Started
        }
    }

    pub fn play(&mut self, episode: &str) {
        self.episode = Some(episode.to_owned());
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// One simulated second. Reaching the end rewinds to the start and
    /// stops playback.
    pub fn tick(&mut self) -> Tick {
        if self.position >= self.duration {
            self.position = 0.0;
            self.playing = false;
            Tick::Finished
        } else {
            self.position += 1.0;
            Tick::Advanced
        }
    }

    /// Jump to `fraction` of the way through the episode.
    pub fn seek(&mut self, fraction: f64) {
        self.position = self.duration * fraction;
    }

    /// Played fraction for the progress fill.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            self.position / self.duration
        } else {
            0.0
        }
    }

    /// `"MM:SS / MM:SS"`, floored and zero-padded.
    pub fn clock(&self) -> String {
        format!("{} / {}", fmt_mmss(self.position), fmt_mmss(self.duration))
    }
}

impl Default for Player {
    fn default() -> Player {
        Player::new()
    }
}

fn fmt_mmss(secs: f64) -> String {
    let whole = secs.max(0.0).floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}
