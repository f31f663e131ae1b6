use std::cell::Cell;
use std::collections::HashMap;

use web_sys::HtmlAudioElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Win,
    Lose,
    Click,
    Spin,
}

impl Sound {
    const ALL: [Sound; 4] = [Sound::Win, Sound::Lose, Sound::Click, Sound::Spin];

    fn path(self) -> &'static str {
        match self {
            Sound::Win => "/win.mp3",
            Sound::Lose => "/lose.mp3",
            Sound::Click => "/click.mp3",
            Sound::Spin => "/waiting.mp3",
        }
    }
}

/// Preloaded sound effects. Owned by the game page; there is no shared
/// instance.
pub struct SoundBank {
    clips: HashMap<Sound, HtmlAudioElement>,
    muted: Cell<bool>,
}

impl SoundBank {
    pub fn load() -> Self {
        let mut clips = HashMap::new();
        for sound in Sound::ALL {
            match HtmlAudioElement::new_with_src(sound.path()) {
                Ok(audio) => {
                    audio.set_preload("auto");
                    clips.insert(sound, audio);
                }
                Err(e) => log::warn!("Failed to load sound {:?}: {:?}", sound, e),
            }
        }
        Self {
            clips,
            muted: Cell::new(false),
        }
    }

    pub fn play(&self, sound: Sound) {
        if self.muted.get() {
            return;
        }
        if let Some(audio) = self.clips.get(&sound) {
            audio.set_current_time(0.0);
            if let Err(e) = audio.play() {
                log::warn!("Failed to play sound {:?}: {:?}", sound, e);
            }
        }
    }

    pub fn stop(&self, sound: Sound) {
        if let Some(audio) = self.clips.get(&sound) {
            if let Err(e) = audio.pause() {
                log::warn!("Failed to stop sound {:?}: {:?}", sound, e);
            }
        }
    }

    /// Returns the new muted state.
    pub fn toggle_mute(&self) -> bool {
        let muted = !self.muted.get();
        self.muted.set(muted);
        if muted {
            for audio in self.clips.values() {
                let _ = audio.pause();
            }
        }
        muted
    }
}
