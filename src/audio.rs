//! Sound effects
//!
//! The simulation only names sounds; actual decoding/playback lives behind
//! `AudioBackend`. `AudioManager` resolves effect ids to clip files, applies
//! volume/mute, and swallows every failure: a missing or broken clip is a
//! silent no-op, never an error for the game loop.

use std::io;
use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bird flapped
    Jump,
    /// Pipe cleared
    Score,
    /// Impact on crash
    Hit,
    /// Played right after the impact
    Die,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Jump,
        SoundEffect::Score,
        SoundEffect::Hit,
        SoundEffect::Die,
    ];

    /// Clip file name inside the sounds directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump.wav",
            SoundEffect::Score => "score.wav",
            SoundEffect::Hit => "hit.wav",
            SoundEffect::Die => "die.wav",
        }
    }

    fn index(&self) -> usize {
        match self {
            SoundEffect::Jump => 0,
            SoundEffect::Score => 1,
            SoundEffect::Hit => 2,
            SoundEffect::Die => 3,
        }
    }

    /// Sounds triggered by a simulation event, in play order
    pub fn for_event(event: &GameEvent) -> &'static [SoundEffect] {
        match event {
            GameEvent::Jumped => &[SoundEffect::Jump],
            GameEvent::Scored { .. } => &[SoundEffect::Score],
            GameEvent::Crashed { .. } => &[SoundEffect::Hit, SoundEffect::Die],
            GameEvent::NewHighScore { .. } => &[],
        }
    }
}

/// Fire-and-forget sound output used by the session
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Records effects instead of playing them
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Something that can actually make noise from a clip file
pub trait AudioBackend {
    fn play_clip(&mut self, clip: &Path, volume: f32) -> io::Result<()>;
}

/// Backend for headless runs: logs what would have played
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play_clip(&mut self, clip: &Path, volume: f32) -> io::Result<()> {
        log::debug!("play {} at volume {:.2}", clip.display(), volume);
        Ok(())
    }
}

/// Volume of the original game's clips before settings are applied
const CLIP_VOLUME: f32 = 0.3;

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    clips: [Option<PathBuf>; 4],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    /// Look up every clip in `sounds_dir`; missing ones are disabled
    pub fn load(backend: B, sounds_dir: &Path, settings: &Settings) -> Self {
        let clips = SoundEffect::ALL.map(|effect| {
            let path = sounds_dir.join(effect.file_name());
            if path.is_file() {
                Some(path)
            } else {
                log::warn!("Could not load sound: {}", path.display());
                None
            }
        });

        let loaded = clips.iter().filter(|c| c.is_some()).count();
        log::info!("Audio ready ({loaded}/{} clips)", SoundEffect::ALL.len());

        let mut manager = Self {
            backend,
            clips,
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
        };
        manager.apply_settings(settings);
        manager
    }

    /// Manager with no clips at all (every effect is a no-op)
    pub fn silent(backend: B) -> Self {
        Self {
            backend,
            clips: Default::default(),
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: true,
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            CLIP_VOLUME * self.master_volume * self.sfx_volume
        }
    }

    pub fn is_loaded(&self, effect: SoundEffect) -> bool {
        self.clips[effect.index()].is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: AudioBackend> AudioSink for AudioManager<B> {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(clip) = &self.clips[effect.index()] else {
            return;
        };
        if let Err(e) = self.backend.play_clip(clip, vol) {
            log::warn!("Failed to play {:?}: {}", effect, e);
        }
    }
}
