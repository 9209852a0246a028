//! Presentation context: the ambient settings a track handle reads.
//!
//! A handle only needs two things from its host: the play volume of a sound
//! category and the directory script-relative file names resolve against.
//! Both are read through `PresentationContext` each time they are needed.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::Settings;

/// Volume categories maintained by the host. Track handles play in `Sound`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoundCategory {
    /// Music and sound tracks started by scripts.
    Sound,
}

pub trait PresentationContext {
    /// Current play volume of `category` on a 0..100 scale.
    fn play_volume(&self, category: SoundCategory) -> f32;
    /// Base directory of the running script.
    fn base_path(&self) -> PathBuf;
}

pub type ContextHandle = Arc<dyn PresentationContext + Send + Sync>;

#[derive(Debug, Clone)]
struct ContextState {
    sound_volume: f32,
    base_path: PathBuf,
}

/// Settings-backed context that the host can update at runtime.
///
/// Changing a category volume here does not reach handles that already
/// pushed their volume; call `TrackHandle::refresh_volume` on them.
#[derive(Debug)]
pub struct FrontendContext {
    state: Mutex<ContextState>,
}

impl FrontendContext {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            state: Mutex::new(ContextState {
                sound_volume: 100.0,
                base_path: base_path.into(),
            }),
        }
    }

    /// Seed a context from loaded settings. A missing base path falls back to
    /// the process working directory.
    pub fn from_settings(settings: &Settings) -> Self {
        let base_path = settings
            .script
            .base_path
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default();

        let ctx = Self::new(base_path);
        ctx.set_play_volume(SoundCategory::Sound, settings.sound.sound_volume);
        ctx
    }

    pub fn into_handle(self) -> ContextHandle {
        Arc::new(self)
    }

    pub fn set_play_volume(&self, category: SoundCategory, volume: f32) {
        let volume = volume.clamp(0.0, 100.0);
        let mut state = self.lock();
        match category {
            SoundCategory::Sound => state.sound_volume = volume,
        }
    }

    pub fn set_base_path(&self, base_path: impl Into<PathBuf>) {
        self.lock().base_path = base_path.into();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContextState> {
        // State is plain data; a poisoned lock still holds a usable value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PresentationContext for FrontendContext {
    fn play_volume(&self, category: SoundCategory) -> f32 {
        let state = self.lock();
        match category {
            SoundCategory::Sound => state.sound_volume,
        }
    }

    fn base_path(&self) -> PathBuf {
        self.lock().base_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn from_settings_copies_volumes_and_base_path() {
        let mut settings = Settings::default();
        settings.sound.sound_volume = 40.0;
        settings.script.base_path = Some(PathBuf::from("/srv/layouts/basic"));

        let ctx = FrontendContext::from_settings(&settings);
        assert_eq!(ctx.play_volume(SoundCategory::Sound), 40.0);
        assert_eq!(ctx.base_path(), Path::new("/srv/layouts/basic"));
    }

    #[test]
    fn set_play_volume_clamps() {
        let ctx = FrontendContext::new("/tmp");
        ctx.set_play_volume(SoundCategory::Sound, 180.0);
        assert_eq!(ctx.play_volume(SoundCategory::Sound), 100.0);
        ctx.set_play_volume(SoundCategory::Sound, -5.0);
        assert_eq!(ctx.play_volume(SoundCategory::Sound), 0.0);
    }

    #[test]
    fn set_base_path_is_visible_through_handle() {
        let ctx = Arc::new(FrontendContext::new("/a"));
        let handle: ContextHandle = ctx.clone();
        ctx.set_base_path("/b");
        assert_eq!(handle.base_path(), Path::new("/b"));
    }
}
