use super::*;

/// Playback control for the background music track owned by the app.
pub trait MusicTrack {
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// Whether an app-side music toggle is mirrored onto the page checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageUpdate {
    UpdatePage,
    /// The checkbox already changed, so only the track is toggled.
    LeavePage,
}

/// Keeps the app's music track in step with the page's `music` checkbox.
#[derive(Debug)]
pub struct MusicBridge<T> {
    track: T,
    music_id: String,
}

impl<T: MusicTrack> MusicBridge<T> {
    pub fn new(track: T, config: &ToggleConfig) -> Self {
        Self {
            track,
            music_id: config.music_id.clone(),
        }
    }

    /// Starts playback when the page has music enabled. Returns whether the
    /// track was started.
    pub fn start<R: ElementRegistry>(&mut self, registry: &R) -> Result<bool> {
        let enabled = toggles::read_checked(registry, &self.music_id)?;
        if enabled {
            self.track.play();
        }
        log::debug!("music bridge started, playing={enabled}");
        Ok(enabled)
    }

    pub fn toggle<R: ElementRegistry>(&mut self, registry: &mut R, update: PageUpdate) -> Result<()> {
        let handle = match update {
            PageUpdate::UpdatePage => Some(registry.resolve(&self.music_id)?),
            PageUpdate::LeavePage => None,
        };

        if self.track.is_playing() {
            self.track.stop();
        } else {
            self.track.play();
        }

        if let Some(handle) = handle {
            let checked = !registry.checked(handle)?;
            registry.set_checked(handle, checked)?;
        }
        log::debug!(
            "music bridge toggled, playing={}, update={update:?}",
            self.track.is_playing()
        );
        Ok(())
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn into_track(self) -> T {
        self.track
    }
}
