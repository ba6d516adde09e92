use crate::{deck::model::MusicSpec, foundation::error::FlipdeckResult};

/// Playback seam for the single background-music track (the media-element
/// analog).
///
/// Only `play` is fallible: host runtimes may reject playback that was not
/// triggered by user interaction. The other operations are best-effort.
pub trait MusicSink {
    /// Begin or resume playback.
    fn play(&mut self) -> FlipdeckResult<()>;

    /// Pause playback.
    fn pause(&mut self);

    /// Seek to an absolute position in seconds.
    fn seek(&mut self, position_sec: f64);

    /// Set playback volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
}

/// Sink used when the deck carries no music track; playback always
/// "succeeds" and does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MusicSink for NullSink {
    fn play(&mut self) -> FlipdeckResult<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek(&mut self, _position_sec: f64) {}

    fn set_volume(&mut self, _volume: f32) {}
}

/// Binary play/pause state bound to one music sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicToggle {
    on: bool,
}

impl MusicToggle {
    /// True while the music is playing.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Control label for the music button.
    pub fn label(&self) -> &'static str {
        if self.on { "⏸ Música" } else { "▶ Música" }
    }

    /// Flip play/pause.
    ///
    /// A rejected play attempt is logged and leaves the state off; the
    /// rejection never propagates. Returns whether the state changed.
    pub fn toggle(&mut self, sink: &mut dyn MusicSink) -> bool {
        if self.on {
            sink.pause();
            self.on = false;
            return true;
        }
        match sink.play() {
            Ok(()) => {
                self.on = true;
                true
            }
            Err(err) => {
                tracing::warn!(%err, "music playback rejected");
                false
            }
        }
    }

    /// The start control: seek to the configured offset, set the volume and
    /// play best-effort.
    ///
    /// The state is forced on even when playback is rejected; only
    /// [`MusicToggle::toggle`] is success-gated.
    pub fn start(&mut self, sink: &mut dyn MusicSink, spec: &MusicSpec) {
        sink.seek(spec.start_at_sec);
        sink.set_volume(spec.volume);
        if let Err(err) = sink.play() {
            tracing::warn!(%err, "music playback rejected");
        }
        self.on = true;
    }
}

#[cfg(feature = "audio-rodio")]
mod rodio_sink {
    use std::{fs::File, io::BufReader, path::Path, time::Duration};

    use super::MusicSink;
    use crate::foundation::error::{FlipdeckError, FlipdeckResult};

    /// Music sink backed by a `rodio` output stream.
    ///
    /// The track is queued paused at construction; the toggle drives
    /// play/pause from there.
    pub struct RodioMusic {
        _stream: rodio::OutputStream,
        _handle: rodio::OutputStreamHandle,
        sink: rodio::Sink,
    }

    impl RodioMusic {
        /// Open the default output device and queue `source` paused.
        pub fn open(source: &Path) -> FlipdeckResult<Self> {
            let (stream, handle) = rodio::OutputStream::try_default()
                .map_err(|e| FlipdeckError::audio(format!("no audio device: {e}")))?;
            let sink = rodio::Sink::try_new(&handle)
                .map_err(|e| FlipdeckError::audio(format!("audio sink unavailable: {e}")))?;
            let file = File::open(source).map_err(|e| {
                FlipdeckError::audio(format!("failed to open '{}': {e}", source.display()))
            })?;
            let decoder = rodio::Decoder::new(BufReader::new(file)).map_err(|e| {
                FlipdeckError::audio(format!("failed to decode '{}': {e}", source.display()))
            })?;
            sink.append(decoder);
            sink.pause();
            Ok(Self {
                _stream: stream,
                _handle: handle,
                sink,
            })
        }
    }

    impl MusicSink for RodioMusic {
        fn play(&mut self) -> FlipdeckResult<()> {
            self.sink.play();
            Ok(())
        }

        fn pause(&mut self) {
            self.sink.pause();
        }

        fn seek(&mut self, position_sec: f64) {
            let target = Duration::from_secs_f64(position_sec.max(0.0));
            if let Err(err) = self.sink.try_seek(target) {
                tracing::debug!(%err, "seek not supported for this source");
            }
        }

        fn set_volume(&mut self, volume: f32) {
            self.sink.set_volume(volume.clamp(0.0, 1.0));
        }
    }
}

#[cfg(feature = "audio-rodio")]
pub use rodio_sink::RodioMusic;

#[cfg(test)]
#[path = "../../tests/unit/audio/toggle.rs"]
mod tests;
