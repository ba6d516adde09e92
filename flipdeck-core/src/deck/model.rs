use std::path::Path;

use crate::{
    animation::ease::Ease,
    foundation::core::{Surface, TickRate},
    foundation::error::{FlipdeckError, FlipdeckResult},
};

/// A complete flipbook deck.
///
/// The deck is a pure data model that can be:
/// - built programmatically (see [`crate::DeckBuilder`])
/// - serialized/deserialized via Serde (JSON)
///
/// Pages are created at load time from this structure and never created or
/// destroyed at runtime; the engine only re-flags them. Driving a deck is
/// performed by [`crate::Session`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    /// Initial drawing-surface dimensions.
    pub surface: Surface,
    /// Animation tick rate.
    #[serde(default)]
    pub tick_rate: TickRate,
    /// Flip-transition duration in milliseconds.
    #[serde(default = "default_flip_ms")]
    pub flip_ms: f64,
    /// Easing applied to flip-transition progress.
    #[serde(default)]
    pub flip_ease: Ease,
    /// Optional background-music track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicSpec>,
    /// Ordered pages.
    pub pages: Vec<PageSpec>,
    /// Global deterministic seed used by particle bursts.
    #[serde(default)]
    pub seed: u64,
}

/// One page panel of the deck.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PageSpec {
    /// Page identifier (stable within a deck).
    pub id: String,
    /// Optional text revealed by the typewriter on page entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typewriter: Option<String>,
    /// Run a confetti burst when this page becomes active.
    #[serde(default)]
    pub confetti_on_entry: bool,
    /// Page owns a slide-out side panel with a drag handle.
    #[serde(default)]
    pub slide_tab: bool,
}

impl PageSpec {
    /// Build a plain page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            typewriter: None,
            confetti_on_entry: false,
            slide_tab: false,
        }
    }

    /// Attach typewriter text revealed on page entry.
    pub fn with_typewriter(mut self, text: impl Into<String>) -> Self {
        self.typewriter = Some(text.into());
        self
    }

    /// Mark the page to burst confetti on entry.
    pub fn with_confetti(mut self) -> Self {
        self.confetti_on_entry = true;
        self
    }

    /// Attach a slide-out side panel to the page.
    pub fn with_slide_tab(mut self) -> Self {
        self.slide_tab = true;
        self
    }
}

/// Background-music track configuration.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MusicSpec {
    /// Relative path to the audio file.
    pub source: String,
    /// Playback volume in `[0, 1]`.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Offset in seconds the start control seeks to before playing.
    #[serde(default = "default_start_at_sec")]
    pub start_at_sec: f64,
}

fn default_flip_ms() -> f64 {
    700.0
}

fn default_volume() -> f32 {
    0.15
}

fn default_start_at_sec() -> f64 {
    41.0
}

impl Deck {
    /// Parse a deck from JSON and validate it.
    pub fn from_json(json: &str) -> FlipdeckResult<Self> {
        let deck: Self = serde_json::from_str(json)
            .map_err(|e| FlipdeckError::serde(format!("invalid deck json: {e}")))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Read and parse a deck JSON file.
    pub fn from_path(path: &Path) -> FlipdeckResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            FlipdeckError::serde(format!("failed to read deck '{}': {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Validate deck invariants.
    pub fn validate(&self) -> FlipdeckResult<()> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(FlipdeckError::validation(
                "surface width/height must be > 0",
            ));
        }
        TickRate::new(self.tick_rate.num, self.tick_rate.den)?;
        if !self.flip_ms.is_finite() || self.flip_ms <= 0.0 {
            return Err(FlipdeckError::validation(
                "flip_ms must be finite and > 0",
            ));
        }
        if self.pages.is_empty() {
            return Err(FlipdeckError::validation("deck must have at least one page"));
        }

        for (index, page) in self.pages.iter().enumerate() {
            if page.id.trim().is_empty() {
                return Err(FlipdeckError::validation(format!(
                    "page {index} id must be non-empty"
                )));
            }
            if self.pages[..index].iter().any(|p| p.id == page.id) {
                return Err(FlipdeckError::validation(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
            if let Some(text) = &page.typewriter
                && text.is_empty()
            {
                return Err(FlipdeckError::validation(format!(
                    "page '{}' typewriter text must be non-empty when set",
                    page.id
                )));
            }
        }

        if let Some(music) = &self.music {
            validate_rel_source(&music.source, "music source")?;
            if !music.volume.is_finite() || !(0.0..=1.0).contains(&music.volume) {
                return Err(FlipdeckError::validation(
                    "music volume must be finite and in [0, 1]",
                ));
            }
            if !music.start_at_sec.is_finite() || music.start_at_sec < 0.0 {
                return Err(FlipdeckError::validation(
                    "music start_at_sec must be finite and >= 0",
                ));
            }
        }

        Ok(())
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

fn validate_rel_source(source: &str, field: &str) -> FlipdeckResult<()> {
    if source.trim().is_empty() {
        return Err(FlipdeckError::validation(format!(
            "{field} must be non-empty"
        )));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FlipdeckError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    for part in s.split('/') {
        if part == ".." {
            return Err(FlipdeckError::validation(format!(
                "{field} must not contain '..'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
