use crate::{
    animation::ease::Ease,
    deck::model::{Deck, MusicSpec, PageSpec},
    foundation::core::{Surface, TickRate},
    foundation::error::FlipdeckResult,
};

/// Chainable builder producing a validated [`Deck`].
pub struct DeckBuilder {
    surface: Surface,
    tick_rate: TickRate,
    flip_ms: f64,
    flip_ease: Ease,
    music: Option<MusicSpec>,
    pages: Vec<PageSpec>,
    seed: u64,
}

impl DeckBuilder {
    /// Start a deck with the given surface size and all defaults.
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            tick_rate: TickRate::default(),
            flip_ms: 700.0,
            flip_ease: Ease::default(),
            music: None,
            pages: Vec::new(),
            seed: 0,
        }
    }

    /// Set the deterministic seed for particle bursts.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the animation tick rate.
    pub fn tick_rate(mut self, tick_rate: TickRate) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Override the flip duration and easing.
    pub fn flip(mut self, flip_ms: f64, ease: Ease) -> Self {
        self.flip_ms = flip_ms;
        self.flip_ease = ease;
        self
    }

    /// Attach a background-music track.
    pub fn music(mut self, music: MusicSpec) -> Self {
        self.music = Some(music);
        self
    }

    /// Append a page.
    pub fn page(mut self, page: PageSpec) -> Self {
        self.pages.push(page);
        self
    }

    /// Validate and produce the deck.
    pub fn build(self) -> FlipdeckResult<Deck> {
        let deck = Deck {
            surface: self.surface,
            tick_rate: self.tick_rate,
            flip_ms: self.flip_ms,
            flip_ease: self.flip_ease,
            music: self.music,
            pages: self.pages,
            seed: self.seed,
        };
        deck.validate()?;
        Ok(deck)
    }
}
