//! Flipdeck is an interactive flipbook presentation engine.
//!
//! A flipbook is an ordered deck of pages with a page-turn animation,
//! per-page decorative effects (typewriter text reveal, confetti bursts,
//! firework-hearts particle bursts) and a single background-music toggle.
//! The engine is headless and deterministic: user interaction arrives as
//! explicit [`InputEvent`] values, time advances in explicit ticks, and each
//! tick yields a 2-D vector [`Scene`] that [`CpuRasterizer`] turns into
//! premultiplied RGBA8 frames.
//!
//! # Pipeline overview
//!
//! 1. **Input**: `InputEvent -> Command` (pure mapping, plus the slide-tab
//!    drag state machine)
//! 2. **State**: `Command -> DeckState` transitions (one flip in flight,
//!    gated by `is_animating`)
//! 3. **Effects**: page-entry and manual bursts scheduled on a single-slot
//!    [`EffectScheduler`] that owns the overlay scene
//! 4. **Render**: `Session::scene -> Scene -> FrameRgba` (CPU backend)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: particle bursts are seeded from the deck
//!   seed; no wall-clock reads inside the engine.
//! - **Single-threaded, cooperative**: at most one flip transition and one
//!   particle effect are in flight at any time.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod audio;
mod deck;
mod effects;
mod foundation;
mod input;
mod render;
mod reveal;
mod session;

pub use animation::ease::Ease;
pub use audio::toggle::{MusicSink, MusicToggle, NullSink};
#[cfg(feature = "audio-rodio")]
pub use audio::toggle::RodioMusic;
pub use deck::dsl::DeckBuilder;
pub use deck::model::{Deck, MusicSpec, PageSpec};
pub use deck::state::{DeckState, FlipDirection, GoTo, PageState, Settled};
pub use effects::confetti::{ConfettiBurst, DEFAULT_INTENSITY, ENTRY_INTENSITY};
pub use effects::effect::{EffectCtx, EffectStatus, ParticleEffect};
pub use effects::hearts::{DEFAULT_DURATION_MS, FireworkHearts};
pub use effects::scheduler::EffectScheduler;
pub use foundation::core::{
    Affine, BezPath, Hsla, Point, Rect, Rgba8Premul, Surface, TickIndex, TickRate, Vec2,
};
pub use foundation::error::{FlipdeckError, FlipdeckResult};
pub use input::map::{Command, Control, InputEvent, InputMap, Key, ScriptEvent, SlideTabs};
pub use render::cpu::CpuRasterizer;
pub use render::scene::{DrawOp, FrameRgba, Scene};
pub use reveal::typewriter::{Typewriter, TypewriterStatus};
pub use session::{Session, run_script};
