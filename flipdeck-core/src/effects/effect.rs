use crate::{foundation::core::Surface, render::scene::Scene};

/// Per-tick context handed to a running particle effect.
///
/// Surface dimensions are read fresh every tick so effects follow resizes
/// instead of caching stale values at spawn time.
#[derive(Clone, Copy, Debug)]
pub struct EffectCtx {
    /// Current drawing-surface dimensions.
    pub surface: Surface,
    /// Wall-clock milliseconds one tick represents.
    pub tick_ms: f64,
}

/// Status reported by [`ParticleEffect::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectStatus {
    /// The effect still owns the surface.
    Running,
    /// The effect drained; the scheduler clears the surface and stops it.
    Finished,
}

/// One run of a particle-based visual.
///
/// An effect owns the drawing surface from [`crate::EffectScheduler::start`]
/// until it finishes or is cancelled; the scheduler guarantees at most one
/// effect is live at a time.
pub trait ParticleEffect {
    /// Short effect name, used in logs.
    fn name(&self) -> &'static str;

    /// Advance one tick and draw the surviving particles into `scene`.
    fn tick(&mut self, ctx: EffectCtx, scene: &mut Scene) -> EffectStatus;

    /// Cancellation hook: clear all particle collections immediately.
    fn cancel(&mut self);

    /// Number of live particles (rockets count too).
    fn particle_count(&self) -> usize;
}
