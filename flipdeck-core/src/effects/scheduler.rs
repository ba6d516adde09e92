use crate::{
    effects::effect::{EffectCtx, EffectStatus, ParticleEffect},
    foundation::core::Surface,
    render::scene::Scene,
};

/// Single-slot scheduler guaranteeing one coherent particle animation owns
/// the overlay drawing surface at any time.
///
/// The scheduler holds the overlay [`Scene`] (the canvas analog) and the
/// currently running effect, if any. Starting a new effect always cancels
/// and clears the previous one first, so no two effects ever overlap and no
/// stale particles survive a switch.
pub struct EffectScheduler {
    active: Option<Box<dyn ParticleEffect>>,
    scene: Scene,
}

impl EffectScheduler {
    /// Scheduler with an empty overlay sized to `surface`.
    pub fn new(surface: Surface) -> Self {
        Self {
            active: None,
            scene: Scene::new(surface),
        }
    }

    /// Stop whatever is running and clear the overlay.
    ///
    /// Idempotent: safe to call with nothing active. The effect's
    /// cancellation hook runs first so its particle collections are empty
    /// before the surface is cleared.
    pub fn stop_current(&mut self) {
        if let Some(mut effect) = self.active.take() {
            tracing::debug!(effect = effect.name(), "stopping effect");
            effect.cancel();
        }
        self.scene.clear();
    }

    /// Start `effect`, unconditionally stopping the current one first.
    pub fn start(&mut self, effect: Box<dyn ParticleEffect>) {
        self.stop_current();
        tracing::debug!(effect = effect.name(), "starting effect");
        self.active = Some(effect);
    }

    /// Advance the active effect by one tick, redrawing the overlay.
    ///
    /// A finished effect is dropped and leaves the overlay cleared.
    pub fn tick(&mut self, ctx: EffectCtx) {
        self.scene.set_surface(ctx.surface);
        self.scene.clear();
        let Some(effect) = self.active.as_mut() else {
            return;
        };
        if effect.tick(ctx, &mut self.scene) == EffectStatus::Finished {
            tracing::debug!(effect = effect.name(), "effect drained");
            self.active = None;
            self.scene.clear();
        }
    }

    /// Resync the overlay dimensions after a resize event.
    pub fn resize(&mut self, surface: Surface) {
        self.scene.set_surface(surface);
    }

    /// True while an effect owns the surface.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Live particle count of the active effect, 0 when idle.
    pub fn active_particles(&self) -> usize {
        self.active.as_ref().map_or(0, |e| e.particle_count())
    }

    /// The overlay scene as drawn by the last tick.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scheduler.rs"]
mod tests;
