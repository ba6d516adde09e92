use std::f64::consts::TAU;

use crate::{
    effects::effect::{EffectCtx, EffectStatus, ParticleEffect},
    foundation::core::{Affine, Hsla, Rect, Surface},
    foundation::math::Rng64,
    render::scene::Scene,
};

/// Particle count of a plain confetti burst.
pub const DEFAULT_INTENSITY: usize = 160;
/// Particle count used for page-entry bursts.
pub const ENTRY_INTENSITY: usize = 220;

const GRAVITY_PER_TICK: f64 = 0.03;
const SPIN_PER_TICK: f64 = 0.12;
const FADE_REF_TICKS: f64 = 110.0;
const EXIT_MARGIN_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug)]
struct Confetto {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    radius: f64,
    angle: f64,
    life: i32,
}

/// A one-shot confetti burst clustered near the top center of the surface.
///
/// Each particle is a rotated square falling under constant gravity, fading
/// linearly over a 110-tick reference and colored by a hue derived from its
/// position. The burst finishes once every particle expired or left the
/// surface below.
pub struct ConfettiBurst {
    particles: Vec<Confetto>,
}

impl ConfettiBurst {
    /// Spawn `intensity` particles sized to the surface at spawn time.
    pub fn new(intensity: usize, surface: Surface, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let w = surface.width_f64();
        let h = surface.height_f64();
        let particles = (0..intensity)
            .map(|_| Confetto {
                x: w * (0.35 + rng.next_f64_01() * 0.30),
                y: h * 0.18 + rng.next_f64_01() * 20.0,
                radius: 2.0 + rng.next_f64_01() * 5.0,
                vx: -2.0 + rng.next_f64_01() * 4.0,
                vy: 2.0 + rng.next_f64_01() * 5.0,
                angle: rng.next_f64_01() * TAU,
                life: 70 + (rng.next_f64_01() * 50.0) as i32,
            })
            .collect();
        Self { particles }
    }
}

impl ParticleEffect for ConfettiBurst {
    fn name(&self) -> &'static str {
        "confetti"
    }

    fn tick(&mut self, ctx: EffectCtx, scene: &mut Scene) -> EffectStatus {
        let height = ctx.surface.height_f64();

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY_PER_TICK;
            p.angle += SPIN_PER_TICK;
            p.life -= 1;

            let alpha = (f64::from(p.life) / FADE_REF_TICKS).max(0.0);
            let hue = (p.x + p.y).rem_euclid(360.0);
            let color = Hsla::new(hue, 0.90, 0.65, alpha).to_premul();
            let transform = Affine::translate((p.x, p.y)) * Affine::rotate(p.angle);
            let side = p.radius * 2.6;
            scene.fill_rect(
                Rect::new(-p.radius, -p.radius, -p.radius + side, -p.radius + side),
                transform,
                color,
            );
        }

        self.particles
            .retain(|p| p.life > 0 && p.y < height + EXIT_MARGIN_PX);

        if self.particles.is_empty() {
            EffectStatus::Finished
        } else {
            EffectStatus::Running
        }
    }

    fn cancel(&mut self) {
        self.particles.clear();
    }

    fn particle_count(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/confetti.rs"]
mod tests;
