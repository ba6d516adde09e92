use std::f64::consts::TAU;

use crate::{
    effects::effect::{EffectCtx, EffectStatus, ParticleEffect},
    foundation::core::{Affine, BezPath, Hsla, Point, Rgba8Premul, Surface},
    foundation::math::Rng64,
    render::scene::Scene,
};

/// Default firework display duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 5200.0;

const SPAWN_INTERVAL_MS: f64 = 140.0;
const ROCKET_GRAVITY_PER_TICK: f64 = 0.12;
const ROCKET_LINGER_TICKS: f64 = -12.0;
const EXPLODE_CEILING_FRAC: f64 = 0.28;
const TRAIL_TAIL_SCALE: f64 = 4.0;
const TRAIL_WIDTH_PX: f64 = 2.0;
const HEART_GRAVITY_PER_TICK: f64 = 0.08;
const HEART_MAX_LIFE_TICKS: f64 = 110.0;
const HEART_EXIT_MARGIN_PX: f64 = 60.0;

#[derive(Clone, Copy, Debug)]
struct Rocket {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    life: f64,
    exploded: bool,
}

#[derive(Clone, Copy, Debug)]
struct Heart {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    gravity: f64,
    rot: f64,
    vr: f64,
    size: f64,
    life: f64,
    max_life: f64,
}

/// A timed firework display of rockets exploding into heart particles.
///
/// Rockets launch from below the surface roughly every 140 ms while the
/// duration window is open; each explodes exactly once — on lifetime expiry
/// or on rising above 28% of the surface height — into 16 to 26 hearts.
/// The effect keeps running past the window until both collections drain
/// (no hard cutoff), then finishes through the scheduler's stop path.
pub struct FireworkHearts {
    rockets: Vec<Rocket>,
    hearts: Vec<Heart>,
    duration_ms: f64,
    elapsed_ms: f64,
    since_spawn_ms: f64,
    rng: Rng64,
}

impl FireworkHearts {
    /// Build a display running for `duration_ms` plus settle time.
    pub fn new(duration_ms: f64, seed: u64) -> Self {
        Self {
            rockets: Vec::new(),
            hearts: Vec::new(),
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            // First rocket launches on the first tick.
            since_spawn_ms: SPAWN_INTERVAL_MS + 1.0,
            rng: Rng64::new(seed),
        }
    }

    /// Number of live rockets.
    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    /// Number of live hearts.
    pub fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    fn spawn_rocket(&mut self, surface: Surface) {
        let w = surface.width_f64();
        let h = surface.height_f64();
        self.rockets.push(Rocket {
            x: self.rng.range(w * 0.12, w * 0.88),
            y: h + 20.0,
            vx: self.rng.range(-0.7, 0.7),
            vy: self.rng.range(-14.0, -11.5),
            life: self.rng.range(40.0, 65.0),
            exploded: false,
        });
    }

    fn spawn_hearts(&mut self, x: f64, y: f64) {
        let count = self.rng.range(16.0, 26.0).floor() as usize;
        for _ in 0..count {
            self.hearts.push(Heart {
                x,
                y,
                vx: self.rng.range(-3.2, 3.2),
                vy: self.rng.range(-3.2, 2.2),
                gravity: HEART_GRAVITY_PER_TICK,
                rot: self.rng.range(0.0, TAU),
                vr: self.rng.range(-0.12, 0.12),
                size: self.rng.range(7.0, 13.0),
                life: self.rng.range(70.0, 110.0),
                max_life: HEART_MAX_LIFE_TICKS,
            });
        }
    }
}

impl ParticleEffect for FireworkHearts {
    fn name(&self) -> &'static str {
        "firework-hearts"
    }

    fn tick(&mut self, ctx: EffectCtx, scene: &mut Scene) -> EffectStatus {
        let height = ctx.surface.height_f64();
        self.elapsed_ms += ctx.tick_ms;
        let in_window = self.elapsed_ms < self.duration_ms;

        if in_window {
            self.since_spawn_ms += ctx.tick_ms;
            if self.since_spawn_ms > SPAWN_INTERVAL_MS {
                self.spawn_rocket(ctx.surface);
                self.since_spawn_ms = 0.0;
            }
        }

        let trail_color = Rgba8Premul::from_straight_rgba(255, 77, 141, 71);
        let mut exploded_at: Vec<(f64, f64)> = Vec::new();
        for r in &mut self.rockets {
            r.x += r.vx;
            r.y += r.vy;
            r.vy += ROCKET_GRAVITY_PER_TICK;
            r.life -= 1.0;

            let head = Point::new(r.x, r.y);
            let tail = Point::new(r.x - r.vx * TRAIL_TAIL_SCALE, r.y - r.vy * TRAIL_TAIL_SCALE);
            scene.fill_path(
                trail_quad(head, tail, TRAIL_WIDTH_PX),
                Affine::IDENTITY,
                trail_color,
            );

            if !r.exploded && (r.life <= 0.0 || r.y < height * EXPLODE_CEILING_FRAC) {
                r.exploded = true;
                exploded_at.push((r.x, r.y));
            }
        }
        for (x, y) in exploded_at {
            self.spawn_hearts(x, y);
        }
        self.rockets
            .retain(|r| !(r.exploded && r.life < ROCKET_LINGER_TICKS));

        for i in 0..self.hearts.len() {
            // Hue is rolled per draw so the pinks shimmer frame to frame.
            let hue = self.rng.range(330.0, 355.0);
            let p = &mut self.hearts[i];
            p.x += p.vx;
            p.y += p.vy;
            p.vy += p.gravity;
            p.rot += p.vr;
            p.life -= 1.0;

            let alpha = (p.life / p.max_life).clamp(0.0, 1.0);
            let color = Hsla::new(hue, 0.90, 0.70, alpha).to_premul();
            let transform = Affine::translate((p.x, p.y)) * Affine::rotate(p.rot);
            scene.fill_path(heart_path(p.size), transform, color);
        }
        self.hearts
            .retain(|p| p.life > 0.0 && p.y < height + HEART_EXIT_MARGIN_PX);

        if in_window || !self.rockets.is_empty() || !self.hearts.is_empty() {
            EffectStatus::Running
        } else {
            EffectStatus::Finished
        }
    }

    fn cancel(&mut self) {
        self.rockets.clear();
        self.hearts.clear();
    }

    fn particle_count(&self) -> usize {
        self.rockets.len() + self.hearts.len()
    }
}

/// Heart silhouette centered on the origin, built from cubic Béziers.
fn heart_path(size: f64) -> BezPath {
    let s = size;
    let mut path = BezPath::new();
    path.move_to((0.0, s * 0.35));
    path.curve_to((0.0, 0.0), (-s * 0.5, 0.0), (-s * 0.5, s * 0.35));
    path.curve_to((-s * 0.5, s * 0.7), (0.0, s * 0.95), (0.0, s * 1.15));
    path.curve_to((0.0, s * 0.95), (s * 0.5, s * 0.7), (s * 0.5, s * 0.35));
    path.curve_to((s * 0.5, 0.0), (0.0, 0.0), (0.0, s * 0.35));
    path.close_path();
    path
}

/// Thin quad along the rocket's motion segment, the stroked-trail analog.
fn trail_quad(head: Point, tail: Point, width: f64) -> BezPath {
    let dx = tail.x - head.x;
    let dy = tail.y - head.y;
    let len = (dx * dx + dy * dy).sqrt().max(1e-6);
    let (nx, ny) = (-dy / len * width * 0.5, dx / len * width * 0.5);

    let mut path = BezPath::new();
    path.move_to((head.x + nx, head.y + ny));
    path.line_to((tail.x + nx, tail.y + ny));
    path.line_to((tail.x - nx, tail.y - ny));
    path.line_to((head.x - nx, head.y - ny));
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/effects/hearts.rs"]
mod tests;
