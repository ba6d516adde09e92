use std::{cell::Cell, rc::Rc};

use super::*;
use crate::foundation::core::{Affine, Rect, Rgba8Premul};

struct Probe {
    cancelled: Rc<Cell<bool>>,
    particles: Rc<Cell<usize>>,
    status: EffectStatus,
}

impl Probe {
    fn running(particles: usize) -> (Self, Rc<Cell<bool>>, Rc<Cell<usize>>) {
        let cancelled = Rc::new(Cell::new(false));
        let count = Rc::new(Cell::new(particles));
        (
            Self {
                cancelled: cancelled.clone(),
                particles: count.clone(),
                status: EffectStatus::Running,
            },
            cancelled,
            count,
        )
    }
}

impl ParticleEffect for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn tick(&mut self, _ctx: EffectCtx, scene: &mut Scene) -> EffectStatus {
        scene.fill_rect(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Affine::IDENTITY,
            Rgba8Premul::transparent(),
        );
        self.status
    }

    fn cancel(&mut self) {
        self.cancelled.set(true);
        self.particles.set(0);
    }

    fn particle_count(&self) -> usize {
        self.particles.get()
    }
}

fn surface() -> Surface {
    Surface {
        width: 640,
        height: 360,
    }
}

fn ctx() -> EffectCtx {
    EffectCtx {
        surface: surface(),
        tick_ms: 1000.0 / 60.0,
    }
}

#[test]
fn stop_current_is_idempotent() {
    let mut sched = EffectScheduler::new(surface());
    sched.stop_current();
    sched.stop_current();
    assert!(!sched.is_active());
    assert!(sched.scene().is_empty());
}

#[test]
fn starting_a_new_effect_cancels_and_clears_the_old_one() {
    let mut sched = EffectScheduler::new(surface());
    let (first, first_cancelled, first_count) = Probe::running(42);
    sched.start(Box::new(first));
    sched.tick(ctx());
    assert_eq!(sched.scene().ops().len(), 1);

    let (second, _, _) = Probe::running(7);
    sched.start(Box::new(second));
    assert!(first_cancelled.get());
    assert_eq!(first_count.get(), 0);
    // The surface is cleared before the new effect's first frame...
    assert!(sched.scene().is_empty());
    // ...and one frame later shows only the new effect's particles.
    sched.tick(ctx());
    assert_eq!(sched.scene().ops().len(), 1);
    assert_eq!(sched.active_particles(), 7);
}

#[test]
fn only_one_effect_is_ever_live() {
    let mut sched = EffectScheduler::new(surface());
    let (a, a_cancelled, _) = Probe::running(1);
    let (b, b_cancelled, _) = Probe::running(1);
    sched.start(Box::new(a));
    sched.start(Box::new(b));
    assert!(a_cancelled.get());
    assert!(!b_cancelled.get());
    assert!(sched.is_active());
}

#[test]
fn finished_effect_is_dropped_and_surface_cleared() {
    let mut sched = EffectScheduler::new(surface());
    let (mut probe, _, _) = Probe::running(1);
    probe.status = EffectStatus::Finished;
    sched.start(Box::new(probe));
    sched.tick(ctx());
    assert!(!sched.is_active());
    assert!(sched.scene().is_empty());
    assert_eq!(sched.active_particles(), 0);
}

#[test]
fn tick_resyncs_the_overlay_dimensions() {
    let mut sched = EffectScheduler::new(surface());
    let grown = Surface {
        width: 1024,
        height: 768,
    };
    sched.tick(EffectCtx {
        surface: grown,
        tick_ms: 1000.0 / 60.0,
    });
    assert_eq!(sched.scene().surface(), grown);

    sched.resize(surface());
    assert_eq!(sched.scene().surface(), surface());
}
