use super::*;

fn surface() -> Surface {
    Surface {
        width: 400,
        height: 600,
    }
}

fn ctx() -> EffectCtx {
    EffectCtx {
        surface: surface(),
        tick_ms: 1000.0 / 60.0,
    }
}

/// Duration long enough for exactly one rocket (the window closes before
/// the 140 ms spawn interval elapses again).
const ONE_ROCKET_MS: f64 = 20.0;

#[test]
fn first_rocket_launches_on_the_first_tick() {
    let mut fx = FireworkHearts::new(DEFAULT_DURATION_MS, 1);
    let mut scene = Scene::new(surface());
    fx.tick(ctx(), &mut scene);
    assert_eq!(fx.rocket_count(), 1);
    // The rocket leaves a trail segment on the overlay.
    assert_eq!(scene.ops().len(), 1);
}

#[test]
fn rockets_launch_roughly_every_140ms() {
    let mut fx = FireworkHearts::new(DEFAULT_DURATION_MS, 2);
    let mut scene = Scene::new(surface());
    // 20 ticks ≈ 333 ms: the opening launch plus two interval launches.
    for _ in 0..20 {
        scene.clear();
        fx.tick(ctx(), &mut scene);
    }
    assert_eq!(fx.rocket_count(), 3);
}

#[test]
fn each_rocket_explodes_exactly_once_into_16_to_26_hearts() {
    let mut fx = FireworkHearts::new(ONE_ROCKET_MS, 3);
    let mut scene = Scene::new(surface());

    let mut first_seen = None;
    for _ in 0..200 {
        scene.clear();
        fx.tick(ctx(), &mut scene);
        assert!(fx.rocket_count() <= 1);
        if fx.heart_count() > 0 && first_seen.is_none() {
            first_seen = Some(fx.heart_count());
        }
        if let Some(spawned) = first_seen {
            // A single rocket never adds hearts twice.
            assert!(fx.heart_count() <= spawned);
        }
    }
    let spawned = first_seen.expect("the rocket must have exploded");
    assert!((16..26).contains(&spawned), "spawned {spawned} hearts");
}

#[test]
fn display_drains_to_empty_after_the_window() {
    let mut fx = FireworkHearts::new(ONE_ROCKET_MS, 4);
    let mut scene = Scene::new(surface());
    let mut ticks = 0;
    loop {
        scene.clear();
        let status = fx.tick(ctx(), &mut scene);
        ticks += 1;
        if status == EffectStatus::Finished {
            break;
        }
        assert!(ticks < 1000, "fireworks must drain to empty");
    }
    assert_eq!(fx.rocket_count(), 0);
    assert_eq!(fx.heart_count(), 0);
    // The effect keeps running past the duration window until residual
    // particles settle.
    assert!(ticks > 2);
}

#[test]
fn hearts_are_removed_by_expiry_or_exit() {
    let mut fx = FireworkHearts::new(ONE_ROCKET_MS, 5);
    let mut scene = Scene::new(surface());
    let height = surface().height_f64();
    for _ in 0..1000 {
        scene.clear();
        let status = fx.tick(ctx(), &mut scene);
        for h in &fx.hearts {
            assert!(h.life > 0.0);
            assert!(h.y < height + 60.0);
        }
        if status == EffectStatus::Finished {
            break;
        }
    }
}

#[test]
fn cancel_clears_both_collections() {
    let mut fx = FireworkHearts::new(DEFAULT_DURATION_MS, 6);
    let mut scene = Scene::new(surface());
    for _ in 0..60 {
        scene.clear();
        fx.tick(ctx(), &mut scene);
    }
    assert!(fx.particle_count() > 0);
    fx.cancel();
    assert_eq!(fx.rocket_count(), 0);
    assert_eq!(fx.heart_count(), 0);
    assert_eq!(fx.particle_count(), 0);
}

#[test]
fn same_seed_reproduces_the_display() {
    let mut a = FireworkHearts::new(DEFAULT_DURATION_MS, 42);
    let mut b = FireworkHearts::new(DEFAULT_DURATION_MS, 42);
    let mut scene_a = Scene::new(surface());
    let mut scene_b = Scene::new(surface());
    for _ in 0..90 {
        scene_a.clear();
        scene_b.clear();
        a.tick(ctx(), &mut scene_a);
        b.tick(ctx(), &mut scene_b);
    }
    assert_eq!(a.rocket_count(), b.rocket_count());
    assert_eq!(a.heart_count(), b.heart_count());
    assert_eq!(format!("{:?}", scene_a.ops()), format!("{:?}", scene_b.ops()));
}
