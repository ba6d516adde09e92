use super::*;
use crate::foundation::core::Hsla;

fn surface() -> Surface {
    Surface {
        width: 320,
        height: 240,
    }
}

#[test]
fn ops_append_in_painters_order() {
    let mut scene = Scene::new(surface());
    assert!(scene.is_empty());

    scene.fill_rect(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Affine::IDENTITY,
        Hsla::new(0.0, 0.9, 0.65, 1.0).to_premul(),
    );
    let mut heart = BezPath::new();
    heart.move_to((0.0, 0.0));
    heart.line_to((1.0, 1.0));
    heart.close_path();
    scene.fill_path(heart, Affine::IDENTITY, Rgba8Premul::transparent());

    assert_eq!(scene.ops().len(), 2);
    assert!(matches!(scene.ops()[0], DrawOp::FillRect { .. }));
    assert!(matches!(scene.ops()[1], DrawOp::FillPath { .. }));
}

#[test]
fn clear_drops_every_op() {
    let mut scene = Scene::new(surface());
    scene.fill_rect(
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Affine::IDENTITY,
        Rgba8Premul::transparent(),
    );
    scene.clear();
    assert!(scene.is_empty());
    assert_eq!(scene.surface(), surface());
}

#[test]
fn extend_from_layers_the_other_scene_on_top() {
    let mut below = Scene::new(surface());
    below.fill_rect(
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Affine::IDENTITY,
        Rgba8Premul::transparent(),
    );
    let mut above = Scene::new(surface());
    above.fill_rect(
        Rect::new(2.0, 2.0, 3.0, 3.0),
        Affine::IDENTITY,
        Rgba8Premul::transparent(),
    );
    below.extend_from(&above);
    assert_eq!(below.ops().len(), 2);
    let DrawOp::FillRect { rect, .. } = &below.ops()[1] else {
        panic!("expected a rect on top");
    };
    assert_eq!(rect.x0, 2.0);
}

#[test]
fn set_surface_resyncs_dimensions() {
    let mut scene = Scene::new(surface());
    let grown = Surface {
        width: 1920,
        height: 1080,
    };
    scene.set_surface(grown);
    assert_eq!(scene.surface(), grown);
}
