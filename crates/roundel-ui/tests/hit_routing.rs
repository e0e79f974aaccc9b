use std::cell::Cell;
use std::rc::Rc;

use roundel_engine::render::Canvas;
use roundel_ui::prelude::*;

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    (count, move || c.set(c.get() + 1))
}

fn click(scene: &mut UiScene, root: &mut Element, rect: Rect, x: f32, y: f32) -> usize {
    let input = UiInput { mouse_pos: Vec2::new(x, y), mouse_clicked: true, mouse_pressed: false };
    scene.frame(root, rect, &input).items().len()
}

#[test]
fn click_through_rounded_corner_reaches_widget_below() {
    let (below, on_below) = counter();
    let (above, on_above) = counter();

    let mut root = Element::new(
        Stack::new()
            .child(Rect::new(0.0, 0.0, 100.0, 100.0), RoundedBox::new().on_click(on_below))
            .child(
                Rect::new(0.0, 0.0, 100.0, 100.0),
                RoundedBox::new().radii(RadiusSet::all(1.0)).unwrap().on_click(on_above),
            ),
    );
    let mut scene = UiScene::new();
    let rect = Rect::new(10.0, 10.0, 100.0, 100.0);

    assert_eq!(click(&mut scene, &mut root, rect, 60.0, 60.0), 2);
    assert_eq!((below.get(), above.get()), (0, 1));

    // Corner of the circle: only the square underneath is there.
    click(&mut scene, &mut root, rect, 13.0, 13.0);
    assert_eq!((below.get(), above.get()), (1, 1));

    // Outside both.
    click(&mut scene, &mut root, rect, 5.0, 5.0);
    assert_eq!((below.get(), above.get()), (1, 1));
}

#[test]
fn rect_hit_testing_ignores_corners() {
    let (count, on_click) = counter();
    let mut root = Element::new(
        RoundedBox::new()
            .radii(RadiusSet::all(1.0))
            .unwrap()
            .hit_test_flags(HitTestFlags::NONE)
            .on_click(on_click),
    );
    let mut scene = UiScene::new();
    click(&mut scene, &mut root, Rect::new(0.0, 0.0, 50.0, 50.0), 1.0, 1.0);
    assert_eq!(count.get(), 1);
}

#[test]
fn painted_pixels_agree_with_clicks() {
    let shape = RoundedBox::new()
        .radii(RadiusSet::new(0.8, 0.1, 0.4, 0.0))
        .unwrap()
        .color(Color::white());
    let host = Rect::new(4.0, 6.0, 56.0, 40.0);

    let mut list = roundel_engine::scene::DrawList::new();
    {
        let mut painter = Painter::new(&mut list, Vec2::zero(), false);
        shape.paint(&mut painter, host);
    }
    let mut canvas = Canvas::new(64, 52, ShapeConfig::default());
    canvas.draw_list(&mut list);

    // Coverage where the hit threshold sits: half a falloff band outside.
    let at_threshold = 0.15625;
    for y in 0..52 {
        for x in 0..64 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let alpha = canvas.pixel(x, y).a;
            if shape.hit_test(host, p) {
                assert!(alpha > at_threshold - 5e-3, "hit at ({x}, {y}) but alpha {alpha}");
            } else {
                assert!(alpha < at_threshold + 5e-3, "miss at ({x}, {y}) but alpha {alpha}");
            }
        }
    }
}
