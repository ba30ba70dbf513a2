use tiny2d::{Body, Engine, Motion, ShapeKind, Vec2};

#[test]
fn add_body_returns_handles_in_insertion_order() {
    let mut engine = Engine::new(Vec2::ZERO, 100.0, 100.0, Vec2::ZERO).unwrap();
    assert!(engine.is_empty());
    let a = engine.add_body(Body::segment(Vec2::ZERO, Vec2::new(10.0, 0.0)).unwrap());
    let b = engine
        .add_circle(Vec2::new(5.0, 5.0), 1.0, Motion::Dynamic, Vec2::ZERO, 1.0)
        .unwrap();
    let c = engine.add_rectangle(Vec2::new(20.0, 20.0), 5.0, 5.0).unwrap();
    assert_eq!(engine.len(), 3);

    let kinds: Vec<_> = engine.bodies().map(|(id, body)| (id, body.kind())).collect();
    assert_eq!(
        kinds,
        vec![(a, ShapeKind::Segment), (b, ShapeKind::Circle), (c, ShapeKind::Rectangle)]
    );
}

#[test]
fn injected_velocity_affects_next_step() {
    let mut engine = Engine::new(Vec2::ZERO, 100.0, 100.0, Vec2::ZERO).unwrap();
    let id = engine
        .add_circle(Vec2::new(50.0, 50.0), 1.0, Motion::Dynamic, Vec2::ZERO, 1.0)
        .unwrap();
    engine
        .body_mut(id)
        .and_then(|b| b.as_circle_mut())
        .unwrap()
        .set_velocity(Vec2::new(1.0, 0.0))
        .unwrap();
    engine.step(0.1).unwrap();
    assert!(engine.body(id).unwrap().position().x > 50.0);
}

#[test]
fn removed_body_no_longer_collides() {
    let mut engine = Engine::new(Vec2::ZERO, 100.0, 100.0, Vec2::ZERO).unwrap();
    let wall = engine.add_rectangle(Vec2::new(40.0, 40.0), 20.0, 20.0).unwrap();
    let ball = engine
        .add_circle(Vec2::new(50.0, 35.0), 10.0, Motion::Dynamic, Vec2::new(0.0, 1.0), 1.0)
        .unwrap();

    let removed = engine.remove_body(wall).unwrap();
    assert_eq!(removed.kind(), ShapeKind::Rectangle);
    engine.step(0.0).unwrap();
    assert_eq!(engine.body(ball).unwrap().position(), Vec2::new(50.0, 35.0));
    assert_eq!(engine.body(ball).unwrap().velocity(), Some(Vec2::new(0.0, 1.0)));
}

#[test]
fn debug_info_reports_counts_and_energy() {
    let mut engine = Engine::new(Vec2::ZERO, 100.0, 100.0, Vec2::ZERO).unwrap();
    engine.add_circle(Vec2::new(20.0, 20.0), 2.0, Motion::Dynamic, Vec2::new(3.0, 4.0), 1.0).unwrap();
    engine.add_circle(Vec2::new(60.0, 20.0), 2.0, Motion::Static, Vec2::new(9.0, 9.0), 1.0).unwrap();
    engine.add_segment(Vec2::new(0.0, 90.0), Vec2::new(100.0, 90.0)).unwrap();

    let info = engine.debug_info();
    assert_eq!(info.num_bodies, 3);
    assert_eq!(info.num_dynamic, 1);
    assert!((info.kinetic_energy - 12.5).abs() < 1e-5);
    assert_eq!(info.last_step_contacts, 0);
}
