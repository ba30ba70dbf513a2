use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tiny2d::{Engine, Motion, Vec2};

fn build_scene(circles: u16) -> Engine {
    let mut engine = Engine::new(Vec2::ZERO, 1200.0, 800.0, Vec2::new(0.0, 1000.0)).unwrap();
    engine.add_segment(Vec2::new(100.0, 400.0), Vec2::new(500.0, 480.0)).unwrap();
    engine.add_segment(Vec2::new(1100.0, 500.0), Vec2::new(700.0, 580.0)).unwrap();
    engine.add_rectangle(Vec2::new(450.0, 650.0), 300.0, 40.0).unwrap();
    engine.add_circle(Vec2::new(900.0, 300.0), 50.0, Motion::Static, Vec2::ZERO, 1.0).unwrap();
    for i in 0..circles {
        let x = 40.0 + f32::from(i % 25) * 45.0;
        let y = 40.0 + f32::from(i / 25) * 45.0;
        engine
            .add_circle(Vec2::new(x, y), 15.0, Motion::Dynamic, Vec2::new(30.0, 0.0), 0.9)
            .unwrap();
    }
    engine
}

fn bench_step(c: &mut Criterion) {
    for n in [10u16, 50] {
        let mut engine = build_scene(n);
        c.bench_function(&format!("step_{n}_circles"), |b| {
            b.iter(|| engine.step(black_box(1.0 / 120.0)).unwrap());
        });
    }
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
