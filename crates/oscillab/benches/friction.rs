//! Benchmarks for the friction integrator and session frame loop.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use oscillab::{FrictionParams, FrictionSim, Mode, Session};

/// One simulated second of friction integration at various frame rates.
fn benchmark_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("friction/integrate_1s");
    for fps in [30u32, 60, 240] {
        group.bench_with_input(BenchmarkId::new("fps", fps), &fps, |b, &fps| {
            let frame = 1.0 / f64::from(fps);
            b.iter(|| {
                let mut sim =
                    FrictionSim::new(FrictionParams::default(), 1.0).expect("valid params");
                for _ in 0..fps {
                    sim.step(black_box(frame));
                }
                black_box(sim.state().x)
            });
        });
    }
    group.finish();
}

/// A single 60 FPS frame, the steady-state cost a rendering host pays.
fn benchmark_single_frame(c: &mut Criterion) {
    c.bench_function("friction/single_frame", |b| {
        let mut sim = FrictionSim::new(FrictionParams::default(), 1.0).expect("valid params");
        b.iter(|| {
            sim.step(black_box(1.0 / 60.0));
            black_box(sim.state().x)
        });
    });
}

/// Full session update including trail pushes and the frame snapshot.
fn benchmark_session_update(c: &mut Criterion) {
    let modes = [
        ("circular", Mode::CircularMotion),
        ("comparison", Mode::Comparison),
        ("friction", Mode::Friction),
    ];

    let mut group = c.benchmark_group("session/update");
    for (name, mode) in modes {
        group.bench_function(name, |b| {
            let mut session = Session::new();
            session.set_mode(mode);
            session.set_playing(true);
            b.iter(|| {
                let frame = session.update(black_box(1.0 / 60.0));
                black_box(&frame);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_integration,
    benchmark_single_frame,
    benchmark_session_update
);
criterion_main!(benches);
