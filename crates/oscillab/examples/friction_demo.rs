//! Runs the Coulomb-friction oscillator headless and prints the decay
//! envelope.
//!
//! ```sh
//! cargo run --example friction_demo
//! RUST_LOG=oscillab=debug cargo run --example friction_demo
//! ```

use oscillab::{Frame, Mode, Session};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut session = Session::new();
    session.set_mode(Mode::Friction);
    session.set_playing(true);

    // 20 simulated seconds at 60 FPS; the default setup pins around t = 12 s
    for _ in 0..(20 * 60) {
        session.update(1.0 / 60.0);
    }

    if let Frame::Friction {
        t, state, peaks, ..
    } = session.frame()
    {
        println!("t = {t:.2} s, x = {:+.4}, stopped = {}", state.x, state.stopped);
        println!("decay envelope:");
        for peak in peaks {
            println!("  t = {:6.3} s  peak = {:+.4}", peak.t, peak.y);
        }
    }
}
