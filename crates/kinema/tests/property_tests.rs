#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]

use kinema::{
    Oscillator, acceleration, angular_frequency, circular_position, displacement, frequency,
    kinetic_energy, normalize_phase, period, potential_energy, velocity,
};
use proptest::prelude::*;

// =============================================================================
// Energy conservation
// =============================================================================

proptest! {
    #[test]
    fn energy_conserved_equals_half_k_a_squared(
        mass in 0.1f64..10.0,
        stiffness in 0.1f64..100.0,
        amplitude in 0.0f64..100.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..100.0,
    ) {
        let omega = angular_frequency(stiffness, mass);
        let y = displacement(amplitude, omega, t, phase);
        let v = velocity(amplitude, omega, t, phase);

        let total = kinetic_energy(mass, v) + potential_energy(stiffness, y);
        let expected = 0.5 * stiffness * amplitude * amplitude;

        let tolerance = 1e-9 * expected.max(1.0);
        prop_assert!(
            (total - expected).abs() < tolerance,
            "energy not conserved: total={}, expected={}, m={}, k={}, A={}",
            total, expected, mass, stiffness, amplitude
        );
    }
}

// =============================================================================
// Periodicity
// =============================================================================

proptest! {
    #[test]
    fn displacement_repeats_after_one_period(
        mass in 0.1f64..10.0,
        stiffness in 0.1f64..100.0,
        amplitude in 0.1f64..100.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..50.0,
    ) {
        let omega = angular_frequency(stiffness, mass);
        let t_period = period(omega);

        let y0 = displacement(amplitude, omega, t, phase);
        let y1 = displacement(amplitude, omega, t + t_period, phase);

        prop_assert!(
            (y1 - y0).abs() < 1e-6 * amplitude,
            "not periodic: y({})={}, y({})={}",
            t, y0, t + t_period, y1
        );
    }

    #[test]
    fn half_period_negates_displacement(
        amplitude in 0.1f64..100.0,
        omega in 0.5f64..20.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..50.0,
    ) {
        let y0 = displacement(amplitude, omega, t, phase);
        let y1 = displacement(amplitude, omega, t + period(omega) / 2.0, phase);
        prop_assert!(
            (y1 + y0).abs() < 1e-6 * amplitude,
            "y(t+T/2) should be -y(t): {} vs {}", y1, y0
        );
    }
}

// =============================================================================
// Derivative consistency
// =============================================================================

proptest! {
    #[test]
    fn velocity_is_derivative_of_displacement(
        amplitude in 0.1f64..100.0,
        omega in 0.5f64..10.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..50.0,
    ) {
        let h = 1e-5;
        let numeric = (displacement(amplitude, omega, t + h, phase)
            - displacement(amplitude, omega, t - h, phase))
            / (2.0 * h);
        let analytic = velocity(amplitude, omega, t, phase);

        let scale = (amplitude * omega).max(1.0);
        prop_assert!(
            (numeric - analytic).abs() < 1e-3 * scale,
            "dy/dt mismatch: numeric={}, analytic={}", numeric, analytic
        );
    }

    #[test]
    fn acceleration_is_derivative_of_velocity(
        amplitude in 0.1f64..100.0,
        omega in 0.5f64..10.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..50.0,
    ) {
        let h = 1e-5;
        let numeric = (velocity(amplitude, omega, t + h, phase)
            - velocity(amplitude, omega, t - h, phase))
            / (2.0 * h);
        let analytic = acceleration(amplitude, omega, t, phase);

        let scale = (amplitude * omega * omega).max(1.0);
        prop_assert!(
            (numeric - analytic).abs() < 1e-3 * scale,
            "dv/dt mismatch: numeric={}, analytic={}", numeric, analytic
        );
    }
}

// =============================================================================
// Circular motion invariants
// =============================================================================

proptest! {
    #[test]
    fn circular_point_stays_on_circle(
        amplitude in 0.0f64..100.0,
        omega in 0.0f64..20.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..100.0,
    ) {
        let p = circular_position(amplitude, omega, t, phase);
        let r = (p.x * p.x + p.y * p.y).sqrt();
        prop_assert!(
            (r - amplitude).abs() < 1e-9 * amplitude.max(1.0),
            "radius drifted: r={}, A={}", r, amplitude
        );
    }

    #[test]
    fn circular_y_is_displacement(
        amplitude in 0.0f64..100.0,
        omega in 0.0f64..20.0,
        phase in -10.0f64..10.0,
        t in 0.0f64..100.0,
    ) {
        let p = circular_position(amplitude, omega, t, phase);
        let y = displacement(amplitude, omega, t, phase);
        prop_assert!((p.y - y).abs() < 1e-9 * amplitude.max(1.0));
    }
}

// =============================================================================
// Phase normalization
// =============================================================================

proptest! {
    #[test]
    fn normalized_phase_in_range(phi in -1e4f64..1e4) {
        let n = normalize_phase(phi);
        prop_assert!((0.0..core::f64::consts::TAU).contains(&n), "out of range: {}", n);
    }

    #[test]
    fn normalized_phase_same_motion(
        amplitude in 0.1f64..100.0,
        omega in 0.5f64..20.0,
        phi in -100.0f64..100.0,
        t in 0.0f64..20.0,
    ) {
        let y_raw = displacement(amplitude, omega, t, phi);
        let y_norm = displacement(amplitude, omega, t, normalize_phase(phi));
        prop_assert!(
            (y_raw - y_norm).abs() < 1e-7 * amplitude,
            "normalization changed motion: {} vs {}", y_raw, y_norm
        );
    }
}

// =============================================================================
// Oscillator stability
// =============================================================================

proptest! {
    #[test]
    fn oscillator_samples_finite(
        mass in 0.01f64..100.0,
        stiffness in 0.01f64..1000.0,
        amplitude in 0.0f64..1000.0,
        phase in -100.0f64..100.0,
        t in 0.0f64..1000.0,
    ) {
        let osc = Oscillator::new(mass, stiffness, amplitude, phase);
        let s = osc.sample(t);
        prop_assert!(s.y.is_finite(), "y not finite: {}", s.y);
        prop_assert!(s.v.is_finite(), "v not finite: {}", s.v);
        prop_assert!(s.a.is_finite(), "a not finite: {}", s.a);

        let e = osc.energies(t);
        prop_assert!(e.total.is_finite(), "energy not finite: {}", e.total);
    }

    #[test]
    fn frequency_period_reciprocal(omega in 0.01f64..1000.0) {
        prop_assert!((frequency(omega) * period(omega) - 1.0).abs() < 1e-12);
    }
}
