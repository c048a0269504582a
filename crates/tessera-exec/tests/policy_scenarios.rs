//! Integration test: the same generic loop under every policy set.
//!
//! Each scenario is written once against `P: ExecPolicy` and instantiated
//! for the host and accelerator policies. Inputs are exactly representable
//! so results must agree bit for bit.

use proptest::prelude::*;
use tessera_core::Vec2;
use tessera_exec::{
    ActivePolicy, AtomicCell, AtomicF64, AtomicStrategy, DevicePolicy, ExecConfig, ExecPolicy,
    ExecStrategy, HostPolicy, ReduceStrategy, ACTIVE_BACKEND,
};

// ── Generic scenarios ───────────────────────────────────────────────

fn sum_x<P: ExecPolicy>(points: &[Vec2]) -> f64 {
    P::Reduce::sum(0..points.len(), |i| points[i].x)
}

fn scatter<P: ExecPolicy>(targets: &[usize], values: &[f64], cells: &[AtomicF64]) {
    P::Exec::for_each(0..targets.len(), |i| {
        P::Atomic::add(&cells[targets[i]], values[i]);
    });
}

fn doubled<P: ExecPolicy>(points: &[Vec2]) -> Vec<Vec2> {
    let mut out = vec![Vec2::ZERO; points.len()];
    P::Exec::for_each_mut(&mut out, |i, slot| *slot = points[i] * 2.0);
    out
}

fn in_pool<R: Send>(threads: usize, f: impl FnOnce() -> R + Send) -> R {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map(|pool| pool.install(f))
        .unwrap()
}

// ── Reduction ───────────────────────────────────────────────────────

#[test]
fn sum_of_point_x_is_six_on_every_policy() {
    let points = [Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)];

    for threads in 1..=4 {
        assert_eq!(in_pool(threads, || sum_x::<HostPolicy>(&points)), 6.0);
    }
    assert_eq!(sum_x::<DevicePolicy<128, 128>>(&points), 6.0);
    assert_eq!(sum_x::<DevicePolicy<1, 1>>(&points), 6.0);
    assert_eq!(sum_x::<ActivePolicy>(&points), 6.0);
}

#[test]
fn empty_reduction_is_identity() {
    assert_eq!(sum_x::<HostPolicy>(&[]), 0.0);
    assert_eq!(sum_x::<DevicePolicy>(&[]), 0.0);
}

// ── Atomic scatter ──────────────────────────────────────────────────

#[test]
fn shared_cell_accumulates_every_contribution() {
    let targets = [0, 0, 0, 0];
    let values = [0.5, 0.25, 0.125, 0.125];

    let host = [AtomicF64::new(0.0)];
    scatter::<HostPolicy>(&targets, &values, &host);
    assert_eq!(host[0].load(), 1.0);

    let device = [AtomicF64::new(0.0)];
    scatter::<DevicePolicy<2, 2>>(&targets, &values, &device);
    assert_eq!(device[0].load(), 1.0);
}

#[test]
fn heavy_contention_loses_no_updates() {
    let n = 20_000;
    let targets: Vec<usize> = (0..n).map(|i| i % 3).collect();
    let values = vec![1.0; n];

    for cells in [
        run_scatter::<HostPolicy>(&targets, &values),
        run_scatter::<DevicePolicy<64, 64>>(&targets, &values),
    ] {
        let counts: Vec<f64> = cells.iter().map(|c| c.load()).collect();
        assert_eq!(counts, vec![6667.0, 6667.0, 6666.0]);
    }
}

fn run_scatter<P: ExecPolicy>(targets: &[usize], values: &[f64]) -> Vec<AtomicF64> {
    let cells: Vec<AtomicF64> = (0..3).map(|_| AtomicF64::new(0.0)).collect();
    scatter::<P>(targets, values, &cells);
    cells
}

// ── Per-element output ──────────────────────────────────────────────

#[test]
fn per_element_writes_match_across_policies() {
    let points: Vec<Vec2> = (0..1000)
        .map(|i| Vec2::new(i as f64, -(i as f64) * 0.5))
        .collect();
    let host = doubled::<HostPolicy>(&points);
    let device = doubled::<DevicePolicy<128, 128>>(&points);
    assert_eq!(host, device);
    assert_eq!(host[999], Vec2::new(1998.0, -999.0));
}

// ── Build configuration ─────────────────────────────────────────────

#[test]
fn active_policy_reports_selected_backend() {
    assert_eq!(<ActivePolicy as ExecPolicy>::BACKEND, ACTIVE_BACKEND);
    assert_eq!(ExecConfig::active().backend, ACTIVE_BACKEND);
}

proptest! {
    #[test]
    fn integer_valued_sums_agree(values in prop::collection::vec(-1000i32..1000, 0..600)) {
        let points: Vec<Vec2> = values.iter().map(|&v| Vec2::new(f64::from(v), 0.0)).collect();
        let expected: f64 = values.iter().map(|&v| f64::from(v)).sum();
        prop_assert_eq!(sum_x::<HostPolicy>(&points), expected);
        prop_assert_eq!(sum_x::<DevicePolicy<16, 16>>(&points), expected);
    }
}
