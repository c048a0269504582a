//! Corner-force scatter.
//!
//! A zone computes one force per corner and deposits it into the corner's
//! point. Neighbouring zones share points, so deposits race and go through
//! the policy's atomic strategy.

use log::debug;
use tessera_core::{rotate_cw, Vec2};
use tessera_exec::{ExecPolicy, InnerExecStrategy};
use tessera_mesh::Partition;

use crate::accum::PointAccumulator;
use crate::config::KernelConfig;
use crate::error::KernelError;
use crate::zones::{for_each_zone, gather_corners};

/// Deposit `force_fn(zone, corner)` into the point at each zone corner.
///
/// `corner` is the position within the zone's corner list. Deposits add to
/// whatever `acc` already holds.
pub fn scatter_corner_forces<P, M, F>(
    config: &KernelConfig,
    part: &M,
    force_fn: F,
    acc: &PointAccumulator,
) -> Result<(), KernelError>
where
    P: ExecPolicy,
    M: Partition + ?Sized,
    F: Fn(usize, usize) -> Vec2 + Send + Sync,
{
    config.validate()?;
    KernelError::check_len("point accumulator", part.point_count(), acc.len())?;
    debug!(
        "scatter_corner_forces: {} zones into {} points, backend {}",
        part.zone_count(),
        acc.len(),
        P::BACKEND
    );
    for_each_zone::<P, M, _>(config, part, |zone| {
        let points = part.zone_points(zone);
        P::InnerExec::for_each(0..points.len(), |corner| {
            acc.add::<P::Atomic>(points[corner], force_fn(zone, corner));
        });
    });
    Ok(())
}

/// Force a uniform zone pressure exerts on one corner.
///
/// Half the pressure times the outward normal of the chord joining the
/// corner's two neighbours. The forces of a closed zone sum to zero.
pub fn pressure_corner_force<P, M>(part: &M, pressure: f64, zone: usize, corner: usize) -> Vec2
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    chord_force(&gather_corners::<P, M>(part, zone), pressure, corner)
}

fn chord_force(corners: &[Vec2], pressure: f64, corner: usize) -> Vec2 {
    let n = corners.len();
    let next = corners[(corner + 1) % n];
    let prev = corners[(corner + n - 1) % n];
    0.5 * pressure * rotate_cw(next - prev)
}

/// Scatter the pressure force of every zone into its points.
///
/// Corner coordinates are gathered once per zone and shared by all of
/// that zone's deposits.
pub fn scatter_pressure_forces<P, M>(
    config: &KernelConfig,
    part: &M,
    pressure: &[f64],
    acc: &PointAccumulator,
) -> Result<(), KernelError>
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    config.validate()?;
    KernelError::check_len("zone pressure", part.zone_count(), pressure.len())?;
    KernelError::check_len("point accumulator", part.point_count(), acc.len())?;
    debug!(
        "scatter_pressure_forces: {} zones into {} points, backend {}",
        part.zone_count(),
        acc.len(),
        P::BACKEND
    );
    for_each_zone::<P, M, _>(config, part, |zone| {
        let points = part.zone_points(zone);
        let corners = gather_corners::<P, M>(part, zone);
        P::InnerExec::for_each(0..points.len(), |corner| {
            acc.add::<P::Atomic>(points[corner], chord_force(&corners, pressure[zone], corner));
        });
    });
    Ok(())
}
