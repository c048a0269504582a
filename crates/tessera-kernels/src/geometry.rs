//! Zone geometry: centers and signed areas.
//!
//! Areas use the shoelace formula over the zone's corners taken
//! counter-clockwise, so a correctly oriented zone has positive area and a
//! tangled one goes negative. [`min_area`] is the usual tangling check.

use log::debug;
use tessera_core::{cross, Phase, Vec2};
use tessera_exec::{ExecPolicy, ReduceStrategy};
use tessera_mesh::{Partition, PhaseBarrier};

use crate::config::KernelConfig;
use crate::error::KernelError;
use crate::zones::{for_each_zone_mut, gather_corners};

/// Per-zone derived geometry for one partition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneGeometry {
    /// Corner-average center of each zone.
    pub centers: Vec<Vec2>,
    /// Signed area of each zone.
    pub areas: Vec<f64>,
}

impl ZoneGeometry {
    /// Zero-filled storage sized for `part`.
    pub fn for_partition<M: Partition + ?Sized>(part: &M) -> Self {
        let zones = part.zone_count();
        Self {
            centers: vec![Vec2::ZERO; zones],
            areas: vec![0.0; zones],
        }
    }

    /// Reject `config` or buffer sizes before anything is written.
    fn check<M>(&self, config: &KernelConfig, part: &M) -> Result<(), KernelError>
    where
        M: Partition + ?Sized,
    {
        config.validate()?;
        let zones = part.zone_count();
        KernelError::check_len("zone centers", zones, self.centers.len())?;
        KernelError::check_len("zone areas", zones, self.areas.len())
    }
}

/// Corner-average center of one zone.
pub fn zone_center<P, M>(part: &M, zone: usize) -> Vec2
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    let corners = gather_corners::<P, M>(part, zone);
    P::InnerReduce::sum(0..corners.len(), |c| corners[c]) / corners.len() as f64
}

/// Signed shoelace area of one zone.
pub fn zone_area<P, M>(part: &M, zone: usize) -> f64
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    let corners = gather_corners::<P, M>(part, zone);
    let n = corners.len();
    0.5 * P::InnerReduce::sum(0..n, |c| cross(corners[c], corners[(c + 1) % n]))
}

/// Write the center of every zone of `part` into `out`.
pub fn zone_centers<P, M>(
    config: &KernelConfig,
    part: &M,
    out: &mut [Vec2],
) -> Result<(), KernelError>
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    config.validate()?;
    KernelError::check_len("zone centers", part.zone_count(), out.len())?;
    debug!(
        "zone_centers: {} zones, chunk {}, backend {}",
        out.len(),
        config.chunk_size,
        P::BACKEND
    );
    for_each_zone_mut::<P, _, _>(config, out, |zone, slot| {
        *slot = zone_center::<P, M>(part, zone);
    });
    Ok(())
}

/// Write the signed area of every zone of `part` into `out`.
pub fn zone_areas<P, M>(
    config: &KernelConfig,
    part: &M,
    out: &mut [f64],
) -> Result<(), KernelError>
where
    P: ExecPolicy,
    M: Partition + ?Sized,
{
    config.validate()?;
    KernelError::check_len("zone areas", part.zone_count(), out.len())?;
    debug!(
        "zone_areas: {} zones, chunk {}, backend {}",
        out.len(),
        config.chunk_size,
        P::BACKEND
    );
    for_each_zone_mut::<P, _, _>(config, out, |zone, slot| {
        *slot = zone_area::<P, M>(part, zone);
    });
    Ok(())
}

/// Sum of `areas`, combined by the policy's reduction strategy.
///
/// On the threaded host the combine order depends on scheduling, so the
/// last bits can differ between runs for inexact inputs.
pub fn total_area<P: ExecPolicy>(areas: &[f64]) -> f64 {
    P::Reduce::sum(0..areas.len(), |z| areas[z])
}

/// Smallest of `areas`; `+inf` when there are none.
pub fn min_area<P: ExecPolicy>(areas: &[f64]) -> f64 {
    P::Reduce::min(0..areas.len(), |z| areas[z])
}

/// Compute centers and areas for `part`, then arrive at `barrier`.
///
/// The barrier is reached exactly once per call, even when the arguments
/// are rejected, so peers waiting on the same phase are never stranded.
/// Returns the phase the arrival completed.
pub fn geometry_phase<P, B, M>(
    config: &KernelConfig,
    part: &M,
    barrier: &B,
    out: &mut ZoneGeometry,
) -> Result<Phase, KernelError>
where
    P: ExecPolicy,
    B: PhaseBarrier + ?Sized,
    M: Partition + ?Sized,
{
    let computed = out
        .check::<M>(config, part)
        .and_then(|()| zone_centers::<P, M>(config, part, &mut out.centers))
        .and_then(|()| zone_areas::<P, M>(config, part, &mut out.areas));
    let phase = barrier.arrive_and_wait();
    debug!("partition {}: geometry phase {phase}", part.id());
    computed.map(|()| phase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{PartitionId, PointId};
    use tessera_exec::{DevicePolicy, HostPolicy};
    use tessera_mesh::LocalPartition;
    use tessera_test_utils::{unit_grid, RecordingBarrier};

    fn triangle() -> LocalPartition {
        let coords = vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)];
        let zones = [[PointId(0), PointId(1), PointId(2)]];
        LocalPartition::new(PartitionId(0), coords, zones).unwrap()
    }

    #[test]
    fn triangle_area_and_center() {
        let t = triangle();
        assert_eq!(zone_area::<HostPolicy, _>(&t, 0), 6.0);
        let c = zone_center::<HostPolicy, _>(&t, 0);
        assert!((c.x - 4.0 / 3.0).abs() < 1e-15);
        assert_eq!(c.y, 1.0);
    }

    #[test]
    fn clockwise_zone_has_negative_area() {
        let coords = vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 3.0)];
        let zones = [[PointId(0), PointId(2), PointId(1)]];
        let t = LocalPartition::new(PartitionId(0), coords, zones).unwrap();
        assert_eq!(zone_area::<DevicePolicy, _>(&t, 0), -6.0);
    }

    #[test]
    fn grid_areas_sum_to_domain() {
        let grid = unit_grid(8, 5, 0.5);
        let mut areas = vec![0.0; 40];
        let config = KernelConfig::with_chunk_size(7);
        zone_areas::<HostPolicy, _>(&config, &grid, &mut areas).unwrap();
        assert!(areas.iter().all(|&a| a == 0.25));
        assert_eq!(total_area::<HostPolicy>(&areas), 10.0);
        assert_eq!(min_area::<HostPolicy>(&areas), 0.25);
    }

    #[test]
    fn empty_reductions() {
        assert_eq!(total_area::<DevicePolicy>(&[]), 0.0);
        assert_eq!(min_area::<DevicePolicy>(&[]), f64::INFINITY);
    }

    #[test]
    fn wrong_output_length_rejected() {
        let grid = unit_grid(2, 2, 1.0);
        let mut centers = vec![Vec2::ZERO; 3];
        let err = zone_centers::<HostPolicy, _>(&KernelConfig::default(), &grid, &mut centers)
            .unwrap_err();
        assert_eq!(
            err,
            KernelError::LengthMismatch {
                what: "zone centers",
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(centers, vec![Vec2::ZERO; 3]);
    }

    #[test]
    fn mismatched_areas_leave_centers_untouched() {
        let grid = unit_grid(2, 1, 1.0);
        let barrier = RecordingBarrier::new();
        let mut geom = ZoneGeometry {
            centers: vec![Vec2::ZERO; 2],
            areas: Vec::new(),
        };
        let result = geometry_phase::<HostPolicy, _, _>(
            &KernelConfig::default(),
            &grid,
            &barrier,
            &mut geom,
        );
        assert_eq!(
            result,
            Err(KernelError::LengthMismatch {
                what: "zone areas",
                expected: 2,
                actual: 0
            })
        );
        assert_eq!(geom.centers, vec![Vec2::ZERO; 2]);
        assert_eq!(barrier.arrivals(), 1);
    }

    #[test]
    fn zero_chunk_rejected() {
        let grid = unit_grid(1, 1, 1.0);
        let mut areas = vec![0.0];
        assert_eq!(
            zone_areas::<HostPolicy, _>(&KernelConfig::with_chunk_size(0), &grid, &mut areas),
            Err(KernelError::InvalidChunkSize)
        );
    }

    #[test]
    fn phase_arrives_once_even_on_error() {
        let grid = unit_grid(3, 2, 1.0);
        let barrier = RecordingBarrier::new();

        let mut geom = ZoneGeometry::for_partition(&grid);
        let config = KernelConfig::default();
        let phase =
            geometry_phase::<HostPolicy, _, _>(&config, &grid, &barrier, &mut geom).unwrap();
        assert_eq!(phase, Phase(1));
        assert_eq!(geom.centers[0], Vec2::new(0.5, 0.5));
        assert_eq!(geom.areas, vec![1.0; 6]);

        let mut bad = ZoneGeometry::default();
        let result = geometry_phase::<HostPolicy, _, _>(&config, &grid, &barrier, &mut bad);
        assert!(matches!(result, Err(KernelError::LengthMismatch { .. })));
        assert_eq!(barrier.arrivals(), 2);
    }
}
