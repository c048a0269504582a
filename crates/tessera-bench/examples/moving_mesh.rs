//! End-to-end moving-mesh loop example.
//!
//! Demonstrates: build partition → geometry phase → pressure scatter →
//! move points → repeat, on the build's active policy.
//!
//! Run with `RUST_LOG=debug` to see kernel dispatch.

use tessera_bench::reference_profile;
use tessera_exec::{ActivePolicy, ExecConfig};
use tessera_kernels::{
    geometry_phase, min_area, scatter_pressure_forces, total_area, KernelConfig, KernelError,
    PointAccumulator, ZoneGeometry,
};
use tessera_mesh::{LocalPhaseBarrier, Partition};

fn main() -> Result<(), KernelError> {
    env_logger::init();

    let exec = ExecConfig::active();
    exec.log();
    println!("=== Tessera moving mesh ===");
    println!("policy: {exec}\n");

    let mut mesh = reference_profile(42);
    let config = KernelConfig::default();
    let barrier = LocalPhaseBarrier::new(1)?;
    let mut geom = ZoneGeometry::for_partition(&mesh.partition);
    let mut forces = PointAccumulator::new(mesh.partition.point_count());
    let dt = 1e-4;

    for step in 0..20 {
        let phase =
            geometry_phase::<ActivePolicy, _, _>(&config, &mesh.partition, &barrier, &mut geom)?;

        forces.reset();
        scatter_pressure_forces::<ActivePolicy, _>(
            &config,
            &mesh.partition,
            &mesh.pressure,
            &forces,
        )?;

        // Unit-mass explicit update; the boundary moves too.
        for (p, f) in mesh.partition.coords_mut().iter_mut().zip(forces.to_vec()) {
            *p += f * dt;
        }

        if step % 5 == 0 || step == 19 {
            log::info!("step {step} done at phase {phase}");
            println!(
                "  phase {:>3}: total_area={:.9}, min_area={:.3e}",
                phase,
                total_area::<ActivePolicy>(&geom.areas),
                min_area::<ActivePolicy>(&geom.areas),
            );
        }
    }
    Ok(())
}
