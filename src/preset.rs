//! Ready-made mechanisms: straight chains and the two-linkage sample scene.

use crate::config::SolverConfig;
use crate::driver::Lissajous;
use crate::error::MechanismError;
use crate::float::Float;
use crate::hinge::{Hinge, HingeId};
use crate::scene::Scene;
use crate::simulation::Simulation;
use crate::vector::Vector2;
use alloc::vec::Vec;

/// Add a straight chain of `segments` rigid links from `start` to `end`.
///
/// Returns the hinge handles from `start` to `end`; all of them are free.
pub fn chain<F: Float>(
    sim: &mut Simulation<F>,
    start: Vector2<F>,
    end: Vector2<F>,
    segments: usize,
) -> Result<Vec<HingeId>, MechanismError> {
    let mut hinges = Vec::with_capacity(segments + 1);
    let count = F::from_f32(segments.max(1) as f32);

    for i in 0..=segments {
        let t = F::from_f32(i as f32) / count;
        hinges.push(sim.add_hinge(Hinge::new(start.lerp(end, t))));
    }
    for pair in hinges.windows(2) {
        sim.connect(pair[0], pair[1])?;
    }

    Ok(hinges)
}

/// Two linkages, each anchored on the left and sliding along a horizontal
/// rail on the right, with one hinge of each swept by a Lissajous driver.
///
/// Runs under the full-correction policy with one-decimal rounding.
pub fn sample_scene<F: Float>() -> Result<Scene<F>, MechanismError> {
    let v = |x: f32, y: f32| Vector2::from((F::from_f32(x), F::from_f32(y)));
    let mut sim = Simulation::with_config(SolverConfig::full())?;

    let anchor = sim.add_hinge(Hinge::fixed(v(60.0, 100.0)));
    let elbow = sim.add_hinge(Hinge::new(v(60.0, 50.0)));
    let crank = sim.add_hinge(Hinge::new(v(160.0, 50.0)));
    let slider = sim.add_hinge(Hinge::locked(v(210.0, 100.0), None, Some(F::from_f32(100.0))));
    sim.add_link(F::from_f32(50.0), (anchor, elbow))?;
    sim.add_link(F::from_f32(100.0), (elbow, crank))?;
    sim.add_link(F::from_f32(100.0), (crank, slider))?;

    let anchor = sim.add_hinge(Hinge::fixed(v(60.0, 210.0)));
    let rocker = sim.add_hinge(Hinge::new(v(60.0, 160.0)));
    let slider = sim.add_hinge(Hinge::locked(v(210.0, 210.0), None, Some(F::from_f32(210.0))));
    sim.add_link(F::from_f32(50.0), (anchor, rocker))?;
    sim.add_link(F::from_f32(100.0), (rocker, slider))?;

    let mut scene = Scene::new(sim);
    scene.drive(
        crank,
        Lissajous::new(v(160.0, 100.0), v(55.0, 10.0)).with_frequency(v(1.0, 2.0)),
    );
    scene.drive(
        rocker,
        Lissajous::new(v(60.0, 210.0), v(50.0, 50.0))
            .with_phase(v(5.0, 5.0))
            .with_cos_x(),
    );
    Ok(scene)
}
