//! A host-loop model: a simulation plus the drivers that animate it.

use crate::driver::Driver;
use crate::float::Float;
use crate::hinge::HingeId;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::simulation::Simulation;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// A simulation with driven hinges and a clock.
///
/// Each [`advance`](Scene::advance) is one frame: drivers place their hinges
/// for the current time, the clock ticks, and the simulation steps. Pausing
/// freezes the drivers and the clock, but the links keep settling.
pub struct Scene<F: Float> {
    pub simulation: Simulation<F>,
    drivers: Vec<(HingeId, Box<dyn Driver<F>>)>,
    time: F,
    time_step: F,
    running: bool,
}

impl<F: Float> Scene<F> {
    pub fn new(simulation: Simulation<F>) -> Self {
        Scene {
            simulation,
            drivers: Vec::new(),
            time: F::zero(),
            time_step: F::from_f32(0.001),
            running: true,
        }
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Attach a driver to a hinge. A hinge already driven gets the new driver.
    pub fn drive<D: Driver<F> + 'static>(&mut self, hinge: HingeId, driver: D) {
        self.drivers.retain(|(h, _)| *h != hinge);
        self.drivers.push((hinge, Box::new(driver)));
    }

    pub fn release(&mut self, hinge: HingeId) {
        self.drivers.retain(|(h, _)| *h != hinge);
    }

    pub fn is_driven(&self, hinge: HingeId) -> bool {
        self.drivers.iter().any(|(h, _)| *h == hinge)
    }

    pub fn driven(&self) -> impl Iterator<Item = HingeId> + '_ {
        self.drivers.iter().map(|(h, _)| *h)
    }

    pub fn time(&self) -> F {
        self.time
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    pub fn advance(&mut self) {
        self.advance_observed(&mut NoOpStepObserver);
    }

    pub fn advance_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        if self.running {
            let simulation = &mut self.simulation;
            let time = self.time;
            self.drivers.retain(|(hinge, driver)| {
                simulation.set_hinge_position(*hinge, driver.position_at(time))
            });
            self.time = self.time + self.time_step;
        }
        self.simulation.step_observed(observer);
    }
}
