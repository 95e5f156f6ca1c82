//! Step observer trait for monitoring simulation progress.

use crate::float::Float;
use crate::link::{LinkId, Resolution};

/// Trait for observing simulation steps.
///
/// Implement this to watch the solver (debug overlays, stress coloring of
/// links, profiling). All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after each link is resolved, in link order.
    fn on_link_resolved(&mut self, _link: LinkId, _resolution: Resolution<F>) {}

    /// Called after axis locks were applied to every hinge in a pass.
    fn on_axis_locks_applied(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
