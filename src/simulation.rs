//! The simulation: hinge and link storage plus the per-frame step.

use crate::config::SolverConfig;
use crate::error::MechanismError;
use crate::float::Float;
use crate::hinge::{Hinge, HingeId};
use crate::link::{Link, LinkId, Resolution};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::vector::Vector2;
use alloc::vec::Vec;
use slotmap::SlotMap;

/// Owns every hinge and link of a mechanism and advances it one step at a time.
///
/// Hinges and links live in slot arenas addressed by [`HingeId`] and
/// [`LinkId`]. Both keep insertion order for iteration, and link order
/// decides the outcome of a step.
///
/// ```
/// use linkwork::{Hinge, Simulation, Vector2};
///
/// let mut sim = Simulation::<f64>::new();
/// let anchor = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
/// let tip = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
/// sim.add_link(5.0, (anchor, tip)).unwrap();
///
/// sim.step();
/// assert_eq!(sim.hinge_position(tip), Some(Vector2::new(7.5, 0.0)));
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    hinges: SlotMap<HingeId, Hinge<F>>,
    hinge_order: Vec<HingeId>,
    links: SlotMap<LinkId, Link<F>>,
    link_order: Vec<LinkId>,
    config: SolverConfig<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new() -> Self {
        Simulation {
            hinges: SlotMap::with_key(),
            hinge_order: Vec::new(),
            links: SlotMap::with_key(),
            link_order: Vec::new(),
            config: SolverConfig::new(),
        }
    }

    pub fn with_config(config: SolverConfig<F>) -> Result<Self, MechanismError> {
        config.validate()?;
        Ok(Simulation { config, ..Self::new() })
    }

    pub fn config(&self) -> &SolverConfig<F> {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig<F>) -> Result<(), MechanismError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // ---- structure -------------------------------------------------------

    pub fn add_hinge(&mut self, hinge: Hinge<F>) -> HingeId {
        let id = self.hinges.insert(hinge);
        self.hinge_order.push(id);
        log::debug!("added hinge {:?} at {}", id, self.hinges[id].position);
        id
    }

    /// Join two hinges with a link of the given rest length.
    ///
    /// If a link between the same pair already exists (in either order) its
    /// handle is returned and nothing is inserted.
    pub fn add_link(
        &mut self,
        rest_length: F,
        endpoints: (HingeId, HingeId),
    ) -> Result<LinkId, MechanismError> {
        if !rest_length.is_finite() || rest_length < F::zero() {
            return Err(MechanismError::InvalidRestLength);
        }
        let (a, b) = endpoints;
        if a == b {
            return Err(MechanismError::SelfLink);
        }
        if !self.hinges.contains_key(a) || !self.hinges.contains_key(b) {
            return Err(MechanismError::UnknownHinge);
        }
        if let Some(existing) = self.find_link(a, b) {
            return Ok(existing);
        }

        let id = self.links.insert(Link::new(rest_length, endpoints));
        self.link_order.push(id);
        log::debug!("added link {:?} between {:?} and {:?}, rest length {}", id, a, b, rest_length);
        Ok(id)
    }

    /// Rigid link whose rest length is the current distance between `a` and `b`.
    pub fn connect(&mut self, a: HingeId, b: HingeId) -> Result<LinkId, MechanismError> {
        let (Some(pa), Some(pb)) = (self.hinge_position(a), self.hinge_position(b)) else {
            return Err(MechanismError::UnknownHinge);
        };
        self.add_link(pa.distance(pb), (a, b))
    }

    /// Remove a hinge and every link attached to it. Unknown handles are ignored.
    pub fn remove_hinge(&mut self, id: HingeId) {
        if self.hinges.remove(id).is_none() {
            return;
        }
        self.hinge_order.retain(|&h| h != id);

        let links = &mut self.links;
        let before = self.link_order.len();
        self.link_order.retain(|&l| {
            let attached = links.get(l).is_some_and(|link| link.touches(id));
            if attached {
                links.remove(l);
            }
            !attached
        });
        log::debug!(
            "removed hinge {:?} and {} attached links",
            id,
            before - self.link_order.len()
        );
    }

    /// Remove a single link. Returns whether it existed.
    pub fn remove_link(&mut self, id: LinkId) -> bool {
        if self.links.remove(id).is_none() {
            return false;
        }
        self.link_order.retain(|&l| l != id);
        log::debug!("removed link {:?}", id);
        true
    }

    // ---- stepping --------------------------------------------------------

    /// Advance one step: resolve every link in order, then apply the axis
    /// locks of every hinge, repeated `config.iterations` times.
    pub fn step(&mut self) {
        self.step_observed(&mut NoOpStepObserver);
    }

    pub fn step_observed<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let config = self.config;

        for pass in 0..config.iterations {
            for &id in self.link_order.iter() {
                let resolution = match self.links.get(id) {
                    Some(link) => link.resolve(&mut self.hinges, &config),
                    None => continue,
                };
                if resolution == Resolution::Degenerate {
                    log::trace!("link {:?} skipped: endpoints coincide", id);
                }
                observer.on_link_resolved(id, resolution);
            }

            for &id in self.hinge_order.iter() {
                if let Some(hinge) = self.hinges.get_mut(id) {
                    hinge.apply_axis_locks();
                }
            }
            observer.on_axis_locks_applied(pass);
        }

        observer.on_step_complete();
    }

    // ---- hinge access ----------------------------------------------------

    pub fn hinge(&self, id: HingeId) -> Option<&Hinge<F>> {
        self.hinges.get(id)
    }

    pub fn contains_hinge(&self, id: HingeId) -> bool {
        self.hinges.contains_key(id)
    }

    pub fn hinge_position(&self, id: HingeId) -> Option<Vector2<F>> {
        self.hinges.get(id).map(|h| h.position)
    }

    pub fn hinge_is_fixed(&self, id: HingeId) -> Option<bool> {
        self.hinges.get(id).map(Hinge::is_fixed)
    }

    pub fn hinge_locks(&self, id: HingeId) -> Option<(Option<F>, Option<F>)> {
        self.hinges.get(id).map(Hinge::locks)
    }

    /// Move a hinge directly, fixed or not. Returns whether the handle is live.
    pub fn set_hinge_position(&mut self, id: HingeId, position: Vector2<F>) -> bool {
        match self.hinges.get_mut(id) {
            Some(h) => {
                h.position = position;
                true
            }
            None => false,
        }
    }

    pub fn set_hinge_fixed(&mut self, id: HingeId, fixed: bool) -> bool {
        match self.hinges.get_mut(id) {
            Some(h) => {
                h.set_fixed(fixed);
                true
            }
            None => false,
        }
    }

    pub fn set_hinge_locks(&mut self, id: HingeId, lock_x: Option<F>, lock_y: Option<F>) -> bool {
        match self.hinges.get_mut(id) {
            Some(h) => {
                h.set_locks(lock_x, lock_y);
                true
            }
            None => false,
        }
    }

    /// Drag a free hinge to `position` and let the mechanism follow with one
    /// step. Fixed or unknown hinges are not moved.
    pub fn drag_hinge(&mut self, id: HingeId, position: Vector2<F>) -> bool {
        match self.hinges.get_mut(id) {
            Some(h) if !h.is_fixed() => h.position = position,
            _ => return false,
        }
        self.step();
        true
    }

    /// Most recently added hinge within `radius` of `point` on both axes.
    pub fn hinge_near(&self, point: Vector2<F>, radius: F) -> Option<HingeId> {
        self.hinge_order.iter().rev().copied().find(|&id| {
            self.hinges.get(id).is_some_and(|h| {
                let d = h.position - point;
                d.x.abs() <= radius && d.y.abs() <= radius
            })
        })
    }

    /// Hinges in insertion order.
    pub fn hinges(&self) -> impl Iterator<Item = (HingeId, &Hinge<F>)> + '_ {
        self.hinge_order
            .iter()
            .filter_map(move |&id| self.hinges.get(id).map(|h| (id, h)))
    }

    pub fn hinge_count(&self) -> usize {
        self.hinges.len()
    }

    // ---- link access -----------------------------------------------------

    pub fn link(&self, id: LinkId) -> Option<&Link<F>> {
        self.links.get(id)
    }

    /// Handle of the link joining `a` and `b`, in either order.
    pub fn find_link(&self, a: HingeId, b: HingeId) -> Option<LinkId> {
        self.link_order
            .iter()
            .copied()
            .find(|&id| self.links.get(id).is_some_and(|l| l.joins(a, b)))
    }

    /// Current positions of a link's two endpoints.
    pub fn link_endpoints(&self, id: LinkId) -> Option<(Vector2<F>, Vector2<F>)> {
        let (a, b) = self.links.get(id)?.endpoints();
        Some((self.hinge_position(a)?, self.hinge_position(b)?))
    }

    /// Links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link<F>)> + '_ {
        self.link_order
            .iter()
            .filter_map(move |&id| self.links.get(id).map(|l| (id, l)))
    }

    /// Endpoint pairs of every link, in link order, ready to draw as lines.
    pub fn link_segments(&self) -> impl Iterator<Item = (Vector2<F>, Vector2<F>)> + '_ {
        self.link_order.iter().filter_map(move |&id| self.link_endpoints(id))
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

impl<F: Float> Default for Simulation<F> {
    fn default() -> Self {
        Self::new()
    }
}
