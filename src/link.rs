//! Distance links between two hinges and their per-pass resolution.

use crate::config::SolverConfig;
use crate::float::Float;
use crate::hinge::{Hinge, HingeId};
use crate::vector::Vector2;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a link inside a [`Simulation`](crate::Simulation).
    pub struct LinkId;
}

/// What a single [`Link::resolve`] call did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resolution<F: Float> {
    /// Endpoints coincide, so the link has no direction. Nothing moved.
    Degenerate,
    /// An endpoint handle no longer resolves. Nothing moved.
    Detached,
    /// The correction was applied. `error` is `rest_length - distance`
    /// measured before the move.
    Corrected { error: F },
}

/// A distance constraint between two hinges.
///
/// The link only refers to its hinges. Equality ignores rest length and
/// endpoint order: two links joining the same pair are the same link.
#[derive(Clone, Debug)]
pub struct Link<F: Float> {
    pub rest_length: F,
    endpoints: (HingeId, HingeId),
}

impl<F: Float> Link<F> {
    pub fn new(rest_length: F, endpoints: (HingeId, HingeId)) -> Self {
        Link { rest_length, endpoints }
    }

    pub fn endpoints(&self) -> (HingeId, HingeId) {
        self.endpoints
    }

    /// Whether `hinge` is one of this link's endpoints.
    pub fn touches(&self, hinge: HingeId) -> bool {
        self.endpoints.0 == hinge || self.endpoints.1 == hinge
    }

    /// Whether this link joins `a` and `b`, in either order.
    pub fn joins(&self, a: HingeId, b: HingeId) -> bool {
        let (p, q) = self.endpoints;
        (p == a && q == b) || (p == b && q == a)
    }

    /// Move the endpoints once toward `rest_length`.
    ///
    /// With `n` the unit vector from the second endpoint to the first and
    /// `error = rest_length - distance`, the first endpoint moves by
    /// `n * error * fraction` and the second by the opposite. Fixed endpoints
    /// stay put. Coincident endpoints are skipped.
    pub fn resolve(
        &self,
        hinges: &mut SlotMap<HingeId, Hinge<F>>,
        config: &SolverConfig<F>,
    ) -> Resolution<F> {
        let (a, b) = self.endpoints;
        let (Some(first), Some(second)) = (hinges.get(a), hinges.get(b)) else {
            return Resolution::Detached;
        };

        let axis = first.position - second.position;
        let dist = axis.magnitude();
        if dist == F::zero() {
            return Resolution::Degenerate;
        }

        let n = Vector2::new(axis.x / dist, axis.y / dist);
        let error = self.rest_length - dist;
        let correction = n.scale(error * config.fraction);

        if let Some(h) = hinges.get_mut(a) {
            if !h.is_fixed() {
                h.position = settle(h.position + correction, config);
            }
        }
        if let Some(h) = hinges.get_mut(b) {
            if !h.is_fixed() {
                h.position = settle(h.position - correction, config);
            }
        }

        Resolution::Corrected { error }
    }
}

fn settle<F: Float>(position: Vector2<F>, config: &SolverConfig<F>) -> Vector2<F> {
    if config.stabilize {
        position.round_to(config.stabilize_digits)
    } else {
        position
    }
}

impl<F: Float> PartialEq for Link<F> {
    fn eq(&self, other: &Self) -> bool {
        self.joins(other.endpoints.0, other.endpoints.1)
    }
}
