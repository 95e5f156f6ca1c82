//! Hinges: the point anchors of a mechanism.

use crate::float::Float;
use crate::vector::Vector2;

slotmap::new_key_type! {
    /// Stable handle to a hinge inside a [`Simulation`](crate::Simulation).
    pub struct HingeId;
}

/// A point anchor that may be free, fixed, or driven along one or both axes.
///
/// Locking both axes pins the hinge: it becomes fixed and jumps to the
/// lock coordinates. A single locked axis leaves the hinge free, and the lock
/// is re-imposed after every link pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Hinge<F: Float> {
    pub position: Vector2<F>,
    fixed: bool,
    lock_x: Option<F>,
    lock_y: Option<F>,
}

impl<F: Float> Hinge<F> {
    /// A free hinge at `position`.
    pub fn new(position: Vector2<F>) -> Self {
        Hinge { position, fixed: false, lock_x: None, lock_y: None }
    }

    /// A hinge that never moves during a step.
    pub fn fixed(position: Vector2<F>) -> Self {
        Hinge { position, fixed: true, lock_x: None, lock_y: None }
    }

    /// A hinge with the given axis locks applied.
    pub fn locked(position: Vector2<F>, lock_x: Option<F>, lock_y: Option<F>) -> Self {
        let mut hinge = Self::new(position);
        hinge.set_locks(lock_x, lock_y);
        hinge
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Set the fixed flag. A hinge locked on both axes stays fixed.
    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed || (self.lock_x.is_some() && self.lock_y.is_some());
    }

    pub fn locks(&self) -> (Option<F>, Option<F>) {
        (self.lock_x, self.lock_y)
    }

    /// Replace both axis locks. Locking both axes fixes the hinge at the
    /// lock coordinates.
    pub fn set_locks(&mut self, lock_x: Option<F>, lock_y: Option<F>) {
        self.lock_x = lock_x;
        self.lock_y = lock_y;
        if let (Some(x), Some(y)) = (lock_x, lock_y) {
            self.fixed = true;
            self.position = Vector2::new(x, y);
        }
    }

    /// Overwrite the locked axes of `position`. Fixed hinges are left alone.
    pub fn apply_axis_locks(&mut self) {
        if self.fixed {
            return;
        }
        if let Some(x) = self.lock_x {
            self.position.x = x;
        }
        if let Some(y) = self.lock_y {
            self.position.y = y;
        }
    }
}
