//! External motion sources for driven hinges.

use crate::float::Float;
use crate::vector::Vector2;

/// Something that dictates where a hinge should be at time `t`.
pub trait Driver<F: Float> {
    fn position_at(&self, t: F) -> Vector2<F>;
}

impl<F: Float, D: Fn(F) -> Vector2<F>> Driver<F> for D {
    fn position_at(&self, t: F) -> Vector2<F> {
        self(t)
    }
}

/// Sinusoidal motion on each axis: `center + amplitude * sin(frequency * t + phase)`.
///
/// A cosine on some axis is a sine with a quarter-turn phase; see
/// [`Lissajous::with_cos_x`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lissajous<F: Float> {
    pub center: Vector2<F>,
    pub amplitude: Vector2<F>,
    pub frequency: Vector2<F>,
    pub phase: Vector2<F>,
}

impl<F: Float> Lissajous<F> {
    /// Unit frequency, zero phase on both axes.
    pub fn new(center: Vector2<F>, amplitude: Vector2<F>) -> Self {
        Lissajous {
            center,
            amplitude,
            frequency: Vector2::new(F::one(), F::one()),
            phase: Vector2::zero(),
        }
    }

    pub fn with_frequency(mut self, frequency: Vector2<F>) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_phase(mut self, phase: Vector2<F>) -> Self {
        self.phase = phase;
        self
    }

    /// Turn the x axis into a cosine.
    pub fn with_cos_x(mut self) -> Self {
        self.phase.x = self.phase.x + F::pi() * F::half();
        self
    }
}

impl<F: Float> Driver<F> for Lissajous<F> {
    fn position_at(&self, t: F) -> Vector2<F> {
        Vector2::new(
            self.center.x + self.amplitude.x * (self.frequency.x * t + self.phase.x).sin(),
            self.center.y + self.amplitude.y * (self.frequency.y * t + self.phase.y).sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_center_with_zero_phase() {
        let d = Lissajous::new(Vector2::new(160.0f64, 100.0), Vector2::new(55.0, 10.0));
        assert_eq!(d.position_at(0.0), Vector2::new(160.0, 100.0));
    }

    #[test]
    fn cos_x_starts_at_peak() {
        let d = Lissajous::new(Vector2::new(60.0f64, 210.0), Vector2::new(50.0, 50.0)).with_cos_x();
        let p = d.position_at(0.0);
        assert!(Float::abs(p.x - 110.0) < 1e-9);
        assert_eq!(p.y, 210.0);
    }

    #[test]
    fn closures_are_drivers() {
        let d = |t: f64| Vector2::new(t, -t);
        assert_eq!(d.position_at(2.0), Vector2::new(2.0, -2.0));
    }
}
