use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Terminal state of the escape-time iteration for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// `|z_n|` exceeded the escape radius when tested before step `n`.
    Escaped(u32),
    /// The iteration budget ran out without an escape; carries the budget.
    Bounded(u32),
}

impl EscapeOutcome {
    #[must_use]
    pub fn iterations(self) -> u32 {
        match self {
            Self::Escaped(n) | Self::Bounded(n) => n,
        }
    }

    #[must_use]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_radius: f64,
}

impl Default for MandelbrotAlgorithm {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = EscapeOutcome;

    fn compute(&self, c: Complex) -> Self::Output {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude() > self.escape_radius {
                return EscapeOutcome::Escaped(iteration);
            }
            z = z.square() + c;
        }

        EscapeOutcome::Bounded(self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadius { escape_radius });
        }

        Ok(Self {
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_bounded() {
        let algorithm = MandelbrotAlgorithm::default();

        assert_eq!(
            algorithm.compute(Complex::ZERO),
            EscapeOutcome::Bounded(1000)
        );
    }

    #[test]
    fn test_two_escapes_quickly() {
        let algorithm = MandelbrotAlgorithm::default();

        // z: 0 -> 2 -> 6, |2| is not above the radius so the escape is seen at n = 2
        assert_eq!(
            algorithm.compute(Complex::new(2.0, 0.0)),
            EscapeOutcome::Escaped(2)
        );
    }

    #[test]
    fn test_outside_radius_escapes_after_first_step() {
        let algorithm = MandelbrotAlgorithm::default();
        let points = [
            Complex::new(2.5, 0.0),
            Complex::new(-3.0, -1.5),
            Complex::new(0.0, -2.01),
            Complex::new(-400.0 / 150.0 - 3.0, -3.5),
        ];

        for c in points {
            assert_eq!(algorithm.compute(c), EscapeOutcome::Escaped(1));
        }
    }

    #[test]
    fn test_known_members_are_bounded() {
        let algorithm = MandelbrotAlgorithm::default();
        let members = [
            Complex::new(-1.0, 0.0),
            Complex::new(-2.0, 0.0),
            Complex::new(-0.5, 0.0),
            Complex::new(0.25, 0.0),
            Complex::new(0.0, 1.0),
        ];

        for c in members {
            assert!(algorithm.compute(c).is_bounded(), "{:?} should be bounded", c);
        }
    }

    #[test]
    fn test_escape_at_budget_counts_as_bounded() {
        // 1 + 0i: z = 0, 1, 2, 5; |z_3| = 5 would be detected at n = 3
        let algorithm = MandelbrotAlgorithm::new(3, 2.0).unwrap();
        assert_eq!(
            algorithm.compute(Complex::new(1.0, 0.0)),
            EscapeOutcome::Bounded(3)
        );

        let algorithm = MandelbrotAlgorithm::new(4, 2.0).unwrap();
        assert_eq!(
            algorithm.compute(Complex::new(1.0, 0.0)),
            EscapeOutcome::Escaped(3)
        );
    }

    #[test]
    fn test_escape_radius_is_configurable() {
        let algorithm = MandelbrotAlgorithm::new(100, 10.0).unwrap();

        // 2 + 0i: z = 0, 2, 6, 38
        assert_eq!(
            algorithm.compute(Complex::new(2.0, 0.0)),
            EscapeOutcome::Escaped(3)
        );
    }

    #[test]
    fn test_outcome_iterations() {
        assert_eq!(EscapeOutcome::Escaped(7).iterations(), 7);
        assert_eq!(EscapeOutcome::Bounded(1000).iterations(), 1000);
        assert!(!EscapeOutcome::Escaped(7).is_bounded());
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0, 2.0),
            Err(MandelbrotError::ZeroMaxIterationsError)
        );
    }

    #[test]
    fn test_new_rejects_invalid_escape_radius() {
        assert_eq!(
            MandelbrotAlgorithm::new(10, 0.0),
            Err(MandelbrotError::InvalidEscapeRadius { escape_radius: 0.0 })
        );
        assert!(MandelbrotAlgorithm::new(10, -2.0).is_err());
        assert!(MandelbrotAlgorithm::new(10, f64::NAN).is_err());
    }

    #[test]
    fn test_default_matches_new_with_defaults() {
        assert_eq!(
            MandelbrotAlgorithm::new(DEFAULT_MAX_ITERATIONS, DEFAULT_ESCAPE_RADIUS).unwrap(),
            MandelbrotAlgorithm::default()
        );
    }
}
