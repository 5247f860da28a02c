//! Sampled curves with linear interpolation.
//!
//! Exposure profiles are handed to consumers as precomputed `(t_i, y_i)`
//! arrays rather than closures of time; [`Curve`] pairs such an array
//! with a piecewise linear interpolation helper for off-grid queries.

use crate::types::CurveError;

/// Piecewise linear curve over sampled `(time, value)` points.
///
/// Times must be strictly increasing (curves are built over a
/// [`crate::time::TimeGrid`], which guarantees this; the constructor
/// re-validates lengths). Queries outside the sampled range clamp to the
/// end values.
///
/// # Examples
///
/// ```
/// use xva_core::math::Curve;
///
/// let curve = Curve::new(vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 40.0]).unwrap();
///
/// assert_eq!(curve.interpolate(0.5), 5.0);
/// assert_eq!(curve.interpolate(1.5), 25.0);
/// // Clamped outside the domain
/// assert_eq!(curve.interpolate(-1.0), 0.0);
/// assert_eq!(curve.interpolate(9.0), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Curve {
    /// Constructs a curve from parallel time and value vectors.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::LengthMismatch`] for unequal lengths and
    /// [`CurveError::InsufficientData`] for fewer than one point.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, CurveError> {
        if times.len() != values.len() {
            return Err(CurveError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(CurveError::InsufficientData { got: 0, need: 1 });
        }
        Ok(Self { times, values })
    }

    /// Returns the sampled times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the sampled values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of sampled points.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns the sampled points as `(time, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Linearly interpolates the curve at `t`, clamping outside the domain.
    pub fn interpolate(&self, t: f64) -> f64 {
        let n = self.times.len();
        if t <= self.times[0] {
            return self.values[0];
        }
        if t >= self.times[n - 1] {
            return self.values[n - 1];
        }
        // Binary search for the segment with times[i] <= t < times[i+1]
        let i = match self.times.binary_search_by(|x| x.total_cmp(&t)) {
            Ok(i) => return self.values[i],
            Err(i) => i - 1,
        };
        let (t0, t1) = (self.times[i], self.times[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let w = (t - t0) / (t1 - t0);
        y0 + w * (y1 - y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        assert_eq!(
            Curve::new(vec![0.0, 1.0], vec![1.0]),
            Err(CurveError::LengthMismatch {
                times: 2,
                values: 1
            })
        );
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(
            Curve::new(vec![], vec![]),
            Err(CurveError::InsufficientData { got: 0, need: 1 })
        );
    }

    #[test]
    fn test_single_point_curve_is_constant() {
        let curve = Curve::new(vec![0.5], vec![7.0]).unwrap();
        assert_relative_eq!(curve.interpolate(0.0), 7.0);
        assert_relative_eq!(curve.interpolate(0.5), 7.0);
        assert_relative_eq!(curve.interpolate(2.0), 7.0);
    }

    #[test]
    fn test_interpolation_on_knots() {
        let curve = Curve::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, -1.0]).unwrap();
        assert_relative_eq!(curve.interpolate(0.0), 1.0);
        assert_relative_eq!(curve.interpolate(1.0), 3.0);
        assert_relative_eq!(curve.interpolate(2.0), -1.0);
    }

    #[test]
    fn test_interpolation_between_knots() {
        let curve = Curve::new(vec![0.0, 1.0, 2.0], vec![1.0, 3.0, -1.0]).unwrap();
        assert_relative_eq!(curve.interpolate(0.25), 1.5);
        assert_relative_eq!(curve.interpolate(1.5), 1.0);
    }

    #[test]
    fn test_clamping() {
        let curve = Curve::new(vec![0.0, 1.0], vec![2.0, 4.0]).unwrap();
        assert_relative_eq!(curve.interpolate(-5.0), 2.0);
        assert_relative_eq!(curve.interpolate(5.0), 4.0);
    }

    #[test]
    fn test_points_iterator() {
        let curve = Curve::new(vec![0.0, 1.0], vec![2.0, 4.0]).unwrap();
        let pts: Vec<(f64, f64)> = curve.points().collect();
        assert_eq!(pts, vec![(0.0, 2.0), (1.0, 4.0)]);
    }
}
