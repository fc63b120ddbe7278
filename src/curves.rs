//! Contains the fade curves used to interpolate within a lattice cell.

use bevy_math::{Curve, curve::Interval};

/// Linear interpolation.
/// This shows the lattice clearly, which is mostly useful for comparison.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear;

impl Curve<f32> for Linear {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::EVERYWHERE
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t
    }
}

/// Smoothstep interpolation, `3t² − 2t³`. This has a smooth derivative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Smoothstep;

impl Curve<f32> for Smoothstep {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::UNIT
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t * t * (t * (-2.0) + 3.0)
    }
}

/// The improved Perlin fade, `6t⁵ − 15t⁴ + 10t³`.
/// Both its first and second derivatives are zero at the cell edges, so lattice lines don't show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Quintic;

impl Curve<f32> for Quintic {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::UNIT
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }
}

/// Selects the fade curve gradient noise interpolates with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
pub enum FadeCurve {
    /// [`Quintic`].
    #[default]
    Quintic,
    /// [`Smoothstep`].
    Smoothstep,
    /// [`Linear`].
    Linear,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fades(curve: &impl Curve<f32>) {
        assert_eq!(curve.sample_unchecked(0.0), 0.0);
        assert_eq!(curve.sample_unchecked(1.0), 1.0);
        assert!((curve.sample_unchecked(0.5) - 0.5).abs() < 1e-6);
        let mut last = 0.0;
        for i in 1..=100 {
            let v = curve.sample_unchecked(i as f32 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn curves_fade_from_zero_to_one() {
        assert_fades(&Linear);
        assert_fades(&Smoothstep);
        assert_fades(&Quintic);
    }

    #[test]
    fn quintic_matches_polynomial() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let expected = 6.0 * t.powi(5) - 15.0 * t.powi(4) + 10.0 * t.powi(3);
            assert!((Quintic.sample_unchecked(t) - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn quintic_is_flat_at_edges() {
        let eps = 1e-3;
        assert!(Quintic.sample_unchecked(eps) < 1e-7);
        assert!(1.0 - Quintic.sample_unchecked(1.0 - eps) < 1e-6);
    }
}
