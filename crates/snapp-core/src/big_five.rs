//! Big Five (OCEAN) trait dimensions and the five-component trait vector.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, SnappError};

/// Tolerance applied to the `[-1, 1]` bound when validating vectors, so that
/// catalog weights typed with three decimals never trip the check.
const RANGE_EPSILON: f64 = 1e-9;

/// One of the five personality dimensions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Trait {
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Openness,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    #[strum(serialize = "E")]
    Extraversion,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    #[strum(serialize = "N")]
    Neuroticism,
}

impl Trait {
    /// All five traits in canonical O, C, E, A, N order.
    pub fn all() -> impl Iterator<Item = Trait> {
        Trait::iter()
    }

    /// Position of this trait in the canonical order.
    pub fn index(self) -> usize {
        match self {
            Trait::Openness => 0,
            Trait::Conscientiousness => 1,
            Trait::Extraversion => 2,
            Trait::Agreeableness => 3,
            Trait::Neuroticism => 4,
        }
    }
}

/// A five-component personality measurement or persona profile.
///
/// Two scales occur in practice: per-trait raw averages in `[0, 100]`
/// (slider scale) and normalized values in `[-1, 1]` where `0` is neutral.
/// Catalog weights and normalized quiz results both use the latter.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitVector {
    #[serde(rename = "O")]
    pub openness: f64,
    #[serde(rename = "C")]
    pub conscientiousness: f64,
    #[serde(rename = "E")]
    pub extraversion: f64,
    #[serde(rename = "A")]
    pub agreeableness: f64,
    #[serde(rename = "N")]
    pub neuroticism: f64,
}

impl TraitVector {
    pub const ZERO: TraitVector = TraitVector::new(0.0, 0.0, 0.0, 0.0, 0.0);

    /// Builds a vector in O, C, E, A, N order without validation.
    pub const fn new(o: f64, c: f64, e: f64, a: f64, n: f64) -> Self {
        Self {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        }
    }

    /// Builds a normalized vector, rejecting non-finite components and
    /// components outside `[-1, 1]`.
    pub fn try_new(o: f64, c: f64, e: f64, a: f64, n: f64) -> Result<Self> {
        let vector = Self::new(o, c, e, a, n);
        vector.validate()?;
        Ok(vector)
    }

    pub fn from_array(values: [f64; 5]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }

    pub fn to_array(&self) -> [f64; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }

    pub fn get(&self, trait_: Trait) -> f64 {
        self.to_array()[trait_.index()]
    }

    pub fn set(&mut self, trait_: Trait, value: f64) {
        match trait_ {
            Trait::Openness => self.openness = value,
            Trait::Conscientiousness => self.conscientiousness = value,
            Trait::Extraversion => self.extraversion = value,
            Trait::Agreeableness => self.agreeableness = value,
            Trait::Neuroticism => self.neuroticism = value,
        }
    }

    /// `Σ self[t] * other[t]` over the five traits.
    pub fn dot(&self, other: &TraitVector) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.to_array().iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() == 0.0
    }

    /// Checks that every component is finite and within `[-1, 1]`.
    pub fn validate(&self) -> Result<()> {
        for trait_ in Trait::all() {
            let value = self.get(trait_);
            if !value.is_finite() {
                return Err(SnappError::invalid_vector(format!(
                    "{trait_} component is not finite ({value})"
                )));
            }
            if value < -1.0 - RANGE_EPSILON || value > 1.0 + RANGE_EPSILON {
                return Err(SnappError::invalid_vector(format!(
                    "{trait_} component {value} is outside [-1, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Component-wise clamp into `[-1, 1]`; NaN components become `0`.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self::from_array(self.to_array().map(clamp))
    }

    /// Component-wise arithmetic mean. Returns the zero vector for an empty input.
    pub fn mean<'a>(vectors: impl IntoIterator<Item = &'a TraitVector>) -> Self {
        let mut sum = [0.0_f64; 5];
        let mut count = 0usize;
        for vector in vectors {
            for (acc, value) in sum.iter_mut().zip(vector.to_array()) {
                *acc += value;
            }
            count += 1;
        }
        if count == 0 {
            return Self::ZERO;
        }
        Self::from_array(sum.map(|total| total / count as f64))
    }
}

impl std::fmt::Display for TraitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "O: {}, C: {}, E: {}, A: {}, N: {}",
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_trait_letters_round_trip() {
        for trait_ in Trait::all() {
            let letter = trait_.to_string();
            assert_eq!(Trait::from_str(&letter).unwrap(), trait_);
        }
        assert_eq!(Trait::Neuroticism.to_string(), "N");
    }

    #[test]
    fn test_dot_and_magnitude() {
        let a = TraitVector::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let b = TraitVector::new(0.5, 0.5, 0.0, 0.0, 0.0);
        assert_eq!(a.dot(&b), 0.5);
        assert_eq!(a.magnitude(), 1.0);
        assert!(TraitVector::ZERO.is_zero());
    }

    #[test]
    fn test_try_new_rejects_out_of_range_and_nan() {
        assert!(TraitVector::try_new(0.286, -0.214, 0.286, -0.143, -0.071).is_ok());
        let err = TraitVector::try_new(1.5, 0.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(err.is_invalid_vector());
        assert!(TraitVector::try_new(0.0, f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(TraitVector::try_new(0.0, 0.0, f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_clamped_pulls_components_into_range() {
        let v = TraitVector::new(2.0, -3.0, f64::NAN, 0.5, -0.5).clamped();
        assert_eq!(v, TraitVector::new(1.0, -1.0, 0.0, 0.5, -0.5));
    }

    #[test]
    fn test_mean_of_nothing_is_zero() {
        assert_eq!(TraitVector::mean(std::iter::empty()), TraitVector::ZERO);
        let a = TraitVector::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let b = TraitVector::new(0.0, 1.0, 0.0, 0.0, 0.0);
        assert_eq!(
            TraitVector::mean([&a, &b]),
            TraitVector::new(0.5, 0.5, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_serde_uses_trait_letters() {
        let v = TraitVector::new(0.1, 0.2, 0.3, 0.4, 0.5);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["O"], 0.1);
        assert_eq!(json["N"], 0.5);
    }
}
