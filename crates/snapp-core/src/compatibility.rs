//! Cosine-similarity compatibility between two trait vectors.

use crate::big_five::TraitVector;

/// A compatibility percentage in `0..=100`.
pub type CompatibilityScore = u8;

/// Compatibility of `a` and `b` as a 0–100 percentage.
///
/// Cosine similarity is mapped linearly from `[-1, 1]` onto `[0, 100]`.
/// Either vector having zero magnitude means there is no signal to compare,
/// and the result is `0`. Half-way values round up, matching the rounding the
/// product has always displayed.
pub fn compute_compatibility(a: &TraitVector, b: &TraitVector) -> CompatibilityScore {
    let magnitude_a = a.magnitude();
    let magnitude_b = b.magnitude();
    if magnitude_a == 0.0 || magnitude_b == 0.0 || !(magnitude_a * magnitude_b).is_finite() {
        return 0;
    }

    let similarity = a.dot(b) / (magnitude_a * magnitude_b);
    if similarity.is_nan() {
        return 0;
    }
    let similarity = similarity.clamp(-1.0, 1.0);

    let percentage = ((similarity + 1.0) * 50.0).round();
    percentage.clamp(0.0, 100.0) as CompatibilityScore
}
