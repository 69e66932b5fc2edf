//! Dense vector arithmetic.
//!
//! Vectors are stored as `f32` like the models that produce them. Sums and
//! norms accumulate in `f64`.

use semdim_core::constants::NORM_EPSILON;

/// Euclidean (L2) norm.
pub fn norm(v: &[f32]) -> f64 {
    v.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>().sqrt()
}

/// Dot product over the shared prefix of `a` and `b`.
pub fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x as f64) * (y as f64))
        .sum()
}

/// Unit-length copy of `v` in `f64`, or `None` for a zero vector.
pub fn unit(v: &[f32]) -> Option<Vec<f64>> {
    let n = norm(v);
    if n <= NORM_EPSILON {
        return None;
    }
    Some(v.iter().map(|&x| x as f64 / n).collect())
}

/// Normalize an `f64` accumulator down to a unit `f32` vector.
pub fn unit_from_f64(v: &[f64]) -> Option<Vec<f32>> {
    let n = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if n <= NORM_EPSILON {
        return None;
    }
    Some(v.iter().map(|&x| (x / n) as f32).collect())
}

/// Cosine similarity clamped to `[-1, 1]`. Zero vectors score `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let denom = norm(a) * norm(b);
    if denom <= NORM_EPSILON {
        return 0.0;
    }
    (dot(a, b) / denom).clamp(-1.0, 1.0)
}

pub fn negate(v: &[f32]) -> Vec<f32> {
    v.iter().map(|&x| -x).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_has_length_one() {
        let u = unit(&[3.0, 4.0]).unwrap();
        assert!((u[0] - 0.6).abs() < 1e-12);
        assert!((u[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn unit_of_zero_is_none() {
        assert!(unit(&[0.0, 0.0, 0.0]).is_none());
        assert!(unit_from_f64(&[0.0]).is_none());
    }

    #[test]
    fn cosine_identical_and_opposite() {
        let v = [0.5, -1.5, 2.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
        assert!((cosine_similarity(&v, &negate(&v)) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_orthogonal() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 2.0]).abs() < 1e-12);
    }

    #[test]
    fn cosine_ignores_magnitude() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
