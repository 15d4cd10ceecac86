/// Sum of absolute values. Returns 0.0 for an empty vector.
pub fn norm1(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

/// Euclidean length, computed with a running scale so that neither
/// huge nor tiny elements overflow or underflow while squaring.
pub fn norm2(x: &[f64]) -> f64 {
    scaled_l2(x.iter().copied())
}

/// Largest absolute value. Returns 0.0 for an empty vector.
pub fn norm_inf(x: &[f64]) -> f64 {
    x.iter().fold(0.0, |acc: f64, v| {
        if v.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(v.abs())
        }
    })
}

/// Scaled sum of squares in the style of LAPACK `dnrm2`.
///
/// Keeps `scale` as the largest magnitude seen so far and `ssq` as the
/// sum of `(|v| / scale)^2`, so the result is `scale * sqrt(ssq)`.
/// `NaN` anywhere yields `NaN`; otherwise any infinite element yields
/// `+inf`.
pub(crate) fn scaled_l2<I>(values: I) -> f64
where
    I: Iterator<Item = f64>,
{
    let mut scale = 0.0f64;
    let mut ssq = 1.0f64;
    let mut saw_inf = false;

    for v in values {
        if v.is_nan() {
            return f64::NAN;
        }
        if v == 0.0 {
            continue;
        }
        let a = v.abs();
        if a.is_infinite() {
            saw_inf = true;
            continue;
        }
        if scale < a {
            let r = scale / a;
            ssq = 1.0 + ssq * r * r;
            scale = a;
        } else {
            let r = a / scale;
            ssq += r * r;
        }
    }

    if saw_inf {
        f64::INFINITY
    } else {
        scale * ssq.sqrt()
    }
}
