// src/metrics/stats.rs
//
// Numeric building blocks. Everything returns `None` where the value is
// undefined so callers pick their own sentinel; nothing here yields NaN.

/// Arithmetic mean; `None` for an empty input.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values.into_iter().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Sample standard deviation (N-1 denominator); `None` below two values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values.iter().copied())?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// std / mean. `None` when the deviation is undefined or the ratio is not
/// finite (zero mean).
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let sd = sample_std(values)?;
    let m = mean(values.iter().copied())?;
    let cv = sd / m;
    cv.is_finite().then_some(cv)
}

/// Median with linear interpolation between the middle pair.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    let mid = v.len() / 2;
    if v.len() % 2 == 1 {
        Some(v[mid])
    } else {
        Some((v[mid - 1] + v[mid]) / 2.0)
    }
}

/// `num / den`, or `fallback` when the denominator is missing or not positive.
pub fn ratio_or(num: Option<f64>, den: Option<f64>, fallback: f64) -> f64 {
    match (num, den) {
        (Some(n), Some(d)) if d > 0.0 => {
            let r = n / d;
            if r.is_finite() { r } else { fallback }
        }
        _ => fallback,
    }
}

/// Percent change from `first` to `last`; `None` when `first` is zero.
pub fn percent_change(first: f64, last: f64) -> Option<f64> {
    let pct = (last - first) / first * 100.0;
    pct.is_finite().then_some(pct)
}

/// First maximum in iteration order: a later equal value never wins.
pub fn argmax_first<K, I>(pairs: I) -> Option<(K, f64)>
where
    I: IntoIterator<Item = (K, f64)>,
{
    let mut best: Option<(K, f64)> = None;
    for (k, v) in pairs {
        match &best {
            Some((_, b)) if v <= *b => {}
            _ => best = Some((k, v)),
        }
    }
    best
}

/// First minimum in iteration order.
pub fn argmin_first<K, I>(pairs: I) -> Option<(K, f64)>
where
    I: IntoIterator<Item = (K, f64)>,
{
    let mut best: Option<(K, f64)> = None;
    for (k, v) in pairs {
        match &best {
            Some((_, b)) if v >= *b => {}
            _ => best = Some((k, v)),
        }
    }
    best
}
