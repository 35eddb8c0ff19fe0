//! "Nice" tick values for linear axes: steps of 1, 2, or 5 times a power of ten.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Integer tick span `[i1, i2]` and increment. A negative increment means
/// ticks are `i / -inc` (sub-unit steps), otherwise `i * inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor() as i32;
    let error = step / 10f64.powi(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    let (mut i1, mut i2, inc);
    if power < 0 {
        let scale = 10f64.powi(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start { i1 += 1.0 }
        if i2 / scale > stop { i2 -= 1.0 }
        inc = -scale;
    } else {
        let scale = 10f64.powi(power) * factor;
        i1 = (start / scale).round();
        i2 = (stop / scale).round();
        if i1 * scale < start { i1 += 1.0 }
        if i2 * scale > stop { i2 -= 1.0 }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) { return tick_spec(start, stop, count * 2.0) }
    (i1, i2, inc)
}

/// Approximately `count` evenly spaced, round values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new() }
    if start == stop { return vec![start] }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) { return Vec::new() }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { out.reverse() }
    out
}

/// Axis label for a percentage tick, e.g. `20%` or `2.5%`.
pub fn percent_label(value: f64) -> String {
    format!("{value}%")
}
