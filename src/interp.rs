//! Linear interpolation helpers shared by ramps and colormaps

/// `count` evenly spaced values from `start` to `stop`, both included.
///
/// `count == 1` yields only `start`; `count == 0` yields nothing. The last
/// value is exactly `stop`.
pub(crate) fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
            values[count - 1] = stop;
            values
        }
    }
}
