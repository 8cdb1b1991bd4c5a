//! Band and linear scales used to position cells, axes and the legend.

/// Maps an ordered set of discrete values onto equal-width bands.
///
/// Inner and outer padding are both `padding` (a fraction of the step), and
/// the bands are centered in the extent:
///
/// - `step = extent / (n + padding)`
/// - `bandwidth = step * (1 - padding)`
/// - band `i` starts at `step * padding + i * step`
#[derive(Debug, PartialEq, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    extent: f64,
    padding: f64,
}

impl<T: Ord + Copy> BandScale<T> {
    /// Build a scale over the distinct values, sorted ascending.
    pub fn new(values: impl IntoIterator<Item = T>, extent: f64, padding: f64) -> Self {
        let mut domain: Vec<T> = values.into_iter().collect();
        domain.sort();
        domain.dedup();
        Self {
            domain,
            extent,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    /// Distance between the starts of two adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        self.extent / (n + self.padding).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start offset of the band for `value`, or `None` outside the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        let index = self.domain.binary_search(&value).ok()?;
        Some(self.position_at(index))
    }

    /// Start offset of the `index`th band.
    pub fn position_at(&self, index: usize) -> f64 {
        let step = self.step();
        step * self.padding + step * index as f64
    }

    /// Center of the band for `value`, used for tick placement.
    pub fn center(&self, value: T) -> Option<f64> {
        self.position(value).map(|start| start + self.bandwidth() / 2.0)
    }
}

/// Continuous linear mapping from a numeric domain to a pixel range.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        nice_ticks(lo, hi, count)
    }
}

/// Tick values at 1, 2 or 5 times a power of ten covering `[start, stop]`.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Negative powers divide by an integer increment to keep values exact.
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        tick_indices(i1, i2).map(|i| i / inc).collect()
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        tick_indices(i1, i2).map(|i| i * inc).collect()
    }
}

fn tick_indices(i1: f64, i2: f64) -> impl Iterator<Item = f64> {
    let first = i1 as i64;
    let last = i2 as i64;
    (first..=last).map(|i| i as f64)
}
