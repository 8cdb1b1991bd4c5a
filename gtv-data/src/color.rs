//! Diverging red-yellow-blue color scale.

use crate::range::TemperatureRange;
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// The 11-class RdYlBu scheme, deep red first.
pub const RD_YL_BU: [Rgb; 11] = [
    Rgb::from_hex(0xa50026),
    Rgb::from_hex(0xd73027),
    Rgb::from_hex(0xf46d43),
    Rgb::from_hex(0xfdae61),
    Rgb::from_hex(0xfee090),
    Rgb::from_hex(0xffffbf),
    Rgb::from_hex(0xe0f3f8),
    Rgb::from_hex(0xabd9e9),
    Rgb::from_hex(0x74add1),
    Rgb::from_hex(0x4575b4),
    Rgb::from_hex(0x313695),
];

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Uniform cubic B-spline through one channel of `palette`, evaluated at `t`
/// in [0, 1].
fn basis_spline(palette: &[Rgb], pick: fn(&Rgb) -> u8, t: f64) -> f64 {
    let value = |i: usize| f64::from(pick(&palette[i]));
    let n = palette.len() - 1;
    let (i, t) = if t <= 0.0 {
        (0, 0.0)
    } else if t >= 1.0 {
        (n - 1, 1.0)
    } else {
        ((t * n as f64).floor() as usize, t)
    };
    let v1 = value(i);
    let v2 = value(i + 1);
    let v0 = if i > 0 { value(i - 1) } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { value(i + 2) } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Palette color at position `t`: 0 is deep red, 1 is deep blue.
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.5 } else { t };
    Rgb {
        r: channel(basis_spline(&RD_YL_BU, |c| c.r, t)),
        g: channel(basis_spline(&RD_YL_BU, |c| c.g, t)),
        b: channel(basis_spline(&RD_YL_BU, |c| c.b, t)),
    }
}

/// Sequential scale from temperature to color with a reversed domain.
///
/// `range.max` lands on the red end of the palette and `range.min` on the
/// blue end. A zero-width range maps everything to the palette midpoint.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ColorScale {
    range: TemperatureRange,
}

impl ColorScale {
    pub fn new(range: TemperatureRange) -> Self {
        Self { range }
    }

    pub fn domain(&self) -> TemperatureRange {
        self.range
    }

    /// Position along the palette in [0, 1]; decreases as temperature rises.
    pub fn palette_position(&self, temperature: f64) -> f64 {
        let span = self.range.max - self.range.min;
        if span == 0.0 {
            return 0.5;
        }
        ((self.range.max - temperature) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, temperature: f64) -> Rgb {
        interpolate_rd_yl_bu(self.palette_position(temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_endpoints() {
        assert_eq!(interpolate_rd_yl_bu(0.0), Rgb::from_hex(0xa50026));
        assert_eq!(interpolate_rd_yl_bu(1.0), Rgb::from_hex(0x313695));
        // clamped outside [0, 1]
        assert_eq!(interpolate_rd_yl_bu(-3.0), interpolate_rd_yl_bu(0.0));
        assert_eq!(interpolate_rd_yl_bu(7.0), interpolate_rd_yl_bu(1.0));
    }

    #[test]
    fn test_spline_reads_each_channel_from_the_palette() {
        let ramp = [Rgb::from_hex(0x000000), Rgb::from_hex(0x80ff00), Rgb::from_hex(0xff00ff)];
        assert_eq!(basis_spline(&ramp, |c| c.r, 0.0), 0.0);
        assert_eq!(basis_spline(&ramp, |c| c.r, 1.0), 255.0);
        assert_eq!(basis_spline(&ramp, |c| c.b, 1.0), 255.0);
        // at a knot the spline is (v0 + 4 v1 + v2) / 6
        assert!((basis_spline(&ramp, |c| c.r, 0.5) - 767.0 / 6.0).abs() < 1e-9);
        assert!(basis_spline(&ramp, |c| c.g, 0.5) > basis_spline(&ramp, |c| c.g, 0.0));
    }

    #[test]
    fn test_midpoint_is_pale_yellow() {
        let mid = interpolate_rd_yl_bu(0.5);
        assert!(mid.r > 240 && mid.g > 240 && mid.b > 170);
    }

    #[test]
    fn test_display_matches_css_rgb() {
        assert_eq!(Rgb::from_hex(0xa50026).to_string(), "rgb(165, 0, 38)");
    }

    #[test]
    fn test_reversed_domain() {
        let scale = ColorScale::new(TemperatureRange { min: 1.7, max: 13.9 });
        assert_eq!(scale.palette_position(13.9), 0.0);
        assert_eq!(scale.palette_position(1.7), 1.0);
        assert_eq!(scale.color(13.9), Rgb::from_hex(0xa50026));
        assert_eq!(scale.color(1.7), Rgb::from_hex(0x313695));
    }

    #[test]
    fn test_warmer_is_further_toward_red() {
        let scale = ColorScale::new(TemperatureRange { min: -2.0, max: 14.0 });
        let temps: Vec<f64> = (0..=32).map(|i| -2.0 + i as f64 * 0.5).collect();
        for pair in temps.windows(2) {
            assert!(scale.palette_position(pair[0]) > scale.palette_position(pair[1]));
        }
        let coldest = scale.color(-2.0);
        let hottest = scale.color(14.0);
        assert!(coldest.b > coldest.r);
        assert!(hottest.r > hottest.b);
    }

    #[test]
    fn test_degenerate_range_uses_midpoint() {
        let scale = ColorScale::new(TemperatureRange { min: 4.41, max: 4.41 });
        assert_eq!(scale.palette_position(4.41), 0.5);
        assert_eq!(scale.color(4.41), interpolate_rd_yl_bu(0.5));
    }
}
