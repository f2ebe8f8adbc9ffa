//! Color helpers for load shading.

use std::fmt;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts normalized `[0, 1]` channels to 8-bit, rounding.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to8(r),
            g: to8(g),
            b: to8(b),
        }
    }

    /// `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG 2 relative luminance, assuming sRGB.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// HSV (hue in degrees, saturation and value in `[0, 1]`) to normalized RGB.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    if s == 0.0 {
        return (v, v, v);
    }
    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Maps a normalized load to background and foreground colors.
///
/// Hue is fixed; saturation rises and value falls as the load grows, so
/// light loads are pale and heavy loads are deep. The foreground is black
/// on backgrounds brighter than `contrast_threshold` and white otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPalette {
    /// Hue in degrees.
    pub hue: f64,
    /// Relative luminance above which dark text is used.
    pub contrast_threshold: f64,
}

impl Default for HeatPalette {
    fn default() -> Self {
        Self {
            hue: 0.0,
            contrast_threshold: 0.179,
        }
    }
}

const MIN_SATURATION: f64 = 0.1;
const MAX_SATURATION: f64 = 1.0;
const MAX_VALUE: f64 = 1.0;
const MIN_VALUE: f64 = 0.6;

impl HeatPalette {
    pub fn new(hue: f64, contrast_threshold: f64) -> Self {
        Self {
            hue,
            contrast_threshold,
        }
    }

    /// Background color for a load in `[0, 1]`.
    pub fn background(&self, load: f64) -> Rgb {
        let load = load.clamp(0.0, 1.0);
        let s = MIN_SATURATION + (MAX_SATURATION - MIN_SATURATION) * load;
        let v = MAX_VALUE - (MAX_VALUE - MIN_VALUE) * load;
        let (r, g, b) = hsv_to_rgb(self.hue, s, v);
        Rgb::from_unit(r, g, b)
    }

    /// Readable text color on `background`.
    pub fn foreground(&self, background: Rgb) -> Rgb {
        if background.relative_luminance() > self.contrast_threshold {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb((r, g, b): (f64, f64, f64)) -> Rgb {
        Rgb::from_unit(r, g, b)
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        // Pure green dominates perceived brightness.
        let green = Rgb::new(0, 255, 0).relative_luminance();
        assert!(green > Rgb::new(255, 0, 0).relative_luminance());
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(rgb(hsv_to_rgb(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(rgb(hsv_to_rgb(120.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(rgb(hsv_to_rgb(240.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(rgb(hsv_to_rgb(360.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(rgb(hsv_to_rgb(42.0, 0.0, 0.5)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_palette_gradient_darkens() {
        let p = HeatPalette::default();
        let light = p.background(0.05);
        let heavy = p.background(1.0);
        assert!(light.relative_luminance() > heavy.relative_luminance());
        assert_eq!(p.foreground(light), Rgb::BLACK);
        assert_eq!(p.foreground(heavy), Rgb::WHITE);
        // Full load at hue 0: saturation 1, value 0.6.
        assert_eq!(heavy, Rgb::new(153, 0, 0));
    }
}
