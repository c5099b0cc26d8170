use palette::{FromColor, Hsl, RgbHue, Srgb};

type Hsl64 = Hsl<palette::encoding::Srgb, f64>;
type Srgb64 = Srgb<f64>;

/// An 8-bit sRGB triple. The unit every generator consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        RgbColor { r, g, b }
    }

    pub fn to_hsl(self) -> HslColor {
        let hsl = Hsl64::from_color(Srgb64::new(
            self.r as f64 / 255.,
            self.g as f64 / 255.,
            self.b as f64 / 255.,
        ));

        HslColor {
            hue: hsl.hue,
            saturation: hsl.saturation,
            luminance: hsl.lightness,
        }
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSL triple with hue in degrees and saturation/luminance in [0, 1].
///
/// Ladder generation happens in this representation: anchors are dampened or
/// brightened here, and every step is a luminance rescale of its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    pub hue: RgbHue<f64>,
    pub saturation: f64,
    pub luminance: f64,
}

impl HslColor {
    pub fn to_rgb(self) -> RgbColor {
        let srgb = Srgb64::from_color(Hsl64::new(self.hue, self.saturation, self.luminance));

        // Multiplicative scaling can overshoot a channel. Clamp, never wrap.
        RgbColor {
            r: (srgb.red * 255.).round().clamp(0., 255.) as u8,
            g: (srgb.green * 255.).round().clamp(0., 255.) as u8,
            b: (srgb.blue * 255.).round().clamp(0., 255.) as u8,
        }
    }

    /// Multiplies luminance by `factor`, clamped to [0, 1]. Factors above 1
    /// brighten.
    pub fn scale_luminance(self, factor: f64) -> Self {
        HslColor {
            luminance: (self.luminance * factor).clamp(0., 1.),
            ..self
        }
    }

    /// Multiplies saturation by `factor`, clamped to [0, 1].
    pub fn scale_saturation(self, factor: f64) -> Self {
        HslColor {
            saturation: (self.saturation * factor).clamp(0., 1.),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: RgbColor, b: RgbColor) {
        let close = a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1;
        assert!(close, "{} and {} differ by more than 1 per channel", a, b);
    }

    #[test]
    fn round_trips_within_one_per_channel() {
        let samples = [
            RgbColor::new(0, 0, 0),
            RgbColor::new(255, 255, 255),
            RgbColor::new(255, 0, 0),
            RgbColor::new(255, 59, 48),
            RgbColor::new(12, 200, 101),
            RgbColor::new(142, 142, 147),
            RgbColor::new(1, 254, 128),
        ];

        for color in samples {
            assert_close(color.to_hsl().to_rgb(), color);
        }
    }

    #[test]
    fn scale_luminance_leaves_hue_and_saturation_alone() {
        let hsl = RgbColor::new(200, 60, 30).to_hsl();
        let scaled = hsl.scale_luminance(1.2);

        assert_eq!(scaled.hue, hsl.hue);
        assert_eq!(scaled.saturation, hsl.saturation);
        assert!((scaled.luminance - hsl.luminance * 1.2).abs() < 1e-12);
    }

    #[test]
    fn scaling_clamps_to_unit_range() {
        let hsl = RgbColor::new(230, 230, 230).to_hsl();

        assert_eq!(hsl.scale_luminance(5.0).luminance, 1.0);
        assert_eq!(hsl.scale_saturation(100.0).saturation, 1.0);
    }

    #[test]
    fn overshoot_converts_to_white_not_wrapped_channels() {
        let white = RgbColor::new(240, 10, 20).to_hsl().scale_luminance(50.0).to_rgb();

        assert_eq!(white, RgbColor::new(255, 255, 255));
    }
}
