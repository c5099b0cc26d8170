use crate::color::RgbColor;
use crate::table::PaletteEntry;

/// Step suffixes shared by both modes. Higher steps sit further from the
/// canvas background: light variants darken, dark variants brighten.
pub const STEPS: [u32; 6] = [0, 50, 100, 150, 200, 250];

const LIGHT_MULTIPLIERS: [f64; 6] = [1.0, 0.925, 0.90, 0.825, 0.75, 0.675];
const DARK_MULTIPLIERS: [f64; 6] = [1.0, 1.075, 1.10, 1.175, 1.25, 1.325];

const DARK_LUMINANCE_DAMPEN: f64 = 0.85;
const DARK_SATURATION_DAMPEN: f64 = 0.8;
const LIGHT_LUMINANCE_BOOST: f64 = 1.5;

/// Derives the six-step tint/shade ladder for one hue.
///
/// Each mode gets a single anchor (the dampened dark base, the brightened
/// light base), and every step rescales only the anchor's luminance, so all
/// six variants stay in the same hue/saturation family. The light anchor
/// keeps the base saturation; dampening it was tried and rejected.
pub fn chromatic_ladder(name: &str, base_light: RgbColor, base_dark: RgbColor) -> Vec<PaletteEntry> {
    let dark_anchor = base_dark
        .to_hsl()
        .scale_luminance(DARK_LUMINANCE_DAMPEN)
        .scale_saturation(DARK_SATURATION_DAMPEN);

    let light_anchor = base_light.to_hsl().scale_luminance(LIGHT_LUMINANCE_BOOST);

    STEPS
        .iter()
        .zip(LIGHT_MULTIPLIERS.iter().zip(DARK_MULTIPLIERS.iter()))
        .map(|(step, (light_multiplier, dark_multiplier))| {
            PaletteEntry::new(
                format!("{}-{:03}", name, step),
                light_anchor.scale_luminance(*light_multiplier).to_rgb(),
                dark_anchor.scale_luminance(*dark_multiplier).to_rgb(),
            )
        })
        .collect()
}
