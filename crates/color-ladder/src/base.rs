use once_cell::sync::Lazy;

use crate::color::RgbColor;
use crate::table::PaletteEntry;

/// Hand-picked colors that are not derived from any ladder. `step-base` is
/// the canvas color both grayscale ladders sit on.
static CURATED: Lazy<Vec<PaletteEntry>> = Lazy::new(|| {
    vec![PaletteEntry::new(
        "step-base",
        RgbColor::new(246, 246, 246),
        RgbColor::new(15, 15, 15),
    )]
});

pub fn curated_base_colors() -> &'static [PaletteEntry] {
    &CURATED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_base_is_curated() {
        let curated = curated_base_colors();

        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].name, "step-base");
        assert_eq!(curated[0].light, RgbColor::new(246, 246, 246));
        assert_eq!(curated[0].dark, RgbColor::new(15, 15, 15));
    }
}
