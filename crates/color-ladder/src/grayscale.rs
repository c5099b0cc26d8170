use crate::color::RgbColor;
use crate::table::PaletteEntry;

const SEGMENT_A_LEN: usize = 10; // steps 000-450
const SEGMENT_B_LEN: usize = 9; // steps 500-900

pub const STEP_COUNT: usize = SEGMENT_A_LEN + SEGMENT_B_LEN;

const SEGMENT_A_RANGE: (f64, f64) = (23., 105.);
const SEGMENT_B_RANGE: (f64, f64) = (155., 255.);

fn linspace(start: f64, stop: f64, len: usize) -> impl Iterator<Item = f64> {
    let step = (stop - start) / (len - 1) as f64;
    (0..len).map(move |i| start + step * i as f64)
}

/// The 19 step suffixes: 000, 050, ... 900.
pub fn step_indices() -> [u32; STEP_COUNT] {
    let mut indices = [0u32; STEP_COUNT];
    for (slot, value) in indices.iter_mut().zip(linspace(0., 900., STEP_COUNT)) {
        *slot = value.round_ties_even() as u32;
    }
    indices
}

/// Dark-mode intensities, monotonically increasing. Two linear segments with
/// a deliberate 105 -> 155 jump between them; a single ramp leaves the
/// midtones visually flat. Light-mode intensities are this array reversed.
///
/// Ties round to even so the published palette reproduces exactly.
pub fn intensity_curve() -> [u8; STEP_COUNT] {
    let mut values = [0u8; STEP_COUNT];

    let curve = linspace(SEGMENT_A_RANGE.0, SEGMENT_A_RANGE.1, SEGMENT_A_LEN)
        .chain(linspace(SEGMENT_B_RANGE.0, SEGMENT_B_RANGE.1, SEGMENT_B_LEN));

    for (slot, value) in values.iter_mut().zip(curve) {
        *slot = value.round_ties_even() as u8;
    }

    values
}

/// Derives the 19-step neutral ladder. Light and dark intensities mirror
/// each other, so `step-000` is near-white in light mode and near-black in
/// dark mode.
pub fn grayscale_ladder() -> Vec<PaletteEntry> {
    let dark_values = intensity_curve();

    step_indices()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let light = dark_values[STEP_COUNT - 1 - i];
            let dark = dark_values[i];

            PaletteEntry::new(
                format!("step-{:03}", step),
                RgbColor::new(light, light, light),
                RgbColor::new(dark, dark, dark),
            )
        })
        .collect()
}
