use std::collections::HashSet;

use crate::color::RgbColor;
use crate::source::BaseColorSpec;
use crate::{base, chromatic, grayscale, Error, Result};

/// A named light/dark pair, the unit of output for theme serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub name: String,
    pub light: RgbColor,
    pub dark: RgbColor,
}

impl PaletteEntry {
    pub fn new(name: impl Into<String>, light: RgbColor, dark: RgbColor) -> Self {
        PaletteEntry {
            name: name.into(),
            light,
            dark,
        }
    }
}

/// An insertion-ordered palette that rejects duplicate names.
///
/// The table is the serializer's whole contract, and a duplicate name would
/// silently overwrite a theme variable downstream.
#[derive(Debug, Default, Clone)]
pub struct PaletteTable {
    entries: Vec<PaletteEntry>,
    names: HashSet<String>,
}

impl PaletteTable {
    pub fn new() -> Self {
        PaletteTable::default()
    }

    pub fn push(&mut self, entry: PaletteEntry) -> Result<()> {
        if !self.names.insert(entry.name.clone()) {
            return Err(Error::DuplicateColorName(entry.name));
        }

        self.entries.push(entry);
        Ok(())
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = PaletteEntry>) -> Result<()> {
        for entry in entries {
            self.push(entry)?;
        }
        Ok(())
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the full palette: curated base colors, then the grayscale ladder,
/// then one chromatic ladder per source hue, in source order.
pub fn build_palette(bases: &[BaseColorSpec]) -> Result<PaletteTable> {
    let mut table = PaletteTable::new();

    table.extend(base::curated_base_colors().iter().cloned())?;
    table.extend(grayscale::grayscale_ladder())?;

    for spec in bases {
        table.extend(chromatic::chromatic_ladder(&spec.name, spec.light, spec.dark))?;
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_entry(name: &str) -> PaletteEntry {
        PaletteEntry::new(name, RgbColor::new(255, 255, 255), RgbColor::new(23, 23, 23))
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut table = PaletteTable::new();
        table.push(gray_entry("step-000")).unwrap();

        let err = table.push(gray_entry("step-000")).unwrap_err();

        assert_eq!(err, Error::DuplicateColorName("step-000".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn builds_in_curated_grayscale_chromatic_order() {
        let bases = vec![BaseColorSpec {
            name: "red".to_string(),
            light: RgbColor::new(255, 59, 48),
            dark: RgbColor::new(255, 69, 58),
        }];

        let table = build_palette(&bases).unwrap();
        let names: Vec<&str> = table.entries().iter().map(|e| e.name.as_str()).collect();

        // 1 curated + 19 grayscale + 6 chromatic
        assert_eq!(table.len(), 26);
        assert_eq!(names[0], "step-base");
        assert_eq!(names[1], "step-000");
        assert_eq!(names[19], "step-900");
        assert_eq!(names[20], "red-000");
        assert_eq!(names[25], "red-250");
    }

    #[test]
    fn duplicate_hue_in_source_is_fatal() {
        let red = BaseColorSpec {
            name: "red".to_string(),
            light: RgbColor::new(255, 59, 48),
            dark: RgbColor::new(255, 69, 58),
        };

        let err = build_palette(&[red.clone(), red]).unwrap_err();

        assert_eq!(err, Error::DuplicateColorName("red-000".to_string()));
    }

    #[test]
    fn two_runs_yield_identical_tables() {
        let bases = vec![
            BaseColorSpec {
                name: "teal".to_string(),
                light: RgbColor::new(48, 176, 199),
                dark: RgbColor::new(64, 200, 224),
            },
            BaseColorSpec {
                name: "brown".to_string(),
                light: RgbColor::new(162, 132, 94),
                dark: RgbColor::new(172, 142, 104),
            },
        ];

        let first = build_palette(&bases).unwrap();
        let second = build_palette(&bases).unwrap();

        assert_eq!(first.entries(), second.entries());
    }
}
