use std::fs;
use std::path::Path;

use owo_colors::{OwoColorize as _, Stream};

use crate::Result;

pub struct PreviewArgs<'a, W: std::io::Write> {
    pub source: &'a Path,
    pub stdout: &'a mut W,
}

/// Prints every palette entry with a truecolor swatch per mode.
pub fn run<W: std::io::Write>(args: PreviewArgs<W>) -> Result<()> {
    let raw = fs::read_to_string(args.source)?;
    let bases = color_ladder::source::parse_source(&raw)?;
    let table = color_ladder::build_palette(&bases)?;

    writeln!(args.stdout, "{:<12} {:<24} {}", "", "light", "dark")?;

    for entry in table.entries() {
        let light = entry.light;
        let dark = entry.dark;

        writeln!(
            args.stdout,
            "{:<12} {} {:<20} {} {}",
            entry.name,
            "██".if_supports_color(Stream::Stdout, |s| s.truecolor(light.r, light.g, light.b)),
            light.to_string(),
            "██".if_supports_color(Stream::Stdout, |s| s.truecolor(dark.r, dark.g, dark.b)),
            dark
        )?;
    }

    Ok(())
}
