use std::fs;
use std::path::Path;

use owo_colors::{OwoColorize as _, Stream};

use crate::stylesheets;
use crate::Result;

pub struct GenerateArgs<'a, W: std::io::Write> {
    pub source: &'a Path,
    pub out_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: GenerateArgs<W>) -> Result<()> {
    let raw = fs::read_to_string(args.source)?;
    let bases = color_ladder::source::parse_source(&raw)?;
    let table = color_ladder::build_palette(&bases)?;

    // Render everything before touching the output directory, so a bad
    // source never leaves a partial export behind.
    let css = stylesheets::render_css(table.entries());
    let tailwind = stylesheets::render_tailwind(table.entries());

    fs::create_dir_all(args.out_dir)?;
    fs::write(args.out_dir.join("colors.css"), css)?;
    fs::write(args.out_dir.join("tailwind-colors.txt"), tailwind)?;

    writeln!(
        args.stdout,
        "Exported {} colors from {} hues {}",
        table.len(),
        bases.len(),
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    Ok(())
}
