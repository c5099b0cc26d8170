use crate::color::RgbColor;
use crate::{Error, Result};

/// One hue from the fixed-format source list: a light-mode base and a
/// dark-mode base.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColorSpec {
    pub name: String,
    pub light: RgbColor,
    pub dark: RgbColor,
}

pub const LINES_PER_RECORD: usize = 7;

/// Parses the source color list.
///
/// Records are exactly 7 lines, positionally: light R, G, B, then dark
/// R, G, B, then a label line. Channel lines carry a two-character prefix
/// (channel letter plus separator) which is skipped, not interpreted:
///
/// ```text
/// R 255
/// G 59
/// B 48
/// R 255
/// G 69
/// B 58
/// Red	System Red
/// ```
///
/// The label is lowercased and truncated at the first tab.
pub fn parse_source(input: &str) -> Result<Vec<BaseColorSpec>> {
    let mut lines: Vec<(usize, &str)> = input
        .lines()
        .map(str::trim)
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect();

    while lines.last().is_some_and(|(_, line)| line.is_empty()) {
        lines.pop();
    }

    if lines.len() % LINES_PER_RECORD != 0 {
        return Err(Error::MalformedSourceRecord {
            line: lines.len(),
            reason: format!(
                "expected records of exactly {} lines, found {} lines",
                LINES_PER_RECORD,
                lines.len()
            ),
        });
    }

    let mut specs = Vec::with_capacity(lines.len() / LINES_PER_RECORD);

    for record in lines.chunks(LINES_PER_RECORD) {
        let mut channels = [0u8; 6];
        for (slot, &(line_no, line)) in channels.iter_mut().zip(record[..6].iter()) {
            *slot = parse_channel(line_no, line)?;
        }

        let (label_line, label) = record[6];
        let name = label
            .split('\t')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if name.is_empty() {
            return Err(Error::MalformedSourceRecord {
                line: label_line,
                reason: "record label is empty".to_string(),
            });
        }

        specs.push(BaseColorSpec {
            name,
            light: RgbColor::new(channels[0], channels[1], channels[2]),
            dark: RgbColor::new(channels[3], channels[4], channels[5]),
        });
    }

    Ok(specs)
}

fn parse_channel(line_no: usize, line: &str) -> Result<u8> {
    let digits = line.get(2..).filter(|rest| !rest.trim().is_empty()).ok_or_else(|| {
        Error::MalformedSourceRecord {
            line: line_no,
            reason: format!("channel line `{}` is too short", line),
        }
    })?;

    let value: i64 = digits.trim().parse().map_err(|_| Error::MalformedSourceRecord {
        line: line_no,
        reason: format!("`{}` is not a numeric channel value", digits.trim()),
    })?;

    if !(0..=255).contains(&value) {
        return Err(Error::OutOfRangeChannel { line: line_no, value });
    }

    Ok(value as u8)
}
