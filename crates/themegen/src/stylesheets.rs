use color_ladder::PaletteEntry;

/// Renders the layered CSS custom properties.
///
/// Seven blocks: raw RGB channels per mode, per-mode color aliases, the
/// mode-selected `-rgb` indirection (with an `html.dark` override), and the
/// final consumer-facing variable. Keeping the channels in their own layer
/// lets consumers apply their own alpha via `rgb(var(--name-rgb), 0.5)`.
pub fn render_css(entries: &[PaletteEntry]) -> String {
    let blocks = [
        block("html", entries, |e| {
            format!(
                "--{}-rgb-light: {}, {}, {};",
                e.name, e.light.r, e.light.g, e.light.b
            )
        }),
        block("html", entries, |e| {
            format!(
                "--{}-rgb-dark: {}, {}, {};",
                e.name, e.dark.r, e.dark.g, e.dark.b
            )
        }),
        block("html", entries, |e| {
            format!("--{0}-light: rgb(var(--{0}-rgb-light));", e.name)
        }),
        block("html", entries, |e| {
            format!("--{0}-dark: rgb(var(--{0}-rgb-dark));", e.name)
        }),
        block("html", entries, |e| {
            format!("--{0}-rgb: var(--{0}-rgb-light);", e.name)
        }),
        block("html.dark", entries, |e| {
            format!("--{0}-rgb: var(--{0}-rgb-dark);", e.name)
        }),
        block("html", entries, |e| {
            format!("--{0}: rgb(var(--{0}-rgb));", e.name)
        }),
    ];

    blocks.join("\n")
}

fn block(selector: &str, entries: &[PaletteEntry], line: impl Fn(&PaletteEntry) -> String) -> String {
    let mut css = String::new();

    css.push_str(selector);
    css.push_str(" {\n");

    for entry in entries {
        css.push_str("  ");
        css.push_str(&line(entry));
        css.push('\n');
    }

    css.push_str("}\n");
    css
}

/// Renders the Tailwind color config fragment. The `<alpha-value>`
/// placeholder is filled in by Tailwind itself.
pub fn render_tailwind(entries: &[PaletteEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!(
            "\"{0}-light\": \"rgb(var(--{0}-rgb-light), <alpha-value>)\",\n",
            entry.name
        ));
    }
    for entry in entries {
        out.push_str(&format!(
            "\"{0}-dark\": \"rgb(var(--{0}-rgb-dark), <alpha-value>)\",\n",
            entry.name
        ));
    }
    for entry in entries {
        out.push_str(&format!(
            "\"{0}\": \"rgb(var(--{0}-rgb), <alpha-value>)\",\n",
            entry.name
        ));
    }

    out
}
