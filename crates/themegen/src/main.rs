use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use themegen::commands::generate::{run as generate, GenerateArgs};
use themegen::commands::preview::{run as preview, PreviewArgs};

#[derive(Parser, Debug, Clone)]
#[command(about = "Themegen, a light/dark theme palette generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Derive the palette and write the CSS and Tailwind theme layers
    Generate {
        /// The fixed-format source color list
        source: PathBuf,

        #[arg(long, default_value = "export")]
        out_dir: PathBuf,
    },
    /// Print the derived palette as terminal swatches
    Preview {
        /// The fixed-format source color list
        source: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let mut stdout = std::io::stdout();

    let result = match args.command {
        Some(Commands::Generate { source, out_dir }) => generate(GenerateArgs {
            source: &source,
            out_dir: &out_dir,
            stdout: &mut stdout,
        }),
        Some(Commands::Preview { source }) => preview(PreviewArgs {
            source: &source,
            stdout: &mut stdout,
        }),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("{:?}", e);
        std::process::exit(1);
    }
}
