use barcode_svg::barcode::SymbologyKind;
use barcode_svg::helper::{print_barcode, save_png};
use barcode_svg::layout::Layout;
use barcode_svg::request::{
    parse_display_value, EncodingRequest, DEFAULT_BAR_WIDTH, DEFAULT_FORMAT, DEFAULT_HEIGHT,
};
use clap::Parser;
use flexi_logger::Logger;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "barcode-svg")]
#[command(about = "Render a value as a Code 128 or Code 39 barcode in SVG", long_about = None)]
struct Cli {
    /// The barcode data
    value: String,

    /// CODE128, CODE39 or EAN13; anything else renders as CODE128
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    format: String,

    /// Width of bars
    #[arg(short, long, default_value_t = DEFAULT_BAR_WIDTH)]
    width: u32,

    /// Height of the bars
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Show the value below the bars; only "false" hides it
    #[arg(long, default_value = "true")]
    display_value: String,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also export the bars as a PNG image
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Print a preview of the bars to the console
    #[arg(long)]
    preview: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.log_to_stderr().start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to initialize logger: {}", err);
            None
        }
    };

    if run(&cli, &mut io::stdout().lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Writes the SVG response (the barcode or the error document) to `--output` or
/// `out`, then runs the preview and PNG export. Returns `true` when everything,
/// including the barcode itself, succeeded.
fn run(cli: &Cli, out: &mut impl Write) -> bool {
    let request = EncodingRequest {
        value: cli.value.clone(),
        format: cli.format.clone(),
        bar_width: cli.width,
        height: cli.height,
        display_value: parse_display_value(&cli.display_value),
    };

    let response = request.generate();
    let written = match &cli.output {
        Some(path) => fs::write(path, &response.document),
        None => out
            .write_all(response.document.as_bytes())
            .and_then(|_| out.flush()),
    };
    if let Err(err) = written {
        log::error!("Failed to write SVG: {}", err);
        return false;
    }

    let extras = export_extras(cli, &request);
    if let Err(err) = &extras {
        log::error!("{}", err);
    }
    response.is_success() && extras.is_ok()
}

fn export_extras(cli: &Cli, request: &EncodingRequest) -> Result<(), Box<dyn Error>> {
    if !cli.preview && cli.png.is_none() {
        return Ok(());
    }
    let pattern = SymbologyKind::from_name(&request.format).encode(&request.value);
    if cli.preview {
        print_barcode(&pattern);
    }
    if let Some(png) = &cli.png {
        let layout = Layout::compute(
            &pattern,
            request.bar_width,
            request.height,
            request.display_value,
        )?;
        let directory = png
            .parent()
            .and_then(Path::to_str)
            .filter(|dir| !dir.is_empty())
            .unwrap_or(".");
        let filename = png.file_stem().and_then(|stem| stem.to_str());
        let path = save_png(&pattern, &layout, Some(directory), filename)?;
        log::info!("Wrote {}", path);
    }
    Ok(())
}
