use std::fs;
use std::path::PathBuf;

use moodchart_rs::api::{Dashboard, DashboardConfig};
use moodchart_rs::core::Viewport;
use moodchart_rs::io::CsvRecordSource;
use moodchart_rs::render::{NullRenderer, SvgRenderer};

const DEFAULT_WIDTH: u32 = 1280;
const DEFAULT_HEIGHT: u32 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Svg,
}

#[derive(Debug)]
struct CliArgs {
    input_path: PathBuf,
    viewport: Viewport,
    format: OutputFormat,
    output_path: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = moodchart_rs::telemetry::init_default_tracing();
    let args = parse_args()?;
    let config = DashboardConfig::new(args.viewport);
    let mut source = CsvRecordSource::from_path(&args.input_path);

    let output = match args.format {
        OutputFormat::Json => {
            let dashboard = Dashboard::load(&mut source, NullRenderer::default(), config, 0.0)
                .map_err(|err| err.to_string())?;
            dashboard
                .frame_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?
        }
        OutputFormat::Svg => {
            let dashboard = Dashboard::load(&mut source, SvgRenderer::default(), config, 0.0)
                .map_err(|err| err.to_string())?;
            dashboard.into_renderer().document().to_owned()
        }
    };
    write_output(args.output_path.as_ref(), &output)
}

fn write_output(path: Option<&PathBuf>, output: &str) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, format!("{output}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

fn parse_dimension(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut format = OutputFormat::Json;
    let mut output_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input_path = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = parse_dimension("--width", &value)?;
            }
            "--height" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --height".to_owned())?;
                height = parse_dimension("--height", &value)?;
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --format".to_owned())?;
                format = match value.as_str() {
                    "json" => OutputFormat::Json,
                    "svg" => OutputFormat::Svg,
                    other => return Err(format!("unsupported format `{other}`")),
                };
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin dashboard_scene_dump -- --input <csv> [--width <px>] [--height <px>] [--format json|svg] [--output <path>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input_path: input_path.ok_or_else(|| "missing required --input <csv>".to_owned())?,
        viewport: Viewport::new(width, height),
        format,
        output_path,
    })
}
