use barchart_rs::api::ChartDocument;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = barchart_rs::telemetry::init_default_tracing();
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let document = ChartDocument::from_json_compat_str(&raw).map_err(|err| err.to_string())?;
    let svg = document
        .render_svg()
        .map_err(|err| format!("failed to render {:?} chart: {err}", document.kind()))?;
    fs::write(&args.output, svg)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    println!(
        "rendered {:?} chart to {}",
        document.kind(),
        args.output.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_chart_svg -- --input <document.json> --output <chart.svg>"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| "missing required --input".to_owned())?,
        output: output.ok_or_else(|| "missing required --output".to_owned())?,
    })
}
