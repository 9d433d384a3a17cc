//! # Predim CLI
//!
//! Command-line front end for the predimensioning engine.
//!
//! ```text
//! predim --input project.json --pdf report.pdf
//! predim --example-input > project.json
//! predim                      # prompts for the main values
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress messages.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use predim_core::project::ProjectInputs;
use predim_core::{compute, CalcError, SeismicZone};
use predim_report::{render_pdf, render_text};

#[derive(Parser, Debug)]
#[command(name = "predim")]
#[command(about = "Structural predimensioning - beams, columns, seismic shear, stairs")]
#[command(version)]
struct Args {
    /// Project inputs as JSON (prompts interactively when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the report data as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the PDF report to this path
    #[arg(long, value_name = "FILE")]
    pdf: Option<PathBuf>,

    /// Print a sample input file and exit
    #[arg(long)]
    example_input: bool,
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_text(prompt: &str) -> String {
    prompt_line(&format!("{}: ", prompt)).unwrap_or_default()
}

/// Empty means no tributary width; anything else must parse as a number
fn parse_tributary_width(line: Option<&str>) -> Result<Option<f64>, String> {
    match line {
        None => Ok(None),
        Some(text) => text.parse::<f64>().map(Some).map_err(|_| text.to_string()),
    }
}

/// Ask until the width is blank or numeric
fn prompt_tributary_width() -> Option<f64> {
    loop {
        let line = prompt_line("Tributary width (m) [none]: ");
        match parse_tributary_width(line.as_deref()) {
            Ok(width) => return width,
            Err(text) => {
                log::warn!("unparsable tributary width {:?}", text);
                println!("  '{}' is not a number; enter a width in m or leave blank", text);
            }
        }
    }
}

/// Collect the main inputs from stdin, defaults for the rest
fn prompt_inputs() -> ProjectInputs {
    let defaults = ProjectInputs::default();
    let mut inputs = defaults.clone();

    println!("Project data (press Enter to accept the [default])");
    println!();
    inputs.info.name = prompt_text("Project name");
    inputs.info.location = prompt_text("Location");
    inputs.seismic_zone = prompt_line(&format!("Seismic zone Low/Moderate/High [{}]: ", defaults.seismic_zone))
        .and_then(|s| s.parse::<SeismicZone>().ok())
        .unwrap_or(defaults.seismic_zone);

    println!();
    println!("Loads and geometry");
    inputs.dead_load_kn_m2 = prompt_f64("Dead load (kN/m²)", defaults.dead_load_kn_m2);
    inputs.live_load_kn_m2 = prompt_f64("Live load (kN/m²)", defaults.live_load_kn_m2);
    inputs.floor_height_m = prompt_f64("Story height (m)", defaults.floor_height_m);
    inputs.floor_count = prompt_u32("Number of floors", defaults.floor_count);
    inputs.building_height_m = inputs.floor_height_m * f64::from(inputs.floor_count);
    inputs.beam_span_m = prompt_f64("Beam span (m)", defaults.beam_span_m);

    println!();
    println!("Column and seismic coefficients");
    inputs.column_axial_load_kn = prompt_f64("Column axial load Pu (kN)", defaults.column_axial_load_kn);
    inputs.concrete_fc_mpa = prompt_f64("Concrete f'c (MPa)", defaults.concrete_fc_mpa);
    inputs.tributary_width_m = prompt_tributary_width();
    inputs.seismic_coefficient = prompt_f64("Seismic coefficient Cs", defaults.seismic_coefficient);
    inputs.nonstructural.ap = prompt_f64("Element amplification ap", defaults.nonstructural.ap);
    inputs.nonstructural.sds = prompt_f64("Spectral acceleration Sds", defaults.nonstructural.sds);
    inputs.nonstructural.wp_kn = prompt_f64("Element weight Wp (kN)", defaults.nonstructural.wp_kn);
    println!();

    inputs
}

fn load_inputs(path: &PathBuf) -> Result<ProjectInputs> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let inputs = serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded inputs from {}", path.display());
    Ok(inputs)
}

fn report_invalid(error: &CalcError) {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn run(args: Args) -> Result<ExitCode> {
    if args.example_input {
        println!("{}", serde_json::to_string_pretty(&ProjectInputs::default())?);
        return Ok(ExitCode::SUCCESS);
    }

    let inputs = match &args.input {
        Some(path) => load_inputs(path)?,
        None => prompt_inputs(),
    };

    let report = match compute(&inputs) {
        Ok(report) => report,
        Err(error) => {
            log::warn!("rejected inputs: {}", error);
            report_invalid(&error);
            return Ok(ExitCode::FAILURE);
        }
    };
    log::info!(
        "computed report: {} floors, base shear {:.2} kN",
        report.project.floor_count,
        report.results.base_shear_kn()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    if let Some(path) = &args.pdf {
        let bytes = render_pdf(&report)?;
        fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote PDF report to {}", path.display());
        if !args.json {
            println!();
            println!("PDF report written to {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_tributary_width_selects_simple_formula() {
        assert_eq!(parse_tributary_width(None), Ok(None));
    }

    #[test]
    fn test_numeric_tributary_width() {
        assert_eq!(parse_tributary_width(Some("4.5")), Ok(Some(4.5)));
    }

    #[test]
    fn test_mistyped_tributary_width_is_rejected() {
        assert_eq!(parse_tributary_width(Some("4,5")), Err("4,5".to_string()));
        assert_eq!(parse_tributary_width(Some("four")), Err("four".to_string()));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["predim", "--input", "p.json", "--json", "--pdf", "out.pdf"]);
        assert_eq!(args.input, Some(PathBuf::from("p.json")));
        assert!(args.json);
        assert_eq!(args.pdf, Some(PathBuf::from("out.pdf")));
        assert!(!args.example_input);
    }
}
