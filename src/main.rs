use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use oscillator_sim::plot::figures::{self, FigureFn, FIGURES};

// ---------------------------------------------------------------------------
// CLI: one argument naming the figure to render
// ---------------------------------------------------------------------------

const OUT_DIR: &str = "plots";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let name = args[0].as_str();
    let Some(figure) = figures::figure(name) else {
        eprintln!("error: unknown figure '{name}'");
        print_usage();
        return ExitCode::FAILURE;
    };

    match render(name, figure) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn render(name: &str, figure: FigureFn) -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new(OUT_DIR);
    fs::create_dir_all(out_dir)?;
    figure(out_dir)?;
    println!("Saved {name}.png to {OUT_DIR}/");
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: oscillator-sim <figure>");
    eprintln!();
    eprintln!("Figures:");
    for (key, _) in FIGURES {
        eprintln!("  {key}");
    }
}
