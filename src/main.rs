//! draftex - Draft.js ContentState to HTML converter

use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use draftex::export_html;

#[derive(Parser)]
#[command(name = "draftex")]
#[command(version, about = "Draft.js ContentState to HTML converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    draftex content.json              Print HTML to stdout
    draftex content.json -o out.html  Write HTML to a file
    cat content.json | draftex -      Read the document from stdin")]
struct Cli {
    /// Raw ContentState JSON file ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        buf
    } else {
        fs::read_to_string(&cli.input).map_err(|e| e.to_string())?
    };

    let html = export_html(&json).map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => fs::write(path, html).map_err(|e| e.to_string())?,
        None => println!("{html}"),
    }
    Ok(())
}
