use clap::Parser;
use daylio2pixels::application::convert;
use daylio2pixels::cli::Cli;
use daylio2pixels::error::PixelsError;
use daylio2pixels::logging;

fn main() {
    let cli = Cli::parse();
    logging::init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PixelsError> {
    let report = convert(cli.year, &cli.input, &cli.output)?;
    tracing::info!(
        year = report.year,
        written = report.written,
        output = %cli.output.display(),
        "conversion finished"
    );
    Ok(())
}
