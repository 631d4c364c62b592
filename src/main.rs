use clap::Parser;
use optisim::{
    console::{Args, PartialArgs},
    error::{OptiResult, OptiSimError},
    reporter::SystemReport,
    OpticalSystem, SystemDocument,
};
use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

fn read_system(args: &Args) -> OptiResult<OpticalSystem> {
    print!("\nReading system...");
    let _ = io::stdout().flush();
    let system = SystemDocument::from_file(&args.input)?.build_system(args.settings)?;
    println!("Success");
    Ok(system)
}

fn create_file(path: &Path, what: &str) -> OptiResult<File> {
    print!("Write {what} to {}...", path.display());
    let _ = io::stdout().flush();
    File::create(path)
        .map_err(|e| OptiSimError::Io(format!("{what} file creation failed: {e}")))
}

fn write_report(report: &SystemReport, args: &Args, writer: &mut impl Write) -> OptiResult<()> {
    report.write_text(writer)?;
    if args.image_list {
        report.write_image_list(writer)?;
    }
    if args.rays {
        report.write_ray_table(writer)?;
    }
    Ok(())
}

fn run(args: &Args) -> OptiResult<()> {
    let mut system = read_system(args)?;
    system.calculate()?;
    let report = SystemReport::new(&system);
    let mut output = create_file(&args.output, "report")?;
    write_report(&report, args, &mut output)?;
    println!("Success");
    if let Some(json_path) = &args.json {
        let mut output = create_file(json_path, "JSON report")?;
        write!(output, "{}", report.to_json_string()?)
            .map_err(|e| OptiSimError::Io(format!("writing JSON report failed: {e}")))?;
        println!("Success");
    }
    if args.print {
        println!();
        write_report(&report, args, &mut io::stdout().lock())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match Args::try_from(PartialArgs::parse()).and_then(|args| run(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{e}");
            ExitCode::FAILURE
        }
    }
}
