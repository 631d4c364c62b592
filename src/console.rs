//! Handling the optisim CLI
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use crate::{
    error::{OptiResult, OptiSimError},
    get_version,
    system_settings::SystemSettings,
};
use clap::{builder::Str, Parser};
use std::path::{Path, PathBuf};

/// Command line arguments for the optisim application.
#[derive(Debug)]
pub struct Args {
    /// file path of the optical system, which should be read in
    pub input: PathBuf,
    /// file path of the text report
    pub output: PathBuf,
    /// print the report to stdout as well
    pub print: bool,
    /// append the list of intermediate images to the report
    pub image_list: bool,
    /// append the table of ray points to the report
    pub rays: bool,
    /// file path of an additional JSON report
    pub json: Option<PathBuf>,
    /// settings of the optical system
    pub settings: SystemSettings,
}

#[derive(Parser, Debug)]
#[command(author, version = Str::from(&get_version()), about, long_about = None)]
pub struct PartialArgs {
    /// file path of the optical system (JSON) to read in
    #[arg(short, long, default_value = "input.json")]
    input: String,

    /// file path of the text report
    #[arg(short, long, default_value = "output.txt")]
    output: String,

    /// print the report to stdout
    #[arg(short, long)]
    print: bool,

    /// append the list of intermediate images to the report
    #[arg(short = 'l', long = "imagelist")]
    image_list: bool,

    /// append the table of ray points to the report
    #[arg(short, long)]
    rays: bool,

    /// export the report as JSON to the given file
    #[arg(short, long)]
    json: Option<String>,

    /// minimum distance between elements on the optical axis
    #[arg(long)]
    min_separation: Option<f64>,
}

/// Checks if the passed file path points to an existing `.json` file.
fn file_path_is_valid(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == "json")
}

/// Checks if the file at the passed path could be created (i.e. its directory exists).
fn output_path_is_valid(path: &Path) -> bool {
    if path.as_os_str().is_empty() || path.is_dir() {
        return false;
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

fn eval_output_path(path: &str, what: &str) -> OptiResult<PathBuf> {
    let path = PathBuf::from(path);
    if output_path_is_valid(&path) {
        Ok(path)
    } else {
        Err(OptiSimError::Console(format!(
            "cannot create {what} file {}",
            path.display()
        )))
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = OptiSimError;

    fn try_from(part_args: PartialArgs) -> OptiResult<Self> {
        let input = PathBuf::from(&part_args.input);
        if !file_path_is_valid(&input) {
            return Err(OptiSimError::Console(format!(
                "input file {} is not an existing .json file",
                input.display()
            )));
        }
        let output = eval_output_path(&part_args.output, "report")?;
        let json = part_args
            .json
            .as_deref()
            .map(|path| eval_output_path(path, "JSON report"))
            .transpose()?;
        let settings = part_args
            .min_separation
            .map_or_else(
                || Ok(SystemSettings::default()),
                SystemSettings::new,
            )
            .map_err(|e| OptiSimError::Console(format!("invalid --min-separation: {e}")))?;
        Ok(Self {
            input,
            output,
            print: part_args.print,
            image_list: part_args.image_list,
            rays: part_args.rays,
            json,
            settings,
        })
    }
}
