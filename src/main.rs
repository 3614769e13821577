use bitsqueeze::*;
use clap::{App, Arg};
use colored::*;
use std::error::Error as _;
use std::path::Path;
use std::process;

fn jobs_checker(input: &str) -> std::result::Result<(), String> {
    match usize::from_str_radix(input, 10) {
        Ok(0) => Err(String::from("at least one job is needed")),
        Ok(_) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn new_app() -> App<'static> {
    App::new("bitsqueeze")
        .about("Folds files into the popcount fixed point of their bytes")
        .arg(
            Arg::new("FILES")
                .required(true)
                .multiple_values(true)
                .allow_invalid_utf8(true)
                .help(
                    "Files to compress.\n\
                    Each result is written as hex next to its file with a '.zr' suffix",
                ),
        )
        .arg(
            Arg::new("jobs")
                .long("jobs")
                .short('j')
                .takes_value(true)
                .require_equals(true)
                .value_name("NB")
                .validator(jobs_checker)
                .help("<NB> of threads for the first pass over each file"),
        )
        .arg(
            Arg::new("dry")
                .long("dry")
                .short('d')
                .help("Print results without writing sidecar files"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .short('t')
                .help("Print every fold pass"),
        )
}

fn trace_file(writer: &Writer, path: &Path) -> Result<u64> {
    let data = writer.read(path)?;
    let mut passes = writer.compressor().passes(&data);
    let mut result = 0;

    println!("  seed 0 [{}]", passes.stage());
    for pass in &mut passes {
        println!("  {}", pass);
        result = pass.value;
    }
    Ok(result)
}

fn run(writer: &Writer, path: &Path, dry: bool, trace: bool) -> Result<()> {
    let target = if dry { None } else { Some(sidecar_path(path)?) };
    let result = if trace {
        trace_file(writer, path)?
    } else {
        writer.reduce_file(path)?
    };
    let hex = format!("{:x}", result);

    if let Some(target) = target {
        writer.write_to(path, &target, result)?;
        println!(
            "{} -> {} ({})",
            path.display().to_string().bright_yellow(),
            target.display().to_string().bright_yellow(),
            hex.bright_green()
        );
    } else {
        println!(
            "{} ({})",
            path.display().to_string().bright_yellow(),
            hex.bright_green()
        );
    }
    Ok(())
}

/// Runs every file, reporting failures on stderr. Returns true if any failed.
fn run_all<'a, I>(writer: &Writer, files: I, dry: bool, trace: bool) -> bool
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut failed = false;

    for path in files {
        if let Err(e) = run(writer, path, dry, trace) {
            match e.source() {
                Some(cause) => eprintln!("{}: {}", e.to_string().red(), cause),
                None => eprintln!("{}", e.to_string().red()),
            }
            failed = true;
        }
    }
    failed
}

fn main() {
    let cmd = new_app().get_matches();
    let jobs = cmd
        .value_of("jobs")
        .and_then(|v| usize::from_str_radix(v, 10).ok())
        .unwrap_or(1);
    let writer = Writer::with_compressor(Compressor::with_workers(jobs));
    let dry = cmd.is_present("dry");
    let trace = cmd.is_present("trace");
    let files = cmd.values_of_os("FILES").into_iter().flatten().map(Path::new);

    if run_all(&writer, files, dry, trace) {
        process::exit(1);
    }
}
