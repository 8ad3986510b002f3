use clap::Parser;
use flatschema::report::{write_report, WriterSink};
use flatschema::source::import_file;
use flatschema::Hierarchy;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print the database/table/column hierarchy of a semicolon-delimited schema listing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listing to import, one `kind;name;schema;parent_name;parent_type;data_type;is_nullable` record per line
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Import and link without printing the report
    #[arg(long)]
    no_print: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let loaded = match run(&args, io::stdout().lock()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to write report: {}", e);
            process::exit(1);
        }
    };

    // A listing that could not be loaded ends the run without the pause.
    if loaded && args.pause {
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

/// Import the listing and write its report to `-o` or to `stdout`.
///
/// Returns `Ok(false)` when the listing could not be loaded; nothing is
/// written in that case.
fn run<W: Write>(args: &Args, stdout: W) -> io::Result<bool> {
    let hierarchy = match import_file(&args.input) {
        Ok(h) => h,
        Err(e) => {
            tracing::warn!("{}", e);
            return Ok(false);
        }
    };

    if args.no_print {
        return Ok(true);
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            emit(&hierarchy, BufWriter::new(file))?;
        }
        None => emit(&hierarchy, stdout)?,
    }

    Ok(true)
}

fn emit<W: Write>(hierarchy: &Hierarchy, writer: W) -> io::Result<()> {
    let mut sink = WriterSink::new(writer);
    let lines = write_report(hierarchy, &mut sink)?;
    sink.into_inner().flush()?;
    tracing::debug!(lines, "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const LISTING: &str = "DATABASE;DB1;;;;;\nTABLE;T1;dbo;DB1;DATABASE;;\n";
    const REPORT: &str = "Database 'DB1' (1 tables):\n\tTable 'dbo.T1' (0 columns)\n";

    fn listing() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(LISTING.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("flatschema").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_prints_report() {
        let file = listing();
        let mut out = Vec::new();
        let loaded = run(&args(&[file.path().to_str().unwrap()]), &mut out).unwrap();
        assert!(loaded);
        assert_eq!(String::from_utf8(out).unwrap(), REPORT);
    }

    #[test]
    fn test_run_no_print() {
        let file = listing();
        let mut out = Vec::new();
        let loaded = run(&args(&[file.path().to_str().unwrap(), "--no-print"]), &mut out).unwrap();
        assert!(loaded);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_missing_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let mut out = Vec::new();
        let loaded = run(&args(&[missing.to_str().unwrap(), "--pause"]), &mut out).unwrap();
        assert!(!loaded);
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_output_file() {
        let file = listing();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.txt");
        let mut out = Vec::new();
        let loaded = run(
            &args(&[file.path().to_str().unwrap(), "-o", target.to_str().unwrap()]),
            &mut out,
        )
        .unwrap();
        assert!(loaded);
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), REPORT);
    }

    #[test]
    fn test_run_unwritable_output() {
        let file = listing();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no-such-dir").join("report.txt");
        let mut out = Vec::new();
        let result = run(
            &args(&[file.path().to_str().unwrap(), "-o", target.to_str().unwrap()]),
            &mut out,
        );
        assert!(result.is_err());
    }
}
