use std::env;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::process::exit;

use diagnostics::Diagnostics;
use error::DriverError;
use error::DriverResult;
use mimalloc::MiMalloc;

mod diagnostics;
mod error;
mod scanner;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args = env::args().collect::<Vec<String>>();

    let result = match args.len() {
        1 => repl(),
        2 => run_file(Path::new(&args[1])),
        _ => Err(DriverError::Usage),
    };
    if let Err(err) = result {
        // Scan errors were already printed line by line.
        if !matches!(err, DriverError::Scan(_)) {
            eprintln!("{err}");
        }
        exit(err.exit_code())
    }
}

/// Scans `source`, writing the token dump to stdout and any new diagnostics to
/// stderr.
fn run(source: &str, diagnostics: &mut Diagnostics) -> DriverResult<()> {
    let tokens = scanner::scan(source, diagnostics);
    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }
    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{token}")?;
    }
    stdout.flush()?;
    Ok(())
}

fn repl() -> DriverResult<()> {
    let mut diagnostics = Diagnostics::new();
    let mut buf = String::new();
    let stdin = io::stdin();
    loop {
        buf.clear();
        print!("> ");
        io::stdout().flush()?;
        if stdin.lock().read_line(&mut buf)? == 0 {
            return Ok(());
        }
        run(buf.trim_end_matches(['\n', '\r']), &mut diagnostics)?;
        // One bad line must not poison the rest of the session.
        diagnostics.clear();
    }
}

fn run_file(path: &Path) -> DriverResult<()> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_owned(),
        source,
    })?;
    let mut diagnostics = Diagnostics::new();
    run(&source, &mut diagnostics)?;
    match diagnostics.had_error() {
        true => Err(DriverError::Scan(diagnostics.count())),
        false => Ok(()),
    }
}
