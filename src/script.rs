use crate::errorprint::print_error_path;
use crate::session::{Outcome, Session};
use anyhow::Context;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

fn is_runnable(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

/// Run each line of `input` in turn.  Blank lines and `#` comments
/// are skipped.  Stops at `exit` or at the first line that fails;
/// the error carries the source name and line number.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    source_name: &str,
    session: &mut Session,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", source_name))?;
        if !is_runnable(&line) {
            continue;
        }
        let outcome = session
            .run_line(&line, out)
            .with_context(|| format!("{} line {}: {}", source_name, idx + 1, line.trim()))?;
        if outcome == Outcome::Exit {
            return Ok(Outcome::Exit);
        }
    }
    Ok(Outcome::Continue)
}

pub fn run_script_file(path: &Path, session: &mut Session) -> anyhow::Result<Outcome> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening script {}", path.display()))?;
    let stdout = std::io::stdout();
    let file_name = path.to_string_lossy();
    run_script(BufReader::new(file), &file_name, session, &mut stdout.lock())
}

/// Like `run_script_file`, but report the failing line instead of
/// returning it
pub fn run_script_file_reporting(path: &Path, session: &mut Session) -> bool {
    match run_script_file(path, session) {
        Ok(_) => true,
        Err(e) => {
            print_error_path(&e, path);
            false
        }
    }
}
