use anyhow::Error;
use command_parser::ParseError;
use std::io::Write;
use std::path::Path;

fn extract_usage(e: &Error) -> Option<&'static str> {
    e.downcast_ref::<ParseError>().and_then(ParseError::usage)
}

/// Write every message in the chain of `e`, followed by the usage
/// of the command when the arguments of a known command were bad
pub fn write_error<W: Write>(e: &Error, out: &mut W) -> std::io::Result<()> {
    for item in e.chain() {
        writeln!(out, "aliasbook: {}", item)?;
    }
    if let Some(usage) = extract_usage(e) {
        writeln!(out, "usage: {}", usage)?;
    }
    Ok(())
}

pub fn print_error(e: &Error) {
    let stderr = std::io::stderr();
    write_error(e, &mut stderr.lock()).ok();
}

pub fn print_error_path(e: &Error, path: &Path) {
    eprintln!("aliasbook: {}: error:", path.display());
    print_error(e);
}

#[cfg(test)]
mod test {
    use super::*;
    use alias_store::AliasStore;
    use anyhow::Context;
    use command_parser::CommandParser;
    use pretty_assertions::assert_eq;

    fn render(e: &Error) -> String {
        let mut out = vec![];
        write_error(e, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn invalid_format_shows_usage() {
        let err = CommandParser::new()
            .parse_command("delete x", &AliasStore::new())
            .unwrap_err();
        let text = render(&err.into());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "aliasbook: Invalid command format for delete: INDEX must be a positive integer"
        );
        assert_eq!(
            lines[1],
            "usage: delete INDEX: delete the person at INDEX. Example: delete 1"
        );
    }

    #[test]
    fn unknown_command_has_no_usage() {
        let err = CommandParser::new()
            .parse_command("xyz", &AliasStore::new())
            .unwrap_err();
        assert_eq!(render(&err.into()), "aliasbook: Unknown command: xyz\n");
    }

    #[test]
    fn context_is_printed_first() {
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("disk full"));
        let err = err.context("saving aliases").unwrap_err();
        assert_eq!(
            render(&err),
            "aliasbook: saving aliases\naliasbook: disk full\n"
        );
    }
}
