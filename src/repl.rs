use crate::errorprint::print_error;
use crate::session::{Outcome, Session};
use anyhow::anyhow;
use std::ops::Range;
use termwiz::cell::AttributeChange;
use termwiz::color::{AnsiColor, ColorAttribute};
use termwiz::lineedit::*;

#[derive(Default)]
struct EditHost {
    history: BasicHistory,
    words: Vec<String>,
}

impl LineEditorHost for EditHost {
    fn render_prompt(&self, _prompt: &str) -> Vec<OutputElement> {
        vec![
            OutputElement::Attribute(AttributeChange::Foreground(AnsiColor::Purple.into())),
            OutputElement::Text("aliasbook".to_owned()),
            OutputElement::Attribute(AttributeChange::Foreground(ColorAttribute::Default)),
            OutputElement::Text("> ".to_owned()),
        ]
    }

    fn history(&mut self) -> &mut dyn History {
        &mut self.history
    }

    fn complete(&self, line: &str, cursor_position: usize) -> Vec<CompletionCandidate> {
        first_word_candidates(line, cursor_position, &self.words)
            .into_iter()
            .map(|(range, text)| CompletionCandidate { range, text })
            .collect()
    }
}

/// Only the command word is completed: built-in names and aliases.
/// Returns the byte range to replace with each candidate.
fn first_word_candidates(
    line: &str,
    cursor_position: usize,
    words: &[String],
) -> Vec<(Range<usize>, String)> {
    let before_cursor = match line.get(..cursor_position) {
        Some(text) => text,
        None => return vec![],
    };
    let start = before_cursor.len() - before_cursor.trim_start().len();
    let partial = &before_cursor[start..];
    if partial.is_empty() || partial.contains(char::is_whitespace) {
        return vec![];
    }
    words
        .iter()
        .filter(|word| word.starts_with(partial))
        .map(|word| (start..cursor_position, word.clone()))
        .collect()
}

pub fn repl(session: &mut Session) -> anyhow::Result<()> {
    let mut terminal = line_editor_terminal()
        .map_err(|err| anyhow!("initializing the line editor: {}", err))?;
    let mut editor = LineEditor::new(&mut terminal);
    let mut host = EditHost::default();

    loop {
        // We handle all the prompt rendering in render_prompt.
        editor.set_prompt("");
        host.words = session.completion_words();

        match editor.read_line(&mut host) {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                host.history().add(&line);

                let stdout = std::io::stdout();
                match session.run_line(&line, &mut stdout.lock()) {
                    Ok(Outcome::Exit) => break,
                    Ok(Outcome::Continue) => {}
                    Err(e) => print_error(&e),
                }
            }
            Ok(None) => continue,
            Err(err) => {
                print_error(&anyhow!("during readline: {}", err));
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words() -> Vec<String> {
        vec!["list".to_owned(), "list-alias".to_owned(), "ls".to_owned()]
    }

    #[test]
    fn completes_first_word() {
        assert_eq!(
            first_word_candidates("li", 2, &words()),
            vec![(0..2, "list".to_owned()), (0..2, "list-alias".to_owned())]
        );
        assert_eq!(
            first_word_candidates("  l", 3, &words()),
            vec![
                (2..3, "list".to_owned()),
                (2..3, "list-alias".to_owned()),
                (2..3, "ls".to_owned())
            ]
        );
    }

    #[test]
    fn ignores_arguments_and_empty_lines() {
        assert!(first_word_candidates("find li", 7, &words()).is_empty());
        assert!(first_word_candidates("", 0, &words()).is_empty());
        assert!(first_word_candidates("   ", 3, &words()).is_empty());
        assert!(first_word_candidates("x", 5, &words()).is_empty());
    }
}
