/// Split input into its leading command word and the argument text
/// that follows it.  Surrounding whitespace is removed from both.
/// Returns None when the input is blank.
pub fn split_command_word(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.find(char::is_whitespace) {
        Some(idx) => Some((&trimmed[..idx], trimmed[idx..].trim_start())),
        None => Some((trimmed, "")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_word_and_args() {
        assert_eq!(split_command_word("list"), Some(("list", "")));
        assert_eq!(
            split_command_word("  find  alice bob  "),
            Some(("find", "alice bob"))
        );
        assert_eq!(split_command_word("add\tn/Jo"), Some(("add", "n/Jo")));
        assert_eq!(split_command_word(""), None);
        assert_eq!(split_command_word(" \t "), None);
    }
}
