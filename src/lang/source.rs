/// Program lines as the interpreter sees them: comments removed and
/// trailing blanks trimmed. Index `i` holds source line `i + 1`.
pub fn program_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .map(|line| {
            let code = match line.find(';') {
                Some(pos) => &line[..pos],
                None => line,
            };
            code.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blanks() {
        let lines = program_lines("; header\npush 1 ; one\n\n  write\t\r\nend");
        assert_eq!(lines, vec!["", "push 1", "", "  write", "end"]);
    }
}
