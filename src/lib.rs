#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A byte offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Parses `source` into a program, returning every diagnostic alongside it.
///
/// A non-empty error list means the program is incomplete and must not be evaluated.
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and the
/// offset of `position` within that line. An offset at the very end of the source
/// resolves to the last line.
pub fn line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    if pos == content.len() {
        // Empty source, or an offset just past a trailing newline.
        return match last {
            Some((_, line, _)) if line.ends_with('\n') => Some((line_number, String::new(), 0)),
            Some(found) => Some(found),
            None => Some((1, String::new(), 0)),
        };
    }

    None
}

/// Renders an error against the source it was produced from.
///
/// ```text
/// Error: ExpectedToken (expected next token to be ASSIGN, got INT instead)
/// -> shell
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    // No tip: the message stands in for it.
    let tip = match error.get_tip() {
        ErrorTip::None => error.to_string(),
        tip => tip.to_string(),
    };
    out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip));
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{line_at_position, parse, render_error};

    #[test]
    fn test_line_at_position() {
        let source = "Hello, world!\nlet x = 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_at_position(source, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_at_position_end_of_source() {
        assert_eq!(line_at_position("let x", 5), Some((1, "let x".to_string(), 5)));
        assert_eq!(line_at_position("", 0), Some((1, String::new(), 0)));
        assert_eq!(line_at_position("a\n", 2), Some((2, String::new(), 0)));
        assert_eq!(line_at_position("a", 7), None);
    }

    #[test]
    fn test_render_error_points_at_token() {
        let source = "let x 5;";
        let (_, errors) = parse(source.to_string(), None);

        assert_eq!(errors.len(), 1);
        let rendered = render_error(&errors[0], source);
        let expected = concat!(
            "Error: ExpectedToken (expected next token to be ASSIGN, got INT instead)\n",
            "-> shell\n",
            "  |\n",
            "1 | let x 5;\n",
            "  | ------^\n",
        );
        assert_eq!(rendered, expected);
    }
}
