//! Output sink shared by the runner and every example.
//!
//! Examples never print to stdout directly. They write through an [`Output`]
//! so the CLI can hand them a locked stdout while tests hand them a buffer.

use std::io::{self, Write};

use crate::catalog::Example;

/// Indentation applied to every displayed code line
const SNIPPET_INDENT: &str = "    ";

/// Writer handed to examples, with helpers for showing code
pub struct Output<'a> {
    sink: &'a mut dyn Write,
}

impl<'a> Output<'a> {
    pub fn new(sink: &'a mut dyn Write) -> Self {
        Self { sink }
    }

    /// Print a code snippet, indented and surrounded by blank lines
    pub fn show(&mut self, code: &str) -> io::Result<()> {
        writeln!(self.sink)?;
        for line in code.trim().lines() {
            if line.is_empty() {
                writeln!(self.sink)?;
            } else {
                writeln!(self.sink, "{SNIPPET_INDENT}{line}")?;
            }
        }
        writeln!(self.sink)
    }

    /// Print a code snippet followed by the value it produced
    pub fn show_result(&mut self, code: &str, result: impl std::fmt::Display) -> io::Result<()> {
        self.show(code)?;
        writeln!(self.sink, "{result}")
    }

    /// Print the header that precedes an example's output
    pub fn banner(&mut self, example: &Example) -> io::Result<()> {
        let title = format!("{} ({})", example.name(), example.category());
        writeln!(self.sink)?;
        writeln!(self.sink, "{title}")?;
        writeln!(self.sink, "{}", "=".repeat(title.len()))?;
        writeln!(self.sink, "{}", example.description())?;
        if let Some(url) = example.doc_url() {
            writeln!(self.sink, "Docs: {url}")?;
        }
        Ok(())
    }
}

impl Write for Output<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Output<'_>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut Output::new(&mut buf)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_show_indents_each_line() {
        let text = render(|out| out.show("let x = 1;\nlet y = 2;"));
        assert_eq!(text, "\n    let x = 1;\n    let y = 2;\n\n");
    }

    #[test]
    fn test_show_keeps_blank_lines_unindented() {
        let text = render(|out| out.show("fn a() {}\n\nfn b() {}\n"));
        assert_eq!(text, "\n    fn a() {}\n\n    fn b() {}\n\n");
    }

    #[test]
    fn test_show_result_prints_value_after_code() {
        let text = render(|out| out.show_result("1 + 1", 2));
        assert!(text.ends_with("    1 + 1\n\n2\n"));
    }

    #[test]
    fn test_write_macro_goes_to_sink() {
        let text = render(|out| writeln!(out, "hello {}", "world"));
        assert_eq!(text, "hello world\n");
    }
}
