//! Line cursor over DDL text
//!
//! The suppressor and the escaper both walk statement text one physical
//! line at a time and care about one property of each line: whether it
//! starts with whitespace, which marks it as a continuation of the line
//! above. `LineCursor` tokenizes the text once, keeping each line's
//! terminator, so writing every line back out reproduces the input
//! byte for byte.

/// One physical line of DDL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without its terminator
    pub text: &'a str,

    /// `"\n"`, `"\r\n"`, or `""` for a final unterminated line
    pub terminator: &'a str,
}

impl<'a> Line<'a> {
    /// True when the line starts with a space or a tab.
    pub fn is_continuation(&self) -> bool {
        self.text.starts_with([' ', '\t'])
    }

    /// Leading whitespace of the line
    pub fn indent(&self) -> &'a str {
        let body = self.text.trim_start_matches([' ', '\t']);
        &self.text[..self.text.len() - body.len()]
    }

    /// Line content after the leading whitespace
    pub fn body(&self) -> &'a str {
        self.text.trim_start_matches([' ', '\t'])
    }

    /// True when the line, ignoring trailing whitespace, ends a statement.
    pub fn ends_statement(&self) -> bool {
        self.text.trim_end().ends_with(';')
    }

    /// Append the line, terminator included, to `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(self.text);
        out.push_str(self.terminator);
    }
}

/// Split text into lines, keeping terminators.
///
/// An empty input yields no lines; a trailing newline does not produce an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split_inclusive('\n')
        .map(|raw| {
            let (text, terminator) = if let Some(stripped) = raw.strip_suffix("\r\n") {
                (stripped, "\r\n")
            } else if let Some(stripped) = raw.strip_suffix('\n') {
                (stripped, "\n")
            } else {
                (raw, "")
            };
            Line { text, terminator }
        })
        .collect()
}

/// Forward-only cursor over the lines of a text.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor positioned before the first line
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: split_lines(text),
            pos: 0,
        }
    }

    /// Look at the next line without consuming it
    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// Consume the next line only if it is a continuation line.
    pub fn next_continuation(&mut self) -> Option<Line<'a>> {
        let line = self.peek().filter(Line::is_continuation)?;
        self.pos += 1;
        Some(line)
    }

    /// Consume the run of continuation lines following the current position.
    pub fn take_continuations(&mut self) -> Vec<Line<'a>> {
        let mut taken = Vec::new();
        while let Some(line) = self.next_continuation() {
            taken.push(line);
        }
        taken
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }
}

#[cfg(test)]
#[path = "lines_test.rs"]
mod tests;
