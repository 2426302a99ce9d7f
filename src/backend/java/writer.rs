//! Output writer with indentation tracking
//!
//! Renders [`JavaLine`] trees into Java source text.

use super::lines::{JavaBlock, JavaLine};

/// Writer that tracks indentation and builds the output
pub struct JavaWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
}

impl JavaWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one indented line followed by a newline
    pub fn writeln(&mut self, s: &str) {
        let indent = " ".repeat(self.indent_level * self.indent_width);
        self.output.push_str(&indent);
        self.output.push_str(s);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    pub fn write_lines(&mut self, lines: &[JavaLine]) {
        for line in lines {
            self.write_line(line);
        }
    }

    pub fn write_line(&mut self, line: &JavaLine) {
        match line {
            JavaLine::Stmt(text) => self.writeln(text),
            JavaLine::Comment(text) => self.writeln(&format!("// {text}")),
            JavaLine::Blank => self.newline(),
            JavaLine::Block(block) => self.write_block(block),
        }
    }

    fn write_block(&mut self, block: &JavaBlock) {
        for (i, arm) in block.arms.iter().enumerate() {
            let opener = match (i, arm.header.is_empty()) {
                (0, true) => "{".to_string(),
                (0, false) => format!("{} {{", arm.header),
                (_, true) => "} {".to_string(),
                (_, false) => format!("}} {} {{", arm.header),
            };
            self.writeln(&opener);
            self.indent();
            self.write_lines(&arm.body);
            self.dedent();
        }
        self.writeln("}");
    }

    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}
