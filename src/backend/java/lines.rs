//! Structured emission lines.
//!
//! The emitter builds a tree of [`JavaLine`]s; [`super::writer::JavaWriter`] is the only place that turns them into
//! text, so indentation and brace placement are decided once.

/// One logical line of Java output, or a braced block of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JavaLine {
    /// A complete statement, including its trailing `;`.
    Stmt(String),
    /// A `//` comment (text without the slashes).
    Comment(String),
    Blank,
    Block(JavaBlock),
}

impl JavaLine {
    pub fn stmt(text: impl Into<String>) -> Self {
        JavaLine::Stmt(text.into())
    }
}

/// A braced construct with one or more arms.
///
/// `if (a) { } else if (b) { } else { }` is a single block with three arms. An arm with an empty header renders
/// as a bare `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaBlock {
    pub arms: Vec<BlockArm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockArm {
    pub header: String,
    pub body: Vec<JavaLine>,
}

impl JavaBlock {
    pub fn new(header: impl Into<String>, body: Vec<JavaLine>) -> Self {
        Self {
            arms: vec![BlockArm {
                header: header.into(),
                body,
            }],
        }
    }

    /// Append a continuation arm (`else`, `else if (...)`).
    pub fn with_arm(mut self, header: impl Into<String>, body: Vec<JavaLine>) -> Self {
        self.arms.push(BlockArm {
            header: header.into(),
            body,
        });
        self
    }

    pub fn into_line(self) -> JavaLine {
        JavaLine::Block(self)
    }
}
