use std::fmt::Display;

/// One complete multiline sample. Content is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogBlock {
    text: &'static str,
}

impl LogBlock {
    pub const fn new(text: &'static str) -> Self {
        LogBlock { text }
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.text.lines()
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl Display for LogBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}
