use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Prompt,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn prompt(text: &str) -> TranscriptLine {
        return TranscriptLine {
            kind: LineKind::Prompt,
            text: text.to_string(),
        };
    }

    pub fn output(text: &str) -> TranscriptLine {
        return TranscriptLine {
            kind: LineKind::Output,
            text: text.to_string(),
        };
    }
}

impl fmt::Display for TranscriptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Prompt => write!(f, "$ {}", self.text),
            LineKind::Output => write!(f, "{}", self.text),
        }
    }
}

/// Append-only console transcript. Only `clear` removes lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scrollback {
    lines: Vec<TranscriptLine>,
}

impl Scrollback {
    pub fn push(&mut self, line: TranscriptLine) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
