#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    Normal,
    Error,
}

/// A link the model grounded its answer on, rendered as a numbered footer
/// under the turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub uri: String,
    pub title: String,
}

/// One transcript entry. Turns are append-only: once pushed on a session they
/// are never edited, only replaced wholesale by a reset.
#[derive(Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub sources: Vec<SourceRef>,
    kind: TurnKind,
}

impl Turn {
    pub fn new(author: Author, text: &str) -> Turn {
        return Turn::new_with_kind(author, TurnKind::Normal, text);
    }

    pub fn new_with_kind(author: Author, kind: TurnKind, text: &str) -> Turn {
        return Turn {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.to_string().replace('\t', "  "),
            sources: vec![],
            kind,
        };
    }

    pub fn with_sources(mut self, sources: Vec<SourceRef>) -> Turn {
        self.sources = sources;
        return self;
    }

    pub fn kind(&self) -> TurnKind {
        return self.kind;
    }

    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();

        for full_line in self.text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut char_count = 0;
            let mut current_line: Vec<&str> = vec![];

            for word in full_line.split(' ') {
                if word.len() + char_count + 1 > line_max_width {
                    lines.push(current_line.join(" ").trim_end().to_string());
                    current_line = vec![word];
                    char_count = word.len() + 1;
                } else {
                    current_line.push(word);
                    char_count += word.len() + 1;
                }
            }
            if !current_line.is_empty() {
                lines.push(current_line.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
