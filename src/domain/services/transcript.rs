#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Turn;
use crate::domain::models::TurnKind;

fn author_style(author: &Author) -> Style {
    let color = match author {
        Author::User => Color::Cyan,
        Author::Johar => Color::Green,
        Author::Model => Color::Magenta,
    };

    return Style::default().fg(color).add_modifier(Modifier::BOLD);
}

/// Flattens the session's turns into styled lines for the transcript pane.
/// Rebuilt whenever the turns or the pane width change; the line count feeds
/// the scroll state.
#[derive(Default)]
pub struct TranscriptList {
    lines: Vec<Line<'static>>,
}

impl TranscriptList {
    pub fn set_turns(&mut self, turns: &[Turn], width: u16) {
        let wrap_width = width.saturating_sub(2).max(10) as usize;
        let mut lines: Vec<Line<'static>> = vec![];

        for turn in turns {
            lines.push(Line::from(Span::styled(
                turn.author.to_string(),
                author_style(&turn.author),
            )));

            let body_style = match turn.kind() {
                TurnKind::Normal => Style::default(),
                TurnKind::Error => Style::default().fg(Color::Red),
            };
            for text_line in turn.as_string_lines(wrap_width) {
                lines.push(Line::from(Span::styled(text_line, body_style)));
            }

            if !turn.sources.is_empty() {
                lines.push(Line::from(Span::styled(
                    "Sources:".to_string(),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
                for (idx, source) in turn.sources.iter().enumerate() {
                    let title = if source.title.is_empty() {
                        source.uri.to_string()
                    } else {
                        source.title.to_string()
                    };
                    lines.push(Line::from(format!(
                        "{n}. {title} ({uri})",
                        n = idx + 1,
                        uri = source.uri
                    )));
                }
            }

            lines.push(Line::from("".to_string()));
        }

        self.lines = lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, position: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.to_vec()).scroll((position, 0)),
            rect,
        );
    }
}
