use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::store::content::About;
use crate::ui::theme::Theme;

pub struct AboutSection<'a> {
    about: &'a About,
    theme: &'a Theme,
}

impl<'a> AboutSection<'a> {
    pub fn new(about: &'a About, theme: &'a Theme) -> Self {
        Self { about, theme }
    }
}

impl Widget for AboutSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" About Me ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let highlights_height = self.about.highlights.len() as u16 + 2;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(highlights_height)])
            .split(inner);

        let mut body = Vec::new();
        for paragraph in &self.about.paragraphs {
            body.push(Line::from(Span::styled(
                paragraph.as_str(),
                Style::default().fg(colors.fg()),
            )));
            body.push(Line::from(""));
        }
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);

        let mut highlights = vec![Line::from(Span::styled(
            "Highlights",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ))];
        highlights.extend(self.about.highlights.iter().map(|h| {
            Line::from(vec![
                Span::styled(" ✓ ", Style::default().fg(colors.success())),
                Span::styled(h.as_str(), Style::default().fg(colors.fg())),
            ])
        }));
        Paragraph::new(highlights).render(layout[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::render_to_string;

    #[test]
    fn test_renders_paragraphs_and_highlights() {
        let about = About {
            paragraphs: vec!["I ship things.".to_string()],
            highlights: vec!["Owns problems".to_string(), "Leads teams".to_string()],
        };
        let theme = Theme::default();
        let out = render_to_string(AboutSection::new(&about, &theme), 60, 14);
        assert!(out.contains("About Me"));
        assert!(out.contains("I ship things."));
        assert!(out.contains("✓ Owns problems"));
        assert!(out.contains("✓ Leads teams"));
    }
}
