use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::store::content::ContactMethod;
use crate::ui::theme::Theme;

pub struct ContactSection<'a> {
    methods: &'a [ContactMethod],
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> ContactSection<'a> {
    pub fn new(methods: &'a [ContactMethod], message: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            methods,
            message,
            theme,
        }
    }
}

impl Widget for ContactSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Let's Connect ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        if let Some(message) = self.message {
            Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    message,
                    Style::default()
                        .fg(colors.highlight())
                        .add_modifier(Modifier::ITALIC),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);
        }

        let label_width = self
            .methods
            .iter()
            .map(|m| m.name.chars().count())
            .max()
            .unwrap_or(0);
        let lines: Vec<Line> = self
            .methods
            .iter()
            .map(|m| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<label_width$}  ", m.name),
                        Style::default()
                            .fg(colors.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(m.value.as_str(), Style::default().fg(colors.fg())),
                ])
            })
            .collect();
        Paragraph::new(lines).render(layout[1], buf);
    }
}
