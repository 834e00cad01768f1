use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs, Widget};

use crate::store::portfolio_store::{Section, ThemeMode};
use crate::ui::theme::Theme;

/// Top bar: owner name, section tabs and the active theme.
pub struct Navigation<'a> {
    owner: &'a str,
    current: Section,
    mode: ThemeMode,
    theme: &'a Theme,
}

impl<'a> Navigation<'a> {
    pub fn new(owner: &'a str, current: Section, mode: ThemeMode, theme: &'a Theme) -> Self {
        Self {
            owner,
            current,
            mode,
            theme,
        }
    }
}

impl Widget for Navigation<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.header_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let owner_width = self.owner.chars().count() as u16 + 2;
        let mode_label = format!(" {} ", self.mode.as_str());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(owner_width),
                Constraint::Min(0),
                Constraint::Length(mode_label.len() as u16),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.owner),
            Style::default()
                .fg(colors.header_fg())
                .add_modifier(Modifier::BOLD),
        )))
        .render(columns[0], buf);

        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.title())))
            .collect();
        Tabs::new(titles)
            .select(self.current.index())
            .style(Style::default().fg(colors.muted()))
            .highlight_style(
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )
            .render(columns[1], buf);

        Paragraph::new(Line::from(Span::styled(
            mode_label,
            Style::default().fg(colors.highlight()),
        )))
        .render(columns[2], buf);
    }
}
