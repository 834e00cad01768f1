use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::store::content::Portfolio;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

const CURSOR: &str = "▌";

pub struct Hero<'a> {
    portfolio: &'a Portfolio,
    typed: &'a str,
    is_typing: bool,
    loading: bool,
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    pub fn new(portfolio: &'a Portfolio, typed: &'a str, is_typing: bool, theme: &'a Theme) -> Self {
        Self {
            portfolio,
            typed,
            is_typing,
            loading: false,
            theme,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let inner = centered_rect(80, 80, area);

        if self.loading {
            Paragraph::new(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(colors.muted()),
            )))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        // blink only while the full word is on hold
        let cursor_style = if self.is_typing {
            Style::default().fg(colors.cursor())
        } else {
            Style::default()
                .fg(colors.cursor())
                .add_modifier(Modifier::SLOW_BLINK)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.portfolio.greeting.as_str(),
                Style::default().fg(colors.muted()),
            )),
            Line::from(Span::styled(
                self.portfolio.name.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    self.typed,
                    Style::default()
                        .fg(colors.accent_alt())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(CURSOR, cursor_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.portfolio.summary.as_str(),
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
        ];

        if !self.portfolio.featured.is_empty() {
            let mut chips = Vec::new();
            for (i, tech) in self.portfolio.featured.iter().enumerate() {
                if i > 0 {
                    chips.push(Span::raw("  "));
                }
                chips.push(Span::styled(
                    format!("[{tech}]"),
                    Style::default().fg(colors.highlight()),
                ));
            }
            lines.push(Line::from(chips));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
