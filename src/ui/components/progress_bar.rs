use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::animation::skills::Percent;
use crate::ui::theme::Theme;

const LABEL_WIDTH: u16 = 16;
const VALUE_WIDTH: u16 = 5;

/// One-line bar: `name  ██████░░░░  42%`.
pub struct ProgressBar<'a> {
    pub label: &'a str,
    pub value: Percent,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &'a str, value: Percent, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

pub fn filled_cells(value: Percent, width: u16) -> u16 {
    (value.ratio() * width as f64).round() as u16
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = if self.focused {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        let label_w = LABEL_WIDTH.min(area.width);
        buf.set_stringn(area.x, area.y, self.label, label_w as usize, label_style);

        let bar_x = area.x + label_w;
        let bar_w = area.width.saturating_sub(label_w + VALUE_WIDTH);
        let filled = filled_cells(self.value, bar_w);
        for x in bar_x..bar_x + bar_w {
            let (symbol, style) = if x < bar_x + filled {
                ("█", Style::default().fg(colors.bar_filled()))
            } else {
                ("░", Style::default().fg(colors.bar_empty()))
            };
            buf[(x, area.y)].set_symbol(symbol).set_style(style);
        }

        let value = format!("{:>4}", self.value.to_string());
        let value_x = bar_x + bar_w + 1;
        if value_x < area.x + area.width {
            buf.set_string(value_x, area.y, value, Style::default().fg(colors.muted()));
        }
    }
}
