use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs, Widget};

use crate::animation::skills::{Percent, ProgressSink};
use crate::store::content::SkillCategory;
use crate::store::portfolio_store::SkillProgress;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::layout::LayoutTier;
use crate::ui::theme::Theme;

pub struct SkillsSection<'a> {
    categories: &'a [SkillCategory],
    progress: &'a SkillProgress,
    selected_category: usize,
    revealed: bool,
    tier: LayoutTier,
    theme: &'a Theme,
}

impl<'a> SkillsSection<'a> {
    pub fn new(
        categories: &'a [SkillCategory],
        progress: &'a SkillProgress,
        selected_category: usize,
        tier: LayoutTier,
        theme: &'a Theme,
    ) -> Self {
        Self {
            categories,
            progress,
            selected_category,
            revealed: true,
            tier,
            theme,
        }
    }

    /// Bars stay hidden until the reveal delay has passed.
    pub fn revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }
}

impl Widget for SkillsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Technical Arsenal ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let titles: Vec<Line> = self
            .categories
            .iter()
            .map(|c| Line::from(c.name.as_str()))
            .collect();
        Tabs::new(titles)
            .select(self.selected_category)
            .style(Style::default().fg(colors.muted()))
            .highlight_style(
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(layout[0], buf);

        let Some(category) = self.categories.get(self.selected_category) else {
            return;
        };

        let rows_per_skill: u16 = if self.tier.show_descriptions() { 3 } else { 2 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                category
                    .skills
                    .iter()
                    .map(|_| Constraint::Length(rows_per_skill))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (skill, row) in category.skills.iter().zip(rows.iter()) {
            if row.height == 0 {
                continue;
            }
            let value = if self.revealed {
                self.progress
                    .skill_progress(&skill.name)
                    .unwrap_or(Percent::ZERO)
            } else {
                Percent::ZERO
            };
            let bar_area = Rect::new(row.x + 1, row.y, row.width.saturating_sub(2), 1);
            ProgressBar::new(&skill.name, value, self.theme).render(bar_area, buf);

            if self.tier.show_descriptions() && row.height > 1 && !skill.description.is_empty() {
                Paragraph::new(Line::from(Span::styled(
                    format!("  {}", skill.description),
                    Style::default().fg(colors.muted()),
                )))
                .render(Rect::new(row.x + 1, row.y + 1, row.width.saturating_sub(2), 1), buf);
            }
        }
    }
}
