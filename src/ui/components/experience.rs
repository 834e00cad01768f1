use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::store::content::{Education, Job};
use crate::ui::layout::{LayoutTier, split_side_panel};
use crate::ui::theme::Theme;

pub struct ExperienceSection<'a> {
    jobs: &'a [Job],
    education: &'a [Education],
    selected: usize,
    tier: LayoutTier,
    theme: &'a Theme,
}

impl<'a> ExperienceSection<'a> {
    pub fn new(
        jobs: &'a [Job],
        education: &'a [Education],
        selected: usize,
        tier: LayoutTier,
        theme: &'a Theme,
    ) -> Self {
        Self {
            jobs,
            education,
            selected,
            tier,
            theme,
        }
    }

    fn detail_lines(&self, job: &'a Job) -> Vec<Line<'a>> {
        let colors = &self.theme.colors;
        let mut lines = vec![
            Line::from(Span::styled(
                job.role.as_str(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · {} · {}", job.company, job.period, job.location),
                Style::default().fg(colors.muted()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                job.description.as_str(),
                Style::default().fg(colors.fg()),
            )),
        ];
        if !job.technologies.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                job.technologies.join(" · "),
                Style::default().fg(colors.highlight()),
            )));
        }
        lines
    }
}

impl Widget for ExperienceSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let edu_height = if self.education.is_empty() {
            0
        } else {
            self.education.len() as u16 + 2
        };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(edu_height)])
            .split(area);

        let (list_area, side) = split_side_panel(vertical[0], self.tier);

        let block = Block::bordered()
            .title(" Experience ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(list_area);
        block.render(list_area, buf);

        let mut lines = Vec::new();
        for (i, job) in self.jobs.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {indicator} {}", job.role), style),
                Span::styled(
                    format!("  {}", job.period),
                    Style::default().fg(colors.muted()),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", job.company),
                Style::default().fg(colors.muted()),
            )));
            // Without a side panel the selected job expands in place.
            if is_selected && side.is_none() && self.tier.show_descriptions() {
                lines.extend(self.detail_lines(job).into_iter().skip(2));
            }
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);

        if let (Some(side), Some(job)) = (side, self.jobs.get(self.selected)) {
            let block = Block::bordered()
                .border_style(Style::default().fg(colors.border_focused()));
            let inner = block.inner(side);
            block.render(side, buf);
            Paragraph::new(self.detail_lines(job))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }

        if edu_height > 0 {
            let block = Block::bordered()
                .title(" Education ")
                .border_style(Style::default().fg(colors.border()));
            let inner = block.inner(vertical[1]);
            block.render(vertical[1], buf);
            let lines: Vec<Line> = self
                .education
                .iter()
                .map(|e| {
                    Line::from(vec![
                        Span::styled(format!(" {}", e.degree), Style::default().fg(colors.fg())),
                        Span::styled(
                            format!(" · {} · {}", e.institution, e.period),
                            Style::default().fg(colors.muted()),
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::content::Portfolio;
    use crate::ui::components::render_to_string;

    #[test]
    fn test_selected_job_has_indicator_and_detail() {
        let portfolio = Portfolio::bundled().unwrap();
        let theme = Theme::default();
        let section = ExperienceSection::new(
            &portfolio.experience,
            &portfolio.education,
            1,
            LayoutTier::Wide,
            &theme,
        );
        let out = render_to_string(section, 120, 30);
        let second = &portfolio.experience[1];
        assert!(out.contains(&format!("> {}", second.role)));
        assert!(out.contains(&second.company));
        assert!(out.contains("Education"));
    }

    #[test]
    fn test_narrow_hides_detail() {
        let portfolio = Portfolio::bundled().unwrap();
        let theme = Theme::default();
        let section = ExperienceSection::new(
            &portfolio.experience,
            &[],
            0,
            LayoutTier::Narrow,
            &theme,
        );
        let out = render_to_string(section, 50, 30);
        assert!(!out.contains("Education"));
        assert!(out.contains(&format!("> {}", portfolio.experience[0].role)));
    }
}
