use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥100 cols: side panels next to lists
    Medium, // 60-99 cols: single column, descriptions inline
    Narrow, // <60 cols: single column, descriptions hidden
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 100 {
            LayoutTier::Wide
        } else if area.width >= 60 {
            LayoutTier::Medium
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_side_panel(&self) -> bool {
        *self == LayoutTier::Wide
    }

    pub fn show_descriptions(&self) -> bool {
        *self != LayoutTier::Narrow
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            footer: vertical[2],
            tier: LayoutTier::from_area(area),
        }
    }
}

/// Split `area` into a list and a detail column when the tier allows it.
pub fn split_side_panel(area: Rect, tier: LayoutTier) -> (Rect, Option<Rect>) {
    if !tier.show_side_panel() {
        return (area, None);
    }
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (horizontal[0], Some(horizontal[1]))
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
        }
        has_hint = true;
    }

    if has_hint {
        out.push(current);
    }
    out
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let target_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let left = area.x + (area.width - target_w) / 2;
    let top = area.y + (area.height - target_h) / 2;

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 120, 40)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 80, 40)), LayoutTier::Medium);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 40, 40)), LayoutTier::Narrow);
    }

    #[test]
    fn test_side_panel_only_when_wide() {
        let area = Rect::new(0, 0, 120, 30);
        let (list, side) = split_side_panel(area, LayoutTier::Wide);
        assert!(side.is_some());
        assert!(list.width < area.width);
        let (list, side) = split_side_panel(area, LayoutTier::Medium);
        assert!(side.is_none());
        assert_eq!(list, area);
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Tab] Next", "[t] Theme", "[q] Quit"], 22);
        assert_eq!(lines, vec![" [Tab] Next  [t] Theme", " [q] Quit"]);
        assert!(pack_hint_lines(&[], 80).is_empty());
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(10, 5, 100, 40);
        let r = centered_rect(50, 50, area);
        assert_eq!(r, Rect::new(35, 15, 50, 20));
    }
}
