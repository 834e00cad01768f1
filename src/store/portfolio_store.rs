use serde::{Deserialize, Serialize};

use crate::animation::skills::{Percent, ProgressSink, SkillTargets};
use crate::error::InvalidConfiguration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    Colorful,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Colorful];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Colorful => "colorful",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Colorful,
            ThemeMode::Colorful => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Hero,
    About,
    Experience,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Displayed progress per skill, in target order. Only skills known at
/// construction can be written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillProgress {
    entries: Vec<(String, Percent)>,
}

impl SkillProgress {
    pub fn for_targets(targets: &SkillTargets) -> Self {
        Self {
            entries: targets
                .iter()
                .map(|(name, _)| (name.to_string(), Percent::ZERO))
                .collect(),
        }
    }

    pub fn reset(&mut self) {
        for (_, value) in &mut self.entries {
            *value = Percent::ZERO;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Percent)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl ProgressSink for SkillProgress {
    fn skill_progress(&self, skill: &str) -> Option<Percent> {
        self.entries
            .iter()
            .find(|(n, _)| n == skill)
            .map(|&(_, v)| v)
    }

    fn update_skill_progress(
        &mut self,
        skill: &str,
        value: Percent,
    ) -> Result<(), InvalidConfiguration> {
        match self.entries.iter_mut().find(|(n, _)| n == skill) {
            Some((_, slot)) => {
                *slot = value;
                Ok(())
            }
            None => Err(InvalidConfiguration::UnknownSkill(skill.to_string())),
        }
    }
}

/// UI state shared by the sections. Owned by the app and handed to
/// whatever needs it; every mutation goes through a setter.
#[derive(Clone, Debug, Default)]
pub struct PortfolioStore {
    theme: ThemeMode,
    current_section: Section,
    is_loading: bool,
    skills: SkillProgress,
}

impl PortfolioStore {
    pub fn new(theme: ThemeMode, targets: &SkillTargets) -> Self {
        Self {
            theme,
            current_section: Section::Hero,
            is_loading: true,
            skills: SkillProgress::for_targets(targets),
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn cycle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.next();
        self.theme
    }

    pub fn current_section(&self) -> Section {
        self.current_section
    }

    pub fn set_current_section(&mut self, section: Section) {
        self.current_section = section;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn skills(&self) -> &SkillProgress {
        &self.skills
    }

    pub fn reset_skill_progress(&mut self) {
        self.skills.reset();
    }
}

impl ProgressSink for PortfolioStore {
    fn skill_progress(&self, skill: &str) -> Option<Percent> {
        self.skills.skill_progress(skill)
    }

    fn update_skill_progress(
        &mut self,
        skill: &str,
        value: Percent,
    ) -> Result<(), InvalidConfiguration> {
        self.skills.update_skill_progress(skill, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> SkillTargets {
        SkillTargets::new([("React", 90), ("Rust", 80)]).unwrap()
    }

    #[test]
    fn test_progress_starts_at_zero() {
        let store = PortfolioStore::new(ThemeMode::Dark, &targets());
        let values: Vec<_> = store.skills().iter().map(|(_, v)| v.get()).collect();
        assert_eq!(values, vec![0, 0]);
        assert!(store.is_loading());
        assert_eq!(store.current_section(), Section::Hero);
    }

    #[test]
    fn test_update_unknown_skill_rejected() {
        let mut store = PortfolioStore::new(ThemeMode::Dark, &targets());
        let err = store
            .update_skill_progress("Cobol", Percent::FULL)
            .unwrap_err();
        assert_eq!(err, InvalidConfiguration::UnknownSkill("Cobol".to_string()));
    }

    #[test]
    fn test_update_and_reset() {
        let mut store = PortfolioStore::new(ThemeMode::Dark, &targets());
        store
            .update_skill_progress("Rust", Percent::new(40).unwrap())
            .unwrap();
        assert_eq!(store.skill_progress("Rust"), Percent::new(40));
        store.reset_skill_progress();
        assert_eq!(store.skill_progress("Rust"), Some(Percent::ZERO));
    }

    #[test]
    fn test_theme_cycles_in_order() {
        let mut store = PortfolioStore::new(ThemeMode::Light, &targets());
        assert_eq!(store.cycle_theme(), ThemeMode::Dark);
        assert_eq!(store.cycle_theme(), ThemeMode::Colorful);
        assert_eq!(store.cycle_theme(), ThemeMode::Light);
        store.set_theme(ThemeMode::Colorful);
        assert_eq!(store.theme(), ThemeMode::Colorful);
    }

    #[test]
    fn test_theme_mode_names() {
        for mode in ThemeMode::ALL {
            assert_eq!(ThemeMode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }

    #[test]
    fn test_section_navigation_wraps() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::from_index(3), Some(Section::Skills));
        assert_eq!(Section::from_index(5), None);
        assert_eq!(Section::Experience.index(), 2);
    }
}
