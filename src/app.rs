use std::time::Duration;

use tracing::{debug, info};

use crate::animation::scheduler::{Scheduler, TimerId};
use crate::animation::skills::SkillAnimator;
use crate::animation::typing::{TypingAnimator, TypingConfig};
use crate::config::Config;
use crate::error::InvalidConfiguration;
use crate::store::content::Portfolio;
use crate::store::portfolio_store::{PortfolioStore, Section, ThemeMode};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiTimer {
    RevealSkills,
}

pub struct App {
    pub store: PortfolioStore,
    pub portfolio: Portfolio,
    pub theme: Theme,
    pub should_quit: bool,
    pub experience_selected: usize,
    pub skill_category: usize,
    pub message_selected: usize,
    pub skills_revealed: bool,
    typing_config: TypingConfig,
    typing: Option<TypingAnimator>,
    skills: SkillAnimator,
    ui_timers: Scheduler<UiTimer>,
    reveal_timer: Option<TimerId>,
    reveal_delay: Duration,
}

impl App {
    pub fn new(
        config: &Config,
        portfolio: Portfolio,
        mode: ThemeMode,
    ) -> Result<Self, InvalidConfiguration> {
        let typing_config = config.typing_config(portfolio.role_words()?)?;
        let targets = portfolio.skill_targets()?;
        let skills = SkillAnimator::new(targets.clone(), config.skill_animator_config()?);
        let store = PortfolioStore::new(mode, &targets);

        let mut app = Self {
            store,
            portfolio,
            theme: Theme::for_mode(mode),
            should_quit: false,
            experience_selected: 0,
            skill_category: 0,
            message_selected: 0,
            skills_revealed: false,
            typing_config,
            typing: None,
            skills,
            ui_timers: Scheduler::new(),
            reveal_timer: None,
            reveal_delay: config.skill_reveal_delay(),
        };
        app.enter(Section::Hero);
        Ok(app)
    }

    pub fn section(&self) -> Section {
        self.store.current_section()
    }

    pub fn go_to(&mut self, section: Section) {
        let current = self.section();
        if current == section {
            return;
        }
        self.leave(current);
        self.store.set_current_section(section);
        self.enter(section);
        debug!(from = ?current, to = ?section, "section changed");
    }

    pub fn next_section(&mut self) {
        self.go_to(self.section().next());
    }

    pub fn prev_section(&mut self) {
        self.go_to(self.section().prev());
    }

    pub fn cycle_theme(&mut self) {
        let mode = self.store.cycle_theme();
        self.theme = Theme::for_mode(mode);
        info!(theme = mode.as_str(), "theme changed");
    }

    pub fn typed_text(&self) -> &str {
        self.typing.as_ref().map_or("", |t| t.current_text())
    }

    pub fn is_typing(&self) -> bool {
        self.typing.as_ref().is_some_and(|t| t.is_typing())
    }

    pub fn typing_active(&self) -> bool {
        self.typing.as_ref().is_some_and(|t| t.is_active())
    }

    pub fn skills_animating(&self) -> bool {
        self.skills.is_running()
    }

    pub fn quick_message(&self) -> Option<&str> {
        let messages = &self.portfolio.quick_messages;
        if messages.is_empty() {
            return None;
        }
        Some(messages[self.message_selected % messages.len()].as_str())
    }

    pub fn next_message(&mut self) {
        let n = self.portfolio.quick_messages.len();
        if n > 0 {
            self.message_selected = (self.message_selected + 1) % n;
        }
    }

    pub fn select_next_job(&mut self) {
        let n = self.portfolio.experience.len();
        if n > 0 {
            self.experience_selected = (self.experience_selected + 1).min(n - 1);
        }
    }

    pub fn select_prev_job(&mut self) {
        self.experience_selected = self.experience_selected.saturating_sub(1);
    }

    pub fn next_skill_category(&mut self) {
        let n = self.portfolio.skill_categories.len();
        if n > 0 {
            self.skill_category = (self.skill_category + 1) % n;
        }
    }

    pub fn prev_skill_category(&mut self) {
        let n = self.portfolio.skill_categories.len();
        if n > 0 {
            self.skill_category = (self.skill_category + n - 1) % n;
        }
    }

    /// Advance every live timer by `elapsed` of wall-clock time.
    pub fn tick(&mut self, elapsed: Duration) -> Result<bool, InvalidConfiguration> {
        let until = self.ui_timers.horizon(elapsed);
        let mut skills_window = elapsed;
        let mut changed = false;
        while let Some((_, timer)) = self.ui_timers.pop_due(until) {
            match timer {
                UiTimer::RevealSkills => {
                    self.reveal_timer = None;
                    self.skills_revealed = true;
                    self.skills.start(&self.store);
                    // the ramps only get the part of this window after the reveal
                    skills_window = until - self.ui_timers.now();
                    changed = true;
                }
            }
        }
        self.ui_timers.settle(until);

        if let Some(typing) = self.typing.as_mut() {
            changed |= typing.advance(elapsed);
        }
        changed |= self.skills.advance(skills_window, &mut self.store)?;
        Ok(changed)
    }

    fn enter(&mut self, section: Section) {
        match section {
            Section::Hero => {
                self.typing = Some(TypingAnimator::new(self.typing_config.clone()));
            }
            Section::Skills => {
                self.store.reset_skill_progress();
                self.skills_revealed = false;
                self.reveal_timer = Some(
                    self.ui_timers
                        .schedule(self.reveal_delay, UiTimer::RevealSkills),
                );
            }
            Section::About | Section::Experience | Section::Contact => {}
        }
    }

    fn leave(&mut self, section: Section) {
        match section {
            Section::Hero => {
                if let Some(mut typing) = self.typing.take() {
                    typing.cancel();
                }
            }
            Section::Skills => {
                if let Some(id) = self.reveal_timer.take() {
                    self.ui_timers.cancel(id);
                }
                self.skills.cancel();
            }
            Section::About | Section::Experience | Section::Contact => {}
        }
    }
}
