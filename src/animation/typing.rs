use std::time::Duration;

use tracing::trace;

use crate::animation::scheduler::{Scheduler, TimerId};
use crate::error::{InvalidConfiguration, require_nonzero};

pub const DEFAULT_TYPING_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_DELETING_SPEED: Duration = Duration::from_millis(50);
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(2000);

/// Non-empty, read-only list of phrases, indexed cyclically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(InvalidConfiguration::EmptyWordList);
        }
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(InvalidConfiguration::EmptyWord { index });
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.words.len()
    }

    pub fn longest(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct TypingConfig {
    pub words: WordList,
    pub typing_speed: Duration,
    pub deleting_speed: Duration,
    pub pause: Duration,
}

impl TypingConfig {
    pub fn new(
        words: WordList,
        typing_speed: Duration,
        deleting_speed: Duration,
        pause: Duration,
    ) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            words,
            typing_speed: require_nonzero("typing speed", typing_speed)?,
            deleting_speed: require_nonzero("deleting speed", deleting_speed)?,
            pause,
        })
    }

    pub fn with_defaults(words: WordList) -> Self {
        Self {
            words,
            typing_speed: DEFAULT_TYPING_SPEED,
            deleting_speed: DEFAULT_DELETING_SPEED,
            pause: DEFAULT_PAUSE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingEvent {
    /// Type or delete one character, depending on the state.
    Step,
    /// End of the pause on a fully typed word.
    BeginDelete,
}

/// Snapshot of the animator. `visible` counts characters of the active word,
/// so the displayed text is a prefix of that word by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingState {
    pub word_index: usize,
    pub visible: usize,
    pub deleting: bool,
}

impl TypingState {
    pub fn text<'w>(&self, words: &'w WordList) -> &'w str {
        let word = words.get(self.word_index);
        match word.char_indices().nth(self.visible) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn is_typing(&self, words: &WordList) -> bool {
        self.deleting || self.visible < words.get(self.word_index).chars().count()
    }

    /// Apply `event` and return the new state together with the event that
    /// should follow it.
    pub fn transition(self, event: TypingEvent, words: &WordList) -> (Self, TypingEvent) {
        let word_len = words.get(self.word_index).chars().count();
        match event {
            TypingEvent::BeginDelete => (
                Self {
                    deleting: true,
                    ..self
                },
                TypingEvent::Step,
            ),
            TypingEvent::Step if self.deleting => {
                let visible = self.visible.saturating_sub(1);
                if visible == 0 {
                    let next = Self {
                        word_index: words.next_index(self.word_index),
                        visible: 0,
                        deleting: false,
                    };
                    (next, TypingEvent::Step)
                } else {
                    (Self { visible, ..self }, TypingEvent::Step)
                }
            }
            TypingEvent::Step => {
                let visible = (self.visible + 1).min(word_len);
                let follow = if visible == word_len {
                    TypingEvent::BeginDelete
                } else {
                    TypingEvent::Step
                };
                (Self { visible, ..self }, follow)
            }
        }
    }
}

/// One observed state of the animation, stamped with the virtual time at
/// which it was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub at: Duration,
    pub text: String,
    pub word_index: usize,
    pub deleting: bool,
    pub is_typing: bool,
}

pub struct TypingAnimator {
    config: TypingConfig,
    state: TypingState,
    scheduler: Scheduler<TypingEvent>,
    timer: Option<TimerId>,
}

impl TypingAnimator {
    pub fn new(config: TypingConfig) -> Self {
        let mut animator = Self {
            config,
            state: TypingState::default(),
            scheduler: Scheduler::new(),
            timer: None,
        };
        animator.arm(TypingEvent::Step);
        animator
    }

    /// Infinite sequence of frames, one per transition.
    pub fn frames(config: TypingConfig) -> TypingFrames {
        TypingFrames {
            animator: Self::new(config),
        }
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn current_text(&self) -> &str {
        self.state.text(&self.config.words)
    }

    pub fn is_typing(&self) -> bool {
        self.state.is_typing(&self.config.words)
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Run every transition that falls due within `elapsed`. Returns whether
    /// anything changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let until = self.scheduler.horizon(elapsed);
        let mut changed = false;
        while let Some((_, event)) = self.scheduler.pop_due(until) {
            self.fire(event);
            changed = true;
        }
        self.scheduler.settle(until);
        changed
    }

    /// Tear down: the pending timer is dropped and the text freezes.
    pub fn cancel(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Back to the first word with nothing typed.
    pub fn restart(&mut self) {
        self.cancel();
        self.state = TypingState::default();
        self.arm(TypingEvent::Step);
    }

    fn fire(&mut self, event: TypingEvent) {
        let (state, follow) = self.state.transition(event, &self.config.words);
        self.state = state;
        trace!(
            word = state.word_index,
            visible = state.visible,
            deleting = state.deleting,
            "typing step"
        );
        self.arm(follow);
    }

    fn arm(&mut self, event: TypingEvent) {
        let delay = match event {
            TypingEvent::BeginDelete => self.config.pause,
            TypingEvent::Step if self.state.deleting => self.config.deleting_speed,
            TypingEvent::Step => self.config.typing_speed,
        };
        self.timer = Some(self.scheduler.schedule(delay, event));
    }

    fn frame(&self) -> TypingFrame {
        TypingFrame {
            at: self.scheduler.now(),
            text: self.current_text().to_string(),
            word_index: self.state.word_index,
            deleting: self.state.deleting,
            is_typing: self.is_typing(),
        }
    }
}

pub struct TypingFrames {
    animator: TypingAnimator,
}

impl Iterator for TypingFrames {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<TypingFrame> {
        let (_, event) = self.animator.scheduler.pop_next()?;
        self.animator.fire(event);
        Some(self.animator.frame())
    }
}
