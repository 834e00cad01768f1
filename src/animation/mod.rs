pub mod scheduler;
pub mod skills;
pub mod typing;

pub use scheduler::{Scheduler, TimerId};
pub use skills::{Percent, ProgressSink, RampPhase, SkillAnimator, SkillAnimatorConfig, SkillTargets};
pub use typing::{TypingAnimator, TypingConfig, TypingFrame, TypingState, WordList};
