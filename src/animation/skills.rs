use std::fmt;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::animation::scheduler::{Scheduler, TimerId};
use crate::error::{InvalidConfiguration, require_nonzero};

pub const DEFAULT_STEP: u8 = 2;
pub const DEFAULT_TICK: Duration = Duration::from_millis(30);
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(200);

/// Whole percentage in 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    pub fn new(value: u32) -> Option<Self> {
        (value <= 100).then_some(Percent(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn ratio(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self + step`, never past `cap`.
    pub fn step_toward(self, step: u8, cap: Percent) -> Percent {
        Percent(self.0.saturating_add(step).min(cap.0))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Ordered skill -> target mapping. Order is insertion order and decides
/// each skill's stagger slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillTargets {
    entries: Vec<(String, Percent)>,
}

impl SkillTargets {
    pub fn new<I, S>(targets: I) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, Percent)> = Vec::new();
        for (name, value) in targets {
            let name = name.into();
            let Some(target) = Percent::new(value) else {
                return Err(InvalidConfiguration::TargetOutOfRange { skill: name, value });
            };
            if entries.iter().any(|(n, _)| *n == name) {
                return Err(InvalidConfiguration::DuplicateSkill(name));
            }
            entries.push((name, target));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, skill: &str) -> Option<Percent> {
        self.entries
            .iter()
            .find(|(n, _)| n == skill)
            .map(|&(_, t)| t)
    }

    pub fn position(&self, skill: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Percent)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), *t))
    }
}

/// Where the animator reads and writes displayed progress.
pub trait ProgressSink {
    fn skill_progress(&self, skill: &str) -> Option<Percent>;
    fn update_skill_progress(&mut self, skill: &str, value: Percent)
    -> Result<(), InvalidConfiguration>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillAnimatorConfig {
    pub step: u8,
    pub tick: Duration,
    pub stagger: Duration,
}

impl Default for SkillAnimatorConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tick: DEFAULT_TICK,
            stagger: DEFAULT_STAGGER,
        }
    }
}

impl SkillAnimatorConfig {
    pub fn new(step: u32, tick: Duration, stagger: Duration) -> Result<Self, InvalidConfiguration> {
        if !(1..=100).contains(&step) {
            return Err(InvalidConfiguration::InvalidStep(step));
        }
        Ok(Self {
            step: step as u8,
            tick: require_nonzero("skill tick", tick)?,
            stagger,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampPhase {
    Pending,
    Ramping,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SkillEvent {
    Begin(usize),
    Tick { index: usize, value: Percent },
}

/// Ramps every skill from its current progress to its target, staggering
/// the start of each ramp by its position.
pub struct SkillAnimator {
    targets: SkillTargets,
    config: SkillAnimatorConfig,
    scheduler: Scheduler<SkillEvent>,
    phases: Vec<RampPhase>,
    timers: Vec<Option<TimerId>>,
}

impl SkillAnimator {
    pub fn new(targets: SkillTargets, config: SkillAnimatorConfig) -> Self {
        let n = targets.len();
        Self {
            targets,
            config,
            scheduler: Scheduler::new(),
            phases: vec![RampPhase::Pending; n],
            timers: vec![None; n],
        }
    }

    pub fn targets(&self) -> &SkillTargets {
        &self.targets
    }

    pub fn config(&self) -> SkillAnimatorConfig {
        self.config
    }

    /// Arm (or re-arm) the ramps of every skill that has not reached its
    /// target. Progress already made is kept; reset the sink first for a
    /// full replay.
    pub fn start(&mut self, sink: &impl ProgressSink) {
        self.cancel();
        for (index, (name, target)) in self.targets.iter().enumerate() {
            let current = sink.skill_progress(name).unwrap_or(Percent::ZERO);
            if current >= target {
                self.phases[index] = RampPhase::Complete;
                continue;
            }
            self.phases[index] = RampPhase::Pending;
            let delay = self.config.stagger.saturating_mul(index as u32);
            self.timers[index] = Some(self.scheduler.schedule(delay, SkillEvent::Begin(index)));
        }
        debug!(armed = self.scheduler.pending(), "skill animation started");
    }

    /// Run every ramp step that falls due within `elapsed`.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        sink: &mut impl ProgressSink,
    ) -> Result<bool, InvalidConfiguration> {
        let until = self.scheduler.horizon(elapsed);
        let mut changed = false;
        let mut failure = None;
        while let Some((_, event)) = self.scheduler.pop_due(until) {
            match self.fire(event, sink) {
                Ok(()) => changed = true,
                Err(err) => {
                    warn!(%err, "skill ramp stopped");
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
            }
        }
        self.scheduler.settle(until);
        match failure {
            Some(err) => Err(err),
            None => Ok(changed),
        }
    }

    /// Drop every armed timer. No write reaches the sink after this, and
    /// unfinished skills go back to [`RampPhase::Pending`].
    pub fn cancel(&mut self) {
        for (timer, phase) in self.timers.iter_mut().zip(&mut self.phases) {
            if let Some(id) = timer.take() {
                self.scheduler.cancel(id);
            }
            if *phase != RampPhase::Complete {
                *phase = RampPhase::Pending;
            }
        }
    }

    pub fn phase(&self, index: usize) -> Option<RampPhase> {
        self.phases.get(index).copied()
    }

    pub fn phase_of(&self, skill: &str) -> Option<RampPhase> {
        self.targets.position(skill).and_then(|i| self.phase(i))
    }

    pub fn is_running(&self) -> bool {
        self.timers.iter().any(Option::is_some)
    }

    pub fn is_complete(&self) -> bool {
        self.phases.iter().all(|p| *p == RampPhase::Complete)
    }

    fn fire(
        &mut self,
        event: SkillEvent,
        sink: &mut impl ProgressSink,
    ) -> Result<(), InvalidConfiguration> {
        match event {
            SkillEvent::Begin(index) => {
                let (name, _) = self.entry(index);
                let value = sink.skill_progress(name).unwrap_or(Percent::ZERO);
                self.phases[index] = RampPhase::Ramping;
                self.timers[index] = Some(
                    self.scheduler
                        .schedule(self.config.tick, SkillEvent::Tick { index, value }),
                );
            }
            SkillEvent::Tick { index, value } => {
                let (name, target) = self.entry(index);
                let next = value.step_toward(self.config.step, target);
                let name = name.to_string();
                self.timers[index] = None;
                if let Err(err) = sink.update_skill_progress(&name, next) {
                    self.phases[index] = RampPhase::Pending;
                    return Err(err);
                }
                trace!(skill = %name, progress = next.get(), "skill tick");
                if next >= target {
                    self.phases[index] = RampPhase::Complete;
                    debug!(skill = %name, "skill ramp complete");
                } else {
                    self.timers[index] = Some(self.scheduler.schedule(
                        self.config.tick,
                        SkillEvent::Tick { index, value: next },
                    ));
                }
            }
        }
        Ok(())
    }

    fn entry(&self, index: usize) -> (&str, Percent) {
        let (name, target) = &self.targets.entries[index];
        (name.as_str(), *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::portfolio_store::SkillProgress;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn fast() -> SkillAnimatorConfig {
        SkillAnimatorConfig::new(2, ms(1), ms(0)).unwrap()
    }

    fn a10_b4() -> SkillTargets {
        SkillTargets::new([("A", 10), ("B", 4)]).unwrap()
    }

    fn trace_values(
        anim: &mut SkillAnimator,
        progress: &mut SkillProgress,
        skill: &str,
        steps: usize,
    ) -> Vec<u8> {
        let mut seen = vec![progress.skill_progress(skill).unwrap().get()];
        for _ in 0..steps {
            anim.advance(ms(1), progress).unwrap();
            let v = progress.skill_progress(skill).unwrap().get();
            if *seen.last().unwrap() != v {
                seen.push(v);
            }
        }
        seen
    }

    #[test]
    fn test_targets_reject_out_of_range() {
        let err = SkillTargets::new([("Rust", 101)]).unwrap_err();
        assert_eq!(
            err,
            InvalidConfiguration::TargetOutOfRange {
                skill: "Rust".to_string(),
                value: 101
            }
        );
    }

    #[test]
    fn test_targets_reject_duplicates() {
        let err = SkillTargets::new([("Rust", 10), ("Rust", 20)]).unwrap_err();
        assert_eq!(err, InvalidConfiguration::DuplicateSkill("Rust".to_string()));
    }

    #[test]
    fn test_targets_keep_insertion_order() {
        let targets = SkillTargets::new([("z", 1), ("a", 2), ("m", 3)]).unwrap();
        let names: Vec<_> = targets.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            SkillAnimatorConfig::new(0, ms(30), ms(0)).unwrap_err(),
            InvalidConfiguration::InvalidStep(0)
        );
        assert!(SkillAnimatorConfig::new(101, ms(30), ms(0)).is_err());
        assert!(SkillAnimatorConfig::new(2, ms(0), ms(0)).is_err());
        assert_eq!(SkillAnimatorConfig::default().step, 2);
    }

    #[test]
    fn test_ramp_sequences_clamp_at_target() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets.clone(), fast());
        anim.start(&progress);

        let mut a = vec![0u8];
        let mut b = vec![0u8];
        for _ in 0..20 {
            anim.advance(ms(1), &mut progress).unwrap();
            for (skill, seen) in [("A", &mut a), ("B", &mut b)] {
                let v = progress.skill_progress(skill).unwrap().get();
                if *seen.last().unwrap() != v {
                    seen.push(v);
                }
            }
        }
        assert_eq!(a, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(b, vec![0, 2, 4]);
        assert!(anim.is_complete());
        assert!(!anim.is_running());
    }

    #[test]
    fn test_odd_target_clamps() {
        let targets = SkillTargets::new([("X", 5)]).unwrap();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        assert_eq!(trace_values(&mut anim, &mut progress, "X", 10), vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_stagger_delays_later_skills() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let config = SkillAnimatorConfig::new(2, ms(30), ms(200)).unwrap();
        let mut anim = SkillAnimator::new(targets, config);
        anim.start(&progress);

        anim.advance(ms(30), &mut progress).unwrap();
        assert_eq!(progress.skill_progress("A"), Percent::new(2));
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Pending));

        // B begins at 200ms, first increment at 230ms
        anim.advance(ms(199), &mut progress).unwrap();
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Ramping));
        assert_eq!(progress.skill_progress("B"), Some(Percent::ZERO));
        anim.advance(ms(1), &mut progress).unwrap();
        assert_eq!(progress.skill_progress("B"), Percent::new(2));
    }

    #[test]
    fn test_phases() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        assert_eq!(anim.phase(0), Some(RampPhase::Pending));
        anim.advance(ms(0), &mut progress).unwrap();
        assert_eq!(anim.phase(0), Some(RampPhase::Ramping));
        anim.advance(ms(2), &mut progress).unwrap();
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Complete));
        assert_eq!(anim.phase_of("A"), Some(RampPhase::Ramping));
        assert_eq!(anim.phase(7), None);
    }

    #[test]
    fn test_cancel_freezes_progress() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        anim.advance(ms(2), &mut progress).unwrap();
        anim.cancel();
        let frozen = progress.clone();
        assert!(!anim.advance(ms(500), &mut progress).unwrap());
        assert_eq!(progress, frozen);
        assert_eq!(progress.skill_progress("A"), Percent::new(4));
        assert_eq!(anim.phase_of("A"), Some(RampPhase::Pending));
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Complete));
        anim.cancel();
    }

    #[test]
    fn test_failed_write_stops_only_that_ramp() {
        let targets = SkillTargets::new([("A", 10), ("B", 10)]).unwrap();
        let mut only_b = SkillProgress::for_targets(&SkillTargets::new([("B", 10)]).unwrap());
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&only_b);

        let err = anim.advance(ms(1), &mut only_b).unwrap_err();
        assert_eq!(err, InvalidConfiguration::UnknownSkill("A".to_string()));
        assert_eq!(only_b.skill_progress("B"), Percent::new(2));
        assert_eq!(anim.phase_of("A"), Some(RampPhase::Pending));

        for _ in 0..5 {
            anim.advance(ms(1), &mut only_b).unwrap();
        }
        assert_eq!(only_b.skill_progress("B"), Percent::new(10));
        assert_eq!(anim.phase_of("A"), Some(RampPhase::Pending));
        assert!(!anim.is_running());
    }

    #[test]
    fn test_huge_stagger_does_not_overflow() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let config = SkillAnimatorConfig::new(2, ms(1), Duration::MAX).unwrap();
        let mut anim = SkillAnimator::new(targets, config);
        anim.start(&progress);
        anim.advance(ms(5), &mut progress).unwrap();
        assert_eq!(progress.skill_progress("A"), Percent::new(10));
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Pending));
        assert!(anim.is_running());
    }

    #[test]
    fn test_restart_without_reset_resumes() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        anim.advance(ms(3), &mut progress).unwrap();
        assert_eq!(progress.skill_progress("A"), Percent::new(6));

        anim.start(&progress);
        assert_eq!(anim.phase_of("B"), Some(RampPhase::Complete));
        assert_eq!(progress.skill_progress("A"), Percent::new(6));
        anim.advance(ms(0), &mut progress).unwrap();
        anim.advance(ms(1), &mut progress).unwrap();
        assert_eq!(progress.skill_progress("A"), Percent::new(8));
        assert_eq!(progress.skill_progress("B"), Percent::new(4));
    }

    #[test]
    fn test_restart_after_reset_replays() {
        let targets = a10_b4();
        let mut progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        anim.advance(ms(50), &mut progress).unwrap();
        assert!(anim.is_complete());

        progress.reset();
        anim.start(&progress);
        assert_eq!(trace_values(&mut anim, &mut progress, "A", 10), vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_zero_target_is_complete_immediately() {
        let targets = SkillTargets::new([("none", 0)]).unwrap();
        let progress = SkillProgress::for_targets(&targets);
        let mut anim = SkillAnimator::new(targets, fast());
        anim.start(&progress);
        assert!(anim.is_complete());
        assert!(!anim.is_running());
    }
}
