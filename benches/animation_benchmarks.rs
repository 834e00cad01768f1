use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use folio::animation::{
    SkillAnimator, SkillAnimatorConfig, SkillTargets, TypingAnimator, TypingConfig, WordList,
};
use folio::store::portfolio_store::SkillProgress;

fn typing_config() -> TypingConfig {
    let words = WordList::new([
        "Full Stack Developer",
        "Product Specialist",
        "Problem Solver",
        "Innovation Driver",
    ])
    .unwrap();
    TypingConfig::with_defaults(words)
}

fn bench_typing_frames(c: &mut Criterion) {
    c.bench_function("typing frames (10k transitions)", |b| {
        b.iter(|| {
            TypingAnimator::frames(typing_config())
                .take(10_000)
                .map(|f| f.text.len())
                .sum::<usize>()
        })
    });
}

fn bench_typing_catch_up(c: &mut Criterion) {
    c.bench_function("typing advance (60s in 16ms ticks)", |b| {
        b.iter(|| {
            let mut anim = TypingAnimator::new(typing_config());
            for _ in 0..3750 {
                anim.advance(black_box(Duration::from_millis(16)));
            }
            anim.state()
        })
    });
}

fn bench_skill_ramp(c: &mut Criterion) {
    let targets = SkillTargets::new((0..64).map(|i| (format!("skill-{i}"), 50 + (i % 50) as u32)))
        .unwrap();

    c.bench_function("skill ramp (64 skills to completion)", |b| {
        b.iter(|| {
            let mut progress = SkillProgress::for_targets(&targets);
            let mut anim = SkillAnimator::new(targets.clone(), SkillAnimatorConfig::default());
            anim.start(&progress);
            while anim.is_running() {
                anim.advance(black_box(Duration::from_millis(16)), &mut progress)
                    .unwrap();
            }
            progress
        })
    });
}

criterion_group!(benches, bench_typing_frames, bench_typing_catch_up, bench_skill_ramp);
criterion_main!(benches);
