//! Properties which should hold for every grid size and purpose

use std::collections::HashSet;

use dotplan::{
    baselines, generate_ideas, geometry::mirror_x, synthesize_tags, templates, utils::Rect2,
    Bounds, GridScaler, MAX_IDEAS, V2,
};
use proptest::prelude::*;

/// Words which select templates, plus some which don't
const WORDS: &[&str] = &[
    "fitness", "habit", "meal", "mood", "kanban", "budget", "goal", "time", "sleep", "gratitude",
    "reading", "travel", "selfcare", "creative", "event", "health", "hobby", "social", "home",
    "pet", "garden", "writing", "weekly", "daily", "log", "plan", "my", "notes",
];

fn arb_purpose() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|words| words.join(" "))
}

fn matched_templates(purpose: &str) -> usize {
    let tags = synthesize_tags(purpose, None);
    templates().iter().filter(|t| t.matches(&tags)).count()
}

proptest! {
    #[test]
    fn between_one_and_five_unique_ideas(
        purpose in arb_purpose(),
        width in 5..200i32,
        height in 5..200i32,
    ) {
        let ideas = generate_ideas(&purpose, width, height, None);
        prop_assert!(!ideas.is_empty());
        prop_assert!(ideas.len() <= MAX_IDEAS);
        let titles = ideas.iter().map(|i| &i.title).collect::<HashSet<_>>();
        prop_assert_eq!(titles.len(), ideas.len());
    }

    #[test]
    fn baselines_survive_few_matches(purpose in arb_purpose(), width in 5..200i32, height in 5..200i32) {
        prop_assume!(matched_templates(&purpose) <= MAX_IDEAS - 2);
        let ideas = generate_ideas(&purpose, width, height, None);
        let titles = ideas.iter().map(|i| i.title.as_str()).collect::<Vec<_>>();
        prop_assert!(titles.contains(&"Weekly Overview"));
        prop_assert!(titles.contains(&"Notes Centric"));
    }

    #[test]
    fn generation_is_deterministic(purpose in arb_purpose(), width in 5..200i32, height in 5..200i32) {
        prop_assert_eq!(
            generate_ideas(&purpose, width, height, None),
            generate_ideas(&purpose, width, height, None)
        );
    }

    #[test]
    fn sections_are_non_empty_and_on_the_grid(width in 20..=120i32, height in 20..=120i32) {
        let ideas = templates()
            .iter()
            .map(|t| t.idea(width, height))
            .chain(baselines().iter().map(|g| g(width, height)));
        for idea in ideas {
            for s in &idea.sections {
                prop_assert!(
                    !s.bounds.is_degenerate() && s.bounds.fits_within(width, height),
                    "{} / {}: {:?} on {}x{}", idea.title, s.label, s.bounds, width, height
                );
            }
        }
    }

    #[test]
    fn scaled_sections_stay_in_the_padding(
        width in 5..200i32,
        height in 5..200i32,
        (fx, fy, fw, fh) in (0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64, 0.0..1.0f64),
        landscape in any::<bool>(),
    ) {
        // Any bounds with `x + w <= width` and `y + h <= height`
        let x = (fx * f64::from(width)) as i32;
        let y = (fy * f64::from(height)) as i32;
        let w = (fw * f64::from(width - x)) as i32;
        let h = (fh * f64::from(height - y)) as i32;

        let dest = if landscape { V2::new(800.0, 550.0) } else { V2::new(600.0, 800.0) };
        let pad = 30.0;
        let scaler = GridScaler::new(width, height, dest, pad);
        let padded = Rect2::from_min_size(V2::new(pad, pad), dest - V2::new(pad * 2.0, pad * 2.0));
        let b = Bounds::new(x, y, w, h);
        prop_assert!(padded.contains_rect(&scaler.rect(b), 1e-2));
        prop_assert!(padded.contains_rect(&scaler.rect_mirrored(b), 1e-2));
    }

    #[test]
    fn mirroring_twice_is_identity(x in -500..500i32, w in 0..500i32, width in 5..500i32) {
        prop_assert_eq!(mirror_x(mirror_x(x, w, width), w, width), x);
        let b = Bounds::new(x, 0, w, 1);
        prop_assert_eq!(b.mirrored(width).mirrored(width), b);
    }
}
