//! Choosing which layout ideas to offer for a purpose.

use itertools::Itertools;
use log::debug;

use crate::{
    catalog::{self, baselines, templates},
    synthesize_tags, Error, LayoutIdea, PromptConfig, Result,
};

/// The most ideas [`generate_ideas`] will ever return
pub const MAX_IDEAS: usize = 5;
/// The purpose assumed when the caller gives a blank one
pub const DEFAULT_PURPOSE: &str = "general";

/// Suggests between 1 and [`MAX_IDEAS`] layouts for a `width` by `height` dot grid (both of
/// which should be at least 5).
///
/// Every template whose tags match the purpose is generated, in table order, followed by the
/// baseline layouts.  Ideas with duplicate titles are dropped (keeping the first) and the list is
/// then cut down to [`MAX_IDEAS`], so the baselines only survive if fewer than
/// `MAX_IDEAS - 1` templates matched.
///
/// The output depends only on the arguments.
pub fn generate_ideas(
    purpose: &str,
    width: i32,
    height: i32,
    config: Option<&PromptConfig>,
) -> Vec<LayoutIdea> {
    let purpose = match purpose.trim() {
        "" => DEFAULT_PURPOSE.to_owned(),
        p => p.to_lowercase(),
    };
    let tags = synthesize_tags(&purpose, config);
    debug!("Tags for {:?}: {:?}", purpose, tags.iter().sorted().collect_vec());

    let matched = templates()
        .iter()
        .filter(|t| t.matches(&tags))
        .map(|t| t.idea(width, height))
        .collect_vec();
    debug!("{} templates matched", matched.len());

    let mut ideas = matched
        .into_iter()
        .chain(baselines().iter().map(|generate| generate(width, height)))
        .unique_by(|idea| idea.title.clone())
        .collect_vec();
    if ideas.is_empty() {
        ideas.push(catalog::fallback(width, height));
    }
    ideas.truncate(MAX_IDEAS);
    ideas
}

/// Picks the idea at (0-based) `index` out of `ideas`, or the first idea if `index` is `None`
pub fn pick_idea(ideas: &[LayoutIdea], index: Option<usize>) -> Result<&LayoutIdea> {
    let index = index.unwrap_or(0);
    ideas.get(index).ok_or(Error::IdeaOutOfRange {
        index,
        len: ideas.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn titles(ideas: &[LayoutIdea]) -> Vec<&str> {
        ideas.iter().map(|i| i.title.as_str()).collect_vec()
    }

    #[test]
    fn weekly_habit_tracker() {
        let ideas = generate_ideas("weekly habit tracker", 30, 40, None);
        assert_eq!(
            titles(&ideas),
            vec!["Habit Tracker", "Weekly Overview", "Notes Centric"]
        );
    }

    #[test]
    fn blank_purpose_gives_baselines() {
        for purpose in ["", "   ", "\t\n"] {
            let ideas = generate_ideas(purpose, 20, 30, None);
            assert_eq!(titles(&ideas), vec!["Weekly Overview", "Notes Centric"]);
        }
    }

    #[test]
    fn purpose_is_case_insensitive() {
        assert_eq!(
            generate_ideas("  TRAVEL Plans ", 30, 40, None),
            generate_ideas("travel plans", 30, 40, None)
        );
    }

    #[test]
    fn table_order_decides_truncation() {
        let ideas = generate_ideas("fitness habit meal mood project finance", 30, 40, None);
        assert_eq!(
            titles(&ideas),
            vec![
                "Fitness Tracker",
                "Habit Tracker",
                "Meal Planner",
                "Mood Tracker",
                "Project Kanban"
            ]
        );
    }

    #[test]
    fn four_matches_keep_one_baseline() {
        let ideas = generate_ideas("fitness habit meal mood", 30, 40, None);
        assert_eq!(ideas.len(), MAX_IDEAS);
        assert_eq!(ideas[4].title, "Weekly Overview");
    }

    #[test]
    fn synonyms_widen_matches() {
        let config = PromptConfig {
            synonyms: [("nutrition".to_owned(), vec!["prep".to_owned()])]
                .into_iter()
                .collect(),
        };
        let without = generate_ideas("sunday prep", 30, 40, None);
        let with = generate_ideas("sunday prep", 30, 40, Some(&config));
        assert!(!titles(&without).contains(&"Meal Planner"));
        assert_eq!(titles(&with)[0], "Meal Planner");
    }

    #[test]
    fn titles_are_unique_and_deterministic() {
        let a = generate_ideas("garden writing career travel", 45, 60, None);
        let b = generate_ideas("garden writing career travel", 45, 60, None);
        assert_eq!(a, b);
        let unique = a.iter().map(|i| &i.title).collect::<HashSet<_>>();
        assert_eq!(unique.len(), a.len());
    }

    #[test]
    fn picking() {
        let ideas = generate_ideas("sleep", 30, 40, None);
        assert_eq!(pick_idea(&ideas, None).unwrap().title, "Sleep Tracker");
        assert_eq!(pick_idea(&ideas, Some(2)).unwrap().title, "Notes Centric");
        assert!(matches!(
            pick_idea(&ideas, Some(3)),
            Err(Error::IdeaOutOfRange { index: 3, len: 3 })
        ));
    }
}
