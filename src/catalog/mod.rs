//! The catalog of hand-authored layout templates, and the table which decides which of them a
//! set of tags selects.

use crate::{Bounds, LayoutIdea, Section, TagSet};

mod templates;

/// A template generator: given a grid's width and height (in dots), carve it into sections
pub type Generator = fn(i32, i32) -> LayoutIdea;

/// An entry in the template table: a generator, and the tags which select it
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// The template is selected if the tag set contains any of these tags
    pub tags: &'static [&'static str],
    pub generate: Generator,
}

impl Template {
    /// Returns `true` if this template should be suggested for a purpose with these `tags`
    pub fn matches(&self, tags: &TagSet) -> bool {
        self.tags.iter().any(|t| tags.contains(*t))
    }

    pub fn idea(&self, width: i32, height: i32) -> LayoutIdea {
        (self.generate)(width, height)
    }
}

/// Every tag-selected template, in the order they are offered.  This order is also what decides
/// which ideas survive when more match than can be returned.
#[rustfmt::skip]
static TEMPLATES: &[Template] = &[
    Template { tags: &["fitness", "exercise"], generate: templates::fitness_tracker },
    Template { tags: &["habit", "tracker"], generate: templates::habit_tracker },
    Template { tags: &["meal", "nutrition"], generate: templates::meal_planner },
    Template { tags: &["mood", "emotion"], generate: templates::mood_tracker },
    Template { tags: &["project", "kanban"], generate: templates::project_kanban },
    Template { tags: &["finance", "budget"], generate: templates::finance_budget },
    Template { tags: &["goal"], generate: templates::goal_planner },
    Template { tags: &["time"], generate: templates::time_management },
    Template { tags: &["sleep"], generate: templates::sleep_tracker },
    Template { tags: &["gratitude"], generate: templates::gratitude_log },
    Template { tags: &["reading", "learning"], generate: templates::reading_learning },
    Template { tags: &["travel"], generate: templates::travel_planner },
    Template { tags: &["selfcare"], generate: templates::self_care },
    Template { tags: &["creative"], generate: templates::creative_board },
    Template { tags: &["event"], generate: templates::event_planner },
    Template { tags: &["health"], generate: templates::health_log },
    Template { tags: &["hobby"], generate: templates::hobby_practice },
    Template { tags: &["social"], generate: templates::social_connections },
    Template { tags: &["home"], generate: templates::home_management },
    Template { tags: &["pet"], generate: templates::pet_care },
    Template { tags: &["seasonal"], generate: templates::seasonal_planner },
    Template { tags: &["minimal"], generate: templates::minimalism_tracker },
    Template { tags: &["memory"], generate: templates::memory_keeper },
    Template { tags: &["dream"], generate: templates::dream_journal },
    Template { tags: &["productivity"], generate: templates::productivity_system },
    Template { tags: &["sustain"], generate: templates::sustainability_tracker },
    Template { tags: &["growth"], generate: templates::growth_reflection },
    Template { tags: &["collection"], generate: templates::collection_tracker },
    Template { tags: &["gaming"], generate: templates::gaming_log },
    Template { tags: &["language"], generate: templates::language_learning },
    Template { tags: &["spiritual"], generate: templates::spiritual_tracker },
    Template { tags: &["career"], generate: templates::career_networking },
    Template { tags: &["garden"], generate: templates::garden_planner },
    Template { tags: &["volunteer"], generate: templates::volunteer_log },
    Template { tags: &["fashion"], generate: templates::fashion_style },
    Template { tags: &["writing"], generate: templates::writing_planner },
];

/// Layouts which are offered regardless of tags, after every tag-selected template
static BASELINES: &[Generator] = &[templates::weekly_overview, templates::notes_centric];

/// The ordered table of tag-selected templates
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

/// The generators which always run, in the order they are appended
pub fn baselines() -> &'static [Generator] {
    BASELINES
}

/// The idea used if, somehow, nothing else was generated
pub(crate) fn fallback(width: i32, height: i32) -> LayoutIdea {
    templates::notes_centric(width, height)
}

///////////////////////////////
// HELPERS FOR THE TEMPLATES //
///////////////////////////////

/// `ratio` of `total`, rounded down
pub(crate) fn proportion(total: i32, ratio: f64) -> i32 {
    (f64::from(total) * ratio).floor() as i32
}

/// Splits a span into two parts which always sum to `span`: the first rounded down and the
/// second rounded up.
pub(crate) fn halves(span: i32) -> (i32, i32) {
    let first = span.div_euclid(2);
    (first, span - first)
}

/// Carves a grid into horizontal bands from the top down, leaving a one-dot gap under each band
/// for a hand-drawn separator.
#[derive(Debug, Clone)]
pub(crate) struct LayoutBuilder {
    width: i32,
    height: i32,
    /// The y-coordinate at which the next band will start
    next_y: i32,
    sections: Vec<Section>,
}

impl LayoutBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            next_y: 0,
            sections: Vec::new(),
        }
    }

    pub fn next_y(&self) -> i32 {
        self.next_y
    }

    /// How tall a band would be if it took up the rest of the page (keeping a one-dot margin at
    /// the bottom)
    pub fn remaining_height(&self) -> i32 {
        self.height - self.next_y - 1
    }

    /// Adds a band spanning the full width of the page
    pub fn band(&mut self, label: &str, band_height: i32) -> &mut Self {
        let bounds = Bounds::new(0, self.next_y, self.width - 1, band_height);
        self.push(label, bounds);
        self.next_y += band_height + 1;
        self
    }

    /// Adds two side-by-side sections, with the split placed `left_ratio` of the way across
    pub fn split_band(
        &mut self,
        left: &str,
        right: &str,
        band_height: i32,
        left_ratio: f64,
    ) -> &mut Self {
        let split = proportion(self.width, left_ratio);
        let y = self.next_y;
        self.push(left, Bounds::new(0, y, split - 2, band_height));
        self.push(right, Bounds::new(split, y, self.width - split - 1, band_height));
        self.next_y += band_height + 1;
        self
    }

    /// Fills the rest of the page with one full-width band
    pub fn rest(&mut self, label: &str) -> &mut Self {
        self.band(label, self.remaining_height())
    }

    /// Fills the rest of the page with two sections split down the middle
    pub fn split_rest(&mut self, left: &str, right: &str) -> &mut Self {
        self.split_band(left, right, self.remaining_height(), 0.5)
    }

    /// Adds a section with explicit bounds, without moving down the page
    pub fn push(&mut self, label: &str, bounds: Bounds) -> &mut Self {
        self.sections.push(Section::new(label, bounds));
        self
    }

    pub fn into_idea(self, title: &str, description: &str) -> LayoutIdea {
        LayoutIdea::new(title, description, self.sections)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;

    fn tags(words: &[&str]) -> TagSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn halves_sum_to_span() {
        assert_eq!(halves(30), (15, 15));
        assert_eq!(halves(31), (15, 16));
        for span in 0..100 {
            let (a, b) = halves(span);
            assert_eq!(a + b, span);
        }
    }

    #[test]
    fn proportion_rounds_down() {
        assert_eq!(proportion(40, 0.07), 2);
        assert_eq!(proportion(40, 0.45), 18);
        assert_eq!(proportion(30, 0.55), 16);
    }

    #[test]
    fn table_has_unique_titles() {
        let titles = templates()
            .iter()
            .map(|t| t.idea(30, 40).title)
            .chain(baselines().iter().map(|g| g(30, 40).title))
            .collect_vec();
        assert_eq!(titles.len(), 38);
        assert_eq!(titles.iter().collect::<HashSet<_>>().len(), titles.len());
    }

    #[test]
    fn templates_match_any_of_their_tags() {
        let fitness = &templates()[0];
        assert!(fitness.matches(&tags(&["exercise"])));
        assert!(fitness.matches(&tags(&["daily", "fitness"])));
        assert!(!fitness.matches(&tags(&["fit"])));
    }

    #[test]
    fn every_template_has_several_sections() {
        for template in templates() {
            let idea = template.idea(30, 40);
            // Meal Planner is the largest: a header over a 3x3 grid of blocks
            assert!(
                (2..=10).contains(&idea.sections.len()),
                "{} has {} sections",
                idea.title,
                idea.sections.len()
            );
        }
    }

    #[test]
    fn builder_leaves_one_dot_gaps() {
        let mut page = LayoutBuilder::new(30, 40);
        page.band("Header", 3)
            .split_band("Left", "Right", 10, 0.5)
            .rest("Footer");
        let idea = page.into_idea("Test", "");
        let bounds = idea.sections.iter().map(|s| s.bounds).collect_vec();
        assert_eq!(
            bounds,
            vec![
                Bounds::new(0, 0, 29, 3),
                Bounds::new(0, 4, 13, 10),
                Bounds::new(15, 4, 14, 10),
                Bounds::new(0, 15, 29, 24),
            ]
        );
    }
}
