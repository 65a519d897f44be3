//! Serializing a [`LayoutIdea`] into a Markdown description which can be copied into a journal
//! by hand.

use std::{fs, path::Path};

use log::info;

use crate::{utils::slug, Error, LayoutIdea, Result};

/// The instructions printed under every list of sections
pub const COPY_GUIDELINES: &str = "Draw boundary lines along the listed coordinates, counting \
    from the top-left corner (0-based). The width (w) and height (h) values indicate how many \
    dots span horizontally and vertically.";
/// Printed in place of the section list for an idea with no sections
pub const FREE_FORM_PLACEHOLDER: &str = "_No defined sections—free-form grid._";
pub const FOOTER: &str = "*Generated locally by Dot Journal Planner*";

/// Generates the Markdown description of `idea` on a `width_dots` by `height_dots` grid.  The
/// lines are joined with `\n`, with no trailing newline.
pub fn markdown_for_idea(idea: &LayoutIdea, width_dots: i32, height_dots: i32) -> String {
    let mut lines = vec![
        format!("# {}", idea.title),
        String::new(),
        format!("Dimensions: {} x {} dots", width_dots, height_dots),
        String::new(),
    ];
    if !idea.description.is_empty() {
        lines.push(idea.description.clone());
        lines.push(String::new());
    }

    if idea.has_sections() {
        lines.push("## Sections".to_owned());
        lines.push(String::new());
        for s in &idea.sections {
            let b = s.bounds;
            lines.push(format!(
                "- **{}**: x={}, y={}, w={}, h={}",
                s.label, b.x, b.y, b.w, b.h
            ));
        }
        lines.push(String::new());
        lines.push("### Copy Guidelines".to_owned());
        lines.push(COPY_GUIDELINES.to_owned());
    } else {
        lines.push(FREE_FORM_PLACEHOLDER.to_owned());
    }

    lines.push(String::new());
    lines.push("---".to_owned());
    lines.push(FOOTER.to_owned());
    lines.join("\n")
}

/// The name under which [`export_markdown`] saves `idea`, e.g. `habit-tracker-30x40.md`
pub fn markdown_file_name(idea: &LayoutIdea, width_dots: i32, height_dots: i32) -> String {
    format!("{}-{}x{}.md", slug(&idea.title), width_dots, height_dots)
}

/// Writes the Markdown for `idea` into `dir`, returning the file name used
pub fn export_markdown(
    idea: &LayoutIdea,
    width_dots: i32,
    height_dots: i32,
    dir: &Path,
) -> Result<String> {
    let file_name = markdown_file_name(idea, width_dots, height_dots);
    let path = dir.join(&file_name);
    fs::write(&path, markdown_for_idea(idea, width_dots, height_dots))
        .map_err(Error::io(&path))?;
    info!("Wrote Markdown to {}", path.display());
    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bounds, Section};

    fn two_sections() -> LayoutIdea {
        LayoutIdea::new(
            "Habit Tracker",
            "Daily habit grid.",
            vec![
                Section::new("Habits", Bounds::new(0, 0, 29, 2)),
                Section::new("Notes", Bounds::new(0, 3, 29, 36)),
            ],
        )
    }

    #[test]
    fn exact_output_with_sections() {
        let expected = "# Habit Tracker

Dimensions: 30 x 40 dots

Daily habit grid.

## Sections

- **Habits**: x=0, y=0, w=29, h=2
- **Notes**: x=0, y=3, w=29, h=36

### Copy Guidelines
Draw boundary lines along the listed coordinates, counting from the top-left corner (0-based). \
The width (w) and height (h) values indicate how many dots span horizontally and vertically.

---
*Generated locally by Dot Journal Planner*";
        assert_eq!(markdown_for_idea(&two_sections(), 30, 40), expected);
    }

    #[test]
    fn free_form_placeholder() {
        let idea = LayoutIdea::new("Blank", "", vec![]);
        let expected = "# Blank

Dimensions: 5 x 5 dots

_No defined sections—free-form grid._

---
*Generated locally by Dot Journal Planner*";
        assert_eq!(markdown_for_idea(&idea, 5, 5), expected);
    }

    #[test]
    fn dimensions_are_second_non_blank_line() {
        let md = markdown_for_idea(&two_sections(), 20, 30);
        let line = md.lines().filter(|l| !l.is_empty()).nth(1);
        assert_eq!(line, Some("Dimensions: 20 x 30 dots"));
        assert!(!md.ends_with('\n'));
    }

    #[test]
    fn file_names_are_slugged() {
        let idea = LayoutIdea::new("Self-Care & Wellness", "", vec![]);
        assert_eq!(
            markdown_file_name(&idea, 30, 40),
            "self-care-wellness-30x40.md"
        );
    }

    #[test]
    fn export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let name = export_markdown(&two_sections(), 30, 40, dir.path()).unwrap();
        assert_eq!(name, "habit-tracker-30x40.md");
        let written = std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(written, markdown_for_idea(&two_sections(), 30, 40));
    }
}
