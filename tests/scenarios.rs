use dotplan::{
    canvas::{self, Canvas, GridOpts},
    document::{self, DocumentOpts},
    generate_ideas,
    image::RenderingOpts,
    markdown, pick_idea, synthesize_tags,
    utils::slug,
    Orientation, PageMode, PromptConfig,
};

#[test]
fn habit_tracker_with_baselines() {
    let ideas = generate_ideas("weekly habit tracker", 30, 40, None);
    let titles = ideas.iter().map(|i| i.title.as_str()).collect::<Vec<_>>();
    assert!(titles.contains(&"Habit Tracker"));
    assert!(titles.contains(&"Weekly Overview"));
    assert!(titles.contains(&"Notes Centric"));
}

#[test]
fn meal_prep_tags() {
    assert!(synthesize_tags("daily meal prep", None).contains("meal"));
    let config = PromptConfig::from_json_str(r#"{"synonyms": {"nutrition": ["prep"]}}"#).unwrap();
    let tags = synthesize_tags("daily meal prep", Some(&config));
    assert!(tags.contains("meal"));
    assert!(tags.contains("nutrition"));
}

#[test]
fn markdown_dimensions_line() {
    for idea in generate_ideas("travel budget", 20, 30, None) {
        let md = markdown::markdown_for_idea(&idea, 20, 30);
        let second = md.lines().filter(|l| !l.trim().is_empty()).nth(1);
        assert_eq!(second, Some("Dimensions: 20 x 30 dots"), "{}", idea.title);
    }
}

#[test]
fn slug_example() {
    assert_eq!(slug("Fitness Tracker! 2024"), "fitness-tracker-2024");
}

#[test]
fn full_export_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let opts = RenderingOpts::default();
    let (w, h) = (25, 35);

    let ideas = generate_ideas("weekly habit tracker", w, h, None);
    let idea = pick_idea(&ideas, Some(1)).unwrap();
    assert_eq!(idea.title, "Weekly Overview");

    let mut preview = Canvas::for_orientation(Orientation::Landscape);
    canvas::draw_grid(&mut preview, w, h, GridOpts::default(), &opts);
    canvas::overlay_idea(&mut preview, idea, w, h, &opts);
    preview
        .export_raster(&dir.path().join("preview.png"), &opts)
        .unwrap();

    let md_name = markdown::export_markdown(idea, w, h, dir.path()).unwrap();
    assert_eq!(md_name, "weekly-overview-25x35.md");

    let doc_opts = DocumentOpts {
        width_dots: w,
        height_dots: h,
        orientation: Orientation::Portrait,
        page_mode: PageMode::LandscapeMiddle,
    };
    let pdf_name = document::export_document(idea, &doc_opts, dir.path(), &opts).unwrap();
    assert_eq!(pdf_name, "weekly-overview-25x35-landscape-middle.pdf");

    for name in ["preview.png", md_name.as_str(), pdf_name.as_str()] {
        let len = std::fs::metadata(dir.path().join(name)).unwrap().len();
        assert!(len > 0, "{} is empty", name);
    }
}
