use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use dotplan::{
    canvas::{self, Canvas, GridOpts},
    document::{self, DocumentOpts},
    generate_ideas,
    image::RenderingOpts,
    markdown, pick_idea,
    utils::slug,
    Error, LayoutIdea, Orientation, PageMode, PromptConfig,
};
use log::{debug, info, warn};

/// The prompt config picked up from the working directory if `--prompt-config` isn't given
const DEFAULT_PROMPT_CONFIG: &str = "prompt-config.json";
/// Bounds on the width and height of the grid, in dots
const MIN_GRID_DOTS: i64 = 5;
const MAX_GRID_DOTS: i64 = 500;

/// Suggest page layouts for a dot-grid journal
#[derive(Parser, Debug)]
#[command(name = "dotplan", version, about, long_about = None)]
struct Args {
    /// What the page is for, e.g. "weekly habit tracker"
    #[arg(short, long, default_value = "")]
    purpose: String,
    /// Width of the grid, in dots
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_GRID_DOTS..=MAX_GRID_DOTS))]
    width: i32,
    /// Height of the grid, in dots
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_GRID_DOTS..=MAX_GRID_DOTS))]
    height: i32,
    #[arg(long, value_enum, default_value_t = Orientation::Portrait)]
    orientation: Orientation,
    /// How the printable document spreads the layout over pages
    #[arg(long, value_enum, default_value_t = PageMode::Single)]
    page_mode: PageMode,
    /// Which idea (counting from 1) to highlight and export
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    select: Option<u32>,
    /// Export a plain dot grid with no sections instead of one of the ideas
    #[arg(long, conflicts_with = "select")]
    free_form: bool,
    /// Don't draw the thirds guides on the preview
    #[arg(long)]
    no_guides: bool,
    /// JSON file of tag synonyms
    #[arg(long)]
    prompt_config: Option<PathBuf>,
    /// Directory to write the preview, Markdown and PDF into
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Print the ideas as JSON instead of a list
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> dotplan::Result<()> {
    let config = load_prompt_config(args);
    let ideas = generate_ideas(&args.purpose, args.width, args.height, config.as_ref());

    let selected = args.select.map(|n| n as usize - 1);
    // Reject a bad selection even if nothing is exported
    let idea = if args.free_form {
        LayoutIdea::basic_grid()
    } else {
        pick_idea(&ideas, selected)?.clone()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ideas)?);
    } else {
        print!("{}", format_ideas(&ideas, selected));
    }

    match &args.out {
        Some(out) => export_all(args, &idea, selected.is_some(), out)?,
        None if selected.is_some() || args.free_form => {
            warn!("Nothing was exported; pass --out to write '{}'", idea.title)
        }
        None => {}
    }
    Ok(())
}

/// Loads the prompt config named on the command line, or the default one if it exists.  A config
/// which can't be loaded is skipped with a warning.
fn load_prompt_config(args: &Args) -> Option<PromptConfig> {
    match &args.prompt_config {
        Some(path) => PromptConfig::load_optional(path),
        None => {
            let path = PathBuf::from(DEFAULT_PROMPT_CONFIG);
            if path.exists() {
                PromptConfig::load_optional(&path)
            } else {
                debug!("No {} found; using plain tags", DEFAULT_PROMPT_CONFIG);
                None
            }
        }
    }
}

/// Lists the ideas, numbered from 1, with the selected one (if any) marked with `*`
fn format_ideas(ideas: &[LayoutIdea], selected: Option<usize>) -> String {
    let mut listing = String::new();
    for (i, idea) in ideas.iter().enumerate() {
        let marker = if selected == Some(i) { '*' } else { ' ' };
        listing += &format!("{}{}. {}: {}\n", marker, i + 1, idea.title, idea.description);
        for s in &idea.sections {
            let b = s.bounds;
            listing += &format!("      {} ({}x{} at {},{})\n", s.label, b.w, b.h, b.x, b.y);
        }
    }
    listing
}

/// Writes the preview (as both PNG and SVG), the Markdown and the PDF for `idea` into `out`
fn export_all(
    args: &Args,
    idea: &LayoutIdea,
    overlay: bool,
    out: &Path,
) -> dotplan::Result<()> {
    fs::create_dir_all(out).map_err(|source| Error::Io {
        path: out.to_path_buf(),
        source,
    })?;
    let opts = RenderingOpts::default();
    let (w, h) = (args.width, args.height);

    let mut preview = Canvas::for_orientation(args.orientation);
    let grid_opts = GridOpts {
        guides: !args.no_guides,
    };
    canvas::draw_grid(&mut preview, w, h, grid_opts, &opts);
    if overlay {
        canvas::overlay_idea(&mut preview, idea, w, h, &opts);
    }
    let stem = format!("{}-{}x{}", slug(&idea.title), w, h);
    preview.export_raster(&out.join(format!("{}.png", stem)), &opts)?;
    preview.export_svg(&out.join(format!("{}.svg", stem)), &opts)?;

    markdown::export_markdown(idea, w, h, out)?;

    let doc_opts = DocumentOpts {
        width_dots: w,
        height_dots: h,
        orientation: args.orientation,
        page_mode: args.page_mode,
    };
    document::export_document(idea, &doc_opts, out, &opts)?;

    info!("Exported '{}' to {}", idea.title, out.display());
    Ok(())
}
