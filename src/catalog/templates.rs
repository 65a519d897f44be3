//! The layout templates.  Each function takes the width and height of the grid (in dots) and
//! returns a fixed, proportional partition of it.
//!
//! Templates assume a grid of at least 5x5 dots.  They use fixed ratios, so very small or very
//! stretched grids can produce sections with zero or negative sizes.

use super::{halves, proportion, LayoutBuilder};
use crate::{Bounds, LayoutIdea};

///////////////
// BASELINES //
///////////////

/// Two columns of four cells: one per weekday plus a notes block
pub fn weekly_overview(w: i32, h: i32) -> LayoutIdea {
    const COLS: i32 = 2;
    const ROWS: i32 = 4;
    const LABELS: [&str; 8] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Notes"];

    let cell_w = w.div_euclid(COLS);
    let cell_h = h.div_euclid(ROWS);
    let mut page = LayoutBuilder::new(w, h);
    // Cells are read row by row, so Monday and Tuesday share the top row
    for (idx, label) in LABELS.iter().enumerate() {
        let (row, col) = (idx as i32 / COLS, idx as i32 % COLS);
        page.push(
            label,
            Bounds::new(col * cell_w, row * cell_h, cell_w - 1, cell_h - 1),
        );
    }
    page.into_idea(
        "Weekly Overview",
        "Two-column weekly spread with notes block.",
    )
}

pub fn notes_centric(w: i32, h: i32) -> LayoutIdea {
    let header_h = proportion(h, 0.1).min(6);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", header_h).rest("Notes");
    page.into_idea(
        "Notes Centric",
        "Large free-form notes area with subtle header.",
    )
}

//////////////////////////
// BESPOKE ARRANGEMENTS //
//////////////////////////

/// Metrics sidebar on the left, workout log filling the right
pub fn fitness_tracker(w: i32, h: i32) -> LayoutIdea {
    let metrics_w = proportion(w, 0.3).max(10);
    let goals_h = proportion(h, 0.18);
    let graph_y = proportion(h, 0.43) + 1;
    let mut page = LayoutBuilder::new(w, h);
    page.push("Goals", Bounds::new(0, 0, metrics_w - 1, goals_h))
        .push(
            "Stats",
            Bounds::new(0, goals_h + 1, metrics_w - 1, proportion(h, 0.25)),
        )
        .push(
            "Progress Graph",
            Bounds::new(0, graph_y, metrics_w - 1, proportion(h, 0.25)),
        )
        .push(
            "Workout Log",
            Bounds::new(metrics_w + 1, 0, w - metrics_w - 2, h - 1),
        );
    page.into_idea(
        "Fitness Tracker",
        "Metrics sidebar plus roomy workout log area.",
    )
}

/// A block of habit squares in the top part of the page, with reflection space below
pub fn habit_tracker(w: i32, h: i32) -> LayoutIdea {
    const SQUARE_SIZE: i32 = 4; // dots per side of each habit square

    let rows = ((f64::from(h) * 0.55) / f64::from(SQUARE_SIZE + 1)).floor() as i32;
    let habit_area_h = rows * (SQUARE_SIZE + 1) - 1; // no gap after the last row
    let mut page = LayoutBuilder::new(w, h);
    page.band("Habits", habit_area_h)
        // Leave an extra dot of space above the reflection area
        .push(
            "Reflection",
            Bounds::new(0, habit_area_h + 2, w - 1, h - habit_area_h - 3),
        );
    page.into_idea(
        "Habit Tracker",
        "Compact habit grid with reflection space below.",
    )
}

/// A header over a 3x3 grid of meal and nutrition blocks
pub fn meal_planner(w: i32, h: i32) -> LayoutIdea {
    const LABELS: [&str; 9] = [
        "Breakfast",
        "Lunch",
        "Dinner",
        "Snacks",
        "Hydration",
        "Grocery",
        "Prep",
        "Calories",
        "Notes",
    ];

    let header_h = proportion(h, 0.08).min(5);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", header_h);
    let top = page.next_y();
    let cell_w = w.div_euclid(3);
    let cell_h = page.remaining_height().div_euclid(3);
    for (idx, label) in LABELS.iter().enumerate() {
        let (row, col) = (idx as i32 / 3, idx as i32 % 3);
        page.push(
            label,
            Bounds::new(col * cell_w, top + row * cell_h, cell_w - 1, cell_h - 1),
        );
    }
    page.into_idea("Meal Planner", "Meal + nutrition blocks with header area.")
}

pub fn mood_tracker(w: i32, h: i32) -> LayoutIdea {
    let header_h = proportion(h, 0.08).max(4);
    let legend_w = proportion(w, 0.18).max(8);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", header_h);
    let (y, timeline_h) = (page.next_y(), page.remaining_height());
    page.push("Legend", Bounds::new(0, y, legend_w - 1, timeline_h))
        .push(
            "Timeline",
            Bounds::new(legend_w + 1, y, w - legend_w - 2, timeline_h),
        );
    page.into_idea(
        "Mood Tracker",
        "Legend + horizontal timeline for daily mood tracking.",
    )
}

/// A shared header over three columns, or four on wider pages
pub fn project_kanban(w: i32, h: i32) -> LayoutIdea {
    const LABELS: [&str; 4] = ["Backlog", "In Progress", "Review", "Done"];

    let cols = if w > 40 { 4 } else { 3 };
    let col_w = w.div_euclid(cols);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, 0.07).max(4));
    let (y, col_h) = (page.next_y(), page.remaining_height());
    for col in 0..cols {
        let label = LABELS
            .get(col as usize)
            .map(|l| l.to_string())
            .unwrap_or_else(|| format!("Col {}", col + 1));
        page.push(&label, Bounds::new(col * col_w, y, col_w - 1, col_h));
    }
    page.into_idea(
        "Project Kanban",
        "Columns for task flow under a shared header.",
    )
}

pub fn finance_budget(w: i32, h: i32) -> LayoutIdea {
    let header_h = proportion(h, 0.08).max(4);
    let summary_h = proportion(h, 0.12).max(6);
    let (fixed_h, variable_h) = halves(summary_h);
    let left_w = proportion(w, 0.5);
    let right_w = w - left_w - 1;

    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", header_h);
    let top = page.next_y();
    // The right half of the summary band is stacked: fixed costs above variable costs
    page.push("Income", Bounds::new(0, top, left_w - 2, summary_h))
        .push("Fixed Costs", Bounds::new(left_w, top, right_w, fixed_h - 1))
        .push(
            "Variable Costs",
            Bounds::new(left_w, top + fixed_h, right_w, variable_h - 1),
        );
    let bottom = header_h + summary_h + 2;
    let bottom_h = h - header_h - summary_h - 3;
    page.push("Savings / Goals", Bounds::new(0, bottom, left_w - 2, bottom_h))
        .push(
            "Graph / Notes",
            Bounds::new(left_w, bottom, right_w, bottom_h),
        );
    page.into_idea(
        "Finance Budget",
        "Income & expenses summary with savings and notes/graph area.",
    )
}

pub fn goal_planner(w: i32, h: i32) -> LayoutIdea {
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, 0.08))
        .split_band(
            "Long-Term Goals",
            "Short-Term Goals",
            proportion(h, 0.4),
            0.5,
        )
        .band("Milestones", proportion(h, 0.18))
        .rest("Action Steps");
    page.into_idea(
        "Goal Planner",
        "Split long vs short term goals with milestones and actions.",
    )
}

pub fn time_management(w: i32, h: i32) -> LayoutIdea {
    let tasks_w = proportion(w, 0.55);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, 0.07))
        .band("Time Blocks", proportion(h, 0.15));
    let (y, rest_h) = (page.next_y(), page.remaining_height());
    // The two columns share a single one-dot gap
    page.push("Tasks / Deadlines", Bounds::new(0, y, tasks_w, rest_h))
        .push(
            "Pomodoro Log",
            Bounds::new(tasks_w + 1, y, w - tasks_w - 2, rest_h),
        );
    page.into_idea(
        "Time Management",
        "Time-block overview with tasks and pomodoro log.",
    )
}

pub fn travel_planner(w: i32, h: i32) -> LayoutIdea {
    let (left_w, right_w) = halves(w);
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, 0.07))
        .band("Itinerary", proportion(h, 0.4));
    let (y, rest_h) = (page.next_y(), page.remaining_height());
    let budget_h = rest_h.div_euclid(2);
    page.push("Packing List", Bounds::new(0, y, left_w - 2, rest_h))
        .push(
            "Budget / Expenses",
            Bounds::new(left_w, y, right_w - 1, budget_h),
        )
        .push(
            "Memories / Highlights",
            Bounds::new(left_w, y + budget_h + 1, right_w - 1, rest_h - budget_h - 1),
        );
    page.into_idea(
        "Travel Planner",
        "Plan itinerary, packing, budget, and memories.",
    )
}

/////////////////////////////////////
// HEADER, MAIN BAND, SPLIT FOOTER //
/////////////////////////////////////

/// The most common arrangement: a header, a full-width main band taking `main_ratio` of the
/// height, and the rest of the page split into two halves.
fn banded(
    w: i32,
    h: i32,
    header_ratio: f64,
    (main, main_ratio): (&str, f64),
    (left, right): (&str, &str),
) -> LayoutBuilder {
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, header_ratio))
        .band(main, proportion(h, main_ratio))
        .split_rest(left, right);
    page
}

pub fn sleep_tracker(w: i32, h: i32) -> LayoutIdea {
    banded(w, h, 0.08, ("Sleep Log", 0.45), ("Quality / Factors", "Notes")).into_idea(
        "Sleep Tracker",
        "Log bedtime, wake time, duration, and influencing factors.",
    )
}

pub fn gratitude_log(w: i32, h: i32) -> LayoutIdea {
    banded(w, h, 0.08, ("Daily Entries", 0.5), ("Theme Lists", "Reflections")).into_idea(
        "Gratitude Log",
        "Daily gratitude with themed lists and reflection area.",
    )
}

pub fn hobby_practice(w: i32, h: i32) -> LayoutIdea {
    banded(w, h, 0.07, ("Practice Log", 0.4), ("Goals", "Progress Notes")).into_idea(
        "Hobby Practice",
        "Practice log with goals and progress notes.",
    )
}

pub fn seasonal_planner(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Seasonal Calendar", 0.35),
        ("Activities / Traditions", "Gifts / Budget"),
    )
    .into_idea(
        "Seasonal Planner",
        "Track seasonal events, traditions, and gift ideas.",
    )
}

pub fn minimalism_tracker(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Declutter Log", 0.4),
        ("Capsule Wardrobe", "Challenges / Progress"),
    )
    .into_idea(
        "Minimalism Tracker",
        "Decluttering, capsule wardrobe, and progress challenges.",
    )
}

pub fn memory_keeper(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Memories / Moments", 0.45),
        ("Quotes / Highlights", "Reflections"),
    )
    .into_idea(
        "Memory Keeper",
        "Capture important memories, quotes, and reflections.",
    )
}

pub fn dream_journal(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Dream Log", 0.5),
        ("Themes / Symbols", "Analysis / Notes"),
    )
    .into_idea(
        "Dream Journal",
        "Record dreams with themes, symbols, and analysis.",
    )
}

pub fn sustainability_tracker(w: i32, h: i32) -> LayoutIdea {
    banded(w, h, 0.07, ("Eco Log", 0.4), ("Goals", "Progress / Metrics")).into_idea(
        "Sustainability Tracker",
        "Track eco-friendly habits, goals, and progress.",
    )
}

pub fn collection_tracker(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Inventory", 0.45),
        ("Wishlist / Rares", "Trades / Notes"),
    )
    .into_idea(
        "Collection Tracker",
        "Inventory management with wishlist and trade notes.",
    )
}

pub fn gaming_log(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Games / Progress", 0.4),
        ("Achievements", "Backlog / Wishlist"),
    )
    .into_idea(
        "Gaming Log",
        "Track game progress, achievements, and backlog.",
    )
}

pub fn spiritual_tracker(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Practices / Schedule", 0.4),
        ("Reflections", "Readings / Insights"),
    )
    .into_idea(
        "Spiritual Tracker",
        "Track practices, readings, and reflections.",
    )
}

pub fn career_networking(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Applications / Interviews", 0.4),
        ("Networking / Contacts", "Professional Development"),
    )
    .into_idea(
        "Career & Networking",
        "Applications, networking, and professional development.",
    )
}

pub fn garden_planner(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Garden Layout", 0.45),
        ("Planting / Schedule", "Care / Pests"),
    )
    .into_idea(
        "Garden Planner",
        "Layout, planting schedule, and plant care tracking.",
    )
}

pub fn volunteer_log(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Hours Log", 0.4),
        ("Organizations", "Project Ideas / Impact"),
    )
    .into_idea(
        "Volunteer Log",
        "Track volunteer hours, organizations, and impact ideas.",
    )
}

pub fn fashion_style(w: i32, h: i32) -> LayoutIdea {
    banded(
        w,
        h,
        0.07,
        ("Outfit / Lookbook", 0.4),
        ("Shopping List", "Repairs / Alterations"),
    )
    .into_idea(
        "Fashion & Style",
        "Lookbook, shopping list, and repairs tracking.",
    )
}

/////////////////////////////////////
// HEADER, SPLIT BAND, FULL FOOTER //
/////////////////////////////////////

/// A header, a band split at `split_ratio` of the width, and a full-width band below
fn split_then_full(
    w: i32,
    h: i32,
    (left, right, band_ratio): (&str, &str, f64),
    split_ratio: f64,
    footer: &str,
) -> LayoutBuilder {
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, 0.07))
        .split_band(left, right, proportion(h, band_ratio), split_ratio)
        .rest(footer);
    page
}

pub fn reading_learning(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Reading List", "Study Topics", 0.45),
        0.55,
        "Quotes / Key Takeaways",
    )
    .into_idea(
        "Reading & Learning",
        "Track books, topics, and capture key insights.",
    )
}

pub fn self_care(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Self-Care Activities", "Hydration / Habits", 0.4),
        0.55,
        "Reflection",
    )
    .into_idea(
        "Self-Care & Wellness",
        "Track self-care routines, hydration, and reflections.",
    )
}

pub fn social_connections(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Contacts / Outreach", "Important Dates", 0.45),
        0.5,
        "Meetup Ideas",
    )
    .into_idea(
        "Social Connections",
        "Outreach, important dates, and meetup planning.",
    )
}

pub fn pet_care(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Care Schedule", "Health / Vet", 0.4),
        0.5,
        "Behavior / Training",
    )
    .into_idea(
        "Pet Care",
        "Care schedule, health log, and behavior tracking.",
    )
}

pub fn growth_reflection(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Prompts / Values", "Reflection Log", 0.4),
        0.5,
        "Progress / Insights",
    )
    .into_idea(
        "Personal Growth & Reflection",
        "Values, reflections, and insights tracking.",
    )
}

pub fn language_learning(w: i32, h: i32) -> LayoutIdea {
    split_then_full(
        w,
        h,
        ("Vocabulary", "Grammar / Rules", 0.45),
        0.5,
        "Practice Log",
    )
    .into_idea(
        "Language Learning",
        "Vocabulary, grammar, and practice log.",
    )
}

////////////////////
// FOUR QUADRANTS //
////////////////////

/// A header over two rows of halves.  The top row takes `top_ratio` of the height.
fn quadrants(
    w: i32,
    h: i32,
    header_ratio: f64,
    top: (&str, &str),
    top_ratio: f64,
    bottom: (&str, &str),
) -> LayoutBuilder {
    let mut page = LayoutBuilder::new(w, h);
    page.band("Header", proportion(h, header_ratio))
        .split_band(top.0, top.1, proportion(h, top_ratio), 0.5)
        .split_rest(bottom.0, bottom.1);
    page
}

pub fn creative_board(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.06,
        ("Brainstorm", "Inspiration"),
        0.35,
        ("Progress Tracker", "Notes / Mood Board"),
    )
    .into_idea(
        "Creative Project Board",
        "Brainstorm, inspiration, progress tracking, and mood board.",
    )
}

pub fn event_planner(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.07,
        ("Checklist", "Guest List"),
        0.4,
        ("Vendors / Contacts", "Notes / Lessons"),
    )
    .into_idea(
        "Event Planner",
        "Checklist, guests, vendors, notes for event management.",
    )
}

pub fn health_log(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.07,
        ("Symptoms", "Medications"),
        0.35,
        ("Appointments", "Lifestyle Factors"),
    )
    .into_idea(
        "Health Log",
        "Symptoms, medications, appointments, and lifestyle factors.",
    )
}

pub fn home_management(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.07,
        ("Chores / Schedule", "Maintenance Log"),
        0.35,
        ("Projects", "Utilities / Sustainability"),
    )
    .into_idea(
        "Home Management",
        "Chores, maintenance, projects, and utilities tracking.",
    )
}

pub fn productivity_system(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.07,
        ("Eisenhower Matrix", "Backlog / Brain Dump"),
        0.35,
        ("Next Actions", "Review / Notes"),
    )
    .into_idea(
        "Productivity System",
        "Eisenhower matrix, backlog, next actions, and review.",
    )
}

pub fn writing_planner(w: i32, h: i32) -> LayoutIdea {
    quadrants(
        w,
        h,
        0.07,
        ("Story Ideas / Brainstorm", "Characters / World"),
        0.35,
        ("Outline / Plot", "Daily Writing Log"),
    )
    .into_idea(
        "Writing Planner",
        "Brainstorm, outline, and daily writing log.",
    )
}
