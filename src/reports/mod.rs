use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gymjudge::api::ScoreSummary;
use gymjudge::scorer::consistency::{ConsistencyResult, DELTA_STEPS, PERCENTAGE_TABLE};
use gymjudge::scorer::groups::ElementGroupCatalog;
use gymjudge::scorer::types::{Discipline, ElementGroup, Event};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn score_row(label: &str, value: String) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(value).set_alignment(CellAlignment::Right),
    ]
}

pub fn print_score_report(summary: &ScoreSummary) {
    let rec = &summary.record;
    println!(
        "\nRecord: {} ({} {})",
        summary.id, rec.discipline, rec.event
    );

    let elements: Vec<String> = rec
        .selection
        .iter()
        .map(|(letter, m)| format!("{}x{}", letter, m))
        .collect();
    let elements = if elements.is_empty() {
        "-".to_string()
    } else {
        elements.join(" ")
    };

    let s = &rec.score;
    let g = &rec.groups;
    let c = &rec.competition;

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(score_row(
        "Elements",
        format!("{} ({} of 8)", elements, rec.selection.total()),
    ));
    table.add_row(score_row("Difficulty", format!("{:.1}", s.difficulty_value)));
    table.add_row(score_row(
        "Element Groups",
        format!(
            "{:.1} + {:.1} + {:.1} + {:.1} = {:.1}",
            g.i, g.ii, g.iii, g.iv, s.element_groups_total
        ),
    ));
    table.add_row(score_row("Connection Value", format!("{:.3}", s.connection_value)));
    table.add_row(score_row("Start Value", format!("{:.3}", s.start_value)));
    table.add_row(score_row(
        "Execution Deduction",
        format!("{:.3}", s.execution_deduction),
    ));
    table.add_row(score_row("E Score", format!("{:.3}", s.execution_score)));
    table.add_row(score_row(
        "Stick Bonus",
        if s.stick_bonus { "0.1" } else { "-" }.to_string(),
    ));
    table.add_row(score_row("Neutral Deduction", format!("{:.3}", s.neutral_deduction)));
    table.add_row(vec![
        Cell::new("My Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", s.my_score))
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(score_row(
        "Panel D / E",
        format!("{:.1} / {:.3}", c.d, c.e),
    ));
    table.add_row(score_row(
        "Panel SB / ND",
        format!(
            "{} / {:.1}",
            if c.stick_bonus { "0.1" } else { "-" },
            c.neutral_deduction
        ),
    ));
    table.add_row(vec![
        Cell::new("Competition Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", c.competition_score))
            .fg(Color::Green)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("{}", table);
}

pub fn print_consistency_report(res: &ConsistencyResult) {
    let state = res.state();
    let interval = if res.interval == 0 {
        "out of range".to_string()
    } else {
        res.interval.to_string()
    };

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Delta"),
        Cell::new("Deduction"),
        Cell::new("Interval"),
        Cell::new("Consistency").add_attribute(Attribute::Bold),
    ]);
    let pct_color = match state.percentage {
        80..=100 => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    };
    table.add_row(vec![
        Cell::new(format!("{:.1}", state.delta)),
        Cell::new(format!("{:.3}", state.deduction)),
        Cell::new(interval),
        Cell::new(format!("{}%", state.percentage)).fg(pct_color),
    ]);
    for i in 0..4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

pub fn print_percentage_table() {
    let mut table = new_table();
    let mut header = vec![Cell::new("Interval \\ Delta").add_attribute(Attribute::Bold)];
    header.extend(DELTA_STEPS.iter().map(|d| Cell::new(format!("{:.1}", d))));
    table.set_header(header);

    for (idx, row) in PERCENTAGE_TABLE.iter().enumerate() {
        let mut cells = vec![Cell::new(idx + 1)];
        cells.extend(row.iter().map(|&p| {
            let cell = Cell::new(p).set_alignment(CellAlignment::Right);
            if p == 0 {
                cell.fg(Color::DarkGrey)
            } else {
                cell
            }
        }));
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_catalog(discipline: Discipline, event: Event) {
    println!("\nElement groups: {} {}", discipline, event);
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Legal Values"),
    ]);
    for group in ElementGroup::iter() {
        let values: Vec<String> = ElementGroupCatalog::legal_values(discipline, event, group)
            .iter()
            .map(|v| format!("{:.1}", v))
            .collect();
        table.add_row(vec![Cell::new(group), Cell::new(values.join(", "))]);
    }
    println!("{}", table);
}
