use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use gutenlex_core::importer::{ImportReport, ItemOutcome};

pub fn print_titles(titles: &[String]) {
    if titles.is_empty() {
        println!("The database is empty. Run 'gutenlex init' to populate it.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![Cell::new("Books in Database").add_attribute(Attribute::Bold)]);
    for title in titles {
        table.add_row(vec![Cell::new(title)]);
    }

    println!("{}", table);
}

pub fn print_import_summary(report: &ImportReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Result").add_attribute(Attribute::Bold),
    ]);

    for (title, outcome) in &report.items {
        let cell = match outcome {
            ItemOutcome::Added => Cell::new("added").fg(Color::Green),
            ItemOutcome::Skipped => Cell::new("skipped (already present)").fg(Color::Yellow),
            ItemOutcome::Failed(msg) => Cell::new(format!("failed: {}", msg)).fg(Color::Red),
        };
        table.add_row(vec![Cell::new(title), cell]);
    }

    println!("{}", table);
    println!(
        "{} added, {} skipped, {} failed.",
        report.added(),
        report.skipped(),
        report.failed()
    );
}
