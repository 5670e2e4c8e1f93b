use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use ipdupcheck::{CandidateAddress, DuplicateReport, LookupOutcome};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Candidate Addresses
--------------------------------------------------------------------------------------*/

pub fn candidates(candidates: &[CandidateAddress]) {
    for candidate in candidates {
        println!("{candidate}");
    }
}

/*--------------------------------------------------------------------------------------
  Duplicate Report Table
--------------------------------------------------------------------------------------*/

pub fn report_table(report: &DuplicateReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Address")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Interface Inventory")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Host Inventory")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Duplicate")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    for address in &report.addresses {
        let duplicate = if address.is_duplicate() {
            Cell::new("yes").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new("no")
        };

        table.add_row(vec![
            Cell::new(address.candidate.token()).add_attribute(Attribute::Bold),
            outcome_cell(&address.interface),
            outcome_cell(&address.host),
            duplicate,
        ]);
    }

    // Right-align the Address column
    let column = table.column_mut(0).expect("The first column exists");
    column.set_cell_alignment(CellAlignment::Right);

    println!("{table}");
}

fn outcome_cell(outcome: &LookupOutcome) -> Cell {
    match outcome {
        LookupOutcome::Found(_) => Cell::new(outcome).fg(Color::Red),
        LookupOutcome::NotFound => Cell::new(outcome),
        LookupOutcome::LookupError(_) => Cell::new(outcome).fg(Color::Yellow),
    }
}

/*--------------------------------------------------------------------------------------
  Verdict
--------------------------------------------------------------------------------------*/

pub fn verdict(duplicate: bool) {
    println!("duplicate: {duplicate}");
}
