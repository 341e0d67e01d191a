//! Display functions for command results

use super::formatters::{create_progress_bar, grid_rows, is_block, numbered_rows};
use crate::commands::{ConstructionReport, FillPath, TemplateSummary};
use crate::core::{GridTemplate, Orientation, PuzzleDocument};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the finished grid and its clues
pub fn print_puzzle(document: &PuzzleDocument) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {}",
        document.title.bright_cyan().bold(),
        document.id.bright_black()
    );
    println!("{}", "═".repeat(40).cyan());

    println!();
    for row in grid_rows(document) {
        let cells: Vec<String> = row
            .split(' ')
            .map(|cell| {
                if is_block(cell) {
                    cell.bright_black().to_string()
                } else {
                    cell.bright_yellow().bold().to_string()
                }
            })
            .collect();
        println!("   {}", cells.join(" "));
    }

    print_clue_list("Across", &document.clues.across);
    print_clue_list("Down", &document.clues.down);

    if !document.meta.source_urls.is_empty() {
        println!("\n{}", "Sources:".bright_cyan().bold());
        for url in &document.meta.source_urls {
            println!("   {url}");
        }
    }
}

fn print_clue_list(heading: &str, clues: &BTreeMap<u32, String>) {
    if clues.is_empty() {
        return;
    }
    println!("\n{}", heading.bright_cyan().bold());
    for (number, clue) in clues {
        println!("   {:>2}. {clue}", number.to_string().yellow());
    }
}

/// Print construction diagnostics
pub fn print_report(report: &ConstructionReport, budget: usize) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Template:        {}", report.template.bright_yellow());

    let path = report.fill_path.to_string();
    let path = match report.fill_path {
        FillPath::Selector | FillPath::Solver => path.green(),
        FillPath::Fallback => path.yellow(),
    };
    println!("Fill path:       {path}");
    if let Some(outcome) = &report.solver_outcome {
        println!("Solver:          {outcome}");
    }
    println!("Candidates:      {}", report.candidate_count);
    println!("Answers:         {}", report.answers.join(", "));
    if report.fill_path == FillPath::Fallback {
        println!(
            "Fallback:        {} overwritten, {} padded",
            report.overwritten_cells, report.padded_cells
        );
    }
    println!(
        "Provider calls:  [{}] {}/{budget} ({} used)",
        create_progress_bar(report.provider_calls, budget, 16).green(),
        report.provider_calls,
        report.provider_clues
    );
}

/// Print a template's pattern with derived numbers and its slot list
pub fn print_template_summary(summary: &TemplateSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {}",
        "TEMPLATE:".bright_cyan().bold(),
        summary.name.bright_yellow().bold()
    );
    println!("{}", "═".repeat(40).cyan());

    println!();
    for row in numbered_rows(summary) {
        println!("  {row}");
    }

    println!(
        "\n{} open cells, {} across, {} down{}",
        summary.open_count,
        summary.count(Orientation::Across),
        summary.count(Orientation::Down),
        if summary.authored { " (authored slots)" } else { "" }
    );
    for slot in &summary.slots {
        println!(
            "   {:>2}-{:<6} length {} at row {}, col {}",
            slot.number, slot.orientation, slot.length, slot.start.0, slot.start.1
        );
    }
}

/// Print the names and shapes of templates
pub fn print_template_list(templates: &[GridTemplate]) {
    println!("\n{}", "Built-in templates:".bright_cyan().bold());
    for template in templates {
        let slots = template.layout().map_or(0, |layout| layout.slot_count());
        println!(
            "   {:<12} {} open cells, {slots} slots",
            template.name().bright_yellow(),
            template.open_count()
        );
    }
}
