use anyhow::Result;
use dialoguer::{Input, Select};
use outfit_core::{Advance, OutfitPlanner};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::dates::parse_date;
use crate::render::{Render, SummaryRender};

#[derive(Clone, Copy)]
enum Action {
    PickDate,
    CreateOutfit,
    Quit,
}

const ACTIONS: [(&str, Action); 3] = [
    ("Pick a date", Action::PickDate),
    ("Create outfit", Action::CreateOutfit),
    ("Quit", Action::Quit),
];

/// Interactive planning session. Outfits live until the session ends.
pub fn run(mut planner: OutfitPlanner) -> Result<()> {
    loop {
        println!();
        println!("{}", planner.summary().render(planner.catalog()));
        println!();

        let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
        let Some(selection) = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        match ACTIONS[selection].1 {
            Action::PickDate => pick_date(&mut planner)?,
            Action::CreateOutfit => create_outfit(&mut planner)?,
            Action::Quit => return Ok(()),
        }
    }
}

/// Prompt for a date with retry on parse errors. An empty answer clears
/// the selection.
fn pick_date(planner: &mut OutfitPlanner) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Date (e.g. 2024-03-10, tomorrow, mar 10; empty to clear)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            planner.clear_selection();
            return Ok(());
        }

        match parse_date(&input) {
            Ok(date) => {
                debug!(%date, "Date selected");
                planner.select_date(date);
                return Ok(());
            }
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Walk the wizard until the outfit is finished or the dialog is closed.
fn create_outfit(planner: &mut OutfitPlanner) -> Result<()> {
    planner.open_wizard();

    while planner.wizard().is_open() {
        let view = planner.step_view();

        let mut items: Vec<String> = view.options.iter().map(|o| o.render()).collect();
        let option_count = items.len();

        let next = if view.next_enabled {
            view.next_label.bold().to_string()
        } else {
            view.next_label.dimmed().to_string()
        };
        items.push(next);
        if view.back_enabled {
            items.push("Back".to_string());
        }
        items.push("Cancel".to_string());

        println!();
        let Some(selection) = Select::new()
            .with_prompt(format!("  {}", view.title.bold()))
            .items(&items)
            .default(0)
            .interact_opt()?
        else {
            planner.cancel();
            break;
        };

        if selection < option_count {
            planner.toggle(view.category, selection)?;
            continue;
        }

        match selection - option_count {
            0 => match planner.next() {
                Advance::Moved(_) => {}
                Advance::Rejected => {
                    let hint = format!("  Select at least one {}", view.category.singular().to_lowercase());
                    eprintln!("{}", hint.red());
                }
                Advance::Refused => {
                    eprintln!("{}", "  Pick a date before finishing".red());
                }
                Advance::Finished(_) => {
                    let summary = planner.summary();
                    println!();
                    println!("{}", format!("  Planned: {}", summary.heading).green());
                }
            },
            1 if view.back_enabled => planner.back(),
            _ => planner.cancel(),
        }
    }

    Ok(())
}
