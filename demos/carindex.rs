use anyhow::{Context, bail};
use carindex::editor::{self, Edit, Widget};
use carindex::tables::{DEFAULT_ENUMS_FILE, DEFAULT_LABELS_FILE, Tables};
use carindex::{CarIndex, CarRecord, Field};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const FILE_NAME: &str = "carindex.def";

#[derive(Debug, Parser)]
struct Options {
    /// Path to the carindex.def file
    input: PathBuf,

    /// Field label file (`field=Label` lines)
    #[arg(long, default_value = DEFAULT_LABELS_FILE)]
    labels: PathBuf,

    /// Enum definitions file (`[enum]` sections with `SYMBOL=value` lines)
    #[arg(long, default_value = DEFAULT_ENUMS_FILE)]
    enums: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the cars in file order
    List,
    /// Show every field of one car
    Show { index: usize },
    /// Change fields of one car, e.g. `set 0 seatCount=4 enumC=FAST`
    Set {
        index: usize,
        #[arg(required = true)]
        edits: Vec<String>,
    },
    /// Append a new car named NewCar
    Add,
    /// Remove one car
    Remove { index: usize },
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    if options.input.file_name().and_then(|n| n.to_str()) != Some(FILE_NAME) {
        bail!("{} is not a {FILE_NAME} file", options.input.display());
    }

    let mut index = CarIndex::load(&options.input)
        .with_context(|| format!("failed to load {}", options.input.display()))?;
    let tables = Tables::load(&options.labels, &options.enums)?;

    match options.command.unwrap_or(Command::List) {
        Command::List => {
            println!("Cars: {}", index.len());
            for (i, name) in index.car_names().iter().enumerate() {
                println!("  [{i}] {name}");
            }
        }
        Command::Show { index: i } => {
            let car = index.get(i).with_context(|| format!("no car at index {i}"))?;
            print_car(car, &tables);
        }
        Command::Set { index: i, edits } => {
            let car = index
                .get_mut(i)
                .with_context(|| format!("no car at index {i}"))?;
            let edits = edits
                .iter()
                .map(|edit| parse_edit(edit, &tables))
                .collect::<anyhow::Result<Vec<_>>>()?;
            for err in editor::commit(car, &edits) {
                eprintln!("  skipped: {err}");
            }
            print_car(car, &tables);
            index.save(&options.input)?;
        }
        Command::Add => {
            let i = index.push(CarRecord::new_car());
            index.save(&options.input)?;
            println!("Added car [{i}]");
        }
        Command::Remove { index: i } => {
            let removed = index
                .remove(i)
                .with_context(|| format!("no car at index {i}"))?;
            index.save(&options.input)?;
            println!("Removed {}", removed.car_name_id.text());
            if let Some(next) = index.clamp_selection(i) {
                println!("Selected [{next}] {}", index.car_names()[next]);
            }
        }
    }

    Ok(())
}

/// Parses `field=value`. Enum symbols are resolved through the enum table.
fn parse_edit(edit: &str, tables: &Tables) -> anyhow::Result<(Field, Edit)> {
    let Some((name, value)) = edit.split_once('=') else {
        bail!("expected field=value, got {edit:?}");
    };
    let field = Field::from_name(name.trim()).with_context(|| format!("unknown field {name:?}"))?;
    let symbol = tables
        .enums
        .get(field.name())
        .and_then(|def| def.value_of(value.trim()));
    let edit = match symbol {
        Some(value) => Edit::Choice(value),
        None => Edit::Text(value.to_string()),
    };
    Ok((field, edit))
}

fn print_car(car: &CarRecord, tables: &Tables) {
    for view in editor::view(car, tables) {
        match view.widget {
            Widget::Text { text, read_only } => {
                let suffix = if read_only { " (read-only)" } else { "" };
                println!("  {:<16} {text}{suffix}", view.label);
            }
            Widget::Choice(choices) => {
                let choice = choices.selected();
                println!("  {:<16} {} ({:#X})", view.label, choice.name, choice.value);
            }
        }
    }
}
