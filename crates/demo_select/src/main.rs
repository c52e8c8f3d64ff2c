#![forbid(unsafe_code)]

//! # Select Demo
//!
//! Scripted showcase of the dropdown select widget.
//!
//! Replays a fixed interaction script against a food-picker widget and
//! prints the rendered frame after every step, so the whole state machine
//! (open/close, filtering, toggling, clearing, outside clicks) can be read
//! from the output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p demo_select                  # grouped multi-select picker
//! cargo run -p demo_select -- --single      # single-selection semantics
//! cargo run -p demo_select -- --flat        # ungrouped option list
//! RUST_LOG=dropdown=debug cargo run -p demo_select
//! ```

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dropdown::prelude::*;

/// Bundled data set mirroring the food-picker host app.
const FOOD_JSON: &str = include_str!("../data/food.json");

#[derive(Debug, Parser)]
#[command(name = "demo_select", about = "Scripted showcase of the dropdown select widget")]
struct Cli {
    /// Use single-selection semantics instead of multi.
    #[arg(long)]
    single: bool,

    /// Flatten the grouped data set into one option list.
    #[arg(long)]
    flat: bool,

    /// Hide the search input.
    #[arg(long)]
    no_search: bool,

    /// Hide the clear affixes.
    #[arg(long)]
    no_clear: bool,

    /// Render the widget disabled (every step becomes a no-op).
    #[arg(long)]
    disabled: bool,

    /// Load options from a JSON file instead of the bundled data set.
    #[arg(long, value_name = "PATH")]
    options: Option<String>,
}

fn load_options(cli: &Cli) -> anyhow::Result<OptionTree<String>> {
    let raw = match &cli.options {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read options file {path}"))?,
        None => FOOD_JSON.to_string(),
    };
    let tree: OptionTree<String> =
        serde_json::from_str(&raw).context("options file is not a valid option tree")?;

    if cli.flat {
        let flattened = tree.iter().cloned().collect();
        return Ok(OptionTree::Flat(flattened));
    }
    Ok(tree)
}

fn script(cli: &Cli) -> Vec<(&'static str, SelectEvent<String>)> {
    let mut steps = vec![(
        "click the control to open the menu",
        SelectEvent::ControlClicked,
    )];
    if !cli.no_search {
        steps.push((
            "type \"pizza\" into the search input",
            SelectEvent::SearchEdited("pizza".to_string()),
        ));
    }
    steps.push((
        "click the Pizza option",
        SelectEvent::OptionClicked("option1".to_string()),
    ));
    if !cli.single {
        if !cli.no_search {
            steps.push((
                "clear the search text",
                SelectEvent::SearchEdited(String::new()),
            ));
        }
        steps.push((
            "click the Juice option",
            SelectEvent::OptionClicked("option11".to_string()),
        ));
        if !cli.no_clear {
            steps.push((
                "click the remove affix on the Pizza chip",
                SelectEvent::ChipRemoveClicked("option1".to_string()),
            ));
        }
    }
    if !cli.no_clear {
        steps.push(("click the clear-all affix", SelectEvent::ClearAllClicked));
    }
    steps
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = load_options(&cli)?;
    info!(options = options.len(), grouped = options.is_grouped(), "data set loaded");

    // The host owns the committed value; the widget only reports changes.
    let value: Arc<Mutex<Selection<String>>> = Arc::new(Mutex::new(Selection::None));
    let sink = Arc::clone(&value);

    let mut select = Select::new(options, Box::new(move |sel| *sink.lock() = sel))
        .multi(!cli.single)
        .searchable(!cli.no_search)
        .clearable(!cli.no_clear)
        .disabled(cli.disabled)
        .placeholder("Add Preferred Food Items")
        .on_menu_open(Box::new(|| info!("menu opened")))
        .on_search(Box::new(|term| info!(term, "search changed")));

    let router = ClickRouter::new();
    select.mount(&router);

    for (step, (description, event)) in script(&cli).into_iter().enumerate() {
        println!("── step {}: {description}", step + 1);
        select.update(event);
        select.set_value(value.lock().clone());
        println!("{}\n", select.view());
    }

    // A click elsewhere in the document closes whatever is still open.
    println!("── final step: click outside the widget");
    for id in router.route(None) {
        if id == select.id() {
            select.update(SelectEvent::OutsideClicked);
        }
    }
    println!("{}", select.view());

    Ok(())
}
