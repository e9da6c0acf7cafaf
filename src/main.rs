mod api;
mod auth;
mod cli;
mod collection;
mod columns;
mod config;
mod creation;
mod display;
mod error;
mod groom;
mod list_view;
mod paginator;
mod rank;

#[cfg(test)]
mod tests;

use api::ApiClient;
use cli::{dismiss_on_interrupt, with_spinner, AlertReporter, InquirePrompt, SiteNavigator};
use config::Config;
use creation::{CreationWorkflow, ErrorReporter};
use display::Presentation;
use inquire::{InquireError, Select};
use list_view::CollectionListView;
use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

const LOADING: &str = "Loading puzzle collections...";

fn init_logging() {
    let level = std::env::var("OGS_LOG")
        .ok()
        .and_then(|raw| log::LevelFilter::from_str(&raw).ok())
        .unwrap_or(log::LevelFilter::Info);
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
}

fn pick_sort_column(view: &CollectionListView<ApiClient>) -> Result<Option<usize>, InquireError> {
    let options: Vec<String> = view
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.sortable())
        .map(|(i, c)| format!("{}. {}", i, c.header))
        .collect();
    let choice = dismiss_on_interrupt(Select::new("Sort by:", options).prompt_skippable())?;
    Ok(choice.and_then(|label| label.split('.').next().and_then(|i| i.parse().ok())))
}

fn pick_row(view: &CollectionListView<ApiClient>) -> Result<Option<usize>, InquireError> {
    let options: Vec<String> = view
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{}. {}", i + 1, row.summary().name))
        .collect();
    if options.is_empty() {
        println!("No collections on this page.");
        return Ok(None);
    }
    let choice = dismiss_on_interrupt(Select::new("Open collection:", options).prompt_skippable())?;
    Ok(choice.and_then(|label| {
        label
            .split('.')
            .next()
            .and_then(|i| i.parse::<usize>().ok())
            .map(|i| i - 1)
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    let display = Arc::new(Presentation::from_config(&config)?);
    let client = ApiClient::new(config.clone())?;
    let mut navigator = SiteNavigator::new(&config);
    let mut reporter = AlertReporter;

    let user_name = whoami::username();
    println!(
        "Hi, {}! Showing puzzle collections of player {}.",
        user_name, config.player_id
    );

    let mut view = CollectionListView::new(
        client.clone(),
        display.clone(),
        config.player_id,
        config.page_size,
    );
    match with_spinner(LOADING, view.refresh()).await {
        Ok(()) => println!("{}", cli::format_table(&view)),
        Err(e) => reporter.report(&e),
    }

    let new_collection = display.tr("New puzzle collection");
    loop {
        let menu_options: Vec<&str> = vec![
            "Refresh",
            "Next page",
            "Previous page",
            "Sort by column",
            "Open collection",
            new_collection.as_str(),
            "Exit",
        ];
        let menu_ans: Result<&str, InquireError> =
            Select::new("What would you like to do?", menu_options).prompt();

        let choice = match menu_ans {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => {
                log::warn!("menu prompt failed: {}", e);
                continue;
            }
        };

        let outcome = match choice {
            "Refresh" => with_spinner(LOADING, view.refresh()).await,
            "Next page" => with_spinner(LOADING, view.next_page()).await,
            "Previous page" => with_spinner(LOADING, view.previous_page()).await,
            "Sort by column" => match pick_sort_column(&view)? {
                Some(column) => with_spinner(LOADING, view.sort_by(column)).await,
                None => continue,
            },
            "Open collection" => {
                if let Some(index) = pick_row(&view)? {
                    if let Err(e) = view.activate_row(index, &mut navigator) {
                        reporter.report(&e);
                    }
                }
                continue;
            }
            "Exit" => break,
            _ => {
                let mut workflow = CreationWorkflow::new(display.clone());
                let created = workflow
                    .run(&mut InquirePrompt, &client, &mut navigator, &mut reporter)
                    .await?;
                log::debug!("creation workflow back to {:?}", workflow.state());
                match created {
                    Some(id) => {
                        log::info!("created puzzle collection {}", id);
                        with_spinner(LOADING, view.refresh()).await
                    }
                    None => continue,
                }
            }
        };

        match outcome {
            Ok(()) => println!("{}", cli::format_table(&view)),
            Err(e) => reporter.report(&e),
        }
    }

    Ok(())
}
