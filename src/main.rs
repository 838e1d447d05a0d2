use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use dinescout::business::Business;
use dinescout::client::BusinessClient;
use dinescout::config::Config;
use dinescout::filter::{options, CuisineFilter, FilterState, PriceFilter, SortKey};
use dinescout::screen::{ListView, ScreenIntent, ScreenSession};

#[derive(Debug, Parser)]
#[command(name = "dinescout", version, about = "Find restaurants and filter them locally")]
struct Cli {
    /// Config file (default: ~/.config/dinescout/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch businesses once and print the filtered/sorted list
    Search(SearchArgs),
    /// Look up a single business by id
    Details {
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the filter options
    Options,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Search keyword (default from config)
    #[arg(long)]
    term: Option<String>,
    /// Search location (default from config)
    #[arg(long)]
    location: Option<String>,
    /// Case-insensitive filter on business name
    #[arg(short, long, default_value = "")]
    query: String,
    /// relevance, rating or review_count
    #[arg(long, default_value = "relevance")]
    sort: SortKey,
    /// all, or a category alias fragment (e.g. italian)
    #[arg(long, default_value = "all")]
    cuisine: CuisineFilter,
    /// all, $, $$, $$$ or $$$$
    #[arg(long, default_value = "all")]
    price: PriceFilter,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dinescout::logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Search(args) => search(&config, args).await,
        Command::Details { id, json } => details(&config, &id, json).await,
        Command::Options => {
            print_options();
            Ok(())
        }
    }
}

async fn search(config: &Config, args: SearchArgs) -> Result<()> {
    let client = BusinessClient::new(config)?;
    let term = args.term.as_deref().unwrap_or(&config.defaults.term);
    let location = args.location.as_deref().unwrap_or(&config.defaults.location);

    let mut session = ScreenSession::new();
    session.load(&client, term, location).await;

    if !args.query.is_empty() {
        session.dispatch(ScreenIntent::SearchChanged { text: args.query });
    }

    let filters = FilterState {
        sort_by: args.sort,
        cuisine: args.cuisine,
        price: args.price,
    };
    if !filters.is_default() {
        session.dispatch(ScreenIntent::OpenFilters);
        session.dispatch(ScreenIntent::SelectSort(filters.sort_by));
        session.dispatch(ScreenIntent::SelectCuisine(filters.cuisine));
        session.dispatch(ScreenIntent::SelectPrice(filters.price));
        session.dispatch(ScreenIntent::ApplyFilters);
    }

    match session.state().view() {
        ListView::Loading => bail!("Search did not complete"),
        ListView::Error { message } => bail!("{}", message),
        ListView::Empty if args.json => println!("[]"),
        ListView::Empty => println!("No restaurants found"),
        ListView::Populated(list) if args.json => {
            println!("{}", serde_json::to_string_pretty(list)?);
        }
        ListView::Populated(list) => {
            for business in list {
                println!("{}", render_line(business));
            }
        }
    }
    Ok(())
}

async fn details(config: &Config, id: &str, json: bool) -> Result<()> {
    let client = BusinessClient::new(config)?;
    let Some(business) = client.details(id).await else {
        bail!("Business '{}' not found or could not be fetched", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&business)?);
    } else {
        println!("{}", render_line(&business));
        println!("  id: {}", business.id);
        if !business.image_url.is_empty() {
            println!("  image: {}", business.image_url);
        }
        let titles: Vec<&str> = business.categories.iter().map(|c| c.title.as_str()).collect();
        if !titles.is_empty() {
            println!("  categories: {}", titles.join(", "));
        }
    }
    Ok(())
}

fn print_options() {
    for group in options::option_groups() {
        println!("{}:", group.title);
        for opt in group.options {
            println!("  {:<14} {}", opt.label, opt.value);
        }
    }
}

/// One restaurant card as a text line: name, cuisine, rating, reviews, price.
fn render_line(business: &Business) -> String {
    format!(
        "{}  [{}]  {:.1}★ ({} reviews)  {}",
        business.name,
        business.primary_cuisine().unwrap_or("-"),
        business.rating,
        business.review_count,
        business.price
    )
}
