use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use refview::config::{self, DateStyle, TagSorting};
use refview::date::{
    DateFormatting, DateFormattingState, PULL_REQUEST_DATE_FORMATTING, TAG_DATE_FORMATTING,
};
use refview::git::{GitTag, TagSortOptions};
use refview::theme::ColorThemeKind;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Absolute,
    Relative,
}

impl From<StyleArg> for DateStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Absolute => DateStyle::Absolute,
            StyleArg::Relative => DateStyle::Relative,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl From<OrderArg> for TagSorting {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::DateDesc => TagSorting::DateDesc,
            OrderArg::DateAsc => TagSorting::DateAsc,
            OrderArg::NameAsc => TagSorting::NameAsc,
            OrderArg::NameDesc => TagSorting::NameDesc,
        }
    }
}

#[derive(clap::Args, Debug)]
struct DateArgs {
    /// Date style, overriding default-date-style from the config
    #[arg(long)]
    style: Option<StyleArg>,

    /// Absolute date pattern, overriding default-date-format from the config
    #[arg(long)]
    format: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tags from a records file
    Tags {
        /// YAML records file
        file: PathBuf,

        /// Tag ordering (defaults to sort-tags-by from the config)
        #[arg(long)]
        order_by: Option<OrderArg>,

        #[command(flatten)]
        dates: DateArgs,

        /// Show one detailed block per tag
        #[arg(long)]
        detail: bool,

        /// Print the sorted tags as JSON
        #[arg(long)]
        json: bool,
    },
    /// List pull requests from a records file
    Prs {
        /// YAML records file
        file: PathBuf,

        #[command(flatten)]
        dates: DateArgs,

        /// Show one detailed block per pull request
        #[arg(long)]
        detail: bool,

        /// Print markdown tooltip lines instead of a listing
        #[arg(long)]
        markdown: bool,

        /// Print the pull requests as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "refview")]
#[command(about = "Render pull requests and tags with configurable dates", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/refview/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("REFVIEW_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Formatting snapshot after applying command line overrides to a slot
fn apply_date_args(slot: &DateFormattingState, args: &DateArgs) -> DateFormatting {
    let mut formatting = slot.current();
    if let Some(style) = args.style {
        formatting.style = style.into();
    }
    if let Some(format) = &args.format {
        formatting.format = Some(format.clone());
    }
    slot.set(formatting.clone());
    formatting
}

fn load_records_or_exit(file: &Path) -> refview::input::RecordSet {
    match refview::input::load_records(file) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config into the shared store, then derive the formatting slots from it
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    config::store::update(config);
    PULL_REQUEST_DATE_FORMATTING.reset();
    TAG_DATE_FORMATTING.reset();

    let use_colors = refview::output::should_use_colors();

    match cli.command {
        Commands::Tags {
            file,
            order_by,
            dates,
            detail,
            json,
        } => {
            let records = load_records_or_exit(&file);
            info!(count = records.tags.len(), file = %file.display(), "Loaded tags");

            let options = TagSortOptions {
                order_by: order_by.map(TagSorting::from),
            };
            let tags = GitTag::sort(records.tags, &options);

            if json {
                print_json(&tags);
            } else {
                let formatting = apply_date_args(&TAG_DATE_FORMATTING, &dates);
                debug!(?formatting, "Rendering tags");
                if detail {
                    for tag in &tags {
                        println!("{}", refview::output::format_tag_detail(tag, &formatting, use_colors));
                        println!();
                    }
                } else {
                    println!("{}", refview::output::format_tag_list(&tags, &formatting, use_colors));
                }
            }
        }
        Commands::Prs {
            file,
            dates,
            detail,
            markdown,
            json,
        } => {
            let records = load_records_or_exit(&file);
            info!(count = records.pull_requests.len(), file = %file.display(), "Loaded pull requests");

            let prs = records.pull_requests;
            let theme = ColorThemeKind::detect();
            debug!(?theme, "Detected color theme");

            if json {
                print_json(&prs);
            } else if markdown {
                println!("{}", refview::output::format_pull_request_markdown(&prs, theme));
            } else {
                let formatting = apply_date_args(&PULL_REQUEST_DATE_FORMATTING, &dates);
                debug!(?formatting, "Rendering pull requests");
                if detail {
                    for pr in &prs {
                        println!(
                            "{}",
                            refview::output::format_pull_request_detail(pr, &formatting, theme, use_colors)
                        );
                        println!();
                    }
                } else {
                    println!(
                        "{}",
                        refview::output::format_pull_request_list(&prs, &formatting, theme, use_colors)
                    );
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
