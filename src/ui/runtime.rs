use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::share::QueryParams;
use crate::ui::filters::{FilterIntent, PriceRange};
use crate::ui::grid::GridState;
use crate::ui::input::{parse_command, Command, HELP};
use crate::ui::render::{render_filters, render_json, render_text};
use crate::ui::scheduler::LoadMoreScheduler;
use crate::ui::session::Session;

/// Options for a one-shot run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Pages to reveal before printing (at least one).
    pub pages: usize,
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pages: 1,
            json: false,
        }
    }
}

/// Result of handling one interactive command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Print(String),
    Quit,
}

/// Fetches the catalog, applies the link and returns the rendered grid.
pub async fn run_once<S: CatalogSource>(
    source: &S,
    config: &Config,
    query: &QueryParams,
    options: &RunOptions,
) -> Result<String, serde_json::Error> {
    let mut session = Session::from_config(config);
    session.mount(query.clone());
    session.load(source).await;

    for _ in 1..options.pages.max(1) {
        if !session.load_more_now() {
            break;
        }
    }

    let grid = session.grid();
    if options.json {
        render_json(&grid, session.filters(), session.query().to_query_string())
    } else {
        Ok(format!("{}\nLink: {}", screen(&mut session), link(&session)))
    }
}

/// Line-driven browser on stdin/stdout.
///
/// "more" goes through the load-more timer, so filter commands typed while
/// a page is pending still take effect first.
pub async fn run_interactive<S: CatalogSource>(
    source: &S,
    config: &Config,
    query: QueryParams,
) -> io::Result<()> {
    let mut session = Session::from_config(config);
    session.mount(query);

    println!("{}", render_text(&GridState::Loading));
    session.load(source).await;
    println!("{}", screen(&mut session));

    let (tx, mut tickets) = mpsc::channel(4);
    let mut scheduler = LoadMoreScheduler::new(
        Duration::from_millis(config.pagination.load_more_delay_ms),
        tx,
    );
    let bounds = PriceRange::new(config.filters.price_min, config.filters.price_max);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(command)) => {
                        match handle_command(command, &mut session, &mut scheduler, bounds) {
                            Reply::Print(text) => println!("{text}"),
                            Reply::Quit => break,
                        }
                    }
                    Ok(None) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
            Some(ticket) = tickets.recv() => {
                if session.apply_load_more(&ticket) {
                    println!("{}", screen(&mut session));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    scheduler.cancel();
    Ok(())
}

/// Applies one command to the session.
///
/// Price ranges are clamped to the configured slider bounds.
pub fn handle_command(
    command: Command,
    session: &mut Session,
    scheduler: &mut LoadMoreScheduler,
    bounds: PriceRange,
) -> Reply {
    match command {
        Command::Filter(intent) => {
            let intent = match intent {
                FilterIntent::SetPriceRange { range } => FilterIntent::SetPriceRange {
                    range: range.clamp_to(bounds),
                },
                other => other,
            };
            session.dispatch_filter(intent);
            Reply::Print(screen(session))
        }
        Command::More => match session.load_more_ticket() {
            Some(ticket) => {
                if scheduler.schedule(ticket) {
                    Reply::Print("Loading more...".to_string())
                } else {
                    Reply::Print("Already loading...".to_string())
                }
            }
            None => Reply::Print("No more items.".to_string()),
        },
        Command::Show => Reply::Print(screen(session)),
        Command::Link => Reply::Print(link(session)),
        Command::Help => Reply::Print(HELP.to_string()),
        Command::Quit => Reply::Quit,
    }
}

fn screen(session: &mut Session) -> String {
    let grid = session.grid();
    format!("{}\n{}", render_filters(session.filters()), render_text(&grid))
}

fn link(session: &Session) -> String {
    if session.query().is_empty() {
        "(no filters)".to_string()
    } else {
        format!("?{}", session.query())
    }
}
