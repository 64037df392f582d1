//! Line commands of the interactive browser.

use thiserror::Error;

use crate::catalog::PricingOption;
use crate::ui::filters::{FilterIntent, PriceRange, SortMode};

pub const HELP: &str = "\
Commands:
  search <text>         search titles and creators (empty clears)
  tier <labels>|none    select pricing tiers, comma separated (Paid, Free, View Only)
  toggle <label>        tick or untick one pricing tier
  sort name|high|low    order by item name, higher price or lower price
  range <min> <max>     price range for paid items
  reset                 clear tiers, search and sort
  more                  load the next page
  show                  print the grid again
  link                  print the shareable link
  help                  show this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Filter(FilterIntent),
    More,
    Show,
    Link,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown pricing tier '{0}' (expected Paid, Free or View Only)")]
    UnknownTier(String),

    #[error("unknown sort mode '{0}' (expected name, high or low)")]
    UnknownSort(String),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Filter(FilterIntent::SetSearchKeyword {
            text: rest.to_string(),
        }),
        "tier" | "tiers" => Command::Filter(FilterIntent::SetPricingFilter {
            tiers: parse_tiers(rest)?,
        }),
        "toggle" => {
            if rest.is_empty() {
                return Err(InputError::Usage("toggle <label>"));
            }
            let tier = PricingOption::from_label(rest)
                .ok_or_else(|| InputError::UnknownTier(rest.to_string()))?;
            Command::Filter(FilterIntent::ToggleTier { tier })
        }
        "sort" => {
            let mode = SortMode::from_query_value(&rest.to_ascii_lowercase())
                .ok_or_else(|| InputError::UnknownSort(rest.to_string()))?;
            Command::Filter(FilterIntent::SetSortBy { mode })
        }
        "range" => Command::Filter(FilterIntent::SetPriceRange {
            range: parse_range(rest)?,
        }),
        "reset" => Command::Filter(FilterIntent::ResetFilters),
        "more" | "m" => Command::More,
        "show" | "ls" => Command::Show,
        "link" => Command::Link,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_tiers(rest: &str) -> Result<Vec<PricingOption>, InputError> {
    if rest.is_empty() {
        return Err(InputError::Usage("tier <labels>|none"));
    }
    if rest.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    rest.split(',')
        .filter(|label| !label.trim().is_empty())
        .map(|label| {
            PricingOption::from_label(label)
                .ok_or_else(|| InputError::UnknownTier(label.trim().to_string()))
        })
        .collect()
}

fn parse_range(rest: &str) -> Result<PriceRange, InputError> {
    let bounds: Vec<&str> = rest.split_whitespace().collect();
    let [min, max] = bounds.as_slice() else {
        return Err(InputError::Usage("range <min> <max>"));
    };
    let parse = |raw: &str| {
        raw.trim_start_matches('$')
            .parse::<u32>()
            .map_err(|_| InputError::InvalidPrice(raw.to_string()))
    };
    Ok(PriceRange::new(parse(*min)?, parse(*max)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(line: &str) -> FilterIntent {
        match parse_command(line) {
            Ok(Some(Command::Filter(intent))) => intent,
            other => panic!("expected filter intent, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            filter("search  big cat "),
            FilterIntent::SetSearchKeyword {
                text: "big cat".to_string()
            }
        );
        assert_eq!(
            filter("search"),
            FilterIntent::SetSearchKeyword {
                text: String::new()
            }
        );
    }

    #[test]
    fn tiers_accept_labels_and_none() {
        assert_eq!(
            filter("tier paid, view only"),
            FilterIntent::SetPricingFilter {
                tiers: vec![PricingOption::Paid, PricingOption::ViewOnly]
            }
        );
        assert_eq!(
            filter("tier none"),
            FilterIntent::SetPricingFilter { tiers: vec![] }
        );
        assert_eq!(
            parse_command("tier premium"),
            Err(InputError::UnknownTier("premium".to_string()))
        );
    }

    #[test]
    fn sort_and_range() {
        assert_eq!(
            filter("sort HIGH"),
            FilterIntent::SetSortBy {
                mode: SortMode::ByPriceDesc
            }
        );
        assert_eq!(
            filter("range $200 50"),
            FilterIntent::SetPriceRange {
                range: PriceRange::new(50, 200)
            }
        );
        assert_eq!(
            parse_command("range 10"),
            Err(InputError::Usage("range <min> <max>"))
        );
        assert_eq!(
            parse_command("range 10 ten"),
            Err(InputError::InvalidPrice("ten".to_string()))
        );
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("more"), Ok(Some(Command::More)));
        assert_eq!(parse_command("Q"), Ok(Some(Command::Quit)));
        assert_eq!(
            parse_command("dance"),
            Err(InputError::Unknown("dance".to_string()))
        );
    }
}
