//! Catalog item model and shaping of remote records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Pricing classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingOption {
    Paid,
    Free,
    ViewOnly,
}

impl PricingOption {
    pub const ALL: [PricingOption; 3] = [Self::Paid, Self::Free, Self::ViewOnly];

    /// Display label, also used in the shareable link.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Free => "Free",
            Self::ViewOnly => "View Only",
        }
    }

    /// Parses a display label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
    }

    /// Parses the numeric code used by the remote catalog.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::Paid),
            1 => Some(Self::Free),
            2 => Some(Self::ViewOnly),
            _ => None,
        }
    }
}

/// A purchasable content item. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub creator: String,
    pub image_path: String,
    pub pricing_option: PricingOption,
    /// Only meaningful for [`PricingOption::Paid`].
    pub price: Option<f64>,
}

impl Item {
    /// Price used by filtering and sorting.
    ///
    /// Absent prices count as 0 and non-paid items always count as 0,
    /// whatever the record carried.
    pub fn effective_price(&self) -> f64 {
        match self.pricing_option {
            PricingOption::Paid => self.price.unwrap_or(0.0),
            PricingOption::Free | PricingOption::ViewOnly => 0.0,
        }
    }

    /// Text shown on the item card: `$<price>` for paid items, the tier label otherwise.
    pub fn price_tag(&self) -> String {
        match self.pricing_option {
            PricingOption::Paid => format!("${}", self.effective_price()),
            other => other.label().to_string(),
        }
    }
}

/// Reasons a remote record cannot become an [`Item`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record has no usable '{field}'")]
    MissingField { field: &'static str },

    #[error("unknown pricing option {value}")]
    UnknownPricingOption { value: String },
}

/// Loosely typed view of a remote record.
///
/// Every field is optional here; [`Item::try_from`] decides which ones are
/// required and which degrade to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    creator: Option<Value>,
    #[serde(default)]
    image_path: Option<Value>,
    #[serde(default)]
    pricing_option: Option<Value>,
    #[serde(default)]
    price: Option<Value>,
}

impl TryFrom<Value> for Item {
    type Error = ShapeError;

    fn try_from(record: Value) -> Result<Self, Self::Error> {
        if !record.is_object() {
            return Err(ShapeError::NotAnObject);
        }
        let raw: RawItem = serde_json::from_value(record).map_err(|_| ShapeError::NotAnObject)?;

        let id = raw
            .id
            .as_ref()
            .and_then(parse_id)
            .ok_or(ShapeError::MissingField { field: "id" })?;
        let title = raw
            .title
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ShapeError::MissingField { field: "title" })?;
        let pricing_option = match raw.pricing_option {
            Some(value) => parse_pricing_option(&value)?,
            None => return Err(ShapeError::MissingField { field: "pricingOption" }),
        };

        let price = match pricing_option {
            PricingOption::Paid => raw.price.as_ref().and_then(parse_price),
            PricingOption::Free | PricingOption::ViewOnly => None,
        };

        Ok(Item {
            id,
            title,
            creator: string_or_empty(raw.creator.as_ref()),
            image_path: string_or_empty(raw.image_path.as_ref()),
            pricing_option,
            price,
        })
    }
}

/// Shapes a batch of remote records, dropping the ones that cannot be used.
pub fn shape_records(records: Vec<Value>) -> Vec<Item> {
    let total = records.len();
    let items: Vec<Item> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match Item::try_from(record) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(index, error = %err, "Dropping malformed catalog record");
                None
            }
        })
        .collect();

    if items.len() < total {
        tracing::info!(kept = items.len(), total, "Shaped catalog records");
    }
    items
}

fn parse_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_pricing_option(value: &Value) -> Result<PricingOption, ShapeError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(PricingOption::from_code),
        Value::String(s) => PricingOption::from_label(s).or_else(|| match s.trim() {
            "PAID" => Some(PricingOption::Paid),
            "FREE" => Some(PricingOption::Free),
            "VIEW_ONLY" => Some(PricingOption::ViewOnly),
            _ => None,
        }),
        _ => None,
    };
    parsed.ok_or_else(|| ShapeError::UnknownPricingOption {
        value: value.to_string(),
    })
}

fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

fn string_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
