use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the backend. Local rows use integers, but nothing
/// stops a source from sending string keys.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A display-only field. Decimals arrive as strings (`"110.00"`), share counts
/// as bare numbers, so both are accepted and shown verbatim.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl DisplayValue {
    /// Empty strings and zero count as "no value".
    pub fn is_blank(&self) -> bool {
        match self {
            DisplayValue::Text(s) => s.is_empty(),
            DisplayValue::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => f.write_str(s),
            // `110.00` arrives as a float; show it as `110`, not `110.0`.
            DisplayValue::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e15 => {
                    write!(f, "{}", x as i64)
                }
                _ => write!(f, "{}", n),
            },
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue::Text(s.to_string())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct IpoRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub company_name: String,
    pub price_band: Option<DisplayValue>,
    pub open_date: Option<DisplayValue>,
    pub close_date: Option<DisplayValue>,
    pub issue_size: Option<DisplayValue>,
    pub issue_type: Option<DisplayValue>,
    pub listing_date: Option<DisplayValue>,
    pub status: String,
    pub ipo_price: Option<DisplayValue>,
    pub listing_price: Option<DisplayValue>,
    pub listing_gain: Option<DisplayValue>,
}
