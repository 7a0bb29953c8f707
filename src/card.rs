//! One IPO rendered as a card.
use leptos::*;
use std::fmt;
use crate::models::{DisplayValue, IpoRecord};

pub const PLACEHOLDER: &str = "—";
pub const CURRENCY: &str = "₹";

#[derive(Clone, Debug, PartialEq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

/// Everything a card shows, already formatted. Building it has no side
/// effects, so the same record always yields the same content.
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub heading: String,
    pub lines: Vec<CardLine>,
}

impl CardContent {
    pub fn from_record(ipo: &IpoRecord) -> Self {
        let lines = vec![
            line("Price Band", shown(ipo.price_band.as_ref())),
            line("Open Date", shown(ipo.open_date.as_ref())),
            line("Close Date", shown(ipo.close_date.as_ref())),
            line("Issue Size", shown(ipo.issue_size.as_ref())),
            line("Issue Type", shown(ipo.issue_type.as_ref())),
            line("Listing Date", text(ipo.listing_date.as_ref())),
            line("Status", ipo.status.clone()),
            line("IPO Price", price(ipo.ipo_price.as_ref())),
            line("Listing Price", price(ipo.listing_price.as_ref())),
            line("Listing Gain", text(ipo.listing_gain.as_ref())),
        ];

        Self {
            heading: ipo.company_name.clone(),
            lines,
        }
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

impl fmt::Display for CardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for l in &self.lines {
            writeln!(f, "  {}: {}", l.label, l.value)?;
        }
        Ok(())
    }
}

fn line(label: &'static str, value: String) -> CardLine {
    CardLine { label, value }
}

/// Required display fields: shown as sent, placeholder only when absent.
fn shown(value: Option<&DisplayValue>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Optional fields: blank values count as absent.
fn text(value: Option<&DisplayValue>) -> String {
    match value {
        Some(v) if !v.is_blank() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn price(value: Option<&DisplayValue>) -> String {
    format!("{}{}", CURRENCY, text(value))
}

#[component]
pub fn IpoCard(record: IpoRecord) -> impl IntoView {
    let content = CardContent::from_record(&record);

    view! {
        <div class="card">
            <h2 class="company">{content.heading}</h2>
            {content.lines.into_iter().map(|l| view! {
                <p><strong>{l.label}":"</strong>" "{l.value}</p>
            }).collect_view()}
        </div>
    }
}
