//! Checks candidate options against the catalog.
//!
//! Candidates are matched by their tag, never by price or calories.

use std::cmp::Ordering;

use strsim::jaro_winkler;
use tracing::trace;

use crate::catalog::{CatalogItem, Size, Stuffing, Topping};
use crate::error::{OrderError, Result};

/// Accept a candidate only if it is one of the defined sizes.
pub fn validate_size(candidate: Option<CatalogItem>) -> Result<Size> {
    match candidate {
        Some(CatalogItem::Size(size)) => Ok(size),
        Some(other) => Err(OrderError::InvalidSize(format!("{} is not a size", other))),
        None => Err(OrderError::InvalidSize("no size given".to_string())),
    }
}

/// Accept a candidate only if it is one of the defined stuffings.
pub fn validate_stuffing(candidate: Option<CatalogItem>) -> Result<Stuffing> {
    match candidate {
        Some(CatalogItem::Stuffing(stuffing)) => Ok(stuffing),
        Some(other) => Err(OrderError::InvalidStuffing(format!(
            "{} is not a stuffing",
            other
        ))),
        None => Err(OrderError::InvalidStuffing("no stuffing given".to_string())),
    }
}

/// Map a stored topping identifier back to its catalog variant.
pub fn resolve_topping(identifier: &str) -> Result<Topping> {
    trace!(identifier, "resolving topping");
    Topping::from_identifier(identifier).ok_or_else(|| {
        OrderError::InvalidTopping(unknown_option(identifier, &Topping::ALL.map(Topping::name)))
    })
}

/// Parse a size from user text (case-insensitive).
pub fn parse_size(input: &str) -> Result<Size> {
    let needle = input.trim().to_lowercase();
    Size::ALL
        .into_iter()
        .find(|s| s.name() == needle)
        .ok_or_else(|| OrderError::InvalidSize(unknown_option(input, &Size::ALL.map(Size::name))))
}

/// Parse a stuffing from user text (case-insensitive).
pub fn parse_stuffing(input: &str) -> Result<Stuffing> {
    let needle = input.trim().to_lowercase();
    Stuffing::ALL
        .into_iter()
        .find(|s| s.name() == needle)
        .ok_or_else(|| {
            OrderError::InvalidStuffing(unknown_option(input, &Stuffing::ALL.map(Stuffing::name)))
        })
}

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Closest candidate name by Jaro-Winkler similarity, if any is close enough.
pub fn suggest(input: &str, candidates: &[&'static str]) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, jaro_winkler(c, &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(c, _)| c)
}

fn unknown_option(input: &str, candidates: &[&'static str]) -> String {
    match suggest(input, candidates) {
        Some(name) => format!("'{}' (did you mean '{}'?)", input, name),
        None => format!("'{}' (expected one of: {})", input, candidates.join(", ")),
    }
}
