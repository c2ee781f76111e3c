//! Provider record normalization.

use serde::{Deserialize, Serialize};
use twelvebar_types::{Bar, BarSeries, RawBar, RawNumber, Result, TwelvebarError};

/// Order in which the provider emits bars.
///
/// Twelve Data returns the newest bar first. The order cannot be detected
/// from the data, so it is a named assumption rather than a hidden reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProviderOrder {
    /// Newest bar first (Twelve Data convention).
    #[default]
    NewestFirst,
    /// Oldest bar first.
    OldestFirst,
}

/// Converts provider records into canonical bars, oldest first.
///
/// Produces exactly one bar per record. Any malformed record fails the
/// whole batch so that a gapped series is never returned as complete.
///
/// # Errors
///
/// Returns [`TwelvebarError::MalformedData`] for the first record that is
/// missing a required field or carries an unreadable number. The reported
/// index is the record's position in the provider response.
pub fn normalize(raw: Vec<RawBar>, order: ProviderOrder) -> Result<BarSeries> {
    let mut bars = raw
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize_bar(index, record))
        .collect::<Result<BarSeries>>()?;

    if order == ProviderOrder::NewestFirst {
        bars.reverse();
    }
    Ok(bars)
}

/// Converts a single provider record.
///
/// # Errors
///
/// Returns [`TwelvebarError::MalformedData`] if a required field is missing
/// or a numeric field cannot be read.
pub fn normalize_bar(index: usize, raw: RawBar) -> Result<Bar> {
    let t = raw
        .datetime
        .ok_or_else(|| malformed(index, "missing field `datetime`"))?;

    Ok(Bar {
        t,
        o: required(index, "open", raw.open.as_ref())?,
        h: required(index, "high", raw.high.as_ref())?,
        l: required(index, "low", raw.low.as_ref())?,
        c: required(index, "close", raw.close.as_ref())?,
        v: match raw.volume.as_ref() {
            None => 0.0,
            Some(volume) => number(index, "volume", volume)?,
        },
    })
}

fn required(index: usize, field: &str, value: Option<&RawNumber>) -> Result<f64> {
    let value = value.ok_or_else(|| malformed(index, format!("missing field `{field}`")))?;
    number(index, field, value)
}

fn number(index: usize, field: &str, value: &RawNumber) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| malformed(index, format!("field `{field}` is not a number: {value:?}")))
}

fn malformed(index: usize, reason: impl Into<String>) -> TwelvebarError {
    TwelvebarError::MalformedData {
        index,
        reason: reason.into(),
    }
}
