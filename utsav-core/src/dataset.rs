//! The in-memory dataset and its query operations.
//!
//! Every query is a linear scan in definition order. The collections are
//! tens of records, so no indexing or precomputation is warranted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{UtsavError, UtsavResult};
use crate::record::{Festival, Metadata, RegionalEvent};

/// The immutable festival dataset.
///
/// Built once at process start (see [`Dataset::curated`]) and shared
/// read-only with the request handlers; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    metadata: Metadata,
    festivals: Vec<Festival>,
    regional_events: Vec<RegionalEvent>,
}

impl Dataset {
    pub fn new(
        metadata: Metadata,
        festivals: Vec<Festival>,
        regional_events: Vec<RegionalEvent>,
    ) -> Self {
        Dataset {
            metadata,
            festivals,
            regional_events,
        }
    }

    /// The hand-curated 2024 payload.
    pub fn curated() -> Self {
        crate::curated::dataset()
    }

    /// Check that every date-bearing field parses as a calendar date.
    ///
    /// Wire matching stays literal string comparison; this only guards the
    /// build-time invariant that the curated payload is well-formed.
    pub fn validate(&self) -> UtsavResult<()> {
        for festival in &self.festivals {
            check_date(&festival.name, &festival.date)?;
        }
        for event in &self.regional_events {
            if let Some(date) = &event.date {
                check_date(&event.name, date)?;
            }
            if let Some(next) = &event.next_occurrence {
                check_date(&event.name, next)?;
            }
        }
        Ok(())
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// All festivals, in definition order.
    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    /// All regional events, in definition order.
    pub fn regional_events(&self) -> &[RegionalEvent] {
        &self.regional_events
    }

    /// First festival whose name contains `query`, case-insensitively.
    ///
    /// Only ever one record: if several names share the fragment (both
    /// Eids match "eid"), the first in definition order wins.
    pub fn festival_by_name(&self, query: &str) -> UtsavResult<&Festival> {
        let query = query.to_lowercase();
        self.festivals
            .iter()
            .find(|f| f.name.to_lowercase().contains(&query))
            .ok_or(UtsavError::FestivalNotFound)
    }

    /// Festivals whose `date` equals `date` exactly (literal comparison,
    /// no parsing or normalization).
    pub fn festivals_on(&self, date: &str) -> Vec<&Festival> {
        self.festivals.iter().filter(|f| f.date == date).collect()
    }

    /// Festivals whose date falls in `month` (1-12).
    pub fn festivals_in_month(&self, month: i64) -> UtsavResult<Vec<&Festival>> {
        if !(1..=12).contains(&month) {
            return Err(UtsavError::MonthOutOfRange);
        }
        Ok(self
            .festivals
            .iter()
            .filter(|f| month_of(&f.date) == Some(month as u32))
            .collect())
    }

    /// Festivals listing `region` (case-insensitive exact match, not
    /// substring) among their regions.
    pub fn festivals_in_region(&self, region: &str) -> Vec<&Festival> {
        self.festivals
            .iter()
            .filter(|f| f.regions.iter().any(|r| r.eq_ignore_ascii_case(region)))
            .collect()
    }

    /// Festivals of category `kind` (case-insensitive exact match).
    pub fn festivals_of_kind(&self, kind: &str) -> Vec<&Festival> {
        self.festivals
            .iter()
            .filter(|f| f.kind.eq_ignore_ascii_case(kind))
            .collect()
    }

    /// Festivals flagged as public holidays, in definition order.
    pub fn public_holidays(&self) -> Vec<&Festival> {
        self.festivals.iter().filter(|f| f.public_holiday).collect()
    }
}

/// Extract the month component (second hyphen-delimited field) of a
/// `YYYY-MM-DD` string.
fn month_of(date: &str) -> Option<u32> {
    date.split('-').nth(1)?.parse().ok()
}

fn check_date(name: &str, date: &str) -> UtsavResult<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| UtsavError::InvalidDate {
        name: name.to_string(),
        date: date.to_string(),
    })?;
    Ok(())
}
