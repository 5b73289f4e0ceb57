//! Aggregate statistics over one user's expense list.
//!
//! Everything here is pure: [`aggregate`] takes the list plus the calendar
//! day to treat as "today", so the rolling window is deterministic under
//! test. Buckets are keyed by canonical day strings produced by
//! [`day_label`], the same formatter that stamps `Expense::date` at
//! creation time. Bucketing itself compares [`chrono::NaiveDate`] values,
//! never formatted strings.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::expenses::Expense;

/// Width of the rolling daily window, in calendar days.
const WINDOW_DAYS: u64 = 7;

/// Summary view over a list of expenses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stats {
    pub total: f64,
    pub count: usize,
    /// Category label to summed amount. Only categories that occur appear.
    pub by_category: BTreeMap<String, f64>,
    /// Exactly seven day keys, `today - 6` through `today`, zero-filled.
    pub last7_days: BTreeMap<String, f64>,
    /// `"<month>/<year>"` (month 1-indexed) to summed amount. No fixed
    /// window; only months with activity appear.
    pub by_month: BTreeMap<String, f64>,
}

/// Canonical day key for a calendar date.
///
/// Used both when stamping an expense's `date` field and when emitting
/// `last7_days` keys, so the stored and aggregated forms cannot drift.
/// `%Y-%m-%d` also sorts chronologically as a plain string.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Month bucket key, `"<month>/<year>"` with a 1-indexed month.
pub fn month_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.year())
}

/// Reduce `expenses` into totals, category sums, a zero-filled 7-day window
/// ending at `today`, and per-month sums.
pub fn aggregate(expenses: &[Expense], today: NaiveDate) -> Stats {
    let window_start = today
        .checked_sub_days(Days::new(WINDOW_DAYS - 1))
        .unwrap_or(NaiveDate::MIN);

    let mut last7_days: BTreeMap<String, f64> = (0..WINDOW_DAYS)
        .filter_map(|offset| window_start.checked_add_days(Days::new(offset)))
        .map(|day| (day_label(day), 0.0))
        .collect();

    let mut stats = Stats {
        count: expenses.len(),
        ..Stats::default()
    };

    for expense in expenses {
        stats.total += expense.amount;
        *stats
            .by_category
            .entry(expense.category.clone())
            .or_insert(0.0) += expense.amount;

        let day = expense.created_at.date_naive();
        if day >= window_start && day <= today {
            if let Some(bucket) = last7_days.get_mut(&day_label(day)) {
                *bucket += expense.amount;
            }
        }

        *stats.by_month.entry(month_label(day)).or_insert(0.0) += expense.amount;
    }

    stats.last7_days = last7_days;
    stats
}
