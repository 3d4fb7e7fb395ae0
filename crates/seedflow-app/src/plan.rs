// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::{Customer, CustomerId};

/// The single row currently being edited, with its uncommitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub customer_id: CustomerId,
    pub buffer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied {
        customer_id: CustomerId,
        previous: u64,
        current: u64,
    },
    Discarded,
    NotEditing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Column sums, widened to `u128` so any number of `u64` rows fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanTotals {
    pub current: u128,
    pub previous: u128,
}

impl PlanTotals {
    pub fn variance(self) -> i128 {
        saturating_signed(self.current) - saturating_signed(self.previous)
    }

    pub fn growth_percent(self) -> f64 {
        if self.previous == 0 {
            return 0.0;
        }
        self.variance() as f64 / self.previous as f64 * 100.0
    }

    pub fn growth_label(self) -> String {
        signed_percent(self.growth_percent())
    }

    pub fn trend(self) -> Trend {
        trend_from(self.current.cmp(&self.previous))
    }
}

fn saturating_signed(value: u128) -> i128 {
    i128::try_from(value).unwrap_or(i128::MAX)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub customers: usize,
    pub product_lines: Vec<String>,
    pub totals: PlanTotals,
}

/// Customer allocation table with at most one row in edit at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanTable {
    customers: Vec<Customer>,
    editing: Option<PendingEdit>,
}

impl PlanTable {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            editing: None,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| &customer.id == id)
    }

    pub fn editing(&self) -> Option<&PendingEdit> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &CustomerId) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|edit| &edit.customer_id == id)
    }

    /// Starts editing `id`, dropping any other uncommitted edit. Returns false
    /// and leaves state untouched when the id is unknown.
    pub fn begin_edit(&mut self, id: &CustomerId) -> bool {
        let Some(customer) = self.customer(id) else {
            return false;
        };
        self.editing = Some(PendingEdit {
            customer_id: customer.id.clone(),
            buffer: customer.current_year_units.to_string(),
        });
        true
    }

    pub fn push_char(&mut self, value: char) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.push(value);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.pop();
        }
    }

    pub fn clear_buffer(&mut self) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer.clear();
        }
    }

    pub fn set_buffer(&mut self, value: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.buffer = value.into();
        }
    }

    /// Applies the buffer to `id` when it parses as a non-negative integer.
    /// Edit mode ends either way; a bad buffer is dropped without error.
    pub fn commit_edit(&mut self, id: &CustomerId) -> CommitOutcome {
        if !self.is_editing(id) {
            return CommitOutcome::NotEditing;
        }
        let Some(edit) = self.editing.take() else {
            return CommitOutcome::NotEditing;
        };

        let Some(units) = parse_units(&edit.buffer) else {
            return CommitOutcome::Discarded;
        };
        match self.update_units(&edit.customer_id, units) {
            Some(previous) => CommitOutcome::Applied {
                customer_id: edit.customer_id,
                previous,
                current: units,
            },
            None => CommitOutcome::Discarded,
        }
    }

    pub fn commit_active_edit(&mut self) -> CommitOutcome {
        match self.editing.as_ref().map(|edit| edit.customer_id.clone()) {
            Some(id) => self.commit_edit(&id),
            None => CommitOutcome::NotEditing,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replaces the current-year units for `id`, returning the old value.
    pub fn update_units(&mut self, id: &CustomerId, units: u64) -> Option<u64> {
        let customer = self
            .customers
            .iter_mut()
            .find(|customer| &customer.id == id)?;
        Some(std::mem::replace(&mut customer.current_year_units, units))
    }

    pub fn totals(&self) -> PlanTotals {
        self.customers
            .iter()
            .fold(PlanTotals::default(), |totals, customer| PlanTotals {
                current: totals.current + u128::from(customer.current_year_units),
                previous: totals.previous + u128::from(customer.previous_year_units),
            })
    }

    pub fn product_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        for product in self.customers.iter().flat_map(|c| c.products.iter()) {
            if !lines.iter().any(|seen| seen == product) {
                lines.push(product.clone());
            }
        }
        lines
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            customers: self.customers.len(),
            product_lines: self.product_lines(),
            totals: self.totals(),
        }
    }
}

/// Strict integer parse for the edit buffer; surrounding whitespace is allowed.
pub fn parse_units(raw: &str) -> Option<u64> {
    let value: i64 = raw.trim().parse().ok()?;
    u64::try_from(value).ok()
}

pub fn variance_label(current: u64, previous: u64) -> String {
    if previous == 0 {
        return if current > 0 { "+100%" } else { "0%" }.to_owned();
    }
    let delta = current as f64 - previous as f64;
    signed_percent(delta / previous as f64 * 100.0)
}

pub fn trend(current: u64, previous: u64) -> Trend {
    trend_from(current.cmp(&previous))
}

fn trend_from(ordering: std::cmp::Ordering) -> Trend {
    match ordering {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Flat,
    }
}

impl Customer {
    pub fn variance_label(&self) -> String {
        variance_label(self.current_year_units, self.previous_year_units)
    }

    pub fn trend(&self) -> Trend {
        trend(self.current_year_units, self.previous_year_units)
    }
}

fn signed_percent(percent: f64) -> String {
    if percent >= 0.0 {
        format!("+{percent:.1}%")
    } else {
        format!("{percent:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitOutcome, PlanTable, Trend, parse_units, trend, variance_label};
    use crate::{Customer, CustomerId};

    fn customer(id: &str, previous: u64, current: u64) -> Customer {
        Customer {
            id: CustomerId::new(id),
            name: format!("Customer {id}"),
            products: vec!["Corn Seed".to_owned()],
            previous_year_units: previous,
            current_year_units: current,
        }
    }

    fn table() -> PlanTable {
        PlanTable::new(vec![
            customer("a", 100, 120),
            customer("b", 150, 140),
            customer("c", 0, 0),
        ])
    }

    #[test]
    fn variance_for_zero_previous_is_fixed() {
        assert_eq!(variance_label(0, 0), "0%");
        assert_eq!(variance_label(5, 0), "+100%");
    }

    #[test]
    fn variance_has_one_decimal_and_explicit_sign() {
        assert_eq!(variance_label(150, 100), "+50.0%");
        assert_eq!(variance_label(80, 100), "-20.0%");
        assert_eq!(variance_label(200, 150), "+33.3%");
        assert_eq!(variance_label(100, 100), "+0.0%");
    }

    #[test]
    fn trend_follows_comparison() {
        assert_eq!(trend(2, 1), Trend::Up);
        assert_eq!(trend(1, 2), Trend::Down);
        assert_eq!(trend(3, 3), Trend::Flat);
    }

    #[test]
    fn parse_units_rejects_non_numeric_and_negative() {
        assert_eq!(parse_units("200"), Some(200));
        assert_eq!(parse_units(" 42 "), Some(42));
        assert_eq!(parse_units("0"), Some(0));
        assert_eq!(parse_units("abc"), None);
        assert_eq!(parse_units("-5"), None);
        assert_eq!(parse_units(""), None);
        assert_eq!(parse_units("12abc"), None);
    }

    #[test]
    fn parse_units_rejects_fractions_and_out_of_range_values() {
        assert_eq!(parse_units("1.5"), None);
        assert_eq!(parse_units("9223372036854775807"), Some(9_223_372_036_854_775_807));
        assert_eq!(parse_units("9223372036854775808"), None);
        assert_eq!(parse_units("18446744073709551615"), None);
        assert_eq!(parse_units("-9223372036854775808"), None);
    }

    #[test]
    fn begin_edit_seeds_buffer_with_current_units() {
        let mut table = table();
        assert!(table.begin_edit(&CustomerId::new("a")));

        let edit = table.editing().expect("edit should be active");
        assert_eq!(edit.customer_id, CustomerId::new("a"));
        assert_eq!(edit.buffer, "120");
    }

    #[test]
    fn begin_edit_on_unknown_row_keeps_existing_edit() {
        let mut table = table();
        table.begin_edit(&CustomerId::new("a"));
        table.set_buffer("999");

        assert!(!table.begin_edit(&CustomerId::new("zzz")));
        assert!(table.is_editing(&CustomerId::new("a")));
        assert_eq!(table.editing().map(|edit| edit.buffer.as_str()), Some("999"));
    }

    #[test]
    fn starting_second_edit_abandons_first() {
        let mut table = table();
        table.begin_edit(&CustomerId::new("a"));
        table.set_buffer("5000");

        table.begin_edit(&CustomerId::new("b"));
        assert!(!table.is_editing(&CustomerId::new("a")));
        assert!(table.is_editing(&CustomerId::new("b")));
        assert_eq!(table.editing().map(|edit| edit.buffer.as_str()), Some("140"));

        let a = table.customer(&CustomerId::new("a")).expect("row a");
        assert_eq!(a.current_year_units, 120);
    }

    #[test]
    fn commit_valid_buffer_updates_row_and_variance() {
        let mut table = table();
        let id = CustomerId::new("b");
        table.begin_edit(&id);
        table.set_buffer("200");

        let outcome = table.commit_edit(&id);
        assert_eq!(
            outcome,
            CommitOutcome::Applied {
                customer_id: id.clone(),
                previous: 140,
                current: 200,
            }
        );
        assert!(table.editing().is_none());

        let row = table.customer(&id).expect("row b");
        assert_eq!(row.current_year_units, 200);
        assert_eq!(row.variance_label(), "+33.3%");
    }

    #[test]
    fn commit_non_numeric_buffer_keeps_value_and_exits_edit() {
        let mut table = table();
        let id = CustomerId::new("a");
        table.begin_edit(&id);
        table.set_buffer("abc");

        assert_eq!(table.commit_edit(&id), CommitOutcome::Discarded);
        assert!(table.editing().is_none());
        assert_eq!(table.customer(&id).map(|c| c.current_year_units), Some(120));
    }

    #[test]
    fn commit_negative_buffer_keeps_value() {
        let mut table = table();
        let id = CustomerId::new("a");
        table.begin_edit(&id);
        table.set_buffer("-5");

        assert_eq!(table.commit_edit(&id), CommitOutcome::Discarded);
        assert_eq!(table.customer(&id).map(|c| c.current_year_units), Some(120));
    }

    #[test]
    fn commit_for_row_not_in_edit_is_ignored() {
        let mut table = table();
        table.begin_edit(&CustomerId::new("a"));
        table.set_buffer("1");

        assert_eq!(
            table.commit_edit(&CustomerId::new("b")),
            CommitOutcome::NotEditing
        );
        assert!(table.is_editing(&CustomerId::new("a")));
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut table = table();
        let id = CustomerId::new("a");
        table.begin_edit(&id);
        table.set_buffer("777");
        table.cancel_edit();

        assert!(table.editing().is_none());
        assert_eq!(table.commit_active_edit(), CommitOutcome::NotEditing);
        assert_eq!(table.customer(&id).map(|c| c.current_year_units), Some(120));
    }

    #[test]
    fn buffer_edits_only_apply_while_editing() {
        let mut table = table();
        table.push_char('9');
        assert!(table.editing().is_none());

        table.begin_edit(&CustomerId::new("a"));
        table.push_char('5');
        assert_eq!(table.editing().map(|edit| edit.buffer.as_str()), Some("1205"));
        table.pop_char();
        table.pop_char();
        assert_eq!(table.editing().map(|edit| edit.buffer.as_str()), Some("12"));
        table.clear_buffer();
        assert_eq!(table.editing().map(|edit| edit.buffer.as_str()), Some(""));
    }

    #[test]
    fn totals_track_edits() {
        let mut table = table();
        assert_eq!(table.totals().current, 260);
        assert_eq!(table.totals().previous, 250);

        table.update_units(&CustomerId::new("c"), 40);
        let totals = table.totals();
        assert_eq!(totals.current, 300);
        assert_eq!(totals.variance(), 50);
        assert_eq!(totals.growth_label(), "+20.0%");
    }

    #[test]
    fn totals_hold_rows_at_the_largest_accepted_value() {
        let mut table = table();
        for id in ["a", "b"] {
            let id = CustomerId::new(id);
            table.begin_edit(&id);
            table.set_buffer(i64::MAX.to_string());
            assert!(matches!(
                table.commit_edit(&id),
                CommitOutcome::Applied { .. }
            ));
        }

        let totals = table.totals();
        assert_eq!(totals.current, 2 * u128::from(i64::MAX as u64));
        assert_eq!(totals.previous, 250);
        assert_eq!(totals.trend(), Trend::Up);
        assert_eq!(totals.variance(), 2 * i128::from(i64::MAX) - 250);
    }

    #[test]
    fn totals_hold_rows_at_u64_max() {
        let table = PlanTable::new(vec![
            customer("a", u64::MAX, u64::MAX),
            customer("b", u64::MAX, u64::MAX),
            customer("c", 0, 1),
        ]);

        let totals = table.totals();
        assert_eq!(totals.current, 2 * u128::from(u64::MAX) + 1);
        assert_eq!(totals.previous, 2 * u128::from(u64::MAX));
        assert_eq!(totals.variance(), 1);
    }

    #[test]
    fn growth_is_zero_without_previous_units() {
        let table = PlanTable::new(vec![customer("x", 0, 10)]);
        assert_eq!(table.totals().growth_percent(), 0.0);
        assert_eq!(table.totals().growth_label(), "+0.0%");
    }

    #[test]
    fn product_lines_are_distinct_in_first_seen_order() {
        let mut first = customer("a", 1, 1);
        first.products = vec!["Wheat".to_owned(), "Corn Seed".to_owned()];
        let mut second = customer("b", 1, 1);
        second.products = vec!["Corn Seed".to_owned(), "Barley".to_owned()];

        let summary = PlanTable::new(vec![first, second]).summary();
        assert_eq!(summary.customers, 2);
        assert_eq!(summary.product_lines, vec!["Wheat", "Corn Seed", "Barley"]);
    }
}
