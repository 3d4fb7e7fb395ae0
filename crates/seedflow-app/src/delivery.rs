// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::{DeliveryOrder, DeliveryOrderId, DeliveryStatus, StatusFilter};

/// Summary counts over the full order list. `failed` orders count toward
/// `total` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub delayed: usize,
}

/// Read-only delivery list with search, status filter, and a single
/// selected order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliveryBoard {
    orders: Vec<DeliveryOrder>,
    search: String,
    status_filter: StatusFilter,
    selected: Option<DeliveryOrderId>,
}

impl DeliveryBoard {
    pub fn new(orders: Vec<DeliveryOrder>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    pub fn orders(&self) -> &[DeliveryOrder] {
        &self.orders
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn push_search_char(&mut self, value: char) {
        self.search.push(value);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn visible(&self) -> Vec<&DeliveryOrder> {
        let needle = self.search.to_lowercase();
        self.orders
            .iter()
            .filter(|order| {
                matches_search(order, &needle) && self.status_filter.accepts(order.status)
            })
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts {
            total: self.orders.len(),
            pending: self.count(DeliveryStatus::Pending),
            in_transit: self.count(DeliveryStatus::InTransit),
            delivered: self.count(DeliveryStatus::Delivered),
            delayed: self.count(DeliveryStatus::Delayed),
        }
    }

    pub fn count(&self, status: DeliveryStatus) -> usize {
        self.orders
            .iter()
            .filter(|order| order.status == status)
            .count()
    }

    pub fn order(&self, id: &DeliveryOrderId) -> Option<&DeliveryOrder> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Replaces the selection. Unknown ids leave the current selection alone.
    pub fn select_order(&mut self, id: &DeliveryOrderId) -> bool {
        if self.order(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn dismiss_order(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&DeliveryOrder> {
        self.selected.as_ref().and_then(|id| self.order(id))
    }
}

/// `needle` must already be lower-cased. An empty needle matches every order.
fn matches_search(order: &DeliveryOrder, needle: &str) -> bool {
    needle.is_empty()
        || order.customer_name.to_lowercase().contains(needle)
        || order.order_number.to_lowercase().contains(needle)
}
