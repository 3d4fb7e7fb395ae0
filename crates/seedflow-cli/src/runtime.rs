// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use seedflow_app::{Customer, DeliveryOrder, sample};

/// Serves the built-in sample data. Every load hands out a fresh copy.
#[derive(Debug, Default)]
pub struct SampleRuntime {
    loads: usize,
}

impl SampleRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl seedflow_tui::AppRuntime for SampleRuntime {
    fn load_customers(&mut self) -> Result<Vec<Customer>> {
        self.loads += 1;
        let customers = sample::customers();
        tracing::debug!(count = customers.len(), loads = self.loads, "customers loaded");
        Ok(customers)
    }

    fn load_delivery_orders(&mut self) -> Result<Vec<DeliveryOrder>> {
        self.loads += 1;
        let orders = sample::delivery_orders();
        tracing::debug!(count = orders.len(), loads = self.loads, "delivery orders loaded");
        Ok(orders)
    }
}
