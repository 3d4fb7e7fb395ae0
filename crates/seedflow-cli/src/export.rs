// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use seedflow_app::{AppState, DeliveryBoard, DeliveryOrder, PlanTable, StatusCounts};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Plan,
    Deliveries,
}

impl ExportKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "plan" => Some(Self::Plan),
            "deliveries" => Some(Self::Deliveries),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanExport {
    pub agency: &'static str,
    pub sales_year: i32,
    pub customers: Vec<PlanRow>,
    pub product_lines: Vec<String>,
    pub totals: PlanTotalsRow,
}

#[derive(Debug, Serialize)]
pub struct PlanRow {
    pub id: String,
    pub name: String,
    pub products: Vec<String>,
    pub previous_year_units: u64,
    pub current_year_units: u64,
    pub variance: String,
}

#[derive(Debug, Serialize)]
pub struct PlanTotalsRow {
    pub current: u128,
    pub previous: u128,
    pub variance: i128,
    pub growth: String,
}

#[derive(Debug, Serialize)]
pub struct DeliveryExport {
    pub counts: StatusCounts,
    pub orders: Vec<DeliveryRow>,
}

#[derive(Debug, Serialize)]
pub struct DeliveryRow {
    pub order_number: String,
    pub customer_name: String,
    pub status: &'static str,
    pub priority: &'static str,
    pub scheduled_date: String,
    pub actual_date: Option<String>,
    pub line_items: Vec<LineItemRow>,
    pub tracking_number: Option<String>,
    pub driver: Option<String>,
    pub truck: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LineItemRow {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

pub fn plan_export(state: &AppState, plan: &PlanTable) -> PlanExport {
    let summary = plan.summary();
    PlanExport {
        agency: state.agency.label(),
        sales_year: state.sales_year,
        customers: plan
            .customers()
            .iter()
            .map(|customer| PlanRow {
                id: customer.id.to_string(),
                name: customer.name.clone(),
                products: customer.products.clone(),
                previous_year_units: customer.previous_year_units,
                current_year_units: customer.current_year_units,
                variance: customer.variance_label(),
            })
            .collect(),
        product_lines: summary.product_lines,
        totals: PlanTotalsRow {
            current: summary.totals.current,
            previous: summary.totals.previous,
            variance: summary.totals.variance(),
            growth: summary.totals.growth_label(),
        },
    }
}

/// Exports the orders the board currently shows, with counts over all orders.
pub fn delivery_export(board: &DeliveryBoard) -> DeliveryExport {
    DeliveryExport {
        counts: board.status_counts(),
        orders: board.visible().into_iter().map(delivery_row).collect(),
    }
}

fn delivery_row(order: &DeliveryOrder) -> DeliveryRow {
    DeliveryRow {
        order_number: order.order_number.clone(),
        customer_name: order.customer_name.clone(),
        status: order.status.as_str(),
        priority: order.priority.as_str(),
        scheduled_date: order.scheduled_date.to_string(),
        actual_date: order.actual_date.map(|date| date.to_string()),
        line_items: order
            .line_items
            .iter()
            .map(|item| LineItemRow {
                name: item.name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
            })
            .collect(),
        tracking_number: order.tracking_number.clone(),
        driver: order.driver.clone(),
        truck: order.truck.clone(),
        notes: order.notes.clone(),
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize export")
}
