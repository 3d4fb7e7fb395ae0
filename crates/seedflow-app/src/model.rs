// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::*;

pub const SALES_YEARS: [i32; 3] = [2024, 2023, 2022];
pub const DEFAULT_SALES_YEAR: i32 = SALES_YEARS[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    InTransit,
    Delivered,
    Delayed,
    Failed,
}

impl DeliveryStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InTransit,
        Self::Delivered,
        Self::Delayed,
        Self::Failed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Delayed => "delayed",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "in_transit" => Some(Self::InTransit),
            "delivered" => Some(Self::Delivered),
            "delayed" => Some(Self::Delayed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InTransit => "in transit",
            Self::Delivered => "delivered",
            Self::Delayed => "delayed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

/// Status-equality filter for the delivery table. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(DeliveryStatus),
}

impl StatusFilter {
    pub const CYCLE: [Self; 6] = [
        Self::All,
        Self::Only(DeliveryStatus::Pending),
        Self::Only(DeliveryStatus::InTransit),
        Self::Only(DeliveryStatus::Delivered),
        Self::Only(DeliveryStatus::Delayed),
        Self::Only(DeliveryStatus::Failed),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        DeliveryStatus::parse(value).map(Self::Only)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all statuses",
            Self::Only(status) => status.label(),
        }
    }

    pub fn accepts(self, status: DeliveryStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    pub fn rotate(self, delta: isize) -> Self {
        let cycle = Self::CYCLE;
        let current = cycle
            .iter()
            .position(|filter| *filter == self)
            .unwrap_or(0) as isize;
        let len = cycle.len() as isize;
        cycle[(current + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agency {
    Midwest,
    Northeast,
    Southwest,
    Pacific,
}

impl Agency {
    pub const ALL: [Self; 4] = [Self::Midwest, Self::Northeast, Self::Southwest, Self::Pacific];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Midwest => "midwest",
            Self::Northeast => "northeast",
            Self::Southwest => "southwest",
            Self::Pacific => "pacific",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "midwest" => Some(Self::Midwest),
            "northeast" => Some(Self::Northeast),
            "southwest" => Some(Self::Southwest),
            "pacific" => Some(Self::Pacific),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Midwest => "Midwest Seeds Co.",
            Self::Northeast => "Northeast Agricultural",
            Self::Southwest => "Southwest Growers",
            Self::Pacific => "Pacific Seed Solutions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    Plan,
    Deliver,
}

impl PageKind {
    pub const ALL: [Self; 2] = [Self::Plan, Self::Deliver];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Deliver => "deliver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "plan" => Some(Self::Plan),
            "deliver" => Some(Self::Deliver),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Deliver => "deliver",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Edit,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub products: Vec<String>,
    pub previous_year_units: u64,
    pub current_year_units: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Street portion of the address, i.e. everything before the first comma.
    pub fn street(&self) -> &str {
        self.address
            .split(',')
            .next()
            .unwrap_or(self.address.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOrder {
    pub id: DeliveryOrderId,
    pub customer_name: String,
    pub contact: Contact,
    pub order_number: String,
    pub line_items: Vec<LineItem>,
    pub status: DeliveryStatus,
    pub scheduled_date: Date,
    pub actual_date: Option<Date>,
    pub tracking_number: Option<String>,
    pub driver: Option<String>,
    pub truck: Option<String>,
    pub notes: Option<String>,
    pub priority: Priority,
}
