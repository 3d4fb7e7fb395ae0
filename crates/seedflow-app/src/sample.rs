// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Fixed data the pages start from. Edits never write back here.

use time::macros::date;

use crate::{
    Contact, Customer, CustomerId, DeliveryOrder, DeliveryOrderId, DeliveryStatus, LineItem,
    Priority,
};

const CUSTOMERS: [(&str, &str, &[&str], u64, u64); 10] = [
    (
        "1",
        "Green Valley Farms",
        &["Corn Seed", "Soybean", "Wheat"],
        15_420,
        16_800,
    ),
    (
        "2",
        "Midwest Agricultural Co.",
        &["Corn Seed", "Sunflower"],
        12_350,
        11_200,
    ),
    (
        "3",
        "Prairie Fields LLC",
        &["Soybean", "Wheat", "Barley"],
        8_750,
        9_250,
    ),
    (
        "4",
        "Horizon Crop Solutions",
        &["Corn Seed", "Soybean", "Canola"],
        18_900,
        20_500,
    ),
    (
        "5",
        "Golden Harvest Enterprises",
        &["Wheat", "Barley"],
        6_200,
        7_100,
    ),
    (
        "6",
        "Central Plains Agriculture",
        &["Corn Seed", "Soybean", "Wheat", "Sunflower"],
        22_100,
        23_800,
    ),
    (
        "7",
        "Riverdale Farming Group",
        &["Soybean", "Canola"],
        4_850,
        4_200,
    ),
    (
        "8",
        "Continental Seed Partners",
        &["Corn Seed", "Wheat", "Barley"],
        14_600,
        15_900,
    ),
    (
        "9",
        "Summit Agricultural Holdings",
        &["Soybean", "Sunflower", "Canola"],
        10_300,
        9_850,
    ),
    (
        "10",
        "Heartland Crop Distributors",
        &["Corn Seed", "Soybean", "Wheat"],
        16_750,
        18_200,
    ),
];

pub fn customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|(id, name, products, previous, current)| Customer {
            id: CustomerId::new(*id),
            name: (*name).to_owned(),
            products: products.iter().map(|p| (*p).to_owned()).collect(),
            previous_year_units: *previous,
            current_year_units: *current,
        })
        .collect()
}

fn contact(phone: &str, email: &str, address: &str) -> Contact {
    Contact {
        phone: phone.to_owned(),
        email: email.to_owned(),
        address: address.to_owned(),
    }
}

fn bags(name: &str, quantity: u32) -> LineItem {
    LineItem {
        name: name.to_owned(),
        quantity,
        unit: "bags".to_owned(),
    }
}

fn some(value: &str) -> Option<String> {
    Some(value.to_owned())
}

pub fn delivery_orders() -> Vec<DeliveryOrder> {
    vec![
        DeliveryOrder {
            id: DeliveryOrderId::new("1"),
            customer_name: "Green Valley Farms".to_owned(),
            contact: contact(
                "(555) 123-4567",
                "orders@greenvalleyfarms.com",
                "1245 Rural Route 7, Farmington, IA 52556",
            ),
            order_number: "ORD-2024-001".to_owned(),
            line_items: vec![bags("Corn Seed Premium", 850), bags("Soybean Elite", 420)],
            status: DeliveryStatus::InTransit,
            scheduled_date: date!(2024 - 03 - 15),
            actual_date: None,
            tracking_number: some("TRK-885569741"),
            driver: some("Mike Johnson"),
            truck: some("Truck #47"),
            notes: None,
            priority: Priority::High,
        },
        DeliveryOrder {
            id: DeliveryOrderId::new("2"),
            customer_name: "Midwest Agricultural Co.".to_owned(),
            contact: contact(
                "(555) 234-5678",
                "logistics@midwestag.com",
                "3890 County Road 12, Cedar Falls, IA 50613",
            ),
            order_number: "ORD-2024-002".to_owned(),
            line_items: vec![bags("Corn Seed Standard", 560)],
            status: DeliveryStatus::Delivered,
            scheduled_date: date!(2024 - 03 - 14),
            actual_date: Some(date!(2024 - 03 - 14)),
            tracking_number: some("TRK-885569742"),
            driver: some("Sarah Chen"),
            truck: some("Truck #23"),
            notes: None,
            priority: Priority::Medium,
        },
        DeliveryOrder {
            id: DeliveryOrderId::new("3"),
            customer_name: "Prairie Fields LLC".to_owned(),
            contact: contact(
                "(555) 345-6789",
                "supplies@prairiefields.com",
                "7721 Highway 218, Vinton, IA 52349",
            ),
            order_number: "ORD-2024-003".to_owned(),
            line_items: vec![bags("Soybean Elite", 320), bags("Wheat Winter", 180)],
            status: DeliveryStatus::Pending,
            scheduled_date: date!(2024 - 03 - 16),
            actual_date: None,
            tracking_number: None,
            driver: None,
            truck: None,
            notes: None,
            priority: Priority::Medium,
        },
        DeliveryOrder {
            id: DeliveryOrderId::new("4"),
            customer_name: "Horizon Crop Solutions".to_owned(),
            contact: contact(
                "(555) 456-7890",
                "receiving@horizoncrops.com",
                "4512 Industrial Blvd, Waterloo, IA 50701",
            ),
            order_number: "ORD-2024-004".to_owned(),
            line_items: vec![bags("Corn Seed Premium", 920), bags("Canola Premium", 240)],
            status: DeliveryStatus::Delayed,
            scheduled_date: date!(2024 - 03 - 15),
            actual_date: None,
            tracking_number: some("TRK-885569743"),
            driver: some("Tom Wilson"),
            truck: some("Truck #12"),
            notes: some("Weather delay - roads closed due to storm"),
            priority: Priority::Urgent,
        },
        DeliveryOrder {
            id: DeliveryOrderId::new("5"),
            customer_name: "Central Plains Agriculture".to_owned(),
            contact: contact(
                "(555) 567-8901",
                "orders@centralplains.com",
                "9876 Farm Road 45, Ames, IA 50010",
            ),
            order_number: "ORD-2024-005".to_owned(),
            line_items: vec![
                bags("Corn Seed Standard", 1_180),
                bags("Soybean Standard", 670),
            ],
            status: DeliveryStatus::InTransit,
            scheduled_date: date!(2024 - 03 - 17),
            actual_date: None,
            tracking_number: some("TRK-885569744"),
            driver: some("Lisa Rodriguez"),
            truck: some("Truck #31"),
            notes: None,
            priority: Priority::High,
        },
    ]
}
