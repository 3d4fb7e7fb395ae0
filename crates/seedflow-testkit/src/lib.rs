// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use seedflow_app::{
    Contact, Customer, CustomerId, DeliveryOrder, DeliveryOrderId, DeliveryStatus, LineItem,
    Priority,
};
use time::{Date, Duration, Month};

const PRODUCTS: [&str; 6] = ["Corn Seed", "Soybean", "Wheat", "Sunflower", "Barley", "Canola"];

const PRODUCT_GRADES: [&str; 4] = ["Premium", "Standard", "Elite", "Winter"];

const FARM_PREFIXES: [&str; 14] = [
    "Green Valley",
    "Midwest",
    "Prairie",
    "Horizon",
    "Golden Harvest",
    "Central Plains",
    "Riverdale",
    "Continental",
    "Summit",
    "Heartland",
    "Cedar Creek",
    "Blue Stem",
    "Twin Oaks",
    "Willow Bend",
];

const FARM_SUFFIXES: [&str; 7] = [
    "Farms",
    "Agricultural Co.",
    "Fields LLC",
    "Crop Solutions",
    "Enterprises",
    "Farming Group",
    "Seed Partners",
];

const TOWNS: [(&str, &str); 8] = [
    ("Farmington", "52556"),
    ("Cedar Falls", "50613"),
    ("Vinton", "52349"),
    ("Waterloo", "50701"),
    ("Ames", "50010"),
    ("Grinnell", "50112"),
    ("Decorah", "52101"),
    ("Pella", "50219"),
];

const ROAD_KINDS: [&str; 5] = ["Rural Route", "County Road", "Highway", "Farm Road", "Industrial Blvd"];

const DRIVERS: [&str; 8] = [
    "Mike Johnson",
    "Sarah Chen",
    "Tom Wilson",
    "Lisa Rodriguez",
    "Dana Brooks",
    "Eli Turner",
    "Rosa Flores",
    "Sam Price",
];

const PRIORITIES: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic generator for customer and delivery fixtures.
#[derive(Debug, Clone)]
pub struct SeedFaker {
    rng: DeterministicRng,
    next_customer: u64,
    next_order: u64,
}

impl SeedFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_customer: 1,
            next_order: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn customer(&mut self) -> Customer {
        let id = self.next_customer;
        self.next_customer += 1;

        let mut products = Vec::new();
        let wanted = 1 + self.int_n(4);
        while products.len() < wanted {
            let product = self.pick(&PRODUCTS).to_owned();
            if !products.contains(&product) {
                products.push(product);
            }
        }

        // Roughly one in eight customers is new this year.
        let previous_year_units = if self.int_n(8) == 0 {
            0
        } else {
            self.int_range_u64(1_000, 25_000)
        };

        Customer {
            id: CustomerId::new(id.to_string()),
            name: self.farm_name(),
            products,
            previous_year_units,
            current_year_units: self.int_range_u64(0, 25_000),
        }
    }

    pub fn customers(&mut self, count: usize) -> Vec<Customer> {
        (0..count).map(|_| self.customer()).collect()
    }

    pub fn delivery_order(&mut self) -> DeliveryOrder {
        let id = self.next_order;
        self.next_order += 1;

        let status = self.pick(&DeliveryStatus::ALL);
        let scheduled_date = self.date_in_march_2024();
        let dispatched = !matches!(status, DeliveryStatus::Pending);
        let driver = dispatched.then(|| self.pick(&DRIVERS).to_owned());
        let truck = dispatched.then(|| format!("Truck #{}", self.int_range_u64(1, 60)));
        let tracking_number = dispatched.then(|| format!("TRK-{:09}", 885_569_740 + id));
        let actual_date = (status == DeliveryStatus::Delivered).then_some(scheduled_date);
        let notes = match status {
            DeliveryStatus::Delayed => Some("Weather delay - roads closed due to storm".to_owned()),
            DeliveryStatus::Failed => Some("Receiver unavailable".to_owned()),
            _ => None,
        };

        let name = self.farm_name();
        let (town, zip) = self.pick(&TOWNS);
        let domain = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();

        let line_items = (0..1 + self.int_n(3))
            .map(|_| LineItem {
                name: format!("{} {}", self.pick(&PRODUCTS), self.pick(&PRODUCT_GRADES)),
                quantity: self.int_range_u64(50, 1_500) as u32,
                unit: "bags".to_owned(),
            })
            .collect();

        DeliveryOrder {
            id: DeliveryOrderId::new(id.to_string()),
            contact: Contact {
                phone: format!(
                    "(555) {:03}-{:04}",
                    self.int_range_u64(100, 999),
                    self.int_range_u64(0, 9_999)
                ),
                email: format!("orders@{domain}.com"),
                address: format!(
                    "{} {} {}, {town}, IA {zip}",
                    self.int_range_u64(100, 9_999),
                    self.pick(&ROAD_KINDS),
                    self.int_range_u64(1, 300),
                ),
            },
            customer_name: name,
            order_number: format!("ORD-2024-{id:03}"),
            line_items,
            status,
            scheduled_date,
            actual_date,
            tracking_number,
            driver,
            truck,
            notes,
            priority: self.pick(&PRIORITIES),
        }
    }

    pub fn delivery_orders(&mut self, count: usize) -> Vec<DeliveryOrder> {
        (0..count).map(|_| self.delivery_order()).collect()
    }

    fn farm_name(&mut self) -> String {
        format!("{} {}", self.pick(&FARM_PREFIXES), self.pick(&FARM_SUFFIXES))
    }

    fn date_in_march_2024(&mut self) -> Date {
        let start = Date::from_calendar_date(2024, Month::March, 1)
            .unwrap_or(Date::MIN);
        start + Duration::days(self.int_n(31) as i64)
    }

    fn int_range_u64(&mut self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }
        min + self.rng.next_u64() % (max - min + 1)
    }

    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.int_n(values.len())]
    }
}

pub fn product_names() -> &'static [&'static str] {
    &PRODUCTS
}
