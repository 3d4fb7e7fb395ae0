// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod delivery;
pub mod ids;
pub mod model;
pub mod plan;
pub mod sample;
pub mod state;

pub use delivery::*;
pub use ids::*;
pub use model::*;
pub use plan::*;
pub use state::*;
