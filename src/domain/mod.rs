//! Domain logic modules for the CareMap viewer.
//!
//! This module contains core business logic:
//! - Projection (Web Mercator lat/lon to canvas coordinates and back)

pub mod projection;
