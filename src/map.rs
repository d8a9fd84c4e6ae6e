//! Map surface seam.
//!
//! The core never renders a map. It hands an ordered marker set to an
//! external collaborator and pokes it after layout changes; how the
//! collaborator lays out tiles or pixels is its own business.

use crate::catalog::GeoPoint;
use crate::store::ListingStore;

/// A marker to place on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location: GeoPoint,
    pub label: String,
}

/// Contract between the core and the map-rendering collaborator.
pub trait MapSurface {
    /// Replaces the marker set. Markers arrive in display order, matching
    /// the listing store's ordered view.
    fn set_markers(&mut self, markers: Vec<Marker>);

    /// Signals that the surface's layout changed and it should
    /// re-measure itself. Fired by the viewport controller once per
    /// sidebar-toggle burst, after the layout transition completes.
    fn notify_resize(&mut self);
}

/// Builds the marker set for a store's current ordered view.
pub fn markers_for_store(store: &ListingStore) -> Vec<Marker> {
    store
        .ordered_records()
        .map(|(_, record)| Marker {
            location: record.location,
            label: record.name.clone(),
        })
        .collect()
}
