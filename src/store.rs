//! Listing Store: sort state and the derived ordered view.
//!
//! The store owns the catalog and the active sort criterion and produces
//! an ordered view — a loss-free permutation of the record set, recomputed
//! whenever the criterion changes. Consumers (list panel, map surface)
//! never re-sort themselves; they drain change events and pull the
//! latest view.

use crate::catalog::{Catalog, ListingRecord};
use crate::distance::parse_distance_label;
use crate::error::ParseError;

/// Criterion the ordered view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SortCriterion {
    LowestPrice,
    ShortestDistance,
}

impl SortCriterion {
    /// Display label for the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::LowestPrice => "Lowest Price",
            SortCriterion::ShortestDistance => "Shortest Distance",
        }
    }

    /// All selectable criteria, in selector order.
    pub const ALL: [SortCriterion; 2] =
        [SortCriterion::LowestPrice, SortCriterion::ShortestDistance];
}

impl Default for SortCriterion {
    fn default() -> Self {
        SortCriterion::LowestPrice
    }
}

/// Change notification emitted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The ordered view was recomputed under the given criterion.
    OrderChanged { criterion: SortCriterion },
}

/// Holds the listing records and the active sort criterion, and produces
/// the derived ordered view.
///
/// Responsibilities:
/// - Owning the immutable record collection
/// - Tracking the active sort criterion
/// - Recomputing the ordered view on criterion changes (stable sort)
/// - Emitting change events for consumers to drain
pub struct ListingStore {
    catalog: Catalog,
    criterion: SortCriterion,
    /// Indices into `catalog.listings`, in display order.
    ordered: Vec<usize>,
    /// Monotonic counter, bumped on every successful recompute.
    revision: u64,
    /// Pending change events, drained by consumers once per frame.
    events: Vec<StoreEvent>,
}

impl ListingStore {
    /// Creates a store over the given catalog, sorted by the default
    /// criterion (lowest price, which cannot fail).
    pub fn new(catalog: Catalog) -> Self {
        let mut store = Self {
            catalog,
            criterion: SortCriterion::default(),
            ordered: Vec::new(),
            revision: 0,
            events: Vec::new(),
        };
        // Price comparison needs no label parsing, so this cannot fail.
        store
            .set_sort_criterion(SortCriterion::default())
            .unwrap_or_else(|_| unreachable!("price sort is infallible"));
        store
    }

    // ===== Queries =====

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the active sort criterion.
    pub fn criterion(&self) -> SortCriterion {
        self.criterion
    }

    /// Returns the ordered view as indices into the catalog.
    ///
    /// Always a permutation of `0..catalog.len()`.
    pub fn ordered_view(&self) -> &[usize] {
        &self.ordered
    }

    /// Iterates records in display order.
    pub fn ordered_records(&self) -> impl Iterator<Item = (usize, &ListingRecord)> {
        self.ordered
            .iter()
            .filter_map(|&i| self.catalog.get(i).map(|r| (i, r)))
    }

    /// Returns the revision counter. Consumers can compare revisions to
    /// detect that the view changed since they last pulled it.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ===== Mutations =====

    /// Sets the active sort criterion and recomputes the ordered view.
    ///
    /// The sort is stable: records with equal keys keep their original
    /// catalog order, so repeated sorts are deterministic and idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if any distance label lacks a leading
    /// numeral while sorting by distance. The previous ordering (and
    /// revision) is left untouched rather than half-applied.
    pub fn set_sort_criterion(&mut self, criterion: SortCriterion) -> Result<(), ParseError> {
        let ordered = compute_ordered_view(&self.catalog, criterion)?;

        self.criterion = criterion;
        self.ordered = ordered;
        self.revision += 1;
        self.events.push(StoreEvent::OrderChanged { criterion });
        log::debug!(
            "listing store re-sorted by {:?} (revision {})",
            criterion,
            self.revision
        );
        Ok(())
    }

    /// Drains pending change events.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Computes the ordered view for a catalog under a criterion.
///
/// Returns indices into the catalog, sorted stably by the criterion's key.
/// All distance labels are parsed up front so a malformed label fails the
/// whole recompute instead of producing a partially-ordered view.
fn compute_ordered_view(
    catalog: &Catalog,
    criterion: SortCriterion,
) -> Result<Vec<usize>, ParseError> {
    let n = catalog.len();
    let mut items: Vec<(usize, SortableKey)> = Vec::with_capacity(n);

    for (i, record) in catalog.listings.iter().enumerate() {
        items.push((i, SortableKey::from_record(record, criterion)?));
    }

    items.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(items.into_iter().map(|(i, _)| i).collect())
}

/// Key used for ordering listing records.
///
/// Only the field matching the criterion is populated; comparison falls
/// through `None` fields, giving natural ordering via derived comparison.
#[derive(Debug, Clone, PartialEq)]
struct SortableKey {
    price: Option<i64>,
    distance: Option<f64>,
}

impl SortableKey {
    fn from_record(record: &ListingRecord, criterion: SortCriterion) -> Result<Self, ParseError> {
        Ok(match criterion {
            SortCriterion::LowestPrice => SortableKey {
                price: Some(record.price),
                distance: None,
            },
            SortCriterion::ShortestDistance => SortableKey {
                price: None,
                distance: Some(parse_distance_label(&record.distance_label)?),
            },
        })
    }

    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.price, other.price) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => match (self.distance, other.distance) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => std::cmp::Ordering::Equal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GeoPoint, PriceType};

    fn record(name: &str, price: i64, distance: &str) -> ListingRecord {
        ListingRecord {
            name: name.to_string(),
            rating: 4.0,
            distance_label: distance.to_string(),
            price,
            price_type: PriceType::Fixed,
            location: GeoPoint::new(40.81, -73.96),
            address: "400 S Chestnut St".to_string(),
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            record("Riverview Medical Center", 2457, "2.3 mi"),
            record("Sharp Memorial", 1976, "1.8 mi"),
            record("Bayshore Community Hospital", 3291, "2.5 mi"),
            record("Monroe Regional Hospital", 1374, "1.6 mi"),
        ])
    }

    #[test]
    fn test_ordered_view_is_permutation() {
        let mut store = ListingStore::new(test_catalog());
        for criterion in SortCriterion::ALL {
            store.set_sort_criterion(criterion).unwrap();
            let mut view = store.ordered_view().to_vec();
            assert_eq!(view.len(), store.catalog().len());
            view.sort_unstable();
            assert_eq!(view, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_lowest_price_ordering() {
        let mut store = ListingStore::new(test_catalog());
        store.set_sort_criterion(SortCriterion::LowestPrice).unwrap();
        let prices: Vec<i64> = store.ordered_records().map(|(_, r)| r.price).collect();
        assert_eq!(prices, vec![1374, 1976, 2457, 3291]);
    }

    #[test]
    fn test_shortest_distance_ordering() {
        let mut store = ListingStore::new(test_catalog());
        store
            .set_sort_criterion(SortCriterion::ShortestDistance)
            .unwrap();
        let labels: Vec<&str> = store
            .ordered_records()
            .map(|(_, r)| r.distance_label.as_str())
            .collect();
        assert_eq!(labels, vec!["1.6 mi", "1.8 mi", "2.3 mi", "2.5 mi"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let catalog = Catalog::new(vec![
            record("First", 1500, "3.0 mi"),
            record("Second", 1500, "1.0 mi"),
            record("Cheapest", 900, "2.0 mi"),
        ]);
        let mut store = ListingStore::new(catalog);
        store.set_sort_criterion(SortCriterion::LowestPrice).unwrap();
        let names: Vec<&str> = store.ordered_records().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cheapest", "First", "Second"]);
    }

    #[test]
    fn test_resort_is_idempotent() {
        let mut store = ListingStore::new(test_catalog());
        store.set_sort_criterion(SortCriterion::ShortestDistance).unwrap();
        let first = store.ordered_view().to_vec();
        store.set_sort_criterion(SortCriterion::ShortestDistance).unwrap();
        assert_eq!(store.ordered_view(), first.as_slice());
    }

    #[test]
    fn test_malformed_label_fails_and_preserves_ordering() {
        let catalog = Catalog::new(vec![
            record("Good", 100, "1.0 mi"),
            record("Bad", 200, "unknown"),
        ]);
        let mut store = ListingStore::new(catalog);
        let before = store.ordered_view().to_vec();
        let revision = store.revision();
        store.take_events();

        let err = store
            .set_sort_criterion(SortCriterion::ShortestDistance)
            .unwrap_err();
        assert_eq!(err.label, "unknown");
        assert_eq!(store.ordered_view(), before.as_slice());
        assert_eq!(store.revision(), revision);
        assert_eq!(store.criterion(), SortCriterion::LowestPrice);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_events_and_revision_track_recomputes() {
        let mut store = ListingStore::new(test_catalog());
        store.take_events();
        let revision = store.revision();

        store
            .set_sort_criterion(SortCriterion::ShortestDistance)
            .unwrap();
        assert_eq!(store.revision(), revision + 1);
        assert_eq!(
            store.take_events(),
            vec![StoreEvent::OrderChanged {
                criterion: SortCriterion::ShortestDistance
            }]
        );
        // Drained: a second take yields nothing.
        assert!(store.take_events().is_empty());
    }
}
