//! # View Engine
//!
//! Pure functions that derive a view of the catalog. Nothing here mutates state; the
//! caller installs the result with [`CatalogStore::replace_view`](crate::catalog::CatalogStore::replace_view).
//!
//! - [`search`] filters the **source set**, never the previous view, so searches do not
//!   compound.
//! - [`sort`] orders a view by price and hands back the flipped direction for the next
//!   toggle.
//! - [`reset`] re-projects the source set in source order, carrying occupancy across by id.

use crate::model::{FilterCriteria, HomestayId, HomestayUnit};
use std::collections::HashMap;

/// Whether `unit` satisfies every present criterion.
pub fn matches(unit: &HomestayUnit, criteria: &FilterCriteria) -> bool {
    criteria.matches(unit)
}

/// The units of `source` that match `criteria`, in source order.
pub fn search(source: &[HomestayUnit], criteria: &FilterCriteria) -> Vec<HomestayUnit> {
    source
        .iter()
        .filter(|unit| matches(unit, criteria))
        .cloned()
        .collect()
}

/// Sorts `view` by price and returns it with the direction to use next time.
///
/// The sort is stable in both directions: units with equal prices keep their relative
/// order from `view`.
pub fn sort(view: &[HomestayUnit], ascending: bool) -> (Vec<HomestayUnit>, bool) {
    let mut sorted = view.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.price.cmp(&b.price));
    } else {
        sorted.sort_by(|a, b| b.price.cmp(&a.price));
    }
    (sorted, !ascending)
}

/// Rebuilds the full view from `source` in source order.
///
/// Occupancy for each unit is taken from `current_view` when the unit appears there and
/// from the source record otherwise.
pub fn reset(source: &[HomestayUnit], current_view: &[HomestayUnit]) -> Vec<HomestayUnit> {
    let occupancy: HashMap<HomestayId, &HomestayUnit> =
        current_view.iter().map(|unit| (unit.id, unit)).collect();

    source
        .iter()
        .map(|unit| match occupancy.get(&unit.id) {
            Some(current) => HomestayUnit {
                current_guest_name: current.current_guest_name.clone(),
                rental_count: current.rental_count,
                ..unit.clone()
            },
            None => unit.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Vec<HomestayUnit> {
        vec![
            HomestayUnit::new(HomestayId(1), "Sunrise Retreat", 850000, "123 Beach Road, Nha Trang", 3),
            HomestayUnit::new(HomestayId(2), "Mountain Breeze Villa", 1200000, "45 Ly Thuong Kiet St, Da Lat", 5),
            HomestayUnit::new(HomestayId(3), "Riverside Nest", 750000, "78 Nguyen Du St, Hoi An", 2),
            HomestayUnit::new(HomestayId(4), "Twin Lanterns", 850000, "5 Bach Dang St, Hoi An", 2),
        ]
    }

    fn ids(view: &[HomestayUnit]) -> Vec<u32> {
        view.iter().map(|unit| unit.id.0).collect()
    }

    #[test]
    fn test_search_filters_source_not_previous_view() {
        let source = source();
        let hoi_an = search(&source, &FilterCriteria::any().with_address("hoi an"));
        assert_eq!(ids(&hoi_an), vec![3, 4]);

        // A broader search after a narrow one sees the whole source again.
        let villas = search(&source, &FilterCriteria::any().with_name("VILLA"));
        assert_eq!(ids(&villas), vec![2]);
        assert_eq!(ids(&search(&source, &FilterCriteria::any())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_by_exact_price() {
        let found = search(&source(), &FilterCriteria::any().with_price(750000));
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn test_sort_is_stable_and_flips_direction() {
        let (ascending, next) = sort(&source(), true);
        assert_eq!(ids(&ascending), vec![3, 1, 4, 2]);
        assert!(!next);

        let (descending, next) = sort(&ascending, false);
        assert_eq!(ids(&descending), vec![2, 1, 4, 3]);
        assert!(next);
    }

    #[test]
    fn test_reset_restores_order_and_carries_occupancy() {
        let source = source();
        let mut view = search(&source, &FilterCriteria::any().with_address("hoi an"));
        view[1].current_guest_name = "Sophia Davis".into();
        view[1].rental_count = 2;

        let restored = reset(&source, &view);
        assert_eq!(ids(&restored), vec![1, 2, 3, 4]);
        assert_eq!(restored[3].occupancy(), ("Sophia Davis", 2));
        assert_eq!(restored[0].occupancy(), ("", 0));
    }
}
