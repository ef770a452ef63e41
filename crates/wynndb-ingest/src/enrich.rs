//! Nearest-place lookup for drop-based items.
//!
//! Only the horizontal plane participates: the drop's `x`/`z` are compared
//! against each location's planar point. The drop's vertical `y` is ignored
//! even though a location's `y` may stand in for its missing `z`.

use wynndb_core::NearestPlace;

use crate::distance::planar_distance;
use crate::types::{DropCoordinate, RawLocation};

/// Finds the location closest to `drop_point`.
///
/// Locations without a usable planar point are skipped. Ties keep the first
/// location encountered, so results depend on `locations` order.
///
/// Returns `None` if no location is usable.
#[must_use]
pub fn find_nearest_place(
    drop_point: DropCoordinate,
    locations: &[RawLocation],
) -> Option<NearestPlace> {
    let mut best: Option<(f64, &RawLocation)> = None;

    for location in locations {
        let Some((x, z)) = location.planar_point() else {
            continue;
        };
        let distance = planar_distance(drop_point.x, drop_point.z, x, z);
        if best.is_none_or(|(min, _)| distance < min) {
            best = Some((distance, location));
        }
    }

    best.map(|(distance, location)| NearestPlace {
        name: location.name.clone(),
        distance: round_distance(distance),
    })
}

/// Rounds to the nearest block. Distances past `u64::MAX`, including the
/// infinity produced by squaring huge coordinates, clamp to `u64::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_distance(distance: f64) -> u64 {
    // Distances are never negative or NaN; `as` saturates on overflow.
    distance.round() as u64
}
