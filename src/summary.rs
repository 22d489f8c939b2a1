use crate::track::TrackPoint;

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points (haversine formula).
pub fn haversine_distance(from: &TrackPoint, to: &TrackPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    // rounding can push `a` just past 1 for antipodal pairs
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Totals over a whole track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripSummary {
    pub total_elapsed_seconds: i64,
    pub total_distance_meters: f64,
}

impl TripSummary {
    /// Folds over consecutive point pairs. A pair only adds time when both of
    /// its points carry a timestamp; distance is always added.
    pub fn from_points(points: &[TrackPoint]) -> Self {
        points
            .windows(2)
            .fold(TripSummary::default(), |mut summary, pair| {
                let (prev, curr) = (&pair[0], &pair[1]);
                if let (Some(start), Some(end)) = (prev.timestamp, curr.timestamp) {
                    summary.total_elapsed_seconds += (end - start).num_seconds();
                }
                summary.total_distance_meters += haversine_distance(prev, curr);
                summary
            })
    }
}
