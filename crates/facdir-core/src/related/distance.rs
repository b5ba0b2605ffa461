//! Great-circle distance between two latitude/longitude points.
//!
//! Inputs are degrees and are not range-checked.

const EARTH_RADIUS_MILES: f64 = 3959.0;
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in miles.
#[must_use]
pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    EARTH_RADIUS_MILES * central_angle(from, to)
}

/// Haversine distance in kilometres.
#[must_use]
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to)
}

fn central_angle((lat1, lng1): (f64, f64), (lat2, lng2): (f64, f64)) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
