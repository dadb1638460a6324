use crate::models::{Coordinate, RankedSchool, School};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates, via the
/// haversine formula.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Annotate each school with its distance from `reference` and return them
/// ordered ascending by that distance.
///
/// `reference` must already satisfy coordinate bounds; callers validate it at
/// the boundary. The sort is stable, so equidistant schools keep their input
/// order.
pub fn rank(reference: &Coordinate, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = haversine_km(reference, &school.coordinate());
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn school_at(name: &str, latitude: f64, longitude: f64) -> School {
        School {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: "1 Test St".to_string(),
            latitude,
            longitude,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_zero_distance_at_same_point() {
        let p = Coordinate::new(37.7749, -122.4194);
        assert!(haversine_km(&p, &p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(52.5200, 13.4050);
        let b = Coordinate::new(-33.8688, 151.2093);
        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_circumference() {
        // (0,0) to (0,90) is a quarter of the equator: R * pi / 2
        let d = haversine_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 90.0));
        assert!((d - 10007.5).abs() < 0.1, "got {d}");
    }

    #[test]
    fn test_antipodal_points() {
        // Half the Earth's circumference, ~20015 km
        let d = haversine_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!((d - 20015.0).abs() < 0.2, "got {d}");
    }

    #[test]
    fn test_agrees_with_geo_crate() {
        use geo::{HaversineDistance, Point};

        let pairs = [
            ((37.7749, -122.4194), (40.7128, -74.0060)),
            ((0.0, 0.0), (0.0, 90.0)),
            ((-45.0, 170.0), (45.0, -170.0)),
        ];

        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let ours = haversine_km(
                &Coordinate::new(lat1, lon1),
                &Coordinate::new(lat2, lon2),
            );
            let theirs = Point::new(lon1, lat1).haversine_distance(&Point::new(lon2, lat2)) / 1000.0;
            // geo uses a slightly different mean radius, so compare loosely
            let relative = (ours - theirs).abs() / theirs.max(1.0);
            assert!(relative < 1e-4, "ours {ours} vs geo {theirs}");
        }
    }

    #[test]
    fn test_rank_preserves_length() {
        let reference = Coordinate::new(0.0, 0.0);
        let schools = vec![
            school_at("a", 10.0, 10.0),
            school_at("b", -5.0, 20.0),
            school_at("c", 48.0, 2.0),
        ];

        assert_eq!(rank(&reference, schools).len(), 3);
    }

    #[test]
    fn test_rank_sorts_ascending() {
        let reference = Coordinate::new(0.0, 0.0);
        let schools = vec![
            school_at("far", 48.0, 2.0),
            school_at("near", 1.0, 1.0),
            school_at("mid", 10.0, 10.0),
        ];

        let ranked = rank(&reference, schools);
        assert_eq!(ranked[0].school.name, "near");
        assert_eq!(ranked[1].school.name, "mid");
        assert_eq!(ranked[2].school.name, "far");
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let reference = Coordinate::new(0.0, 0.0);
        let schools = vec![
            school_at("first", 10.0, 10.0),
            school_at("second", 10.0, 10.0),
        ];

        let ranked = rank(&reference, schools);
        assert_eq!(ranked[0].school.name, "first");
        assert_eq!(ranked[1].school.name, "second");
        assert_eq!(ranked[0].distance, ranked[1].distance);
    }

    #[test]
    fn test_rank_empty_input() {
        let reference = Coordinate::new(0.0, 0.0);
        assert!(rank(&reference, vec![]).is_empty());
    }

    #[test]
    fn test_rank_zero_distance_at_reference() {
        let reference = Coordinate::new(10.0, 10.0);
        let ranked = rank(&reference, vec![school_at("here", 10.0, 10.0)]);
        assert!(ranked[0].distance.abs() < 1e-9);
    }
}
