#![cfg(feature = "tz")]
mod common;

use common::{BROKEN_GEOMETRY, ZONES, spy_finder};
use jiff::tz::TimeZone;
use tzlocate::{Error, TimeZones};

fn names(zones: &TimeZones) -> Vec<&str> {
    zones.zones().iter().filter_map(TimeZone::iana_name).collect()
}

#[test]
fn test_get() {
    let finder = spy_finder(ZONES);

    let moscow = finder.get(55.75, 37.616667).unwrap();
    assert_eq!(names(&moscow), ["Europe/Moscow"]);
    assert!(moscow.zone().is_some());

    let ambiguous = finder.get(50.28337, -107.80135).unwrap();
    assert!(matches!(ambiguous, TimeZones::Ambiguous(_)));
    assert_eq!(names(&ambiguous), ["America/Regina", "America/Swift_Current"]);

    assert!(!finder.get(35.024992, -39.481339).unwrap().is_found());
}

#[test]
fn test_get_resolves_offsets() {
    let finder = spy_finder(ZONES);

    let zones = finder.get(48.8566, 2.3522).unwrap();
    let paris = zones.zone().unwrap();

    // central european summer time
    let timestamp: jiff::Timestamp = "2024-07-01T12:00:00Z".parse().unwrap();
    assert_eq!(paris.to_offset(timestamp), jiff::tz::offset(2));
}

#[test]
fn test_get_surfaces_geometry_errors() {
    let finder = spy_finder(BROKEN_GEOMETRY);

    assert!(matches!(finder.get(5.0, 5.0), Err(Error::Geometry(_))));
}
