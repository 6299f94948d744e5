//! The global finder reads its config from the environment once, so this is its own test
//! binary with a single test.
mod common;

use tzlocate::Lookup;

#[test]
fn test_global() {
    // SAFETY: this is the only test in this binary, nothing else is reading the environment
    unsafe {
        std::env::set_var("TZLOCATE_DATASET_DIR", common::ZONES);
        std::env::set_var("TZLOCATE_CACHE_GEOMETRY", "true");
    }

    let config = tzlocate::Config::from_env();
    assert_eq!(config.dataset_dir, std::path::Path::new(common::ZONES));
    assert!(config.cache_geometry);

    let finder = tzlocate::global().unwrap();
    assert!(std::ptr::eq(finder, tzlocate::global().unwrap()));
    assert_eq!(finder.catalog().len(), 10);

    assert_eq!(
        tzlocate::lookup(55.75, 37.616667).unwrap(),
        Lookup::Zone("Europe/Moscow")
    );
    assert_eq!(
        tzlocate::lookup(50.004444, 36.231389).unwrap(),
        Lookup::Zone("Europe/Kiev")
    );

    #[cfg(feature = "tz")]
    {
        let zones = tzlocate::get(55.75, 37.616667).unwrap();
        assert_eq!(
            zones.zone().and_then(jiff::tz::TimeZone::iana_name),
            Some("Europe/Moscow")
        );
    }
}
