//! Resolving lookups to [`jiff`] time zones, for callers that need offsets or DST rules rather
//! than just a zone id.
use jiff::tz::{TimeZone, TimeZoneDatabase};

use crate::error::Error;
use crate::finder::ZoneFinder;
use crate::loader::GeometryLoader;
use crate::lookup::Lookup;

/// A [`Lookup`] with each zone id resolved through the time zone database.
#[derive(Debug, Clone)]
pub enum TimeZones {
    NotFound,
    Zone(TimeZone),
    Ambiguous(Vec<TimeZone>),
}

impl TimeZones {
    /// Resolves every zone id in 'lookup' through the global database, [`jiff::tz::db`].
    #[inline]
    pub fn resolve(lookup: &Lookup<'_>) -> Result<Self, Error> {
        Self::resolve_in(jiff::tz::db(), lookup)
    }

    /// Resolves every zone id in 'lookup' through 'db'.
    pub fn resolve_in(db: &TimeZoneDatabase, lookup: &Lookup<'_>) -> Result<Self, Error> {
        ensure_database(db)?;
        Self::resolve_unchecked(db, lookup)
    }

    fn resolve_unchecked(db: &TimeZoneDatabase, lookup: &Lookup<'_>) -> Result<Self, Error> {
        Ok(match lookup {
            Lookup::NotFound => Self::NotFound,
            Lookup::Zone(zone_id) => Self::Zone(time_zone(db, zone_id)?),
            Lookup::Ambiguous(zone_ids) => Self::Ambiguous(
                zone_ids
                    .iter()
                    .map(|zone_id| time_zone(db, zone_id))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    /// The zone, if exactly one was found.
    pub fn zone(&self) -> Option<&TimeZone> {
        match self {
            Self::Zone(tz) => Some(tz),
            _ => None,
        }
    }

    /// Every zone found, empty for [`TimeZones::NotFound`].
    pub fn zones(&self) -> &[TimeZone] {
        match self {
            Self::NotFound => &[],
            Self::Zone(tz) => std::slice::from_ref(tz),
            Self::Ambiguous(tzs) => tzs.as_slice(),
        }
    }
}

fn ensure_database(db: &TimeZoneDatabase) -> Result<(), Error> {
    if db.is_definitively_empty() {
        return Err(Error::MissingDependency);
    }

    Ok(())
}

fn time_zone(db: &TimeZoneDatabase, zone_id: &str) -> Result<TimeZone, Error> {
    db.get(zone_id)
        .map_err(|source| Error::UnknownZone {
            zone_id: zone_id.to_owned(),
            source: Box::new(source),
        })
}

impl<L> ZoneFinder<L>
where
    L: GeometryLoader,
{
    /// Like [`ZoneFinder::lookup`], but resolving the zone ids to [`TimeZone`]s.
    ///
    /// The time zone database is checked before anything else, so a host without one fails
    /// with [`Error::MissingDependency`] even for points that wouldn't be found.
    #[inline]
    pub fn get(&self, lat: f64, lng: f64) -> Result<TimeZones, Error> {
        self.get_in(jiff::tz::db(), lat, lng)
    }

    /// Like [`ZoneFinder::get`], resolving through 'db' instead of the global database.
    pub fn get_in(&self, db: &TimeZoneDatabase, lat: f64, lng: f64) -> Result<TimeZones, Error> {
        ensure_database(db)?;

        let lookup = self.lookup(lat, lng)?;
        TimeZones::resolve_unchecked(db, &lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::loader::FsLoader;

    #[test]
    fn test_resolve() {
        let resolved = TimeZones::resolve(&Lookup::Zone("Europe/Moscow")).unwrap();
        assert_eq!(
            resolved.zone().and_then(TimeZone::iana_name),
            Some("Europe/Moscow")
        );

        let resolved = TimeZones::resolve(&Lookup::Ambiguous(vec![
            "America/Regina",
            "America/Swift_Current",
        ]))
        .unwrap();
        let names = resolved
            .zones()
            .iter()
            .filter_map(TimeZone::iana_name)
            .collect::<Vec<_>>();
        assert_eq!(names, ["America/Regina", "America/Swift_Current"]);

        assert!(!TimeZones::resolve(&Lookup::NotFound).unwrap().is_found());
    }

    #[test]
    fn test_unknown_zone() {
        let err = TimeZones::resolve(&Lookup::Zone("Mars/Olympus_Mons")).unwrap_err();

        assert!(matches!(err, Error::UnknownZone { ref zone_id, .. } if zone_id == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_empty_database_is_missing_dependency() {
        let empty = TimeZoneDatabase::none();

        assert!(matches!(
            TimeZones::resolve_in(&empty, &Lookup::Zone("Europe/Moscow")),
            Err(Error::MissingDependency)
        ));
        // checked up front, even when there's nothing to resolve
        assert!(matches!(
            TimeZones::resolve_in(&empty, &Lookup::NotFound),
            Err(Error::MissingDependency)
        ));

        let finder = ZoneFinder::new(Catalog::default(), FsLoader);
        let err = finder.get_in(&empty, 55.75, 37.616667).unwrap_err();
        assert!(matches!(err, Error::MissingDependency));
        assert!(!err.to_string().is_empty());

        assert!(finder.get(55.75, 37.616667).unwrap().zones().is_empty());
    }
}
