use serde::ser::{Serialize, SerializeSeq, Serializer};

/// The outcome of a lookup. Not finding a zone, or finding several, are both successful
/// results rather than errors.
///
/// Zone ids borrow from the [`Catalog`](crate::Catalog) that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup<'a> {
    /// No region contains the point.
    NotFound,
    /// Exactly one zone contains the point.
    Zone(&'a str),
    /// The point is inside the geometry of more than one region. Zone ids are in catalog
    /// order.
    Ambiguous(Vec<&'a str>),
}

impl<'a> Lookup<'a> {
    /// Collapses the zone ids of every region that contains the point into a result.
    pub(crate) fn from_matches(mut matches: Vec<&'a str>) -> Self {
        match matches.len() {
            0 => Self::NotFound,
            1 => matches.pop().map_or(Self::NotFound, Self::Zone),
            _ => Self::Ambiguous(matches),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous(_))
    }

    /// The zone id, if exactly one zone was found.
    #[inline]
    pub fn zone(&self) -> Option<&'a str> {
        match self {
            Self::Zone(zone_id) => Some(*zone_id),
            _ => None,
        }
    }

    /// Every zone id found, empty for [`Lookup::NotFound`].
    pub fn zones(&self) -> &[&'a str] {
        match self {
            Self::NotFound => &[],
            Self::Zone(zone_id) => std::slice::from_ref(zone_id),
            Self::Ambiguous(zone_ids) => zone_ids.as_slice(),
        }
    }
}

/// Serializes to `null`, a single zone id, or an array of zone ids.
impl Serialize for Lookup<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::NotFound => serializer.serialize_none(),
            Self::Zone(zone_id) => serializer.serialize_str(zone_id),
            Self::Ambiguous(zone_ids) => {
                let mut seq = serializer.serialize_seq(Some(zone_ids.len()))?;
                for zone_id in zone_ids {
                    seq.serialize_element(zone_id)?;
                }
                seq.end()
            }
        }
    }
}
