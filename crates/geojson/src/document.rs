use std::borrow::Cow;
use std::fmt;

use geo::Geometry;
use serde::Deserialize;
use serde::de::{self, Deserializer as _};
use serde_json::value::RawValue;

use crate::{Error, GeometryType};

/// The members of any GeoJSON object that lead towards coordinates. Each one is kept as
/// unparsed json, so nothing is decoded until the `type` is known, regardless of the
/// order the members appear in.
#[derive(Deserialize)]
struct RawObject<'a> {
    #[serde(rename = "type", borrow)]
    kind: Cow<'a, str>,
    #[serde(borrow, default)]
    features: Option<&'a RawValue>,
    #[serde(borrow, default)]
    geometry: Option<&'a RawValue>,
    #[serde(borrow, default)]
    coordinates: Option<&'a RawValue>,
}

impl<'a> RawObject<'a> {
    fn parse(raw: &'a RawValue) -> Result<Self, Error> {
        serde_json::from_str(raw.get()).map_err(Error::Json)
    }

    fn into_geometry(self) -> Result<Geometry, Error> {
        match &*self.kind {
            "FeatureCollection" => {
                let features = self.features.ok_or(Error::MissingMember {
                    kind: "FeatureCollection",
                    member: "features",
                })?;

                let first = first_feature(features)?.ok_or(Error::NoFeatures)?;
                let feature = RawObject::parse(first)?;

                if feature.kind != "Feature" {
                    return Err(Error::UnsupportedDocument(feature.kind.into_owned()));
                }

                feature.feature_geometry()
            }
            "Feature" => self.feature_geometry(),
            _ => self.geometry_object(),
        }
    }

    fn feature_geometry(self) -> Result<Geometry, Error> {
        // a null geometry is as good as a missing one
        let geometry = self.geometry.ok_or(Error::MissingMember {
            kind: "Feature",
            member: "geometry",
        })?;

        RawObject::parse(geometry)?.geometry_object()
    }

    fn geometry_object(self) -> Result<Geometry, Error> {
        let geometry_type = GeometryType::from_type_name(&self.kind)
            .ok_or_else(|| Error::UnsupportedDocument(self.kind.to_string()))?;

        if !geometry_type.is_areal() {
            return Err(Error::UnsupportedGeometry(geometry_type));
        }

        let coordinates = self.coordinates.ok_or(Error::MissingMember {
            kind: geometry_type.as_str(),
            member: "coordinates",
        })?;

        geometry_type.decode_coordinates(coordinates)
    }
}

/// Pulls the first element out of the `features` array, skipping over the rest.
fn first_feature(features: &RawValue) -> Result<Option<&RawValue>, Error> {
    struct FirstElement;

    impl<'de> de::Visitor<'de> for FirstElement {
        type Value = Option<&'de RawValue>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an array of features")
        }

        fn visit_seq<S>(self, mut seq_access: S) -> Result<Self::Value, S::Error>
        where
            S: de::SeqAccess<'de>,
        {
            let first = seq_access.next_element::<&'de RawValue>()?;

            // the rest of the array still needs to be consumed
            while seq_access.next_element::<de::IgnoredAny>()?.is_some() {}

            Ok(first)
        }
    }

    let mut deserializer = serde_json::Deserializer::from_str(features.get());
    let first = deserializer.deserialize_seq(FirstElement)?;
    deserializer.end()?;
    Ok(first)
}

/// Decodes a zone boundary document from raw bytes, returning its validated geometry.
pub fn from_slice(bytes: &[u8]) -> Result<Geometry, Error> {
    let document: &RawValue = serde_json::from_slice(bytes)?;
    decode(document)
}

/// Decodes a zone boundary document from a string, returning its validated geometry.
pub fn from_str(json: &str) -> Result<Geometry, Error> {
    let document: &RawValue = serde_json::from_str(json)?;
    decode(document)
}

fn decode(document: &RawValue) -> Result<Geometry, Error> {
    let geometry = RawObject::parse(document)?.into_geometry()?;
    geometry.validate()?;
    Ok(geometry)
}
