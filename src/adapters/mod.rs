//! Per-category translation from raw API records (and the in-source fallback
//! samples) into the one `ProviderRecord` shape the templates render.
//!
//! Every category nests its extra fields under a differently named key
//! (`jobData`, `businessData`, `centreData`, ...). That naming stops here.

pub mod profiles;
pub mod samples;

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::{Category, Coordinates, ProviderRecord};
use profiles::CategoryProfile;
use samples::SampleProvider;

const PHONE_KEYS: [&str; 4] = ["phone", "phoneNumber", "contactNumber", "mobile"];
const PHOTO_KEYS: [&str; 2] = ["photos", "images"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AdaptError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryAdapter {
    profile: &'static CategoryProfile,
}

impl CategoryAdapter {
    pub fn for_category(category: Category) -> Self {
        Self {
            profile: profiles::profile(category),
        }
    }

    pub fn category(&self) -> Category {
        self.profile.category
    }

    /// Normalize one raw API record.
    ///
    /// Only an id and a title are required; every other field degrades to
    /// `None` or an empty list.
    pub fn adapt(&self, raw: &Value) -> Result<ProviderRecord, AdaptError> {
        let top = raw.as_object().ok_or(AdaptError::NotAnObject)?;
        let nested = top
            .get(self.category().nested_data_key())
            .and_then(Value::as_object);

        let id = first_id(top).ok_or(AdaptError::MissingField("id"))?;

        let title = first_str(Some(top), &["title", "name"])
            .or_else(|| first_str(nested, &["businessName", "name"]))
            .ok_or(AdaptError::MissingField("title"))?;

        let location = top
            .get("location")
            .and_then(non_empty_str)
            .or_else(|| first_str(Some(top), &["vicinity", "address"]))
            .or_else(|| first_str(nested, &["address", "location"]))
            .unwrap_or_default();

        let phone = first_str(nested, &PHONE_KEYS)
            .or_else(|| first_str(Some(top), &PHONE_KEYS))
            .or_else(|| self.profile.phone_for(&id).map(str::to_string));

        let mut photos = first_photos(nested).or_else(|| first_photos(Some(top))).unwrap_or_default();
        if photos.is_empty() {
            photos = self.table_images(&id);
        }

        let services = string_list(nested, "services")
            .or_else(|| string_list(Some(top), "services"))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| to_strings(self.profile.services));

        Ok(ProviderRecord {
            location,
            distance_km: first_number(top, &["distance", "distanceKm"]),
            rating: first_number(top, &["rating"]),
            rating_count: first_number(top, &["user_ratings_total", "ratingCount", "reviewCount"])
                .filter(|n| *n >= 0.0)
                .map(|n| n as u64),
            is_open_now: top
                .get("opening_hours")
                .and_then(|h| h.get("open_now"))
                .and_then(Value::as_bool),
            phone,
            coordinates: coordinates(top, nested),
            photos,
            tags: self.tags(top, nested),
            services,
            id,
            title,
        })
    }

    /// Normalize a whole API page. Records missing an id or title are
    /// skipped, and only the first record for any id is kept.
    pub fn adapt_all(&self, raws: &[Value]) -> Vec<ProviderRecord> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(raws.len());

        for (index, raw) in raws.iter().enumerate() {
            match self.adapt(raw) {
                Ok(record) => {
                    if seen.insert(record.id.clone()) {
                        records.push(record);
                    } else {
                        debug!(category = %self.category(), id = %record.id, "dropping duplicate record");
                    }
                }
                Err(e) => {
                    warn!(category = %self.category(), index, error = %e, "skipping unusable record");
                }
            }
        }

        records
    }

    /// Fallback listings for this category.
    pub fn sample_records(&self) -> Vec<ProviderRecord> {
        self.profile
            .samples()
            .iter()
            .map(|s| self.from_sample(s))
            .collect()
    }

    pub fn sample_record(&self, id: &str) -> Option<ProviderRecord> {
        self.profile
            .samples()
            .iter()
            .find(|s| s.id == id)
            .map(|s| self.from_sample(s))
    }

    fn from_sample(&self, sample: &SampleProvider) -> ProviderRecord {
        let photos = if sample.photos.is_empty() {
            self.table_images(sample.id)
        } else {
            to_strings(sample.photos)
        };

        let services = if sample.services.is_empty() {
            to_strings(self.profile.services)
        } else {
            to_strings(sample.services)
        };

        let mut tags = to_strings(self.profile.default_tags);
        push_unique(&mut tags, sample.tags.iter().copied());

        ProviderRecord {
            id: sample.id.to_string(),
            title: sample.title.to_string(),
            location: sample.location.to_string(),
            distance_km: sample.distance_km,
            rating: sample.rating,
            rating_count: sample.rating_count,
            is_open_now: sample.open_now,
            phone: self.profile.phone_for(sample.id).map(str::to_string),
            coordinates: sample
                .coordinates
                .and_then(|(lat, lng)| Coordinates::checked(lat, lng)),
            photos,
            tags,
            services,
        }
    }

    fn table_images(&self, id: &str) -> Vec<String> {
        to_strings(self.profile.images_for(id))
    }

    fn tags(&self, top: &Map<String, Value>, nested: Option<&Map<String, Value>>) -> Vec<String> {
        let mut tags = to_strings(self.profile.default_tags);

        let flag = |keys: &[&str]| {
            [Some(top), nested]
                .into_iter()
                .flatten()
                .any(|obj| keys.iter().any(|k| obj.get(*k).and_then(Value::as_bool) == Some(true)))
        };

        if flag(&["verified", "isVerified"]) {
            push_unique(&mut tags, ["Verified"]);
        }
        if flag(&["trending", "isTrending"]) {
            push_unique(&mut tags, ["Trending"]);
        }
        if first_str(Some(top), &["gstNumber", "gstin"])
            .or_else(|| first_str(nested, &["gstNumber", "gstin"]))
            .is_some()
        {
            push_unique(&mut tags, ["GST"]);
        }
        if let Some(extra) = string_list(Some(top), "tags") {
            push_unique(&mut tags, extra.iter().map(String::as_str));
        }

        tags
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn push_unique<'a>(tags: &mut Vec<String>, extra: impl IntoIterator<Item = &'a str>) {
    for tag in extra {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn first_str(obj: Option<&Map<String, Value>>, keys: &[&str]) -> Option<String> {
    let obj = obj?;
    keys.iter().find_map(|k| obj.get(*k).and_then(non_empty_str))
}

/// Ids arrive as strings from some endpoints and integers from others.
fn first_id(obj: &Map<String, Value>) -> Option<String> {
    ["id", "_id", "place_id"].iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn as_number(value: &Value) -> Option<f64> {
    let n: f64 = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn first_number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(as_number))
}

fn string_list(obj: Option<&Map<String, Value>>, key: &str) -> Option<Vec<String>> {
    let items = obj?.get(key)?.as_array()?;
    Some(items.iter().filter_map(non_empty_str).collect())
}

/// Photo arrays hold either plain URLs or objects with a `url` field.
fn first_photos(obj: Option<&Map<String, Value>>) -> Option<Vec<String>> {
    let obj = obj?;
    PHOTO_KEYS.iter().find_map(|k| {
        let items = obj.get(*k)?.as_array()?;
        let urls: Vec<String> = items
            .iter()
            .filter_map(|item| match item {
                Value::String(_) => non_empty_str(item),
                Value::Object(photo) => first_str(Some(photo), &["url", "secure_url"]),
                _ => None,
            })
            .collect();
        (!urls.is_empty()).then_some(urls)
    })
}

fn coordinates(
    top: &Map<String, Value>,
    nested: Option<&Map<String, Value>>,
) -> Option<Coordinates> {
    // Places style: geometry.location.{lat,lng}
    let places = top
        .get("geometry")
        .and_then(|g| g.get("location"))
        .and_then(|loc| Coordinates::checked(as_number(loc.get("lat")?)?, as_number(loc.get("lng")?)?));

    let flat = |obj: Option<&Map<String, Value>>| {
        let obj = obj?;
        Coordinates::checked(
            first_number(obj, &["latitude", "lat"])?,
            first_number(obj, &["longitude", "lng"])?,
        )
    };

    // GeoJSON point: coordinates are [lng, lat]
    let geojson = top
        .get("location")
        .and_then(|loc| loc.get("coordinates"))
        .and_then(Value::as_array)
        .filter(|pair| pair.len() == 2)
        .and_then(|pair| Coordinates::checked(as_number(&pair[1])?, as_number(&pair[0])?));

    places
        .or_else(|| flat(Some(top)))
        .or_else(|| flat(nested))
        .or(geojson)
}
