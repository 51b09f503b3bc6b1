// src/domain/provider.rs

/// A latitude/longitude pair, only used to build a maps deep link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Returns `None` for NaN or out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);

        valid.then_some(Self { lat, lng })
    }
}

/// One listed business or worker, normalized so that every card renders
/// the same shape regardless of which category it came from.
///
/// Optional data is `None` or an empty `Vec`, never missing. Records are
/// built per render pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    pub id: String,
    pub title: String,
    /// Free-text address or vicinity. Empty when the source had none.
    pub location: String,
    pub distance_km: Option<f64>,
    pub rating: Option<f64>,
    pub rating_count: Option<u64>,
    pub is_open_now: Option<bool>,
    pub phone: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub photos: Vec<String>,
    /// Badges such as "Verified" or "GST".
    pub tags: Vec<String>,
    /// Short capability labels shown as chips.
    pub services: Vec<String>,
}

impl ProviderRecord {
    /// Phone number reduced to its digits, as used by `tel:` and `wa.me` links.
    /// A phone with no digits at all counts as missing.
    pub fn phone_digits(&self) -> Option<String> {
        let digits: String = self
            .phone
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        (!digits.is_empty()).then_some(digits)
    }

    /// "4.5 (120)" style label, or `None` for unrated entries.
    pub fn rating_label(&self) -> Option<String> {
        let rating = self.rating?;
        Some(match self.rating_count {
            Some(count) => format!("{rating:.1} ({count})"),
            None => format!("{rating:.1}"),
        })
    }

    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(|km| {
            if km < 1.0 {
                format!("{:.0} m away", km * 1000.0)
            } else {
                format!("{km:.1} km away")
            }
        })
    }
}
