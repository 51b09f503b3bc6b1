use std::borrow::Cow;

use maud::{html, Markup};

use crate::adapters::CategoryAdapter;
use crate::domain::ProviderRecord;
use crate::templates::components::card::{listing_card, CardOptions, CarouselState};

/// What the caller has to show.
#[derive(Debug, Clone, Copy)]
pub enum GridSource<'a> {
    /// A single record chosen by the caller (detail view, one-card fragment).
    Single(&'a ProviderRecord),
    /// Records from a nearby search. An empty page falls back to samples.
    Live(&'a [ProviderRecord]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOrigin {
    Single,
    Live,
    Sample,
}

impl GridOrigin {
    fn as_str(self) -> &'static str {
        match self {
            GridOrigin::Single => "single",
            GridOrigin::Live => "live",
            GridOrigin::Sample => "sample",
        }
    }
}

/// The records a grid renders, and where they came from.
///
/// An empty live page renders the category's fallback samples. This is a
/// presentation default only; nothing is re-fetched.
pub fn grid_records<'a>(
    adapter: &CategoryAdapter,
    source: GridSource<'a>,
) -> (GridOrigin, Cow<'a, [ProviderRecord]>) {
    match source {
        GridSource::Single(record) => (GridOrigin::Single, Cow::Borrowed(std::slice::from_ref(record))),
        GridSource::Live(records) if !records.is_empty() => (GridOrigin::Live, Cow::Borrowed(records)),
        GridSource::Live(_) => (GridOrigin::Sample, Cow::Owned(adapter.sample_records())),
    }
}

pub fn listing_grid(source: GridSource, opts: &CardOptions) -> Markup {
    let adapter = CategoryAdapter::for_category(opts.category);
    let (origin, records) = grid_records(&adapter, source);

    html! {
        section
            class={ "listing-grid listing-grid-" (origin.as_str()) }
            data-category=(opts.category.slug())
            data-source=(origin.as_str())
        {
            @for record in records.iter() {
                (listing_card(record, CarouselState::new(record.photos.len()), opts))
            }
        }
    }
}
