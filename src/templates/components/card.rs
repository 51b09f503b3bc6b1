//! One provider card: photo carousel, rating/status badges, service chips
//! and the contact actions (call, directions, WhatsApp, details).
//!
//! The carousel clamps at both ends for every category. Prev/next buttons
//! are disabled at the bounds instead of wrapping around.

use maud::{html, Markup};

use crate::adapters::profiles;
use crate::domain::{Category, ProviderRecord};
use crate::utils::encode_component;

const MISSING_PHONE: &str = "Phone number is not available for this listing.";

/// Which photo a card shows. Owned by one card and rebuilt whenever the
/// record behind the card changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Start at `requested`, clamped into range.
    pub fn at(len: usize, requested: usize) -> Self {
        Self {
            index: requested.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self::at(self.len, self.index + 1)
    }

    pub fn prev(self) -> Self {
        Self::at(self.len, self.index.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }
}

/// What clicking an action does. All of them leave the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Same-tab navigation (`tel:` links).
    Navigate(String),
    OpenInNewTab(String),
    /// No navigation; the browser shows an alert instead.
    Alert(&'static str),
}

pub fn call_action(record: &ProviderRecord) -> CardAction {
    match record.phone_digits() {
        Some(digits) => CardAction::Navigate(format!("tel:{digits}")),
        None => CardAction::Alert(MISSING_PHONE),
    }
}

/// Maps directions to the coordinates, or a text search on the address
/// (title when the address is blank) when there are none.
pub fn directions_action(record: &ProviderRecord) -> CardAction {
    match record.coordinates {
        Some(c) => CardAction::OpenInNewTab(format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            c.lat, c.lng
        )),
        None => {
            let query = if record.location.trim().is_empty() {
                record.title.as_str()
            } else {
                record.location.as_str()
            };
            CardAction::OpenInNewTab(format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                encode_component(query)
            ))
        }
    }
}

pub fn whatsapp_action(record: &ProviderRecord) -> CardAction {
    match record.phone_digits() {
        Some(digits) => {
            let message = format!(
                "Hi {}, I found your listing nearby and would like to know more.",
                record.title
            );
            CardAction::OpenInNewTab(format!(
                "https://wa.me/{digits}?text={}",
                encode_component(&message)
            ))
        }
        None => CardAction::Alert(MISSING_PHONE),
    }
}

/// Builds the link for the "View details" action.
pub type DetailHref<'a> = &'a dyn Fn(Category, &ProviderRecord) -> String;

pub struct CardOptions<'a> {
    pub category: Category,
    pub whatsapp: bool,
    pub detail_href: Option<DetailHref<'a>>,
}

impl<'a> CardOptions<'a> {
    pub fn for_category(category: Category) -> Self {
        Self {
            category,
            whatsapp: profiles::profile(category).whatsapp,
            detail_href: None,
        }
    }

    pub fn with_detail(mut self, detail_href: DetailHref<'a>) -> Self {
        self.detail_href = Some(detail_href);
        self
    }
}

/// The app's detail link: `/provider/<slug>/<id>`.
pub fn provider_href(category: Category, record: &ProviderRecord) -> String {
    format!("/provider/{}/{}", category.slug(), encode_component(&record.id))
}

/// hx-get target for one carousel step.
pub fn carousel_href(category: Category, record: &ProviderRecord, index: usize) -> String {
    format!(
        "/card/{}/{}?photo={index}",
        category.slug(),
        encode_component(&record.id)
    )
}

fn dom_id(category: Category, record: &ProviderRecord) -> String {
    let id: String = record
        .id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("card-{}-{id}", category.slug())
}

pub fn listing_card(record: &ProviderRecord, carousel: CarouselState, opts: &CardOptions) -> Markup {
    html! {
        article class="listing-card" id=(dom_id(opts.category, record)) data-id=(record.id) {
            (carousel_view(record, carousel, opts.category))

            div class="card-body" {
                h3 class="card-title" { (record.title) }
                @if !record.location.is_empty() {
                    p class="card-location" { (record.location) }
                }

                div class="card-badges" {
                    @if let Some(rating) = record.rating_label() {
                        span class="badge badge-rating" { "★ " (rating) }
                    }
                    @match record.is_open_now {
                        Some(true) => span class="badge badge-open" { "Open now" },
                        Some(false) => span class="badge badge-closed" { "Closed" },
                        None => {},
                    }
                    @if let Some(distance) = record.distance_label() {
                        span class="badge badge-distance" { (distance) }
                    }
                    @for tag in &record.tags {
                        span class="badge badge-tag" { (tag) }
                    }
                }

                @if !record.services.is_empty() {
                    ul class="service-chips" {
                        @for service in &record.services {
                            li class="chip" { (service) }
                        }
                    }
                }

                div class="card-actions" {
                    (action_button("action-call", "Call", call_action(record)))
                    (action_button("action-directions", "Directions", directions_action(record)))
                    @if opts.whatsapp {
                        (action_button("action-whatsapp", "WhatsApp", whatsapp_action(record)))
                    }
                    @if let Some(detail_href) = opts.detail_href {
                        a class="action action-details" href=(detail_href(opts.category, record)) { "View details" }
                    }
                }
            }
        }
    }
}

fn carousel_view(record: &ProviderRecord, carousel: CarouselState, category: Category) -> Markup {
    let prev_href = carousel
        .has_prev()
        .then(|| carousel_href(category, record, carousel.prev().index()));
    let next_href = carousel
        .has_next()
        .then(|| carousel_href(category, record, carousel.next().index()));

    html! {
        div class="card-media" data-photo-index=(carousel.index()) {
            @match record.photos.get(carousel.index()) {
                Some(src) => {
                    img class="card-photo" src=(src) alt=(record.title) loading="lazy";
                    @if carousel.len() > 1 {
                        span class="photo-count" { (carousel.index() + 1) " / " (carousel.len()) }
                    }
                },
                None => {
                    div class="photo-placeholder" aria-label="No photos" {
                        svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24"
                            fill="none" stroke="#9ca3af" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"
                        {
                            rect x="3" y="3" width="18" height="18" rx="2" {}
                            circle cx="8.5" cy="8.5" r="1.5" {}
                            path d="M21 15l-5-5L5 21" {}
                        }
                    }
                },
            }

            button type="button" class="carousel-prev" aria-label="Previous photo"
                disabled[prev_href.is_none()]
                hx-get=[prev_href.as_deref()]
                hx-target="closest article"
                hx-swap="outerHTML"
            { "‹" }
            button type="button" class="carousel-next" aria-label="Next photo"
                disabled[next_href.is_none()]
                hx-get=[next_href.as_deref()]
                hx-target="closest article"
                hx-swap="outerHTML"
            { "›" }
        }
    }
}

fn action_button(class: &str, label: &str, action: CardAction) -> Markup {
    html! {
        @match action {
            CardAction::Navigate(href) => {
                a class={ "action " (class) } href=(href) { (label) }
            },
            CardAction::OpenInNewTab(href) => {
                a class={ "action " (class) } href=(href) target="_blank" rel="noopener noreferrer" { (label) }
            },
            CardAction::Alert(message) => {
                button type="button" class={ "action is-disabled " (class) } aria-disabled="true"
                    onclick=(format!("alert('{message}')"))
                { (label) }
            },
        }
    }
}
