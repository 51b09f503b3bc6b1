// templates/pages/home.rs

use crate::domain::{Category, ServiceFlow};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(default_radius_km: f64) -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Find services near you" }

                form class="search-form" method="get" action="/search" {
                    label for="category" { "Looking for" }
                    select name="category" id="category" required {
                        @for category in Category::ALL {
                            option value=(category.slug()) { (category.display_name()) }
                        }
                    }
                    (coordinate_inputs(None, None, default_radius_km))
                    button type="submit" class="primary" { "Search nearby" }
                }

                @for flow in ServiceFlow::ALL {
                    section class="card flow" data-flow=(flow.label()) {
                        h2 { (flow.label()) }
                        ul class="category-list" {
                            @for category in flow.categories() {
                                li {
                                    a href={ "/nearby/" (category.slug()) } { (category.display_name()) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Latitude / longitude / radius inputs shared by the search forms.
pub fn coordinate_inputs(latitude: Option<f64>, longitude: Option<f64>, distance_km: f64) -> Markup {
    html! {
        label for="latitude" { "Latitude" }
        input type="number" step="any" min="-90" max="90" id="latitude" name="latitude"
            value=[latitude] required;
        label for="longitude" { "Longitude" }
        input type="number" step="any" min="-180" max="180" id="longitude" name="longitude"
            value=[longitude] required;
        label for="distance" { "Within (km)" }
        input type="number" step="any" min="0.1" id="distance" name="distance" value=(distance_km);
    }
}
