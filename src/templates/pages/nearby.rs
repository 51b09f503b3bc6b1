use crate::client::NearbyQuery;
use crate::domain::Category;
use crate::templates::components::card::provider_href;
use crate::templates::pages::home::coordinate_inputs;
use crate::templates::{desktop_layout, listing_grid, CardOptions, GridSource};
use maud::{html, Markup};

pub struct NearbyVm<'a> {
    pub category: Category,
    /// `None` until the visitor has searched.
    pub query: Option<NearbyQuery>,
    pub source: GridSource<'a>,
    pub default_radius_km: f64,
}

pub fn nearby_page(vm: &NearbyVm) -> Markup {
    let opts = CardOptions::for_category(vm.category).with_detail(&provider_href);

    desktop_layout(
        vm.category.display_name(),
        html! {
            main class="container" {
                h1 { (vm.category.display_name()) " nearby" }

                form class="search-form" method="get" action={ "/nearby/" (vm.category.slug()) } {
                    (coordinate_inputs(
                        vm.query.map(|q| q.latitude),
                        vm.query.map(|q| q.longitude),
                        vm.query.map_or(vm.default_radius_km, |q| q.distance_km),
                    ))
                    button type="submit" class="primary" { "Search" }
                }

                @if let Some(query) = vm.query {
                    p class="search-summary" {
                        "Within " (query.distance_km) " km of " (query.latitude) ", " (query.longitude)
                    }
                }

                (listing_grid(vm.source, &opts))
            }
        },
    )
}
