use crate::domain::{Category, ProviderRecord, ServiceFlow};
use crate::templates::{desktop_layout, listing_grid, CardOptions, GridSource};
use maud::{html, Markup};

pub fn provider_page(category: Category, record: &ProviderRecord) -> Markup {
    let opts = CardOptions::for_category(category);

    desktop_layout(
        &record.title,
        html! {
            main class="container" {
                p class="breadcrumbs" {
                    a href="/" { (ServiceFlow::for_category(category).label()) }
                    " / "
                    a href={ "/nearby/" (category.slug()) } { (category.display_name()) }
                }

                (listing_grid(GridSource::Single(record), &opts))

                @if record.photos.len() > 1 {
                    section class="card gallery" {
                        h3 { "Photos" }
                        div class="gallery-grid" {
                            @for (i, src) in record.photos.iter().enumerate() {
                                img src=(src) alt={ (record.title) " photo " (i + 1) } loading="lazy";
                            }
                        }
                    }
                }

                @if !record.services.is_empty() {
                    section class="card" {
                        h3 { "Services" }
                        ul {
                            @for service in &record.services {
                                li { (service) }
                            }
                        }
                    }
                }
            }
        },
    )
}
