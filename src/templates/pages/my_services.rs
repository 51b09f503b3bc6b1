use crate::domain::{Category, ProviderRecord};
use crate::templates::components::card::provider_href;
use crate::templates::{desktop_layout, listing_card, CardOptions, CarouselState};
use crate::utils::encode_component;
use maud::{html, Markup};

pub fn user_services_page(category: Category, user_id: &str, records: &[ProviderRecord]) -> Markup {
    let opts = CardOptions::for_category(category).with_detail(&provider_href);

    desktop_layout(
        "My listings",
        html! {
            main class="container" {
                h1 { "My " (category.display_name()) }
                p {
                    a class="button primary"
                        href=(format!("/category/{}/new?userId={}", category.id(), encode_component(user_id)))
                    { "Add a listing" }
                }

                @if records.is_empty() {
                    p class="empty" { "You have not listed any services in this category yet." }
                }

                div class="listing-grid" {
                    @for record in records {
                        div class="owned-listing" {
                            (listing_card(record, CarouselState::new(record.photos.len()), &opts))
                            form method="post"
                                action=(format!(
                                    "/my/{}/{}/delete?userId={}",
                                    category.slug(),
                                    encode_component(&record.id),
                                    encode_component(user_id)
                                ))
                            {
                                a class="button"
                                    href=(format!(
                                        "/my/{}/{}/edit?userId={}",
                                        category.slug(),
                                        encode_component(&record.id),
                                        encode_component(user_id)
                                    ))
                                { "Edit" }
                                button type="submit" class="danger" { "Delete" }
                            }
                        }
                    }
                }
            }
        },
    )
}
