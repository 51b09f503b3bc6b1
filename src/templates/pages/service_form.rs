use crate::domain::{Category, ProviderRecord, ServiceFlow};
use crate::templates::desktop_layout;
use crate::utils::encode_component;
use maud::{html, Markup};

/// Extra fields asked for on top of the common ones, per flow.
fn flow_fields(flow: ServiceFlow) -> &'static [(&'static str, &'static str)] {
    match flow {
        ServiceFlow::Business => &[("gstNumber", "GST number"), ("openingHours", "Opening hours")],
        ServiceFlow::Individual => &[("experienceYears", "Years of experience"), ("languages", "Languages spoken")],
    }
}

fn text_input(name: &str, label: &str, value: &str, required: bool) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="text" id=(name) name=(name) value=(value) required[required];
    }
}

pub fn new_service_page(category: Category, flow: ServiceFlow, user_id: &str) -> Markup {
    let action = format!("/my/{}/new?userId={}", category.slug(), encode_component(user_id));

    desktop_layout(
        "New listing",
        html! {
            main class="container narrow" {
                h1 { "List your " (category.display_name()) " service" }
                p class="muted" { (flow.label()) }

                form class="card service-form" method="post" action=(action) enctype="multipart/form-data" {
                    (text_input("title", "Name", "", true))
                    (text_input("address", "Address", "", false))
                    (text_input("phone", "Phone", "", false))
                    (text_input("services", "Services (comma separated)", "", false))
                    @for (name, label) in flow_fields(flow) {
                        (text_input(name, label, "", false))
                    }
                    label for="images" { "Photos" }
                    input type="file" id="images" name="images[]" accept="image/*" multiple;
                    button type="submit" class="primary" { "Create listing" }
                }
            }
        },
    )
}

pub fn edit_service_page(category: Category, record: &ProviderRecord, user_id: &str) -> Markup {
    let action = format!(
        "/my/{}/{}/edit?userId={}",
        category.slug(),
        encode_component(&record.id),
        encode_component(user_id)
    );

    desktop_layout(
        &format!("Edit {}", record.title),
        html! {
            main class="container narrow" {
                h1 { "Edit " (record.title) }

                form class="card service-form" method="post" action=(action) {
                    (text_input("title", "Name", &record.title, true))
                    (text_input("address", "Address", &record.location, false))
                    (text_input("phone", "Phone", record.phone.as_deref().unwrap_or_default(), false))
                    (text_input("services", "Services (comma separated)", &record.services.join(", "), false))
                    button type="submit" class="primary" { "Save changes" }
                }
            }
        },
    )
}
