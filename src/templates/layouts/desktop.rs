use crate::domain::Category;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Nearby" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M12 21s-7-6.2-7-11a7 7 0 0 1 14 0c0 4.8-7 11-7 11z" {}
                        circle cx="12" cy="10" r="2.5" {}
                    }
                    a href="/" { h3 { "Nearby" } }
                    nav {
                        ul {
                            @for category in Category::ALL.iter().take(5) {
                                li { a href={ "/nearby/" (category.slug()) } { (category.display_name()) } }
                            }
                            li { a href="/" { "All categories" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
