//! Landing page: hero, category search, popular plants, reviews, feature cards.

use api::{Plant, Review};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, ErrorBanner, Input, Textarea};
use ui::dialogs::report_error;
use ui::icons::FaMagnifyingGlass;
use ui::{use_api, use_auth, use_session_api, Icon};

use crate::Route;

/// Shown reviews are capped so the page stays short.
const REVIEWS_SHOWN: usize = 10;

/// (common name, family)
const POPULAR_PLANTS: [(&str, &str); 5] = [
    ("Snake Plant", "Asparagaceae"),
    ("Spider Plant", "Asparagaceae"),
    ("Pothos", "Araceae"),
    ("Peace Lily", "Araceae"),
    ("Fiddle Leaf Fig", "Moraceae"),
];

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let session_api = use_session_api();
    let auth = use_auth();

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Plant>::new);
    let mut reviews = use_signal(Vec::<Review>::new);
    let mut review_text = use_signal(String::new);
    let mut review_error = use_signal(|| Option::<String>::None);
    let mut posting = use_signal(|| false);

    let _reviews = use_resource(move || {
        let api = session_api();
        async move {
            match api.list_reviews().await {
                Ok(list) => reviews.set(list),
                Err(e) => report_error("Failed to load reviews", &e),
            }
        }
    });

    let search_api = api.clone();
    let on_search = move |evt: FormEvent| {
        let term = evt.value();
        query.set(term.clone());
        let api = search_api.clone();
        spawn(async move {
            let category = term.trim().to_string();
            if category.is_empty() {
                results.set(Vec::new());
                return;
            }
            match api.search_plants(&category).await {
                // a newer keystroke may already have replaced the query
                Ok(found) if query() == term => results.set(found),
                Ok(_) => {}
                Err(e) => report_error("Plant search failed", &e),
            }
        });
    };

    let review_api = api.clone();
    let submit_review = move |evt: FormEvent| {
        evt.prevent_default();
        let api = review_api.clone();
        spawn(async move {
            posting.set(true);
            match api.create_review(&review_text()).await {
                Ok(review) => {
                    reviews.write().push(review);
                    review_text.set(String::new());
                    review_error.set(None);
                }
                Err(e) => {
                    report_error("Failed to submit review", &e);
                    review_error.set(Some(e.to_string()));
                }
            }
            posting.set(false);
        });
    };

    let shown_reviews: Vec<Review> = reviews().into_iter().take(REVIEWS_SHOWN).collect();

    rsx! {
        section { class: "hero",
            h1 { "Welcome to Green Guide" }
            p { "Your companion for planning, planting and growing a thriving garden." }
            Link { class: "btn btn-outline", to: Route::Plants {}, "Explore Plants" }
        }

        div { class: "page",
            section { class: "section",
                h2 { "Find Plants by Category" }
                p { class: "muted", "Try Herbs, Greens, Fruit or Root." }
                div { class: "search-box",
                    Input {
                        kind: "search",
                        placeholder: "Search a category...",
                        value: query(),
                        oninput: on_search,
                    }
                }
                if !results().is_empty() {
                    ul { class: "search-results",
                        for plant in results() {
                            li { key: "{plant.id}",
                                Icon { width: 12, height: 12, icon: FaMagnifyingGlass }
                                " "
                                Link { to: Route::PlantDetail { id: plant.id.clone() }, "{plant.name()}" }
                                span { class: "muted", " {plant.general_info.category}" }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                h2 { "Popular Plants" }
                div { class: "card-grid",
                    for (name, family) in POPULAR_PLANTS {
                        div { key: "{name}", class: "card",
                            h3 { "{name}" }
                            p { class: "muted", "{family}" }
                        }
                    }
                }
            }

            section { class: "section",
                h2 { "What Gardeners Say" }
                for review in shown_reviews {
                    div { key: "{review.id}", class: "review",
                        p { "{review.review}" }
                        p { class: "review-author", "- {review.author_name()}" }
                    }
                }

                if auth().is_logged_in() {
                    form { class: "form", onsubmit: submit_review,
                        if let Some(err) = review_error() {
                            ErrorBanner { message: err }
                        }
                        Textarea {
                            placeholder: "Share your experience...",
                            value: review_text(),
                            oninput: move |evt: FormEvent| review_text.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            kind: "submit",
                            disabled: posting(),
                            "Submit Review"
                        }
                    }
                } else {
                    p { class: "muted",
                        Link { to: Route::Login {}, "Sign in" }
                        " to leave a review."
                    }
                }
            }

            section { class: "section",
                h2 { "Why Green Guide?" }
                div { class: "card-grid",
                    div { class: "card",
                        h3 { "Plant Catalog" }
                        p { class: "muted", "Spacing, sun, water and frost details for every plant." }
                    }
                    div { class: "card",
                        h3 { "Garden Tracking" }
                        p { class: "muted", "Keep watering dates, feeding schedules and growth photos together." }
                    }
                    div { class: "card",
                        h3 { "Planting Calendar" }
                        p { class: "muted", "See when to start seeds, transplant, sow and harvest." }
                    }
                }
            }
        }
    }
}
