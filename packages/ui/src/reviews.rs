//! Review presentation.

use api::models::review::star_string;
use api::Review;
use dioxus::prelude::*;

/// Five stars, `rating` of them filled.
#[component]
pub fn StarRating(rating: u8) -> Element {
    let stars = star_string(rating);
    let rating = rating.min(5);

    rsx! {
        div {
            class: "rating",
            title: "{rating} out of 5 stars",
            "{stars}"
        }
    }
}

#[component]
pub fn ReviewCard(review: Review) -> Element {
    let date = review.formatted_date();
    let text = review.display_text().to_string();
    let author = review.author_name().map(str::to_string);

    rsx! {
        div {
            class: "review-card",
            div {
                class: "review-header",
                div {
                    class: "review-user-info",
                    if let Some(name) = author {
                        p { class: "user-name", "{name}" }
                    }
                    span { class: "review-date", "{date}" }
                }
                StarRating { rating: review.clamped_rating() }
            }
            p { class: "review-text", "{text}" }
        }
    }
}

fn keyed(reviews: Vec<Review>) -> impl Iterator<Item = (String, Review)> {
    reviews
        .into_iter()
        .enumerate()
        .map(|(index, review)| (review.id.clone().unwrap_or_else(|| index.to_string()), review))
}

/// All reviews of a place, or an invitation to write the first one.
#[component]
pub fn ReviewList(reviews: Vec<Review>) -> Element {
    if reviews.is_empty() {
        return rsx! {
            p { class: "no-reviews", "No reviews yet. Be the first to review!" }
        };
    }

    rsx! {
        div {
            class: "reviews-list",
            for (key, review) in keyed(reviews) {
                ReviewCard { key: "{key}", review }
            }
        }
    }
}
