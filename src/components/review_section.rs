//! Reviews block on the event details page: the list plus, for signed-in
//! users, the submission form.

use leptos::prelude::*;

use crate::net::Api;
use crate::net::types::Review;
use crate::state::session::Session;

#[component]
pub fn ReviewSection(event_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let api = expect_context::<Api>();

    let reviews = LocalResource::new({
        let api = api.clone();
        let event_id = event_id.clone();
        move || {
            let api = api.clone();
            let event_id = event_id.clone();
            async move {
                crate::net::api::events::reviews(&api, &event_id)
                    .await
                    .unwrap_or_default()
            }
        }
    });

    view! {
        <section class="review-section">
            <h2>"Reviews"</h2>
            <Suspense fallback=move || view! { <p>"Loading reviews..."</p> }>
                {move || {
                    reviews
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="review-section__empty">"No reviews yet."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="review-section__list">
                                        {list
                                            .into_iter()
                                            .map(|review| view! { <ReviewItem review=review/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <p class="review-section__signin">
                            <a href="/login">"Sign in"</a>
                            " to leave a review."
                        </p>
                    }
                }
            >
                {
                    let event_id = event_id.clone();
                    view! { <ReviewForm event_id=event_id reviews=reviews/> }
                }
            </Show>
        </section>
    }
}

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let stars = "★".repeat(usize::from(review.rating.min(5)));

    view! {
        <li class="review">
            <span class="review__stars">{stars}</span>
            {review.user.map(|user| view! { <span class="review__user">{user}</span> })}
            <p class="review__comment">{review.comment}</p>
            {review
                .created_at
                .map(|date| view! { <span class="review__date">{date}</span> })}
        </li>
    }
}

/// Rating picker plus comment box. Submission refetches the list so the
/// new review appears without a reload.
#[component]
fn ReviewForm(event_id: String, reviews: LocalResource<Vec<Review>>) -> impl IntoView {
    let rating = RwSignal::new(5u8);
    let comment = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toasts::ToastState>>();

    let submit = move |_| {
        let text = comment.get();
        if text.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let event_id = event_id.clone();
            let text = text.trim().to_owned();
            leptos::task::spawn_local(async move {
                if crate::net::api::events::add_review(
                    &api,
                    &event_id,
                    rating.get_untracked(),
                    &text,
                )
                .await
                .is_ok()
                {
                    crate::components::toast_stack::notify(
                        toasts,
                        crate::state::toasts::ToastLevel::Success,
                        "Review submitted!",
                    );
                    comment.set(String::new());
                    reviews.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&event_id, &reviews, text);
        }
    };

    view! {
        <div class="review-form">
            <div class="review-form__stars">
                {(1u8..=5)
                    .map(|value| {
                        view! {
                            <button
                                class="review-form__star"
                                class=("review-form__star--active", move || rating.get() >= value)
                                on:click=move |_| rating.set(value)
                            >
                                "★"
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <textarea
                class="review-form__comment"
                placeholder="Share your experience"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" on:click=submit>
                "Submit Review"
            </button>
        </div>
    }
}
