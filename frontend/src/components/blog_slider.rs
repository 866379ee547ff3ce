use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{BlogSummary, HttpClient, RemoteDataClient};
use crate::carousel::{CarouselAction, Paging};
use crate::config;
use crate::hooks::{use_carousel, use_liveness, Liveness};

#[derive(Clone, PartialEq)]
enum BlogFeed {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, PartialEq)]
enum BlogFetch {
    Loaded(Vec<BlogSummary>),
    Failed,
}

/// Fetches the latest posts. `None` means the slider unmounted while the
/// request was in flight and the result should be dropped.
async fn fetch_blogs<C: RemoteDataClient>(client: &C, live: &Liveness) -> Option<BlogFetch> {
    let result = client.list_blogs(config::BLOG_LIST_LIMIT).await;
    if !live.is_alive() {
        debug!("Blog slider gone, dropping blog response");
        return None;
    }
    match result {
        Ok(blogs) => {
            info!("Loaded {} blogs", blogs.len());
            Some(BlogFetch::Loaded(blogs))
        }
        Err(_) => Some(BlogFetch::Failed),
    }
}

#[derive(Properties, PartialEq)]
struct BlogCardProps {
    blog: BlogSummary,
}

#[function_component(BlogCard)]
fn blog_card(props: &BlogCardProps) -> Html {
    let blog = &props.blog;
    let href = format!("/blog/{}", urlencoding::encode(&blog.slug));
    let image = blog
        .featured_image
        .clone()
        .unwrap_or_else(|| "/assets/blog-placeholder.webp".to_string());
    let author = blog
        .author
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "ScoreMend Team".to_string());

    html! {
        <a class="blog-card" href={href}>
            <img src={image} alt={blog.title.clone()} loading="lazy" class="blog-card-image" />
            <div class="blog-card-body">
                <h3>{&blog.title}</h3>
                <div class="blog-card-meta">
                    <span>{author}</span>
                    <span>{blog.created_at.format("%B %e, %Y").to_string()}</span>
                    <span>{format!("{} comments", blog.comment_count)}</span>
                </div>
            </div>
        </a>
    }
}

#[function_component(BlogSlider)]
pub fn blog_slider() -> Html {
    let carousel = use_carousel(Paging::Clamped, 3, false, Vec::<BlogSummary>::new());
    let feed = use_state(|| BlogFeed::Loading);
    let live = use_liveness();

    {
        let carousel = carousel.clone();
        let feed = feed.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match fetch_blogs(&HttpClient::default(), &live).await {
                        Some(BlogFetch::Loaded(blogs)) => {
                            carousel.dispatch(CarouselAction::SetItems(blogs));
                            feed.set(BlogFeed::Loaded);
                        }
                        Some(BlogFetch::Failed) => feed.set(BlogFeed::Failed),
                        None => {}
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Advance))
    };

    let body = match *feed {
        BlogFeed::Loading => html! { <p class="blog-slider-status">{"Loading articles..."}</p> },
        BlogFeed::Failed => html! {
            <p class="blog-slider-status">{"Failed to load articles."}</p>
        },
        BlogFeed::Loaded if carousel.is_empty() => html! {
            <p class="blog-slider-status">{"No articles yet. Check back soon."}</p>
        },
        BlogFeed::Loaded => html! {
            <div class="blog-slider-row">
                <button class="slider-arrow" onclick={on_prev} disabled={!carousel.can_retreat()}>{"‹"}</button>
                <div class="blog-slider-track">
                    { for carousel.visible_window().into_iter().map(|blog| html! {
                        <BlogCard key={blog.id.clone()} blog={blog.clone()} />
                    }) }
                </div>
                <button class="slider-arrow" onclick={on_next} disabled={!carousel.can_advance()}>{"›"}</button>
            </div>
        },
    };

    html! {
        <section class="blog-slider">
            <h2>{"From Our Blog"}</h2>
            <p class="section-subtitle">{"Guides on credit scores, reports and getting loans approved"}</p>
            {body}
            <style>
                {r#"
                .blog-slider {
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .blog-slider-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .blog-slider-track {
                    display: flex;
                    gap: 1.5rem;
                    flex: 1;
                }
                .blog-card {
                    flex: 1;
                    min-width: 0;
                    background: #ffffff;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    color: inherit;
                    text-decoration: none;
                    text-align: left;
                }
                .blog-card-image {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                }
                .blog-card-body {
                    padding: 1rem 1.25rem;
                }
                .blog-card-meta {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.8rem;
                    color: #6b7280;
                }
                .slider-arrow {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 1px solid #d1d5db;
                    background: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .slider-arrow:disabled {
                    opacity: 0.35;
                    cursor: default;
                }
                .blog-slider-status {
                    color: #6b7280;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, LeadKind, LeadPayload};
    use chrono::{DateTime, Utc};
    use futures::executor::block_on;

    struct FakeBlogs {
        outcome: Result<Vec<BlogSummary>, ApiError>,
        unmount_during_request: Option<Liveness>,
    }

    impl RemoteDataClient for FakeBlogs {
        async fn list_blogs(&self, limit: u32) -> Result<Vec<BlogSummary>, ApiError> {
            assert_eq!(limit, config::BLOG_LIST_LIMIT);
            if let Some(live) = &self.unmount_during_request {
                live.end();
            }
            self.outcome.clone()
        }

        async fn create_lead(&self, _: LeadKind, _: &LeadPayload) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn post(id: &str) -> BlogSummary {
        BlogSummary {
            id: id.to_string(),
            slug: id.to_string(),
            title: format!("Post {}", id),
            featured_image: None,
            created_at: DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            author: None,
            comment_count: 0,
        }
    }

    #[test]
    fn loaded_posts_reach_the_slider() {
        let client = FakeBlogs {
            outcome: Ok(vec![post("a"), post("b")]),
            unmount_during_request: None,
        };
        let fetched = block_on(fetch_blogs(&client, &Liveness::default()));
        assert_eq!(fetched, Some(BlogFetch::Loaded(vec![post("a"), post("b")])));
    }

    #[test]
    fn failed_fetch_shows_placeholder() {
        let client = FakeBlogs {
            outcome: Err(ApiError::Timeout),
            unmount_during_request: None,
        };
        let fetched = block_on(fetch_blogs(&client, &Liveness::default()));
        assert_eq!(fetched, Some(BlogFetch::Failed));
    }

    #[test]
    fn response_after_unmount_is_dropped() {
        let live = Liveness::default();
        for outcome in [Ok(vec![post("a")]), Err(ApiError::Timeout)] {
            let client = FakeBlogs {
                outcome,
                unmount_during_request: Some(live.clone()),
            };
            assert_eq!(block_on(fetch_blogs(&client, &live)), None);
        }
    }
}
