//! Blog Post Component
//!
//! One post card: cycling title, rendered content, date and category badge.
//! Its opacity follows the scroll position.

use leptos::html;
use leptos::prelude::*;
use leptos_scrollfade::ScrollSignals;

use crate::components::ColorCycleTitle;
use crate::config::use_config;
use crate::markdown::render_post_content;
use crate::models::Post;

#[component]
pub fn BlogPost(post: Post, scroll: ScrollSignals) -> impl IntoView {
    let config = use_config();
    let card_ref = NodeRef::<html::Div>::new();
    let fade_start = config.fade.start_fraction;

    let opacity = move || {
        card_ref
            .get()
            .map(|el| scroll.opacity(el.offset_top() as f64, fade_start))
            .unwrap_or(1.0)
            .to_string()
    };

    let category_color = config.categories.color_for(&post.category).to_string();
    let content_html = render_post_content(&post.content);

    view! {
        <div class="blog-post" node_ref=card_ref style:opacity=opacity>
            <div class="blog-post-title-box">
                <ColorCycleTitle text=post.title.clone() />
            </div>

            <div class="blog-post-content-box" inner_html=content_html></div>

            <div class="blog-post-footer">
                <span class="blog-post-date">{post.display_date()}</span>
                <span class="blog-post-category" style:background-color=category_color>
                    {post.category.clone()}
                </span>
            </div>
        </div>
    }
}
