//! Post List Component
//!
//! Renders the derived view and owns the scroll tracking for its cards.

use leptos::prelude::*;
use leptos_scrollfade::{bind_window_scroll, create_scroll_signals};

use crate::components::BlogPost;
use crate::models::Post;

#[component]
pub fn PostList(posts: Memo<Vec<Post>>) -> impl IntoView {
    let scroll = create_scroll_signals();
    bind_window_scroll(scroll);

    // Cards move when the view changes; re-measure after the DOM settles
    Effect::new(move |_| {
        posts.track();
        request_animation_frame(move || scroll.refresh());
    });

    view! {
        <div class="blog-list">
            <Show
                when=move || !posts.get().is_empty()
                fallback=|| view! { <p class="blog-list-empty">"No posts found."</p> }
            >
                <For
                    each=move || posts.get()
                    key=|post| post.id
                    children=move |post| view! { <BlogPost post=post scroll=scroll /> }
                />
            </Show>
        </div>
    }
}
