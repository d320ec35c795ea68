//! UI Components
//!
//! Leptos components for the blog page.

mod blog_post;
mod clock;
mod color_cycle_title;
mod filter_controls;
mod post_list;
mod site_footer;
mod site_header;
mod tooltip;

pub use blog_post::BlogPost;
pub use clock::Clock;
pub use color_cycle_title::ColorCycleTitle;
pub use filter_controls::FilterControls;
pub use post_list::PostList;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use tooltip::Tooltip;
