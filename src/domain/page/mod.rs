//! Rules behind the page helpers, free of any DOM access.

pub mod notices;
pub mod rating;

pub use notices::{DismissStrategy, NoticePolicy};
pub use rating::{Rating, rating_display_text};

/// A navigation link is current when its resolved URL equals the page URL
/// exactly. No trailing-slash, query or fragment normalization.
pub fn is_current_page(link_href: &str, page_href: &str) -> bool {
    link_href == page_href
}

/// Whether the scroll-to-top control should show for the given offsets.
///
/// Both the body and the document element are checked since browsers
/// disagree on which one scrolls.
pub fn scroll_control_visible(body_offset: i32, document_offset: i32, threshold: i32) -> bool {
    body_offset > threshold || document_offset > threshold
}
