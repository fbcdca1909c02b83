//! Viewport breakpoint reads.

use stylescope_core::Breakpoint;

/// The media query mirroring [`stylescope_core::scale::MOBILE_MAX_WIDTH`].
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

/// Read the current breakpoint from the live viewport.
///
/// Desktop when no window or media-query support exists (native builds,
/// tests), matching the widest rendering of the preview.
pub fn current_breakpoint() -> Breakpoint {
    let Some(window) = web_sys::window() else {
        return Breakpoint::Desktop;
    };
    match window.match_media(MOBILE_MEDIA_QUERY) {
        Ok(Some(query)) if query.matches() => Breakpoint::Mobile,
        _ => Breakpoint::Desktop,
    }
}
