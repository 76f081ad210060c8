//! Best-effort URL checks per contribution kind.
//!
//! These are substring/prefix checks, not full URL parsing: the goal is
//! to catch pasting the wrong link into the wrong field, nothing more.

use crate::kinds::ContributionKind;

/// Returns `true` if the url plausibly matches the contribution kind.
///
/// Meetups/events and open-source links can live anywhere, so any
/// non-empty url passes. Unknown kinds fall back to a generic http(s)
/// prefix check.
pub fn link_is_valid(url: &str, kind: &ContributionKind) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    match kind {
        ContributionKind::YouTube => url.contains("youtube.com") || url.contains("youtu.be"),
        ContributionKind::Medium => {
            url.contains("medium.com") || url.contains("towardsdatascience.com")
        }
        ContributionKind::LinkedIn => url.contains("linkedin.com"),
        ContributionKind::Substack => url.contains("substack.com"),
        ContributionKind::MeetupsEvents | ContributionKind::OpenSource => true,
        ContributionKind::Other | ContributionKind::Custom(_) => {
            url.starts_with("http://") || url.starts_with("https://")
        }
    }
}

/// Extracts the video id from a YouTube URL, if the shape is recognized.
///
/// Handles `youtube.com/watch?v=ID` and `youtu.be/ID` forms.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    if let Some(rest) = url.split("youtube.com/watch?v=").nth(1) {
        return rest.split('&').next().filter(|id| !id.is_empty());
    }
    if let Some(rest) = url.split("youtu.be/").nth(1) {
        return rest.split('?').next().filter(|id| !id.is_empty());
    }
    None
}
