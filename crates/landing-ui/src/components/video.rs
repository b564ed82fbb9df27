//! Video preview play button. Playback is not wired up yet; the button
//! only announces that a player would open.

use web_sys::Document;

use crate::components::notification::{NotificationCenter, Severity};
use crate::dom;
use crate::error::Result;

pub const PLAY_NOTICE: &str = "Video player would open here";

/// Bind `.video-preview .play-button-center` if present.
///
/// # Errors
///
/// Returns `LandingError::Dom` if the click listener cannot be attached.
pub fn init(document: &Document, notifications: NotificationCenter) -> Result<()> {
    let Some(preview) = dom::query(document, ".video-preview")? else {
        return Ok(());
    };
    let Some(play) = dom::query_within(&preview, ".play-button-center")? else {
        return Ok(());
    };

    dom::listen(&play, "click", move |_| {
        if let Err(e) = notifications.notify(PLAY_NOTICE, Severity::Info) {
            e.log("video preview");
        }
    })
}
