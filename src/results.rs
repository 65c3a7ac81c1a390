use serde::{Deserialize, Serialize};

/// Open Graph metadata extracted from a page head
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// `<title>` text, replaced by `og:title` when present
    pub title: String,

    /// `description` or `og:description`
    pub description: String,

    /// `og:image`
    pub image: String,

    /// `og:site_name`
    pub site_name: String,

    /// `og:video`; when set the video is downloaded instead of the image
    pub video: String,
}

impl PageMetadata {
    /// Returns true when nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image.is_empty()
            && self.site_name.is_empty()
            && self.video.is_empty()
    }

    /// Returns true when the page advertises a video
    pub fn has_video(&self) -> bool {
        !self.video.is_empty()
    }
}
