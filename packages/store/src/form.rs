//! State behind the post form, shared by the create and edit views.

use thiserror::Error;

use crate::models::{Post, PostInput};

/// Placeholder shown in the preview while the image field is empty.
pub const EMPTY_PREVIEW_URL: &str = "https://placehold.co/600x400?text=Paste+an+image+URL";
/// Placeholder shown when the image URL fails to load.
pub const BROKEN_PREVIEW_URL: &str = "https://placehold.co/600x400?text=Invalid+image";

/// A required form field was left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Caption is required")]
    CaptionRequired,
    #[error("Image URL is required")]
    ImageRequired,
}

/// Field values and the single validation message currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub caption: String,
    pub image: String,
    pub error: Option<ValidationError>,
    prefilled: bool,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill both fields from an existing post, once, as soon as it has a
    /// caption and an image.
    pub fn prefill(&mut self, post: &Post) -> bool {
        if self.prefilled || post.caption.is_empty() || post.image.is_empty() {
            return false;
        }
        self.caption.clone_from(&post.caption);
        self.image.clone_from(&post.image);
        self.prefilled = true;
        true
    }

    pub fn set_caption(&mut self, value: String) {
        self.caption = value;
        self.error = None;
    }

    pub fn set_image(&mut self, value: String) {
        self.image = value;
        self.error = None;
    }

    /// Validate and return the trimmed pair, or record the first failure.
    pub fn submit(&mut self) -> Result<PostInput, ValidationError> {
        match validate(&self.caption, &self.image) {
            Ok(input) => {
                self.error = None;
                Ok(input)
            }
            Err(e) => {
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Source for the preview image.
    pub fn preview_url(&self) -> &str {
        if self.image.is_empty() {
            EMPTY_PREVIEW_URL
        } else {
            &self.image
        }
    }
}

/// Caption is checked before image.
pub fn validate(caption: &str, image: &str) -> Result<PostInput, ValidationError> {
    let caption = caption.trim();
    if caption.is_empty() {
        return Err(ValidationError::CaptionRequired);
    }
    let image = image.trim();
    if image.is_empty() {
        return Err(ValidationError::ImageRequired);
    }
    Ok(PostInput {
        caption: caption.to_string(),
        image: image.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_trims_both_fields() {
        let mut form = PostForm::new();
        form.set_caption("  Hello there \n".into());
        form.set_image("\thttp://x/a.png  ".into());

        let input = form.submit().unwrap();
        assert_eq!(input.caption, "Hello there");
        assert_eq!(input.image, "http://x/a.png");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_whitespace_caption_is_required() {
        let mut form = PostForm::new();
        form.set_caption("   ".into());
        form.set_image("http://x".into());

        assert_eq!(form.submit(), Err(ValidationError::CaptionRequired));
        assert_eq!(form.error, Some(ValidationError::CaptionRequired));
        assert_eq!(
            ValidationError::CaptionRequired.to_string(),
            "Caption is required"
        );
    }

    #[test]
    fn test_empty_image_is_required() {
        let mut form = PostForm::new();
        form.set_caption("Hi".into());

        assert_eq!(form.submit(), Err(ValidationError::ImageRequired));
    }

    #[test]
    fn test_caption_reported_before_image() {
        assert_eq!(validate("", ""), Err(ValidationError::CaptionRequired));
    }

    #[test]
    fn test_typing_clears_message() {
        let mut form = PostForm::new();
        assert!(form.submit().is_err());
        assert!(form.error.is_some());

        form.set_image("h".into());
        assert!(form.error.is_none());

        assert!(form.submit().is_err());
        form.set_caption("c".into());
        assert!(form.error.is_none());
    }

    #[test]
    fn test_prefill_waits_for_complete_post() {
        let mut form = PostForm::new();
        let mut post = Post {
            id: "abc123".into(),
            caption: "Cat".into(),
            ..Post::default()
        };
        assert!(!form.prefill(&post));
        assert_eq!(form.caption, "");

        post.image = "http://x/cat.png".into();
        assert!(form.prefill(&post));
        assert_eq!(form.caption, "Cat");
        assert_eq!(form.image, "http://x/cat.png");

        // User edits survive a later prefill attempt.
        form.set_caption("Dog".into());
        assert!(!form.prefill(&post));
        assert_eq!(form.caption, "Dog");
    }

    #[test]
    fn test_preview_placeholder() {
        let mut form = PostForm::new();
        assert_eq!(form.preview_url(), EMPTY_PREVIEW_URL);
        form.set_image("http://x/a.png".into());
        assert_eq!(form.preview_url(), "http://x/a.png");
    }
}
