//! URL conventions for uploaded assets.
//!
//! Paths are concatenated as-is: ids, extensions and delete tokens are
//! issued by the server and never contain reserved characters.

use crate::config::{BUBBLE_PREFIX, DELETE_PREFIX, FILE_PREFIX, THUMB_PREFIX};
use crate::types::{DeleteTarget, PreviewTarget};

/// Every URL derived from one upload.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetLinks {
    /// `/f/{id}{ext}`
    pub file: String,
    /// `/thumb/{id}.png`
    pub thumbnail: String,
    /// `/bubble/{id}.png`
    pub bubble_png: String,
    /// `/bubble/{id}.gif`
    pub bubble_gif: String,
    /// `/delete/{id}/{deleteToken}`
    pub delete: String,
}

impl AssetLinks {
    pub fn derive(target: &PreviewTarget) -> Self {
        let id = &target.id;
        Self {
            file: format!("{}{}{}", FILE_PREFIX, id, target.ext),
            thumbnail: format!("{}{}.png", THUMB_PREFIX, id),
            bubble_png: format!("{}{}.png", BUBBLE_PREFIX, id),
            bubble_gif: format!("{}{}.gif", BUBBLE_PREFIX, id),
            delete: format!("{}{}/{}", DELETE_PREFIX, id, target.delete_token),
        }
    }

    pub fn delete_target(&self, name: &str) -> DeleteTarget {
        DeleteTarget {
            name: name.to_string(),
            url: self.delete.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str, id: &str, ext: &str, token: &str) -> PreviewTarget {
        PreviewTarget {
            name: name.into(),
            id: id.into(),
            ext: ext.into(),
            mime_type: "image/png".into(),
            uploaded_at: 0,
            delete_token: token.into(),
        }
    }

    #[test]
    fn test_derive_links() {
        let links = AssetLinks::derive(&target("cat.png", "abc123", ".png", "tok"));
        assert_eq!(links.file, "/f/abc123.png");
        assert_eq!(links.thumbnail, "/thumb/abc123.png");
        assert_eq!(links.bubble_png, "/bubble/abc123.png");
        assert_eq!(links.bubble_gif, "/bubble/abc123.gif");
        assert_eq!(links.delete, "/delete/abc123/tok");
    }

    #[test]
    fn test_thumbnail_ignores_extension() {
        let links = AssetLinks::derive(&target("clip.mp4", "v1", ".mp4", "t"));
        assert_eq!(links.file, "/f/v1.mp4");
        assert_eq!(links.thumbnail, "/thumb/v1.png");
    }

    #[test]
    fn test_delete_target_captures_name() {
        let links = AssetLinks::derive(&target("y", "id2", ".jpg", "t2"));
        let delete = links.delete_target("y");
        assert_eq!(delete.name, "y");
        assert_eq!(delete.url, "/delete/id2/t2");
    }
}
