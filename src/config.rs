//! Fixed site data: asset lists, copy, and the couple of external handles
//! the page talks to. Everything here is known at build time.

/// Invite link opened in a new tab by the popup's "join" action. The page
/// never consumes a response from it.
pub const INVITE_URL: &str = "https://discord.gg/placeholder";

/// Toast raised once the popup's "enter" action lands in the gallery.
pub const ACCESS_GRANTED_MESSAGE: &str = "Gallery access granted! 🎉";

/// localStorage key holding the serialized visitor record.
pub const VISITOR_STORAGE_KEY: &str = "sigmatic_visitor_data";

/// One gallery entry. The list below is the whole gallery; nothing is loaded
/// dynamically.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { src: "pics/Pic1.jpg", alt: "SIGMATIC Gallery Image 1" },
    GalleryImage { src: "pics/Pic2.jpg", alt: "SIGMATIC Gallery Image 2" },
    GalleryImage { src: "pics/Pic3.jpg", alt: "SIGMATIC Gallery Image 3" },
    GalleryImage { src: "pics/Pic4.jpg", alt: "SIGMATIC Gallery Image 4" },
    GalleryImage { src: "pics/Pic5.jpg", alt: "SIGMATIC Gallery Image 5" },
];

/// Sentences the hero typewriter cycles through, in order.
pub const TYPEWRITER_SENTENCES: &[&str] = &[
    "Welcome to my exclusive gallery showcase.",
    "Discover a curated collection of premium content.",
    "Experience modern, interactive design.",
    "Join our community of creative enthusiasts.",
    "Explore stunning visuals and artistic expressions.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_toast_names_the_grant() {
        assert!(ACCESS_GRANTED_MESSAGE.contains("Gallery access granted"));
    }

    #[test]
    fn gallery_lists_five_numbered_images() {
        assert_eq!(GALLERY_IMAGES.len(), 5);
        for (index, image) in GALLERY_IMAGES.iter().enumerate() {
            assert!(image.src.starts_with("pics/"));
            assert!(image.alt.ends_with(&(index + 1).to_string()));
        }
    }
}
