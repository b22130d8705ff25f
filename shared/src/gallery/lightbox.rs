use super::GalleryImage;

/// Full-screen viewer over one album's images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens at `index`, clamped to the last image. An empty album leaves the
    /// viewer as it was.
    pub fn open(&mut self, images: Vec<GalleryImage>, index: usize) {
        if images.is_empty() {
            return;
        }
        self.index = index.min(images.len() - 1);
        self.images = images;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn next(&mut self) {
        if self.open && !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if self.open && !self.images.is_empty() {
            let len = self.images.len();
            self.index = (self.index + len - 1) % len;
        }
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        if self.open {
            self.images.get(self.index)
        } else {
            None
        }
    }

    /// One-based "i / n".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Applies a keyboard key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn album() -> Vec<GalleryImage> {
        (1..=3)
            .map(|i| GalleryImage {
                url: format!("/img/{}.jpg", i),
                caption: format!("Shot {}", i),
            })
            .collect()
    }

    #[rstest]
    fn test_next_wraps_to_first(album: Vec<GalleryImage>) {
        let mut lightbox = Lightbox::new();
        lightbox.open(album, 2);
        lightbox.next();
        assert_eq!(lightbox.index(), 0);
        assert_eq!(lightbox.position_label(), "1 / 3");
    }

    #[rstest]
    fn test_prev_wraps_to_last(album: Vec<GalleryImage>) {
        let mut lightbox = Lightbox::new();
        lightbox.open(album, 0);
        lightbox.prev();
        assert_eq!(lightbox.index(), 2);
        assert_eq!(lightbox.current().map(|i| i.caption.as_str()), Some("Shot 3"));
    }

    #[rstest]
    fn test_out_of_range_index_is_clamped(album: Vec<GalleryImage>) {
        let mut lightbox = Lightbox::new();
        lightbox.open(album, 42);
        assert_eq!(lightbox.index(), 2);
    }

    #[test]
    fn test_empty_album_does_not_open() {
        let mut lightbox = Lightbox::new();
        lightbox.open(Vec::new(), 0);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[rstest]
    #[case("ArrowRight", 2, true)]
    #[case("ArrowLeft", 0, true)]
    #[case("Enter", 1, true)]
    fn test_keys_navigate(
        album: Vec<GalleryImage>,
        #[case] key: &str,
        #[case] expected: usize,
        #[case] still_open: bool,
    ) {
        let mut lightbox = Lightbox::new();
        lightbox.open(album, 1);
        lightbox.handle_key(key);
        assert_eq!(lightbox.index(), expected);
        assert_eq!(lightbox.is_open(), still_open);
    }

    #[rstest]
    fn test_escape_closes_and_closed_ignores_keys(album: Vec<GalleryImage>) {
        let mut lightbox = Lightbox::new();
        lightbox.open(album, 1);
        assert!(lightbox.handle_key("Escape"));
        assert!(!lightbox.is_open());
        assert!(!lightbox.handle_key("ArrowRight"));
        assert_eq!(lightbox.index(), 1);
    }
}
