//! Groups flat gallery listings into category and album views.
//!
//! Both levels keep the order in which a name was first seen, and images keep
//! their listing order inside an album. Names compare as exact text.

mod lightbox;

pub use lightbox::Lightbox;

use serde::Serialize;

use crate::models::gallery::GalleryItem;
use crate::urls::resolve_image_url;

/// An image ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

/// Every image sharing one category and sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Album {
    pub category: String,
    pub name: String,
    pub images: Vec<GalleryImage>,
}

impl Album {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn cover(&self) -> Option<&GalleryImage> {
        self.images.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    /// URL of the first image filed under this category.
    pub cover_image: String,
    pub albums: Vec<Album>,
}

impl Category {
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name == name)
    }

    pub fn image_count(&self) -> usize {
        self.albums.iter().map(Album::len).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTree {
    pub categories: Vec<Category>,
}

impl CategoryTree {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn album(&self, category: &str, album: &str) -> Option<&Album> {
        self.category(category).and_then(|c| c.album(album))
    }
}

/// Builds the category/album tree. Image URLs are resolved against `base_url`.
pub fn group_images(items: &[GalleryItem], base_url: &str) -> CategoryTree {
    let mut categories: Vec<Category> = Vec::new();

    for item in items {
        let category_name = item.category_or_default();
        let album_name = item.sub_category_or_default();
        let image = GalleryImage {
            url: resolve_image_url(base_url, item.image_url.as_deref().unwrap_or_default()),
            caption: item.caption().to_string(),
        };

        let category = match categories.iter().position(|c| c.name == category_name) {
            Some(idx) => &mut categories[idx],
            None => {
                categories.push(Category {
                    name: category_name.to_string(),
                    cover_image: image.url.clone(),
                    albums: Vec::new(),
                });
                let last = categories.len() - 1;
                &mut categories[last]
            }
        };

        match category.albums.iter_mut().find(|a| a.name == album_name) {
            Some(album) => album.images.push(image),
            None => category.albums.push(Album {
                category: category_name.to_string(),
                name: album_name.to_string(),
                images: vec![image],
            }),
        }
    }

    CategoryTree { categories }
}

/// Admin search: case-insensitive substring over category or sub-category.
pub fn filter_gallery<'a>(items: &'a [GalleryItem], search: &str) -> Vec<&'a GalleryItem> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.category_or_default().to_lowercase().contains(&needle)
                || item.sub_category_or_default().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Distinct category names in first-seen order, for the upload picker.
pub fn existing_categories(items: &[GalleryItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        let name = item.category_or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "http://localhost:8080";

    fn item(id: i64, category: Option<&str>, sub: Option<&str>) -> GalleryItem {
        GalleryItem {
            id,
            image_url: Some(format!("/api/gallery/{}/image", id)),
            category: category.map(String::from),
            sub_category: sub.map(String::from),
            caption: Some(format!("Photo {}", id)),
        }
    }

    #[test]
    fn test_group_by_category_then_album() {
        let items = vec![
            item(1, Some("Matches"), Some("2024")),
            item(2, Some("Matches"), Some("2023")),
            item(3, Some("Events"), None),
            item(4, Some("Matches"), Some("2024")),
        ];
        let tree = group_images(&items, BASE);

        let names: Vec<&str> = tree.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Matches", "Events"]);

        let matches = tree.category("Matches").unwrap();
        let albums: Vec<(&str, usize)> =
            matches.albums.iter().map(|a| (a.name.as_str(), a.len())).collect();
        assert_eq!(albums, vec![("2024", 2), ("2023", 1)]);
        assert_eq!(matches.image_count(), 3);

        let events = tree.category("Events").unwrap();
        assert_eq!(events.albums.len(), 1);
        assert_eq!(events.albums[0].name, "General");
    }

    #[test]
    fn test_training_listing_groups_into_two_categories() {
        let items = vec![
            item(1, Some("Training"), Some("2023")),
            item(2, Some("Training"), None),
            item(3, None, None),
            item(4, Some("Training"), Some("2023")),
        ];
        let tree = group_images(&items, BASE);

        let shape: Vec<(&str, Vec<(&str, usize)>)> = tree
            .categories
            .iter()
            .map(|c| {
                let albums = c.albums.iter().map(|a| (a.name.as_str(), a.len())).collect();
                (c.name.as_str(), albums)
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Training", vec![("2023", 2), ("General", 1)]),
                ("General", vec![("General", 1)]),
            ]
        );
    }

    #[test]
    fn test_cover_is_first_image_of_category() {
        let items = vec![
            item(7, Some("Training"), Some("Nets")),
            item(8, Some("Training"), Some("Fielding")),
        ];
        let tree = group_images(&items, BASE);
        assert_eq!(
            tree.categories[0].cover_image,
            "http://localhost:8080/api/gallery/7/image"
        );
    }

    #[test]
    fn test_album_keeps_listing_order() {
        let items = vec![
            item(5, Some("Matches"), Some("Final")),
            item(2, Some("Matches"), Some("Final")),
            item(9, Some("Matches"), Some("Final")),
        ];
        let tree = group_images(&items, BASE);
        let captions: Vec<&str> = tree
            .album("Matches", "Final")
            .unwrap()
            .images
            .iter()
            .map(|i| i.caption.as_str())
            .collect();
        assert_eq!(captions, vec!["Photo 5", "Photo 2", "Photo 9"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let items = vec![item(1, Some("Matches"), None), item(2, Some("matches"), None)];
        assert_eq!(group_images(&items, BASE).categories.len(), 2);
    }

    #[test]
    fn test_empty_listing() {
        assert!(group_images(&[], BASE).is_empty());
    }

    #[test]
    fn test_filter_gallery_matches_either_level() {
        let items = vec![
            item(1, Some("Matches"), Some("Derby Day")),
            item(2, Some("Events"), Some("Awards Night")),
            item(3, None, None),
        ];
        let ids = |found: Vec<&GalleryItem>| found.iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids(filter_gallery(&items, "derby")), vec![1]);
        assert_eq!(ids(filter_gallery(&items, "EVENTS")), vec![2]);
        assert_eq!(ids(filter_gallery(&items, "general")), vec![3]);
        assert_eq!(ids(filter_gallery(&items, "")), vec![1, 2, 3]);
    }

    #[test]
    fn test_existing_categories_first_seen() {
        let items = vec![
            item(1, Some("Matches"), None),
            item(2, Some("Events"), None),
            item(3, Some("Matches"), None),
        ];
        assert_eq!(existing_categories(&items), vec!["Matches", "Events"]);
    }
}
