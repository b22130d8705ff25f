use serde::{Deserialize, Serialize};

/// Bucket used when an image has no category or sub-category.
pub const DEFAULT_GROUP: &str = "General";

/// One uploaded image as listed by `GET /api/gallery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i64,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub sub_category: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn category_or_default(&self) -> &str {
        non_blank(self.category.as_deref()).unwrap_or(DEFAULT_GROUP)
    }

    pub fn sub_category_or_default(&self) -> &str {
        non_blank(self.sub_category.as_deref()).unwrap_or(DEFAULT_GROUP)
    }

    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_groups_fall_back_to_general() {
        let item: GalleryItem =
            serde_json::from_str(r#"{"id": 3, "imageUrl": "/api/gallery/3/image", "category": "  "}"#)
                .unwrap();
        assert_eq!(item.category_or_default(), DEFAULT_GROUP);
        assert_eq!(item.sub_category_or_default(), DEFAULT_GROUP);
        assert_eq!(item.caption(), "");
    }

    #[test]
    fn test_groups_are_kept_verbatim() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"id": 4, "category": "Training", "subCategory": "2023", "caption": "Nets"}"#,
        )
        .unwrap();
        assert_eq!(item.category_or_default(), "Training");
        assert_eq!(item.sub_category_or_default(), "2023");
        assert_eq!(item.caption(), "Nets");
    }
}
