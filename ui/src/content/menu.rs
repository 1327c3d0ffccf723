use std::collections::HashSet;

use super::ContentError;

/// One footer column: a heading and its links, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory {
    pub title: String,
    pub items: Vec<String>,
}

/// Ordered category -> items mapping. Iteration order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuMap {
    categories: Vec<MenuCategory>,
}

impl MenuMap {
    /// Build a menu from `(category, items)` pairs, keeping their order.
    ///
    /// Every category must carry at least one item and headings must be
    /// unique. Item labels may repeat across categories.
    pub fn new<I, T, L>(entries: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (T, Vec<L>)>,
        T: Into<String>,
        L: Into<String>,
    {
        let mut seen = HashSet::new();
        let categories = entries
            .into_iter()
            .map(|(title, items)| {
                let title = title.into();
                if items.is_empty() {
                    return Err(ContentError::EmptyCategory(title));
                }
                if !seen.insert(title.clone()) {
                    return Err(ContentError::DuplicateCategory(title));
                }
                Ok(MenuCategory {
                    title,
                    items: items.into_iter().map(Into::into).collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { categories })
    }

    /// The storefront's footer columns.
    pub fn storefront() -> Self {
        let columns: [(&str, [&str; 4]); 4] = [
            (
                "Vintage",
                ["Homepage", "Technology", "Ataraxis Breast", "Resources & News"],
            ),
            ("Discover", ["Careers", "Blog", "News", "Events"]),
            ("Help", ["FAQ", "Support", "Contact Us", "Portal"]),
            ("Community", ["Forum", "Groups", "Ambassadors", "Partners"]),
        ];

        Self {
            categories: columns
                .into_iter()
                .map(|(title, items)| MenuCategory {
                    title: title.to_string(),
                    items: items.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for MenuMap {
    fn default() -> Self {
        Self::storefront()
    }
}
