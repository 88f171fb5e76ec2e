//! Static service categories.
//!
//! Categories are a fixed catalogue compiled into the binary. They are never
//! persisted and never mutated, so listing them cannot fail.

use serde::Serialize;

/// A bookable service category (e.g. wedding or graduation makeup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub priority: i32,
}

/// The full category catalogue, ordered by `priority`.
pub const CATEGORIES: [Category; 4] = [
    Category {
        id: "tumu",
        name: "Tümü",
        priority: 1,
    },
    Category {
        id: "dugun",
        name: "Düğün Majyajı",
        priority: 2,
    },
    Category {
        id: "nisan",
        name: "Nişan Majyajı",
        priority: 3,
    },
    Category {
        id: "mezuniyet",
        name: "Mezuniyet Majyajı",
        priority: 4,
    },
];

/// Return the category catalogue as an owned list.
pub fn all_categories() -> Vec<Category> {
    CATEGORIES.to_vec()
}
