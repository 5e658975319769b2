/* ===============================================================================
Restaurant website menu.
Menu items and categories. 15 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::collections::HashSet;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::language::Localized;

#[derive(AsRefStr, Display, EnumString, EnumIter, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
   Coffee,
   Food,
   Beer,
   Wine,
   Spirits,
   Cocktails,
}

impl Category {
   // Id of the page section, like coffee-section
   pub fn section_id(&self) -> String {
      format!("{}-section", self.as_ref())
   }

   // Id of the selector button, like coffee-btn
   pub fn button_id(&self) -> String {
      format!("{}-btn", self.as_ref())
   }

   pub fn from_section_id(id: &str) -> Option<Self> {
      id.strip_suffix("-section")
      .and_then(|name| name.parse().ok())
   }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
   #[serde(default)]
   pub id: Option<String>,
   pub name: Localized,
   #[serde(default)]
   pub description: Localized,
   pub price: f64,
   #[serde(default)]
   pub image: Option<String>,
   #[serde(default, alias = "tags")]
   pub categories: Vec<String>, // tags like "popular"
   #[serde(default)]
   pub available: Option<bool>,
}

impl MenuItem {
   pub fn has_tag(&self, tag: &str) -> bool {
      self.categories.iter().any(|t| t == tag)
   }

   // Query must be lowercase already
   pub fn matches(&self, query: &str) -> bool {
      self.name.contains_lowercase(query) || self.description.contains_lowercase(query)
   }

   pub fn is_available(&self) -> bool {
      self.available.unwrap_or(true)
   }
}

// Shape of data/menu/<category>.json
#[derive(Deserialize, Debug, Default)]
pub struct MenuDocument {
   #[serde(default)]
   pub items: Vec<MenuItem>,
}

// Throws out items that break the data model
pub fn validate(category: Category, items: Vec<MenuItem>) -> Vec<MenuItem> {
   let mut seen = HashSet::new();
   items.into_iter()
   .filter(|item| {
      if !(item.price >= 0.0 && item.price.is_finite()) {
         log::warn!("menu::validate {} drops {:?} with price {}", category, item.name.en, item.price);
         return false;
      }
      match &item.id {
         Some(id) if !seen.insert(id.clone()) => {
            log::warn!("menu::validate {} drops duplicate id {}", category, id);
            false
         }
         _ => true,
      }
   })
   .collect()
}

// Either everything or items with the tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
   All,
   Tag(String),
}

impl Default for Filter {
   fn default() -> Self {
      Self::All
   }
}

impl From<&str> for Filter {
   fn from(s: &str) -> Self {
      let s = s.trim();
      if s.is_empty() || s == "all" {
         Self::All
      } else {
         Self::Tag(String::from(s))
      }
   }
}

impl Filter {
   pub fn accepts(&self, item: &MenuItem) -> bool {
      match self {
         Self::All => true,
         Self::Tag(tag) => item.has_tag(tag),
      }
   }

   pub fn as_str(&self) -> &str {
      match self {
         Self::All => "all",
         Self::Tag(tag) => tag,
      }
   }
}
