/* ===============================================================================
Restaurant website menu.
Supported languages. 19 June 2020.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(AsRefStr, Display, EnumString, EnumIter, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
   En, // English, the default
   El, // Greek
}

impl Default for LanguageCode {
   fn default() -> Self {
      Self::En
   }
}

impl LanguageCode {
   // Text for the current language indicator
   pub fn indicator(&self) -> String {
      self.as_ref().to_uppercase()
   }

   // Greek text needs its own font
   pub fn needs_greek_font(&self) -> bool {
      matches!(self, Self::El)
   }
}

// A pair of strings, one per language
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Localized {
   #[serde(default)]
   pub en: String,
   #[serde(default)]
   pub el: String,
}

impl Localized {
   pub fn new(en: &str, el: &str) -> Self {
      Self { en: String::from(en), el: String::from(el) }
   }

   pub fn get(&self, lang: LanguageCode) -> &str {
      match lang {
         LanguageCode::En => &self.en,
         LanguageCode::El => &self.el,
      }
   }

   // Case-insensitive match against both languages
   pub fn contains_lowercase(&self, needle: &str) -> bool {
      self.en.to_lowercase().contains(needle) || self.el.to_lowercase().contains(needle)
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use std::str::FromStr;

   #[test]
   fn parses_only_known_codes() {
      assert_eq!(LanguageCode::from_str("en"), Ok(LanguageCode::En));
      assert_eq!(LanguageCode::from_str("el"), Ok(LanguageCode::El));
      assert!(LanguageCode::from_str("de").is_err());
      assert!(LanguageCode::from_str("EL").is_err());
   }

   #[test]
   fn indicator_is_upper_case() {
      assert_eq!(LanguageCode::El.indicator(), "EL");
      assert_eq!(LanguageCode::En.to_string(), "en");
   }

   #[test]
   fn localized_search_covers_both_languages() {
      let name = Localized::new("Mojito", "Μοχίτο");
      assert!(name.contains_lowercase("moj"));
      assert!(name.contains_lowercase("μοχ"));
      assert!(!name.contains_lowercase("ouzo"));
   }
}
