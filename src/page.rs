/* ===============================================================================
Restaurant website menu.
Static page skeleton. 17 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use strum::IntoEnumIterator;

use crate::document::*;
use crate::language::LanguageCode;
use crate::loc::{CLASS_ACTIVE_LANG, CLASS_LANG_OPTION};
use crate::menu::models::Category;
use crate::navigation::*;
use crate::theme::ID_THEME_TOGGLE;

pub const ID_WELCOME_TITLE: &str = "welcome-title";
pub const ID_SEARCH: &str = "menu-search";
pub const ID_CURRENT_YEAR: &str = "current-year";
pub const ID_FOOTER_RIGHTS: &str = "footer-rights";

// Tags offered as filter buttons, "all" first
pub const FILTERS: [&str; 5] = ["all", "popular", "local", "hot", "classic"];

pub fn title_id(category: Category) -> String {
   format!("{}-title", category)
}

pub fn link_id(category: Category) -> String {
   format!("nav-{}", category)
}

// Markup as it comes from the server, before any script runs
pub fn build(year: i32) -> Document {
   let mut doc = Document::new();

   // Header
   doc.push(Element::new().id("lang-indicator").class(CLASS_ACTIVE_LANG).text("EN"));
   for lang in LanguageCode::iter() {
      let mut button = Element::new()
      .id(&format!("lang-{}", lang))
      .class(CLASS_LANG_OPTION)
      .attr(ATTR_LANG, lang.as_ref())
      .text(&lang.indicator());
      button.set_class(CLASS_ACTIVE, lang == LanguageCode::default());
      doc.push(button);
   }
   doc.push(Element::new().id(ID_THEME_TOGGLE).text("☀"));

   // Side navigation
   for key in ["home", "about"] {
      doc.push(Element::new().id(&format!("nav-{}", key)).attr(ATTR_I18N, &format!("nav.{}", key)));
   }
   for category in Category::iter() {
      let mut link = Element::new()
      .id(&link_id(category))
      .class(CLASS_SIDE_LINK)
      .attr(ATTR_HREF, &format!("#{}", category.section_id()))
      .attr(ATTR_I18N, &format!("nav.{}", category));
      link.set_class(CLASS_ACTIVE, category == Category::Coffee);
      doc.push(link);
   }
   doc.push(Element::new().id("nav-contact").attr(ATTR_I18N, "nav.contact"));

   doc.push(Element::new().id(ID_WELCOME_TITLE).attr(ATTR_I18N, "welcome.title"));
   doc.push(Element::new().id("welcome-subtitle").attr(ATTR_I18N, "welcome.subtitle"));

   // Category selector
   doc.push(Element::new().id(ID_DYNAMIC_BUTTONS));
   for category in Category::iter() {
      doc.push(Element::new()
         .id(&category.button_id())
         .inside(ID_DYNAMIC_BUTTONS)
         .class(CLASS_CATEGORY_BTN)
         .attr(ATTR_TARGET, &category.section_id())
         .attr(ATTR_I18N, &format!("buttons.{}", category))
      );
   }

   doc.push(Element::new().id(ID_SEARCH).attr(ATTR_I18N_PLACEHOLDER, "search.placeholder"));
   for tag in FILTERS {
      let mut button = Element::new()
      .id(&format!("filter-{}", tag))
      .class(CLASS_FILTER_BTN)
      .attr(ATTR_FILTER, tag)
      .attr(ATTR_I18N, &format!("filters.{}", tag));
      button.set_class(CLASS_ACTIVE, tag == "all");
      doc.push(button);
   }

   // Sections, the first one is open
   for category in Category::iter() {
      let section_id = category.section_id();
      let mut section = Element::new().id(&section_id).class(CLASS_MENU_SECTION);
      section.set_class(CLASS_ACTIVE, category == Category::Coffee);
      doc.push(section);
      doc.push(Element::new()
         .id(&title_id(category))
         .inside(&section_id)
         .attr(ATTR_I18N, &format!("sections.{}.title", category))
      );
   }

   // Footer
   doc.push(Element::new().id("newsletter-email").attr(ATTR_I18N_PLACEHOLDER, "newsletter.placeholder"));
   doc.push(Element::new().id("newsletter-submit").attr(ATTR_I18N_VALUE, "newsletter.subscribe"));
   for key in ["address", "hours", "phone"] {
      doc.push(Element::new().id(&format!("footer-{}", key)).attr(ATTR_I18N, &format!("footer.{}", key)));
   }
   doc.push(Element::new().id(ID_CURRENT_YEAR).text(&year.to_string()));
   doc.push(Element::new().id(ID_FOOTER_RIGHTS).attr(ATTR_I18N, "footer.rights"));

   doc
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn one_open_section_and_button_per_category() {
      let doc = build(2026);
      assert_eq!(active_section(&doc), Some("coffee-section"));
      assert_eq!(button_order(&doc), Category::iter().collect::<Vec<_>>());
      assert_eq!(doc.with_class(CLASS_SIDE_LINK).count(), 6);
      assert_eq!(doc.by_id(ID_CURRENT_YEAR).unwrap().text, "2026");
   }

   #[test]
   fn filter_buttons_start_with_all() {
      let doc = build(2026);
      let active: Vec<_> = doc.with_class(CLASS_FILTER_BTN).filter(|e| e.is_active()).collect();
      assert_eq!(active.len(), 1);
      assert_eq!(active[0].get_attr(ATTR_FILTER), Some("all"));
   }
}
