/* ===============================================================================
Restaurant website menu.
Category buttons and section switching. 27 May 2021.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{NaiveTime, Timelike};
use parse_display::{Display, FromStr};

use crate::document::*;
use crate::menu::models::Category;
use crate::theme::ID_THEME_TOGGLE;

pub const ID_DYNAMIC_BUTTONS: &str = "dynamic-buttons";
pub const CLASS_CATEGORY_BTN: &str = "category-btn";
pub const CLASS_MENU_SECTION: &str = "menu-section";
pub const CLASS_SIDE_LINK: &str = "side-link";
pub const CLASS_FILTER_BTN: &str = "filter-btn";

#[derive(Display, FromStr, Clone, Copy, Debug, PartialEq, Eq)]
#[display(style = "lowercase")]
pub enum DayPart {
   Morning, // [6, 11)
   Afternoon, // [11, 17)
   Evening, // [17, 22)
   Night,
}

impl DayPart {
   pub fn from_hour(hour: u32) -> Self {
      match hour {
         6..=10 => Self::Morning,
         11..=16 => Self::Afternoon,
         17..=21 => Self::Evening,
         _ => Self::Night,
      }
   }

   pub fn from_time(now: NaiveTime) -> Self {
      Self::from_hour(now.hour())
   }

   // What people want first at this time
   pub fn order(&self) -> [Category; 6] {
      use Category::*;
      match self {
         Self::Morning => [Coffee, Food, Beer, Wine, Spirits, Cocktails],
         Self::Afternoon => [Food, Coffee, Beer, Wine, Cocktails, Spirits],
         Self::Evening => [Cocktails, Food, Beer, Wine, Spirits, Coffee],
         Self::Night => [Cocktails, Spirits, Wine, Beer, Food, Coffee],
      }
   }
}

pub fn arrange_by_time_of_day(doc: &mut Document, now: NaiveTime) -> Result<DayPart, String> {
   let part = DayPart::from_time(now);
   let order: Vec<String> = part.order()
   .iter()
   .map(|c| c.button_id())
   .collect();

   doc.reorder_children(ID_DYNAMIC_BUTTONS, &order)
   .map_err(|err| format!("navigation::arrange_by_time_of_day {}", err))?;

   log::debug!("navigation::arrange_by_time_of_day {} at {}", part, now.format("%H:%M"));
   Ok(part)
}

// Category buttons in display order
pub fn button_order(doc: &Document) -> Vec<Category> {
   doc.children(ID_DYNAMIC_BUTTONS)
   .filter(|e| e.has_class(CLASS_CATEGORY_BTN))
   .filter_map(|e| e.get_attr(ATTR_TARGET))
   .filter_map(Category::from_section_id)
   .collect()
}

// Exactly one section stays active, an unknown id changes nothing
pub fn show_section(doc: &mut Document, id: &str) -> bool {
   let exists = doc.with_class(CLASS_MENU_SECTION)
   .any(|e| e.id.as_deref() == Some(id));
   if !exists {
      log::error!("navigation::show_section target section not found: {}", id);
      return false;
   }

   doc.with_class_mut(CLASS_MENU_SECTION)
   .for_each(|e| {
      let on = e.id.as_deref() == Some(id);
      e.set_class(CLASS_ACTIVE, on);
   });

   let href = format!("#{}", id);
   doc.with_class_mut(CLASS_SIDE_LINK)
   .for_each(|e| {
      let on = e.get_attr(ATTR_HREF) == Some(href.as_str());
      e.set_class(CLASS_ACTIVE, on);
   });

   true
}

pub fn active_section(doc: &Document) -> Option<&str> {
   doc.with_class(CLASS_MENU_SECTION)
   .find(|e| e.is_active())
   .and_then(|e| e.id.as_deref())
}

pub fn active_category(doc: &Document) -> Option<Category> {
   active_section(doc).and_then(Category::from_section_id)
}

pub fn set_active_filter_button(doc: &mut Document, filter: &str) {
   doc.with_class_mut(CLASS_FILTER_BTN)
   .for_each(|e| {
      let on = e.get_attr(ATTR_FILTER) == Some(filter);
      e.set_class(CLASS_ACTIVE, on);
   });
}

// What a click on an element means. Resolved from attributes at click
// time, so moving the buttons around never needs new handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Click {
   Section(String),
   Language(String),
   Filter(String),
   ThemeToggle,
   Nothing,
}

pub fn resolve_click(doc: &Document, id: &str) -> Click {
   let e = match doc.by_id(id) {
      Some(e) => e,
      None => {
         log::error!("navigation::resolve_click no element #{}", id);
         return Click::Nothing;
      }
   };

   if id == ID_THEME_TOGGLE {
      Click::ThemeToggle
   } else if let Some(target) = e.get_attr(ATTR_TARGET) {
      Click::Section(String::from(target))
   } else if let Some(section) = e.get_attr(ATTR_HREF).and_then(|href| href.strip_prefix('#')) {
      Click::Section(String::from(section))
   } else if let Some(lang) = e.get_attr(ATTR_LANG) {
      Click::Language(String::from(lang))
   } else if let Some(filter) = e.get_attr(ATTR_FILTER) {
      Click::Filter(String::from(filter))
   } else {
      Click::Nothing
   }
}
