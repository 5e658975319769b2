/* ===============================================================================
Restaurant website menu.
In-memory document tree. 14 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::collections::{BTreeMap, BTreeSet};

// Attributes the stores understand
pub const ATTR_I18N: &str = "data-i18n";
pub const ATTR_I18N_PLACEHOLDER: &str = "data-i18n-placeholder";
pub const ATTR_I18N_VALUE: &str = "data-i18n-value";
pub const ATTR_LANG: &str = "data-lang";
pub const ATTR_TARGET: &str = "data-target";
pub const ATTR_FILTER: &str = "data-filter";
pub const ATTR_HREF: &str = "href";

pub const CLASS_ACTIVE: &str = "active";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
   pub id: Option<String>,
   pub parent: Option<String>, // id of the container
   pub classes: BTreeSet<String>,
   pub attrs: BTreeMap<String, String>,
   pub text: String,
   pub placeholder: Option<String>,
   pub value: Option<String>,
}

impl Element {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn id(mut self, id: &str) -> Self {
      self.id = Some(String::from(id));
      self
   }

   pub fn inside(mut self, parent: &str) -> Self {
      self.parent = Some(String::from(parent));
      self
   }

   pub fn class(mut self, class: &str) -> Self {
      self.classes.insert(String::from(class));
      self
   }

   pub fn attr(mut self, name: &str, value: &str) -> Self {
      self.attrs.insert(String::from(name), String::from(value));
      self
   }

   pub fn text(mut self, text: &str) -> Self {
      self.text = String::from(text);
      self
   }

   pub fn get_attr(&self, name: &str) -> Option<&str> {
      self.attrs.get(name).map(|s| s.as_str())
   }

   pub fn has_class(&self, class: &str) -> bool {
      self.classes.contains(class)
   }

   pub fn set_class(&mut self, class: &str, on: bool) {
      if on {
         self.classes.insert(String::from(class));
      } else {
         self.classes.remove(class);
      }
   }

   pub fn is_active(&self) -> bool {
      self.has_class(CLASS_ACTIVE)
   }
}

#[derive(Clone, Debug, Default)]
pub struct Document {
   pub lang: String,
   pub root_classes: BTreeSet<String>,
   pub scrolled_to: Option<String>, // id of the element last scrolled into view
   elements: Vec<Element>, // in document order
}

impl Document {
   pub fn new() -> Self {
      Self { lang: String::from("en"), ..Default::default() }
   }

   pub fn push(&mut self, element: Element) {
      self.elements.push(element);
   }

   #[cfg(test)]
   pub fn elements(&self) -> impl Iterator<Item = &Element> {
      self.elements.iter()
   }

   pub fn by_id(&self, id: &str) -> Option<&Element> {
      self.elements.iter().find(|e| e.id.as_deref() == Some(id))
   }

   pub fn by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
      self.elements.iter_mut().find(|e| e.id.as_deref() == Some(id))
   }

   pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
      self.elements.iter().filter(move |e| e.has_class(class))
   }

   pub fn with_class_mut<'a>(&'a mut self, class: &'a str) -> impl Iterator<Item = &'a mut Element> + 'a {
      self.elements.iter_mut().filter(move |e| e.has_class(class))
   }

   pub fn with_attr_mut<'a>(&'a mut self, attr: &'a str) -> impl Iterator<Item = &'a mut Element> + 'a {
      self.elements.iter_mut().filter(move |e| e.attrs.contains_key(attr))
   }

   pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
      self.elements.iter().filter(move |e| e.parent.as_deref() == Some(parent))
   }

   pub fn set_root_class(&mut self, class: &str, on: bool) {
      if on {
         self.root_classes.insert(String::from(class));
      } else {
         self.root_classes.remove(class);
      }
   }

   // Puts the children of the container into the given order of ids.
   // Children not listed keep their relative order after the listed ones,
   // ids without an element are skipped.
   pub fn reorder_children(&mut self, parent: &str, order: &[String]) -> Result<(), String> {
      if self.by_id(parent).is_none() {
         return Err(format!("document::reorder_children no container #{}", parent));
      }

      let slots: Vec<usize> = self.elements.iter()
      .enumerate()
      .filter(|(_, e)| e.parent.as_deref() == Some(parent))
      .map(|(i, _)| i)
      .collect();

      let mut kids: Vec<Element> = slots.iter()
      .map(|&i| self.elements[i].clone())
      .collect();

      let rank = |e: &Element| {
         e.id.as_ref()
         .and_then(|id| order.iter().position(|o| o == id))
         .unwrap_or(order.len())
      };
      // Stable sort keeps unlisted children in place relative to each other
      kids.sort_by_key(rank);

      for (slot, kid) in slots.into_iter().zip(kids) {
         self.elements[slot] = kid;
      }
      Ok(())
   }
}
