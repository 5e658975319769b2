/* ===============================================================================
Restaurant website menu.
Page as terminal text. 18 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use crate::document::*;
use crate::loc::CLASS_ACTIVE_LANG;
use crate::menu::view::{CardView, SectionView};
use crate::navigation::{self, CLASS_FILTER_BTN};
use crate::page;
use crate::site::Site;
use crate::theme::ID_THEME_TOGGLE;

fn text<'a>(doc: &'a Document, id: &str) -> &'a str {
   doc.by_id(id).map(|e| e.text.as_str()).unwrap_or_default()
}

// Selected entries go in brackets
fn choice(label: &str, active: bool) -> String {
   if active { format!("[{}]", label) } else { String::from(label) }
}

fn card(card: &CardView) -> String {
   let mut res = format!("  {}  {}", card.name, card.price);
   if !card.badges.is_empty() {
      let badges: Vec<&str> = card.badges.iter().map(|b| b.text.as_str()).collect();
      res.push_str(&format!("  <{}>", badges.join(", ")));
   }
   if card.unavailable {
      res.push_str("  (unavailable)");
   }
   if !card.description.is_empty() {
      res.push_str(&format!("\n     {}", card.description));
   }
   res
}

fn section(res: &mut Vec<String>, view: &SectionView) {
   res.extend(view.cards.iter().map(card));

   if let Some(message) = &view.message {
      res.push(format!("  {}", message.text));
   }

   if !view.pager.is_empty() {
      let pages: Vec<String> = view.pager.iter()
      .map(|b| choice(&b.number.to_string(), b.active))
      .collect();
      res.push(format!("  {}", pages.join(" ")));
   }
}

pub fn render(site: &Site) -> String {
   let doc = site.doc();
   let mut res = vec![];

   let lang = doc.with_class(CLASS_ACTIVE_LANG).next().map(|e| e.text.as_str()).unwrap_or_default();
   res.push(format!("{} {}  {}", text(doc, ID_THEME_TOGGLE), lang, text(doc, page::ID_WELCOME_TITLE)));

   let active = navigation::active_category(doc);
   let buttons: Vec<String> = navigation::button_order(doc)
   .into_iter()
   .map(|category| choice(text(doc, &category.button_id()), Some(category) == active))
   .collect();
   res.push(buttons.join(" | "));

   let filters: Vec<String> = doc.with_class(CLASS_FILTER_BTN)
   .map(|e| choice(&e.text, e.is_active()))
   .collect();
   res.push(filters.join(" "));

   let search = match site.menu().query() {
      Some(query) => format!("\"{}\"", query),
      None => doc.by_id(page::ID_SEARCH).and_then(|e| e.placeholder.clone()).unwrap_or_default(),
   };
   res.push(format!("? {}", search));

   if let Some(category) = active {
      res.push(String::new());
      res.push(format!("== {} ==", text(doc, &page::title_id(category))));
      if let Some(view) = site.visible() {
         section(&mut res, view);
      }
   }

   res.push(String::new());
   res.push(format!("© {} {}", text(doc, page::ID_CURRENT_YEAR), text(doc, page::ID_FOOTER_RIGHTS)));
   res.join("\n")
}
