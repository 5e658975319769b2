/* ===============================================================================
Restaurant website menu.
Menu store: data, paging, filter and search state. 16 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

pub mod fallback;
pub mod loader;
pub mod models;
pub mod view;

use std::collections::BTreeMap;
use smart_default::SmartDefault;
use strum::IntoEnumIterator;

use crate::language::LanguageCode;
use crate::loc::Loc;
use loader::MenuData;
use models::*;
use view::{MessageKind, RenderContext, SectionView};

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(SmartDefault, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
   #[default = 1]
   pub page: usize,
   #[default(DEFAULT_PAGE_SIZE)]
   pub per_page: usize,
}

// Issued when a load starts, only the latest one may be applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
   generation: u64,
}

pub struct MenuStore {
   data: MenuData,
   pagination: BTreeMap<Category, Pagination>,
   filter: Filter,
   query: Option<String>, // lowercase, never empty
   views: BTreeMap<Category, SectionView>,
   price_unit: String,
   load_generation: u64,
   render_generation: u64,
}

impl MenuStore {
   pub fn new(page_size: usize, price_unit: &str) -> Self {
      let per_page = page_size.max(1);
      let pagination = Category::iter()
      .map(|category| (category, Pagination { per_page, ..Default::default() }))
      .collect();

      Self {
         data: MenuData::new(),
         pagination,
         filter: Filter::All,
         query: None,
         views: BTreeMap::new(),
         price_unit: String::from(price_unit),
         load_generation: 0,
         render_generation: 0,
      }
   }

   pub fn items(&self, category: Category) -> &[MenuItem] {
      self.data.get(&category).map(|v| v.as_slice()).unwrap_or_default()
   }

   pub fn view(&self, category: Category) -> Option<&SectionView> {
      self.views.get(&category)
   }

   pub fn filter(&self) -> &Filter {
      &self.filter
   }

   pub fn query(&self) -> Option<&str> {
      self.query.as_deref()
   }

   pub fn pagination(&self, category: Category) -> Pagination {
      self.pagination.get(&category).copied().unwrap_or_default()
   }

   pub fn render_generation(&self) -> u64 {
      self.render_generation
   }

   pub fn begin_load(&mut self) -> LoadTicket {
      self.load_generation += 1;
      LoadTicket { generation: self.load_generation }
   }

   // Returns false when a newer load made this one stale
   pub fn finish_load(&mut self, ticket: LoadTicket, data: MenuData, loc: &Loc, active: Option<Category>) -> bool {
      if ticket.generation != self.load_generation {
         log::warn!("menu::finish_load discards stale load {} (latest {})", ticket.generation, self.load_generation);
         return false;
      }

      self.data = data;
      self.render_all(loc, active);
      true
   }

   // Items the search leaves, all of them without a query
   fn searched(&self, category: Category) -> Vec<MenuItem> {
      let items = self.items(category);
      match &self.query {
         Some(query) => items.iter().filter(|item| item.matches(query)).cloned().collect(),
         None => items.to_vec(),
      }
   }

   fn render_one(&mut self, category: Category, loc: &Loc, active: Option<Category>) {
      let items = self.searched(category);
      let pagination = self.pagination(category);
      let ctx = RenderContext {
         loc,
         lang: loc.current(),
         price_unit: &self.price_unit,
         generation: self.render_generation,
      };

      let mut section = view::render(&ctx, category, &items, &self.filter, pagination.page, pagination.per_page);

      // The visible section explains an empty search
      if self.query.is_some() && items.is_empty() && active == Some(category) {
         section.cards.clear();
         section.pager.clear();
         section.message = Some(view::notice(&ctx, MessageKind::NoMatches, category));
      }

      self.views.insert(category, section);
   }

   pub fn render_all(&mut self, loc: &Loc, active: Option<Category>) {
      self.render_generation += 1;
      for category in Category::iter() {
         self.render_one(category, loc, active);
      }
   }

   // Page selector click, only this category renders again
   pub fn select_page(&mut self, category: Category, page: usize, loc: &Loc, active: Option<Category>) {
      let page = page.max(1);
      if let Some(pagination) = self.pagination.get_mut(&category) {
         pagination.page = page;
      }
      self.render_generation += 1;
      self.render_one(category, loc, active);
   }

   fn reset_pages(&mut self) {
      self.pagination.values_mut().for_each(|p| p.page = 1);
   }

   pub fn search(&mut self, query: &str, loc: &Loc, active: Option<Category>) {
      let query = query.trim().to_lowercase();
      self.query = if query.is_empty() { None } else { Some(query) };
      self.reset_pages();
      self.render_all(loc, active);
   }

   pub fn apply_filter(&mut self, tag: &str, loc: &Loc, active: Option<Category>) {
      self.filter = Filter::from(tag);
      self.reset_pages();
      self.render_all(loc, active);
   }

   // Language switch without filtering, searching or paging again
   pub fn update_menu_language(&mut self, lang: LanguageCode) {
      for section in self.views.values_mut() {
         view::update_language(section, lang);
      }
   }
}
