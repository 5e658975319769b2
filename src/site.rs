/* ===============================================================================
Restaurant website menu.
Page controller, wires the stores together. 18 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::document::Document;
use crate::environment::Vars;
use crate::events::{self, Listener, Notification};
use crate::language::LanguageCode;
use crate::loc::Loc;
use crate::menu::{loader::MenuData, models::Category, view::SectionView, LoadTicket, MenuStore};
use crate::navigation::{self, Click, DayPart};
use crate::page;
use crate::storage::{LocalStorage, KEY_LANGUAGE};
use crate::theme::{Theme, ThemeStore};

pub struct Site {
   doc: Document,
   loc: Loc,
   theme: ThemeStore,
   menu: MenuStore,
   storage: LocalStorage,
   listener: Listener,
}

impl Site {
   // Fails only when the dictionaries do not match each other
   pub fn new(vars: &Vars, storage: LocalStorage) -> Result<Self, String> {
      let (notifier, listener) = events::channel();
      let loc = Loc::load(vars.locales_dir.as_deref(), notifier.clone())
      .map_err(|err| format!("site::new {}", err))?;

      Ok(Self {
         doc: page::build(vars.current_date_time().year()),
         loc,
         theme: ThemeStore::new(notifier),
         menu: MenuStore::new(vars.page_size, &vars.price_unit),
         storage,
         listener,
      })
   }

   pub fn doc(&self) -> &Document {
      &self.doc
   }

   pub fn loc(&self) -> &Loc {
      &self.loc
   }

   pub fn menu(&self) -> &MenuStore {
      &self.menu
   }

   pub fn theme(&self) -> Theme {
      self.theme.current()
   }

   // Page is ready, restore what the visitor chose last time
   pub fn start(&mut self, now: NaiveDateTime, prefers_dark: bool) {
      match self.doc.by_id_mut(page::ID_CURRENT_YEAR) {
         Some(e) => e.text = now.year().to_string(),
         None => log::error!("site::start no #{} element", page::ID_CURRENT_YEAR),
      }

      self.arrange(now.time());

      let saved = self.storage.get(KEY_LANGUAGE)
      .map(String::from)
      .unwrap_or_else(|| String::from(LanguageCode::default().as_ref()));
      if self.set_language(&saved).is_none() {
         self.set_language(LanguageCode::default().as_ref());
      }

      self.theme.initialize(prefers_dark, &mut self.doc, &mut self.storage);
      self.relay();
   }

   pub fn arrange(&mut self, now: NaiveTime) -> Option<DayPart> {
      match navigation::arrange_by_time_of_day(&mut self.doc, now) {
         Ok(part) => Some(part),
         Err(err) => {
            log::error!("{}", err);
            None
         }
      }
   }

   // Forwards notifications to whoever has to react
   fn relay(&mut self) {
      for n in self.listener.drain() {
         match n {
            Notification::LanguageChanged(lang) => self.menu.update_menu_language(lang),
            Notification::ThemeChanged(theme) => log::debug!("site::relay theme is {}", theme),
         }
      }
   }

   pub fn begin_load(&mut self) -> LoadTicket {
      self.menu.begin_load()
   }

   pub fn finish_load(&mut self, ticket: LoadTicket, data: MenuData) -> bool {
      let active = navigation::active_category(&self.doc);
      self.menu.finish_load(ticket, data, &self.loc, active)
   }

   pub fn set_language(&mut self, code: &str) -> Option<LanguageCode> {
      let res = self.loc.set_language(code, &mut self.doc, &mut self.storage);
      self.relay();
      res
   }

   pub fn toggle_theme(&mut self) -> Theme {
      let res = self.theme.toggle(&mut self.doc, &mut self.storage);
      self.relay();
      res
   }

   pub fn show(&mut self, id: &str) -> bool {
      if !navigation::show_section(&mut self.doc, id) {
         return false;
      }
      self.doc.scrolled_to = Some(String::from(id));

      // The newly visible section has to explain an empty search too
      if self.menu.query().is_some() {
         let active = navigation::active_category(&self.doc);
         self.menu.render_all(&self.loc, active);
      }
      true
   }

   pub fn click(&mut self, id: &str) -> Click {
      let click = navigation::resolve_click(&self.doc, id);
      match &click {
         Click::Section(section) => {
            self.show(section);
         }
         Click::Language(code) => {
            self.set_language(code);
         }
         Click::Filter(tag) => self.filter(tag),
         Click::ThemeToggle => {
            self.toggle_theme();
         }
         Click::Nothing => {}
      }
      click
   }

   pub fn search(&mut self, query: &str) {
      let active = navigation::active_category(&self.doc);
      self.menu.search(query, &self.loc, active);
   }

   pub fn filter(&mut self, tag: &str) {
      let active = navigation::active_category(&self.doc);
      self.menu.apply_filter(tag, &self.loc, active);
      navigation::set_active_filter_button(&mut self.doc, self.menu.filter().as_str());
   }

   pub fn select_page(&mut self, category: Category, page: usize) {
      let active = navigation::active_category(&self.doc);
      self.menu.select_page(category, page, &self.loc, active);
   }

   // What the visitor sees now
   pub fn visible(&self) -> Option<&SectionView> {
      navigation::active_category(&self.doc)
      .and_then(|category| self.menu.view(category))
   }
}
