/* ===============================================================================
Restaurant website menu.
Light and dark theme. 15 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use parse_display::{Display, FromStr};

use crate::document::Document;
use crate::events::Notifier;
use crate::storage::{LocalStorage, KEY_THEME};

pub const ID_THEME_TOGGLE: &str = "theme-toggle";

#[derive(Display, FromStr, Clone, Copy, Debug, PartialEq, Eq)]
#[display(style = "lowercase")]
pub enum Theme {
   Light,
   Dark,
}

impl Theme {
   pub fn toggled(self) -> Self {
      match self {
         Self::Light => Self::Dark,
         Self::Dark => Self::Light,
      }
   }

   fn class(self) -> String {
      format!("{}-theme", self)
   }

   // Glyph on the toggle button
   pub fn icon(self) -> &'static str {
      match self {
         Self::Light => "☀",
         Self::Dark => "☾",
      }
   }
}

pub struct ThemeStore {
   current: Theme,
   notifier: Notifier,
}

impl ThemeStore {
   pub fn new(notifier: Notifier) -> Self {
      Self { current: Theme::Light, notifier }
   }

   pub fn current(&self) -> Theme {
      self.current
   }

   // Saved choice first, then the OS preference
   pub fn initialize(&mut self, prefers_dark: bool, doc: &mut Document, storage: &mut LocalStorage) -> Theme {
      let theme = match storage.get(KEY_THEME) {
         Some(saved) => saved.parse().unwrap_or_else(|_| {
            log::warn!("theme::initialize unknown saved theme {}, using light", saved);
            Theme::Light
         }),
         None if prefers_dark => Theme::Dark,
         None => Theme::Light,
      };
      self.set(theme, doc, storage);
      theme
   }

   pub fn set(&mut self, theme: Theme, doc: &mut Document, storage: &mut LocalStorage) {
      doc.set_root_class(&theme.toggled().class(), false);
      doc.set_root_class(&theme.class(), true);

      match doc.by_id_mut(ID_THEME_TOGGLE) {
         Some(toggle) => toggle.text = String::from(theme.icon()),
         None => log::error!("theme::set no #{} element", ID_THEME_TOGGLE),
      }

      self.current = theme;
      storage.set(KEY_THEME, &theme.to_string());
      self.notifier.send(theme);
   }

   pub fn toggle(&mut self, doc: &mut Document, storage: &mut LocalStorage) -> Theme {
      let theme = self.current.toggled();
      self.set(theme, doc, storage);
      theme
   }
}
