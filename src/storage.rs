/* ===============================================================================
Restaurant website menu.
Persisted key/value preferences, browser local storage stand-in. 14 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

pub const KEY_LANGUAGE: &str = "preferredLanguage";
pub const KEY_THEME: &str = "theme";

pub struct LocalStorage {
   path: Option<PathBuf>, // None keeps values in memory only
   values: BTreeMap<String, String>,
}

impl LocalStorage {
   pub fn in_memory() -> Self {
      Self { path: None, values: BTreeMap::new() }
   }

   // Missing or damaged file gives empty storage
   pub fn open(path: &Path) -> Self {
      let values = match fs::read_to_string(path) {
         Ok(text) => match serde_json::from_str(&text) {
            Ok(values) => values,
            Err(err) => {
               log::warn!("storage::open {} is damaged, starting empty: {}", path.display(), err);
               BTreeMap::new()
            }
         }
         Err(_) => BTreeMap::new(),
      };

      Self { path: Some(path.to_path_buf()), values }
   }

   pub fn get(&self, key: &str) -> Option<&str> {
      self.values.get(key).map(|s| s.as_str())
   }

   pub fn set(&mut self, key: &str, value: &str) {
      self.values.insert(String::from(key), String::from(value));
      if let Err(err) = self.save() {
         log::error!("{}", err);
      }
   }

   fn save(&self) -> Result<(), String> {
      if let Some(path) = &self.path {
         let text = serde_json::to_string_pretty(&self.values)
         .map_err(|err| format!("storage::save serialize: {}", err))?;
         fs::write(path, text)
         .map_err(|err| format!("storage::save {}: {}", path.display(), err))?;
      }
      Ok(())
   }
}
