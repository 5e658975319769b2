/* ===============================================================================
Restaurant website menu.
Localize module. 02 August 2022.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{collections::{BTreeMap, BTreeSet}, fs, path::Path, str::FromStr};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use strum::IntoEnumIterator;
use walkdir::WalkDir;

use crate::document::*;
use crate::events::Notifier;
use crate::language::LanguageCode;
use crate::locales;
use crate::storage::{LocalStorage, KEY_LANGUAGE};

// Named arguments inside messages, like {category}
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
   Regex::new(r"\{(\w+)\}").unwrap()
});

pub const CLASS_ACTIVE_LANG: &str = "active-lang";
pub const CLASS_LANG_OPTION: &str = "lang-option";
pub const CLASS_GREEK_FONT: &str = "greek-font";

pub type Args<'a> = &'a [(&'a str, &'a str)];

pub struct Loc {
   dictionaries: BTreeMap<LanguageCode, Value>,
   current: LanguageCode,
   notifier: Notifier,
}

impl Loc {
   // Built-in dictionaries, optionally replaced by files from the directory
   pub fn load(dir: Option<&Path>, notifier: Notifier) -> Result<Self, String> {
      let mut dictionaries: BTreeMap<LanguageCode, Value> = LanguageCode::iter()
      .map(|lang| (lang, locales::builtin(lang).clone()))
      .collect();

      if let Some(dir) = dir {
         for (lang, dictionary) in read_dir(dir) {
            log::info!("loc::load {} dictionary from {}", lang, dir.display());
            dictionaries.insert(lang, dictionary);
         }
      }

      check_parity(&dictionaries)?;

      Ok(Self { dictionaries, current: LanguageCode::default(), notifier })
   }

   pub fn current(&self) -> LanguageCode {
      self.current
   }

   // Pure lookup for the given or the active language
   pub fn get_translation(&self, key: &str, lang: Option<LanguageCode>) -> Option<&str> {
      let lang = lang.unwrap_or(self.current);
      self.dictionaries.get(&lang)
      .and_then(|tree| lookup(tree, key))
   }

   // Lookup with {name} substitution, unknown names stay as is
   pub fn get_formatted(&self, key: &str, lang: Option<LanguageCode>, args: Args) -> Option<String> {
      self.get_translation(key, lang)
      .map(|template| substitute(template, args))
   }

   pub fn set_language(&mut self, code: &str, doc: &mut Document, storage: &mut LocalStorage) -> Option<LanguageCode> {
      let lang = match LanguageCode::from_str(code) {
         Ok(lang) => lang,
         Err(_) => {
            log::error!("loc::set_language invalid language code: {}", code);
            return None;
         }
      };

      self.current = lang;
      storage.set(KEY_LANGUAGE, lang.as_ref());

      // Indicator of the current language
      let mut indicator = doc.with_class_mut(CLASS_ACTIVE_LANG).peekable();
      if indicator.peek().is_none() {
         log::error!("loc::set_language no .{} element", CLASS_ACTIVE_LANG);
      }
      indicator.for_each(|e| e.text = lang.indicator());

      // Selector buttons
      doc.with_class_mut(CLASS_LANG_OPTION)
      .for_each(|e| {
         let on = e.get_attr(ATTR_LANG) == Some(lang.as_ref());
         e.set_class(CLASS_ACTIVE, on);
      });

      self.apply_translations(doc);

      doc.set_root_class(CLASS_GREEK_FONT, lang.needs_greek_font());
      doc.lang = lang.to_string();

      self.notifier.send(lang);
      Some(lang)
   }

   pub fn apply_translations(&self, doc: &mut Document) {
      for e in doc.with_attr_mut(ATTR_I18N) {
         let key = e.get_attr(ATTR_I18N).unwrap_or_default().to_string();
         match self.get_translation(&key, None) {
            Some(text) => e.text = String::from(text),
            None => log::debug!("loc::apply_translations missing key {}", key),
         }
      }

      for e in doc.with_attr_mut(ATTR_I18N_PLACEHOLDER) {
         let key = e.get_attr(ATTR_I18N_PLACEHOLDER).unwrap_or_default().to_string();
         if let Some(text) = self.get_translation(&key, None) {
            e.placeholder = Some(String::from(text));
         }
      }

      for e in doc.with_attr_mut(ATTR_I18N_VALUE) {
         let key = e.get_attr(ATTR_I18N_VALUE).unwrap_or_default().to_string();
         if let Some(text) = self.get_translation(&key, None) {
            e.value = Some(String::from(text));
         }
      }
   }
}

// Walks the dotted path, any absent segment means not found
pub fn lookup<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
   path.split('.')
   .try_fold(tree, |node, segment| node.as_object()?.get(segment))
   .and_then(|leaf| leaf.as_str())
}

pub fn substitute(template: &str, args: Args) -> String {
   PLACEHOLDER.replace_all(template, |caps: &Captures| {
      let name = &caps[1];
      args.iter()
      .find(|(n, _)| *n == name)
      .map(|(_, v)| String::from(*v))
      .unwrap_or_else(|| String::from(&caps[0]))
   })
   .into_owned()
}

// Dotted paths of all string leaves
pub fn key_paths(tree: &Value) -> BTreeSet<String> {
   fn walk(node: &Value, prefix: &str, res: &mut BTreeSet<String>) {
      match node {
         Value::Object(map) => {
            for (key, child) in map {
               let path = if prefix.is_empty() { key.clone() } else { format!("{}.{}", prefix, key) };
               walk(child, &path, res);
            }
         }
         Value::String(_) => {
            res.insert(String::from(prefix));
         }
         _ => {}
      }
   }

   let mut res = BTreeSet::new();
   walk(tree, "", &mut res);
   res
}

// Every language must expose the same keys
pub fn check_parity(dictionaries: &BTreeMap<LanguageCode, Value>) -> Result<(), String> {
   let mut it = dictionaries.iter();
   let (first_lang, first) = match it.next() {
      Some((lang, tree)) => (lang, key_paths(tree)),
      None => return Err(String::from("loc::check_parity no dictionaries")),
   };

   for (lang, tree) in it {
      let keys = key_paths(tree);
      if keys != first {
         let missing: Vec<_> = first.symmetric_difference(&keys)
         .take(10)
         .cloned()
         .collect();
         return Err(format!("loc::check_parity dictionaries {} and {} differ in keys: {}",
            first_lang, lang, missing.join(", ")));
      }
   }
   Ok(())
}

// Files named by language code, like el.json
fn read_dir(dir: &Path) -> Vec<(LanguageCode, Value)> {
   WalkDir::new(dir)
   .max_depth(1)
   .into_iter()
   .filter_map(|entry| match entry {
      Ok(entry) => Some(entry),
      Err(err) => {
         log::warn!("loc::read_dir {}: {}", dir.display(), err);
         None
      }
   })
   .filter(|entry| entry.file_type().is_file())
   .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "json"))
   .filter_map(|entry| {
      let path = entry.path();
      let stem = path.file_stem()?.to_str()?;
      let lang = match LanguageCode::from_str(stem) {
         Ok(lang) => lang,
         Err(_) => {
            log::warn!("loc::read_dir unknown language file {}", path.display());
            return None;
         }
      };

      let parsed = fs::read_to_string(path)
      .map_err(|err| err.to_string())
      .and_then(|text| serde_json::from_str::<Value>(&text).map_err(|err| err.to_string()));
      match parsed {
         Ok(dictionary) if dictionary.is_object() => Some((lang, dictionary)),
         Ok(_) => {
            log::error!("loc::read_dir {} is not an object, keep built-in", path.display());
            None
         }
         Err(err) => {
            log::error!("loc::read_dir {}: {}, keep built-in", path.display(), err);
            None
         }
      }
   })
   .collect()
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::events;
   use serde_json::json;

   fn store() -> (Loc, events::Listener) {
      let (notifier, listener) = events::channel();
      (Loc::load(None, notifier).unwrap(), listener)
   }

   fn page() -> Document {
      let mut doc = Document::new();
      doc.push(Element::new().class(CLASS_ACTIVE_LANG).text("EN"));
      doc.push(Element::new().id("lang-en").class(CLASS_LANG_OPTION).class(CLASS_ACTIVE).attr(ATTR_LANG, "en"));
      doc.push(Element::new().id("lang-el").class(CLASS_LANG_OPTION).attr(ATTR_LANG, "el"));
      doc.push(Element::new().id("home").attr(ATTR_I18N, "nav.home").text("Home"));
      doc.push(Element::new().id("bogus").attr(ATTR_I18N, "nav.nowhere").text("keep me"));
      doc.push(Element::new().id("search").attr(ATTR_I18N_PLACEHOLDER, "search.placeholder"));
      doc.push(Element::new().id("subscribe").attr(ATTR_I18N_VALUE, "newsletter.subscribe"));
      doc
   }

   #[test]
   fn builtin_dictionaries_have_parity() {
      let (loc, _) = store();
      assert_eq!(loc.current(), LanguageCode::En);
      assert_eq!(loc.get_translation("nav.home", Some(LanguageCode::El)), Some("Αρχική"));
   }

   #[test]
   fn lookup_walks_segments() {
      let tree = json!({"a": {"b": {"c": "deep"}, "s": "leaf"}});
      assert_eq!(lookup(&tree, "a.b.c"), Some("deep"));
      assert_eq!(lookup(&tree, "a.s"), Some("leaf"));
      assert_eq!(lookup(&tree, "a.b"), None);
      assert_eq!(lookup(&tree, "a.s.x"), None);
      assert_eq!(lookup(&tree, "a.x.c"), None);
      assert_eq!(lookup(&tree, ""), None);
   }

   #[test]
   fn parity_mismatch_is_reported() {
      let mut dicts = BTreeMap::new();
      dicts.insert(LanguageCode::En, json!({"nav": {"home": "Home", "about": "About"}}));
      dicts.insert(LanguageCode::El, json!({"nav": {"home": "Αρχική"}}));
      let err = check_parity(&dicts).unwrap_err();
      assert!(err.contains("nav.about"), "{}", err);

      dicts.insert(LanguageCode::El, json!({"nav": {"home": "Αρχική", "about": "Σχετικά"}}));
      assert!(check_parity(&dicts).is_ok());
   }

   #[test]
   fn set_language_updates_page() {
      let (mut loc, mut listener) = store();
      let mut doc = page();
      let mut storage = LocalStorage::in_memory();

      assert_eq!(loc.set_language("el", &mut doc, &mut storage), Some(LanguageCode::El));
      assert_eq!(doc.by_id("home").unwrap().text, "Αρχική");
      assert_eq!(doc.by_id("bogus").unwrap().text, "keep me");
      assert_eq!(doc.by_id("search").unwrap().placeholder.as_deref(), Some("Αναζήτηση στο μενού..."));
      assert_eq!(doc.by_id("subscribe").unwrap().value.as_deref(), Some("Εγγραφή"));
      assert!(doc.by_id("lang-el").unwrap().is_active());
      assert!(!doc.by_id("lang-en").unwrap().is_active());
      assert_eq!(doc.with_class(CLASS_ACTIVE_LANG).next().unwrap().text, "EL");
      assert!(doc.root_classes.contains(CLASS_GREEK_FONT));
      assert_eq!(doc.lang, "el");
      assert_eq!(storage.get(KEY_LANGUAGE), Some("el"));
      assert_eq!(listener.drain().len(), 1);

      loc.set_language("en", &mut doc, &mut storage);
      assert!(!doc.root_classes.contains(CLASS_GREEK_FONT));
      assert_eq!(doc.by_id("home").unwrap().text, "Home");
   }

   #[test]
   fn invalid_code_changes_nothing() {
      let (mut loc, mut listener) = store();
      let mut doc = page();
      let mut storage = LocalStorage::in_memory();

      assert_eq!(loc.set_language("fr", &mut doc, &mut storage), None);
      assert_eq!(loc.current(), LanguageCode::En);
      assert_eq!(storage.get(KEY_LANGUAGE), None);
      assert!(listener.drain().is_empty());
   }

   #[test]
   fn every_shared_key_resolves_per_language() {
      let (mut loc, _) = store();
      let mut doc = Document::new();
      let mut storage = LocalStorage::in_memory();
      let keys = key_paths(locales::builtin(LanguageCode::En));

      for lang in LanguageCode::iter() {
         loc.set_language(lang.as_ref(), &mut doc, &mut storage);
         for key in &keys {
            assert_eq!(loc.get_translation(key, None), lookup(locales::builtin(lang), key));
         }
      }
   }

   #[test]
   fn formats_named_arguments() {
      assert_eq!(substitute("No {category} items, {other}", &[("category", "wine")]),
         "No wine items, {other}");
   }

   #[test]
   fn locale_files_replace_builtin() {
      let dir = tempfile::tempdir().unwrap();
      let mut en = locales::builtin(LanguageCode::En).clone();
      en["nav"]["home"] = json!("Start");
      fs::write(dir.path().join("en.json"), en.to_string()).unwrap();
      fs::write(dir.path().join("de.json"), "{}").unwrap();
      fs::write(dir.path().join("el.json"), "{broken").unwrap();

      let (notifier, _) = events::channel();
      let loc = Loc::load(Some(dir.path()), notifier).unwrap();
      assert_eq!(loc.get_translation("nav.home", Some(LanguageCode::En)), Some("Start"));
      assert_eq!(loc.get_translation("nav.home", Some(LanguageCode::El)), Some("Αρχική"));
   }

   #[test]
   fn missing_locale_dir_keeps_builtin() {
      let dir = tempfile::tempdir().unwrap();
      let missing = dir.path().join("nowhere");
      assert!(read_dir(&missing).is_empty());

      let (notifier, _) = events::channel();
      let loc = Loc::load(Some(&missing), notifier).unwrap();
      assert_eq!(loc.get_translation("nav.home", Some(LanguageCode::El)), Some("Αρχική"));
   }

   #[test]
   fn incomplete_locale_file_fails_fast() {
      let dir = tempfile::tempdir().unwrap();
      fs::write(dir.path().join("el.json"), r#"{"nav": {"home": "Αρχική"}}"#).unwrap();

      let (notifier, _) = events::channel();
      assert!(Loc::load(Some(dir.path()), notifier).is_err());
   }
}
