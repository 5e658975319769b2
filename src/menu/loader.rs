/* ===============================================================================
Restaurant website menu.
Loading menu documents with per-category fallback. 16 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::{collections::BTreeMap, path::PathBuf};
use futures::future::join_all;
use reqwest::Client;
use strum::IntoEnumIterator;

use super::fallback;
use super::models::*;

pub type MenuData = BTreeMap<Category, Vec<MenuItem>>;

// Where <category>.json documents live
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
   Http(String), // base url
   Dir(PathBuf),
}

impl Source {
   pub fn parse(s: &str) -> Self {
      if s.starts_with("http://") || s.starts_with("https://") {
         Source::Http(String::from(s.trim_end_matches('/')))
      } else {
         Source::Dir(PathBuf::from(s))
      }
   }
}

enum Failure {
   Missing(String), // no document for the category
   Broken(String), // transport error or malformed content
}

// Every category is requested at once and settles on its own,
// a failure only replaces that category with the built-in list
pub async fn load_menu_data(source: &Source) -> MenuData {
   let client = Client::new();

   let loads = Category::iter()
   .map(|category| {
      let client = &client;
      async move {
         let items = match fetch(client, source, category).await {
            Ok(items) => items,
            Err(Failure::Missing(text)) => {
               log::warn!("{}, using fallback data", text);
               fallback::items(category)
            }
            Err(Failure::Broken(text)) => {
               log::error!("{}, using fallback data", text);
               fallback::items(category)
            }
         };
         (category, validate(category, items))
      }
   });

   join_all(loads).await
   .into_iter()
   .collect()
}

async fn fetch(client: &Client, source: &Source, category: Category) -> Result<Vec<MenuItem>, Failure> {
   let text = match source {
      Source::Http(base) => {
         let url = format!("{}/{}.json", base, category);
         let resp = client.get(&url)
         .send()
         .await
         .map_err(|err| Failure::Broken(format!("menu::fetch {}: {}", url, err)))?;

         if !resp.status().is_success() {
            return Err(Failure::Missing(format!("menu::fetch {}: status {}", url, resp.status())));
         }

         resp.text()
         .await
         .map_err(|err| Failure::Broken(format!("menu::fetch {} body: {}", url, err)))?
      }
      Source::Dir(dir) => {
         let path = dir.join(format!("{}.json", category));
         tokio::fs::read_to_string(&path)
         .await
         .map_err(|err| Failure::Missing(format!("menu::fetch {}: {}", path.display(), err)))?
      }
   };

   let doc: MenuDocument = serde_json::from_str(&text)
   .map_err(|err| Failure::Broken(format!("menu::fetch {} malformed: {}", category, err)))?;
   Ok(doc.items)
}

#[cfg(test)]
mod tests {
   use super::*;
   use std::fs;

   #[test]
   fn source_kinds() {
      assert_eq!(Source::parse("https://example.com/data/menu/"), Source::Http(String::from("https://example.com/data/menu")));
      assert_eq!(Source::parse("data/menu"), Source::Dir(PathBuf::from("data/menu")));
   }

   #[tokio::test]
   async fn failures_fall_back_per_category() {
      let dir = tempfile::tempdir().unwrap();
      fs::write(dir.path().join("coffee.json"), r#"{"items": [
         {"id": "fr1", "name": {"en": "Freddo", "el": "Φρέντο"}, "price": 3}
      ]}"#).unwrap();
      fs::write(dir.path().join("wine.json"), "{ not json").unwrap();
      fs::write(dir.path().join("beer.json"), r#"{"other": 1}"#).unwrap();

      let data = load_menu_data(&Source::Dir(dir.path().to_path_buf())).await;

      assert_eq!(data.len(), 6);
      assert_eq!(data[&Category::Coffee].len(), 1);
      assert_eq!(data[&Category::Coffee][0].name.en, "Freddo");
      // Malformed and missing documents give the built-in items
      assert_eq!(data[&Category::Wine], fallback::items(Category::Wine));
      assert_eq!(data[&Category::Cocktails], fallback::items(Category::Cocktails));
      // A valid document without items is just empty
      assert!(data[&Category::Beer].is_empty());
   }
}
