/* ===============================================================================
Restaurant website menu.
Built-in menu used when a menu document cannot be loaded. 15 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::collections::BTreeMap;
use once_cell::sync::Lazy;

use crate::language::Localized;
use super::models::{Category, MenuItem};

pub fn items(category: Category) -> Vec<MenuItem> {
   FALLBACK.get(&category).cloned().unwrap_or_default()
}

fn entry(id: &str, name: (&str, &str), descr: (&str, &str), price: f64, image: &str, tags: &[&str]) -> MenuItem {
   MenuItem {
      id: Some(String::from(id)),
      name: Localized::new(name.0, name.1),
      description: Localized::new(descr.0, descr.1),
      price,
      image: Some(String::from(image)),
      categories: tags.iter().map(|t| String::from(*t)).collect(),
      available: Some(true),
   }
}

static FALLBACK: Lazy<BTreeMap<Category, Vec<MenuItem>>> = Lazy::new(|| {
   let mut res = BTreeMap::new();

   res.insert(Category::Coffee, vec![
      entry("esp001", ("Espresso", "Εσπρέσσο"),
         ("Short black coffee", "Δυνατός μαύρος καφές"),
         2.5, "espresso.jpg", &["hot", "signature"]),
      entry("cap001", ("Cappuccino", "Καπουτσίνο"),
         ("Espresso with steamed milk and foam", "Εσπρέσσο με αφρόγαλα"),
         3.5, "cappuccino.jpg", &["hot", "popular"]),
   ]);

   res.insert(Category::Food, vec![
      entry("sal001", ("Greek Salad", "Χωριάτικη Σαλάτα"),
         ("Fresh tomatoes, cucumber, onion, feta cheese and olives", "Φρέσκες ντομάτες, αγγούρι, κρεμμύδι, φέτα και ελιές"),
         8.5, "greek-salad.jpg", &["salad", "popular"]),
   ]);

   res.insert(Category::Beer, vec![
      entry("beer001", ("Mythos", "Μύθος"),
         ("Greek lager beer (330ml)", "Ελληνική λάγκερ μπύρα (330ml)"),
         4.0, "mythos.jpg", &["local", "popular"]),
   ]);

   res.insert(Category::Wine, vec![
      entry("wine001", ("House White Wine", "Λευκό Κρασί Σπιτιού"),
         ("Local Cretan Vidiano (Glass)", "Τοπικό Κρητικό Βιδιανό (Ποτήρι)"),
         4.5, "white-wine.jpg", &["local", "glass"]),
   ]);

   res.insert(Category::Spirits, vec![
      entry("spirit001", ("Ouzo", "Ούζο"),
         ("Traditional Greek anise-flavored spirit", "Παραδοσιακό Ελληνικό απόσταγμα με άρωμα γλυκάνισου"),
         5.0, "ouzo.jpg", &["local", "traditional"]),
   ]);

   res.insert(Category::Cocktails, vec![
      entry("cocktail001", ("Mojito", "Μοχίτο"),
         ("White rum, sugar, lime, soda water and mint", "Λευκό ρούμι, ζάχαρη, λάιμ, σόδα και δυόσμος"),
         8.0, "mojito.jpg", &["classic", "popular"]),
   ]);

   res
});
