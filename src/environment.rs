/* ===============================================================================
Restaurant website menu.
Global vars. 18 July 2020.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use chrono::{FixedOffset, NaiveDateTime, Utc};
use smart_default::SmartDefault;
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use crate::menu::{loader::Source, DEFAULT_PAGE_SIZE};

// Enviroment variables
#[derive(SmartDefault, Clone, Debug, PartialEq)]
pub struct Vars {
   // Base url or directory with <category>.json
   #[default(String::from("data/menu"))]
   pub menu_data_url: String,

   // Directory with en.json and el.json instead of the built-in texts
   pub locales_dir: Option<PathBuf>,

   // Local storage file
   #[default(PathBuf::from("local_storage.json"))]
   pub state_file: PathBuf,

   // Price prefix
   #[default(String::from("€"))]
   pub price_unit: String,

   #[default(DEFAULT_PAGE_SIZE)]
   pub page_size: usize,

   // Time zone, hours from UTC
   pub time_zone: i32,

   // Colour scheme of the OS
   pub prefers_dark: bool,
}

// Value of the variable or the default, with a note why
fn var<T>(name: &str, default: T) -> T
where T: FromStr + Display, T::Err: Display {
   match env::var(name) {
      Ok(s) => match s.trim().parse::<T>() {
         Ok(value) => {
            log::info!("{}={}", name, value);
            value
         }
         Err(e) => {
            log::warn!("Something wrong with {}: {}, using {}", name, e, default);
            default
         }
      }
      Err(_) => {
         log::debug!("There is no environment variable {}, using {}", name, default);
         default
      }
   }
}

// Items per page, more than this is surely a typo
pub const MAX_PAGE_SIZE: usize = 1000;

fn page_size(name: &str, default: usize) -> usize {
   match var(name, default) {
      n if (1..=MAX_PAGE_SIZE).contains(&n) => n,
      n => {
         log::warn!("{} must be 1..{}, not {}, using {}", name, MAX_PAGE_SIZE, n, default);
         default
      }
   }
}

// Offsets on Earth stay within these bounds
fn time_zone(name: &str, default: i32) -> i32 {
   match var(name, default) {
      n if (-12..=14).contains(&n) => n,
      n => {
         log::warn!("{} {} is out of range, using UTC", name, n);
         0
      }
   }
}

impl Vars {
   pub fn from_env() -> Self {
      let default = Self::default();
      let page_size = page_size("PAGE_SIZE", default.page_size);
      let time_zone = time_zone("TIME_ZONE", default.time_zone);

      let locales_dir = env::var("LOCALES_DIR")
      .ok()
      .filter(|s| !s.trim().is_empty())
      .map(PathBuf::from);

      let state_file = env::var("STATE_FILE")
      .ok()
      .filter(|s| !s.trim().is_empty())
      .map(PathBuf::from)
      .unwrap_or(default.state_file);

      Vars {
         menu_data_url: var("MENU_DATA_URL", default.menu_data_url),
         locales_dir,
         state_file,
         price_unit: var("PRICE_UNIT", default.price_unit),
         page_size,
         time_zone,
         prefers_dark: var("PREFERS_DARK", default.prefers_dark),
      }
   }

   pub fn menu_source(&self) -> Source {
      Source::parse(&self.menu_data_url)
   }

   // Current local time
   pub fn current_date_time(&self) -> NaiveDateTime {
      match FixedOffset::east_opt(self.time_zone * 3600) {
         Some(our_timezone) => Utc::now().with_timezone(&our_timezone).naive_local(),
         None => Utc::now().naive_utc(),
      }
   }

   // String with info about time zone
   pub fn time_zone_info(&self) -> String {
      if self.time_zone > 0 {
         format!("UTC+{}", self.time_zone)
      } else if self.time_zone < 0 {
         format!("UTC{}", self.time_zone)
      } else {
         String::from("UTC")
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn defaults() {
      let vars = Vars::default();
      assert_eq!(vars.menu_data_url, "data/menu");
      assert_eq!(vars.page_size, 12);
      assert_eq!(vars.price_unit, "€");
      assert_eq!(vars.state_file, PathBuf::from("local_storage.json"));
      assert_eq!(vars.locales_dir, None);
      assert!(!vars.prefers_dark);
      assert_eq!(vars.menu_source(), Source::Dir(PathBuf::from("data/menu")));
   }

   #[test]
   fn time_zone_text() {
      let mut vars = Vars::default();
      assert_eq!(vars.time_zone_info(), "UTC");
      vars.time_zone = 2;
      assert_eq!(vars.time_zone_info(), "UTC+2");
      vars.time_zone = -5;
      assert_eq!(vars.time_zone_info(), "UTC-5");
   }

   #[test]
   fn bad_value_keeps_default() {
      // Name nobody else sets
      env::set_var("BONOBO_TEST_NUMBER", "twelve");
      assert_eq!(var("BONOBO_TEST_NUMBER", 7usize), 7);
      env::set_var("BONOBO_TEST_NUMBER", " 9 ");
      assert_eq!(var("BONOBO_TEST_NUMBER", 7usize), 9);
      env::remove_var("BONOBO_TEST_NUMBER");
      assert_eq!(var("BONOBO_TEST_NUMBER", true), true);
   }

   #[test]
   fn out_of_range_numbers_keep_defaults() {
      env::set_var("BONOBO_TEST_PAGE_SIZE", "0");
      assert_eq!(page_size("BONOBO_TEST_PAGE_SIZE", 12), 12);
      env::set_var("BONOBO_TEST_PAGE_SIZE", "18446744073709551615");
      assert_eq!(page_size("BONOBO_TEST_PAGE_SIZE", 12), 12);
      env::set_var("BONOBO_TEST_PAGE_SIZE", "30");
      assert_eq!(page_size("BONOBO_TEST_PAGE_SIZE", 12), 30);
      env::remove_var("BONOBO_TEST_PAGE_SIZE");

      env::set_var("BONOBO_TEST_TIME_ZONE", "30");
      assert_eq!(time_zone("BONOBO_TEST_TIME_ZONE", 3), 0);
      env::set_var("BONOBO_TEST_TIME_ZONE", "-13");
      assert_eq!(time_zone("BONOBO_TEST_TIME_ZONE", 3), 0);
      env::set_var("BONOBO_TEST_TIME_ZONE", "-5");
      assert_eq!(time_zone("BONOBO_TEST_TIME_ZONE", 3), -5);
      env::remove_var("BONOBO_TEST_TIME_ZONE");
   }
}
