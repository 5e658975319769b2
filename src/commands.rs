/* ===============================================================================
Restaurant website menu.
Terminal commands. 31 May 2020.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use strum::{AsRefStr, EnumIter, EnumMessage, EnumString, IntoEnumIterator};

use crate::menu::models::Category;

// First word of the input line
#[derive(AsRefStr, EnumString, EnumIter, EnumMessage, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
enum Verb {
   #[strum(message = "lang <en|el>", detailed_message = "switch the language")]
   Lang,
   #[strum(message = "theme", detailed_message = "toggle light and dark theme")]
   Theme,
   #[strum(message = "search [text]", detailed_message = "search names and descriptions, empty text clears")]
   Search,
   #[strum(message = "filter <tag|all>", detailed_message = "show only items with the tag")]
   Filter,
   #[strum(message = "page <category> <n>", detailed_message = "open a page of the category")]
   Page,
   #[strum(message = "show <category>", detailed_message = "open the section of the category")]
   Show,
   #[strum(message = "click <element id>", detailed_message = "click an element, like coffee-btn or lang-el")]
   Click,
   #[strum(message = "time <hour>", detailed_message = "arrange buttons for the hour of the day")]
   Time,
   #[strum(message = "reload", detailed_message = "load the menu again in background")]
   Reload,
   #[strum(message = "help", detailed_message = "this text")]
   Help,
   #[strum(message = "quit", detailed_message = "leave")]
   Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
   Lang(String),
   Theme,
   Search(String),
   Filter(String),
   Page(Category, usize),
   Show(String), // section id
   Click(String), // element id
   Time(u32),
   Reload,
   Help,
   Quit,
   Unknown(String), // with the reason
}

impl Command {
   pub fn from(input: &str) -> Command {
      let input = input.trim();
      let (verb, rest) = input.split_once(char::is_whitespace).unwrap_or((input, ""));
      let rest = rest.trim();

      let verb: Verb = match verb.to_lowercase().parse() {
         Ok(verb) => verb,
         Err(_) => return Command::Unknown(format!("unknown command '{}', try help", verb)),
      };

      match verb {
         Verb::Lang if !rest.is_empty() => Command::Lang(String::from(rest)),
         Verb::Theme => Command::Theme,
         Verb::Search => Command::Search(String::from(rest)),
         Verb::Filter if !rest.is_empty() => Command::Filter(String::from(rest)),
         Verb::Page => Self::page(rest),
         Verb::Show if !rest.is_empty() => Command::Show(section_id(rest)),
         Verb::Click if !rest.is_empty() => Command::Click(String::from(rest)),
         Verb::Time => match rest.parse::<u32>() {
            Ok(hour) if hour < 24 => Command::Time(hour),
            _ => Command::Unknown(format!("hour must be 0..23, not '{}'", rest)),
         },
         Verb::Reload => Command::Reload,
         Verb::Help => Command::Help,
         Verb::Quit => Command::Quit,
         _ => Self::usage(verb),
      }
   }

   fn page(rest: &str) -> Command {
      let mut parts = rest.split_whitespace();
      let category = parts.next().and_then(|s| s.parse::<Category>().ok());
      let number = parts.next().and_then(|s| s.parse::<usize>().ok());
      match (category, number) {
         (Some(category), Some(number)) if number > 0 => Command::Page(category, number),
         _ => Self::usage(Verb::Page),
      }
   }

   fn usage(verb: Verb) -> Command {
      Command::Unknown(format!("usage: {}", verb.get_message().unwrap_or(verb.as_ref())))
   }
}

// Plain category names are allowed instead of section ids
fn section_id(s: &str) -> String {
   match s.parse::<Category>() {
      Ok(category) => category.section_id(),
      Err(_) => String::from(s),
   }
}

pub fn help() -> String {
   Verb::iter()
   .map(|verb| format!("  {:<22}{}",
      verb.get_message().unwrap_or_default(),
      verb.get_detailed_message().unwrap_or_default()
   ))
   .collect::<Vec<_>>()
   .join("\n")
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn parses_commands() {
      assert_eq!(Command::from("lang el"), Command::Lang(String::from("el")));
      assert_eq!(Command::from("  THEME "), Command::Theme);
      assert_eq!(Command::from("search  mojito  "), Command::Search(String::from("mojito")));
      assert_eq!(Command::from("search"), Command::Search(String::new()));
      assert_eq!(Command::from("filter popular"), Command::Filter(String::from("popular")));
      assert_eq!(Command::from("page cocktails 2"), Command::Page(Category::Cocktails, 2));
      assert_eq!(Command::from("show wine"), Command::Show(String::from("wine-section")));
      assert_eq!(Command::from("show wine-section"), Command::Show(String::from("wine-section")));
      assert_eq!(Command::from("click coffee-btn"), Command::Click(String::from("coffee-btn")));
      assert_eq!(Command::from("time 21"), Command::Time(21));
      assert_eq!(Command::from("reload"), Command::Reload);
      assert_eq!(Command::from("quit"), Command::Quit);
   }

   #[test]
   fn bad_input_is_unknown() {
      for input in ["", "dance", "lang", "page tea 1", "page wine 0", "time 24", "time x", "show"] {
         assert!(matches!(Command::from(input), Command::Unknown(_)), "{}", input);
      }
      assert_eq!(Command::from("page"), Command::Unknown(String::from("usage: page <category> <n>")));
   }

   #[test]
   fn help_lists_every_verb() {
      let text = help();
      assert_eq!(text.lines().count(), Verb::iter().count());
      assert!(text.contains("page <category> <n>"));
   }
}
