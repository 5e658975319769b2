/* ===============================================================================
Restaurant website menu.
Rendering a category into a view description. 16 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use strum::IntoEnumIterator;

use crate::language::{LanguageCode, Localized};
use crate::loc::Loc;
use super::models::*;

pub const IMAGE_DIR: &str = "assets/images/menu";

pub struct RenderContext<'a> {
   pub loc: &'a Loc,
   pub lang: LanguageCode,
   pub price_unit: &'a str,
   pub generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageView {
   pub src: String,
   pub alt: String,
   pub lazy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
   pub tag: String,
   pub text: String,
   pub cached: Localized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
   pub item_id: Option<String>,
   pub name: String,
   pub description: String,
   pub price: String,
   pub image: Option<ImageView>,
   pub badges: Vec<Badge>,
   pub unavailable: bool,
   // Both languages, for switching without rendering again
   pub cached_name: Localized,
   pub cached_description: Localized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
   Empty, // nothing left after filter and paging
   NoMatches, // search found nothing in the visible section
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageView {
   pub kind: MessageKind,
   pub text: String,
   pub cached: Localized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageButton {
   pub number: usize,
   pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
   pub category: Category,
   pub cards: Vec<CardView>,
   pub message: Option<MessageView>,
   pub pager: Vec<PageButton>, // empty for a single page
   pub filtered_count: usize,
   pub total_pages: usize,
   pub generation: u64,
}

pub fn format_price(unit: &str, price: f64) -> String {
   format!("{}{:.2}", unit, price)
}

pub fn image_src(image: &str) -> String {
   if image.starts_with("http") {
      String::from(image)
   } else {
      format!("{}/{}", IMAGE_DIR, image)
   }
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
   if page_size == 0 { 0 } else { count.div_ceil(page_size) }
}

// Same text for every language through the lookup table
fn localized(ctx: &RenderContext, key: &str, fallback: &str, args: impl Fn(LanguageCode) -> Vec<(&'static str, String)>) -> Localized {
   let mut res = Localized::default();
   for lang in LanguageCode::iter() {
      let args = args(lang);
      let args: Vec<(&str, &str)> = args.iter().map(|(n, v)| (*n, v.as_str())).collect();
      let text = ctx.loc.get_formatted(key, Some(lang), &args)
      .unwrap_or_else(|| String::from(fallback));
      match lang {
         LanguageCode::En => res.en = text,
         LanguageCode::El => res.el = text,
      }
   }
   res
}

fn badge(ctx: &RenderContext, tag: &str) -> Badge {
   let cached = localized(ctx, &format!("tags.{}", tag), tag, |_| vec![]);
   Badge {
      tag: String::from(tag),
      text: String::from(cached.get(ctx.lang)),
      cached,
   }
}

fn card(ctx: &RenderContext, item: &MenuItem) -> CardView {
   let name = String::from(item.name.get(ctx.lang));
   CardView {
      item_id: item.id.clone(),
      description: String::from(item.description.get(ctx.lang)),
      price: format_price(ctx.price_unit, item.price),
      image: item.image.as_ref().map(|image| ImageView {
         src: image_src(image),
         alt: name.clone(),
         lazy: true,
      }),
      badges: item.categories.iter().map(|tag| badge(ctx, tag)).collect(),
      unavailable: !item.is_available(),
      cached_name: item.name.clone(),
      cached_description: item.description.clone(),
      name,
   }
}

pub fn notice(ctx: &RenderContext, kind: MessageKind, category: Category) -> MessageView {
   let cached = match kind {
      MessageKind::Empty => localized(ctx, "menu.empty", "", |_| vec![]),
      MessageKind::NoMatches => localized(ctx, "menu.no_matches", "", |lang| {
         let name = ctx.loc.get_translation(&format!("nav.{}", category), Some(lang))
         .unwrap_or(category.as_ref())
         .to_lowercase();
         vec![("category", name)]
      }),
   };

   MessageView {
      kind,
      text: String::from(cached.get(ctx.lang)),
      cached,
   }
}

// Filter, cut out the page and describe what to show
pub fn render(ctx: &RenderContext, category: Category, items: &[MenuItem], filter: &Filter, page: usize, page_size: usize) -> SectionView {
   let filtered: Vec<&MenuItem> = items.iter()
   .filter(|item| filter.accepts(item))
   .collect();

   let total_pages = total_pages(filtered.len(), page_size);
   let start = page.saturating_sub(1).saturating_mul(page_size);

   let cards: Vec<CardView> = filtered.iter()
   .skip(start)
   .take(page_size)
   .map(|item| card(ctx, item))
   .collect();

   let message = if cards.is_empty() {
      Some(notice(ctx, MessageKind::Empty, category))
   } else {
      None
   };

   let pager = if total_pages > 1 && message.is_none() {
      (1..=total_pages)
      .map(|number| PageButton { number, active: number == page })
      .collect()
   } else {
      vec![]
   };

   SectionView {
      category,
      cards,
      message,
      pager,
      filtered_count: filtered.len(),
      total_pages,
      generation: ctx.generation,
   }
}

// Swap texts from the cached translations, nothing else changes
pub fn update_language(view: &mut SectionView, lang: LanguageCode) {
   for card in view.cards.iter_mut() {
      card.name = String::from(card.cached_name.get(lang));
      card.description = String::from(card.cached_description.get(lang));
      if let Some(image) = card.image.as_mut() {
         image.alt = card.name.clone();
      }
      for badge in card.badges.iter_mut() {
         badge.text = String::from(badge.cached.get(lang));
      }
   }

   if let Some(message) = view.message.as_mut() {
      message.text = String::from(message.cached.get(lang));
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::events;

   fn loc() -> Loc {
      let (notifier, _) = events::channel();
      Loc::load(None, notifier).unwrap()
   }

   fn ctx(loc: &Loc, lang: LanguageCode) -> RenderContext<'_> {
      RenderContext { loc, lang, price_unit: "€", generation: 7 }
   }

   fn items(n: usize) -> Vec<MenuItem> {
      (0..n).map(|i| MenuItem {
         id: Some(format!("it{}", i)),
         name: Localized::new(&format!("Item {}", i), &format!("Είδος {}", i)),
         description: Localized::new("descr", "περιγραφή"),
         price: i as f64 + 0.5,
         image: if i % 2 == 0 { Some(format!("{}.jpg", i)) } else { Some(String::from("https://cdn/x.png")) },
         categories: if i % 3 == 0 { vec![String::from("popular")] } else { vec![String::from("unknown-tag")] },
         available: None,
      })
      .collect()
   }

   #[test]
   fn prices_have_two_decimals() {
      assert_eq!(format_price("€", 2.5), "€2.50");
      assert_eq!(format_price("€", 8.0), "€8.00");
      assert_eq!(format_price("$", 3.999), "$4.00");
   }

   #[test]
   fn card_contents() {
      let loc = loc();
      let view = render(&ctx(&loc, LanguageCode::El), Category::Food, &items(2), &Filter::All, 1, 12);
      assert_eq!(view.generation, 7);
      assert_eq!(view.cards.len(), 2);
      let first = &view.cards[0];
      assert_eq!(first.name, "Είδος 0");
      assert_eq!(first.description, "περιγραφή");
      assert_eq!(first.price, "€0.50");
      assert_eq!(first.image.as_ref().unwrap().src, "assets/images/menu/0.jpg");
      assert_eq!(first.image.as_ref().unwrap().alt, "Είδος 0");
      assert_eq!(first.badges[0].text, "Δημοφιλές");
      assert_eq!(view.cards[1].image.as_ref().unwrap().src, "https://cdn/x.png");
      // Unknown tag shows as is
      assert_eq!(view.cards[1].badges[0].text, "unknown-tag");
      assert!(view.pager.is_empty());
   }

   #[test]
   fn paging_bounds_and_buttons() {
      let loc = loc();
      let ctx = ctx(&loc, LanguageCode::En);
      let all = items(30);

      for page in 1..=3 {
         let view = render(&ctx, Category::Coffee, &all, &Filter::All, page, 12);
         assert!(view.cards.len() <= 12);
         assert_eq!(view.total_pages, 3);
         assert_eq!(view.pager.len(), 3);
         assert_eq!(view.pager.iter().filter(|b| b.active).count(), 1);
         assert!(view.pager[page - 1].active);
      }

      let last = render(&ctx, Category::Coffee, &all, &Filter::All, 3, 12);
      assert_eq!(last.cards.len(), 6);
      assert_eq!(last.cards[0].item_id.as_deref(), Some("it24"));

      let beyond = render(&ctx, Category::Coffee, &all, &Filter::All, 4, 12);
      assert!(beyond.cards.is_empty());
      assert_eq!(beyond.message.as_ref().unwrap().kind, MessageKind::Empty);
   }

   #[test]
   fn huge_page_size_is_one_page() {
      let loc = loc();
      let view = render(&ctx(&loc, LanguageCode::En), Category::Coffee, &items(2), &Filter::All, 1, usize::MAX);
      assert_eq!(view.cards.len(), 2);
      assert_eq!(view.total_pages, 1);
      assert!(view.pager.is_empty());
      assert_eq!(total_pages(usize::MAX, usize::MAX), 1);

      let beyond = render(&ctx(&loc, LanguageCode::En), Category::Coffee, &items(2), &Filter::All, 3, usize::MAX);
      assert!(beyond.cards.is_empty());
   }

   #[test]
   fn filter_applies_before_paging() {
      let loc = loc();
      let ctx = ctx(&loc, LanguageCode::En);
      let all = items(30);
      let filter = Filter::from("popular");

      let view = render(&ctx, Category::Coffee, &all, &filter, 1, 4);
      assert_eq!(view.filtered_count, 10);
      assert_eq!(view.total_pages, total_pages(10, 4));
      assert_eq!(view.pager.len(), 3);
      assert!(view.cards.iter().all(|c| c.badges.iter().any(|b| b.tag == "popular")));
   }

   #[test]
   fn empty_result_shows_message() {
      let loc = loc();
      let view = render(&ctx(&loc, LanguageCode::En), Category::Wine, &items(5), &Filter::from("vegan"), 1, 12);
      assert!(view.cards.is_empty());
      assert!(view.pager.is_empty());
      let message = view.message.unwrap();
      assert_eq!(message.text, "No items found. Try a different filter or search term.");
      assert!(message.cached.el.starts_with("Δεν βρέθηκαν"));
   }

   #[test]
   fn rendering_is_idempotent() {
      let loc = loc();
      let ctx = ctx(&loc, LanguageCode::El);
      let all = items(17);
      let filter = Filter::from("popular");
      assert_eq!(render(&ctx, Category::Beer, &all, &filter, 2, 3), render(&ctx, Category::Beer, &all, &filter, 2, 3));
   }

   #[test]
   fn language_switch_matches_fresh_render() {
      let loc = loc();
      let all = items(5);
      let mut view = render(&ctx(&loc, LanguageCode::En), Category::Food, &all, &Filter::All, 1, 12);
      update_language(&mut view, LanguageCode::El);
      let fresh = render(&ctx(&loc, LanguageCode::El), Category::Food, &all, &Filter::All, 1, 12);
      assert_eq!(view, fresh);
   }

   #[test]
   fn no_matches_names_the_category() {
      let loc = loc();
      let message = notice(&ctx(&loc, LanguageCode::En), MessageKind::NoMatches, Category::Wine);
      assert_eq!(message.text, "No wine items match your search.");
      assert_eq!(message.cached.el, "Δεν βρέθηκαν αντικείμενα κρασί που να ταιριάζουν με την αναζήτησή σας.");
   }
}
