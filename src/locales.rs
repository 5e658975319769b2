/* ===============================================================================
Restaurant website menu.
Built-in translation dictionaries. 14 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::language::LanguageCode;

pub fn builtin(lang: LanguageCode) -> &'static Value {
   match lang {
      LanguageCode::En => &EN,
      LanguageCode::El => &EL,
   }
}

static EN: Lazy<Value> = Lazy::new(|| json!({
   "nav": {
      "home": "Home",
      "about": "About Us",
      "coffee": "Coffee",
      "food": "Food",
      "beer": "Beer",
      "wine": "Wine",
      "spirits": "Spirits",
      "cocktails": "Cocktails",
      "contact": "Contact",
   },
   "welcome": {
      "title": "Welcome to BONOBO BAR",
      "subtitle": "Discover our selections in Rethymno",
   },
   "buttons": {
      "coffee": "Coffee",
      "food": "Food",
      "beer": "Beer",
      "wine": "Wine",
      "spirits": "Spirits",
      "cocktails": "Cocktails",
   },
   "sections": {
      "coffee": { "title": "Coffee Menu" },
      "food": { "title": "Food Menu" },
      "beer": { "title": "Beer" },
      "wine": { "title": "Wine" },
      "spirits": { "title": "Spirits" },
      "cocktails": { "title": "Cocktails" },
   },
   "search": {
      "placeholder": "Search the menu...",
   },
   "filters": {
      "all": "All",
      "popular": "Popular",
      "local": "Local",
      "hot": "Hot",
      "classic": "Classic",
   },
   "menu": {
      "empty": "No items found. Try a different filter or search term.",
      "no_matches": "No {category} items match your search.",
   },
   "tags": {
      "hot": "Hot",
      "signature": "Signature",
      "popular": "Popular",
      "salad": "Salad",
      "local": "Local",
      "glass": "By the glass",
      "traditional": "Traditional",
      "classic": "Classic",
   },
   "newsletter": {
      "placeholder": "Your email address",
      "subscribe": "Subscribe",
   },
   "footer": {
      "address": "Address: Rethymno, Crete, Greece",
      "hours": "Opening Hours: 9:00 - 02:00",
      "phone": "Phone: +30 XXXXXXXXXX",
      "rights": "All Rights Reserved.",
   },
}));

static EL: Lazy<Value> = Lazy::new(|| json!({
   "nav": {
      "home": "Αρχική",
      "about": "Σχετικά με εμάς",
      "coffee": "Καφές",
      "food": "Φαγητό",
      "beer": "Μπύρα",
      "wine": "Κρασί",
      "spirits": "Ποτά",
      "cocktails": "Κοκτέιλ",
      "contact": "Επικοινωνία",
   },
   "welcome": {
      "title": "Καλώς ήρθατε στο BONOBO BAR",
      "subtitle": "Ανακαλύψτε τις επιλογές μας στο Ρέθυμνο",
   },
   "buttons": {
      "coffee": "Καφές",
      "food": "Φαγητό",
      "beer": "Μπύρα",
      "wine": "Κρασί",
      "spirits": "Ποτά",
      "cocktails": "Κοκτέιλ",
   },
   "sections": {
      "coffee": { "title": "Μενού Καφέ" },
      "food": { "title": "Μενού Φαγητού" },
      "beer": { "title": "Μπύρα" },
      "wine": { "title": "Κρασί" },
      "spirits": { "title": "Ποτά" },
      "cocktails": { "title": "Κοκτέιλ" },
   },
   "search": {
      "placeholder": "Αναζήτηση στο μενού...",
   },
   "filters": {
      "all": "Όλα",
      "popular": "Δημοφιλή",
      "local": "Τοπικά",
      "hot": "Ζεστά",
      "classic": "Κλασικά",
   },
   "menu": {
      "empty": "Δεν βρέθηκαν αντικείμενα. Δοκιμάστε διαφορετικό φίλτρο ή όρο αναζήτησης.",
      "no_matches": "Δεν βρέθηκαν αντικείμενα {category} που να ταιριάζουν με την αναζήτησή σας.",
   },
   "tags": {
      "hot": "Ζεστό",
      "signature": "Σπεσιαλιτέ",
      "popular": "Δημοφιλές",
      "salad": "Σαλάτα",
      "local": "Τοπικό",
      "glass": "Σε ποτήρι",
      "traditional": "Παραδοσιακό",
      "classic": "Κλασικό",
   },
   "newsletter": {
      "placeholder": "Η διεύθυνση email σας",
      "subscribe": "Εγγραφή",
   },
   "footer": {
      "address": "Διεύθυνση: Ρέθυμνο, Κρήτη, Ελλάδα",
      "hours": "Ώρες Λειτουργίας: 9:00 - 02:00",
      "phone": "Τηλέφωνο: +30 XXXXXXXXXX",
      "rights": "Με επιφύλαξη παντός δικαιώματος.",
   },
}));
