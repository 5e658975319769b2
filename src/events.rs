/* ===============================================================================
Restaurant website menu.
In-page notifications. 14 Oct 2026.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use derive_more::From;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::language::LanguageCode;
use crate::theme::Theme;

// Broadcast to whoever listens
#[derive(From, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
   LanguageChanged(LanguageCode),
   ThemeChanged(Theme),
}

#[derive(Clone)]
pub struct Notifier {
   tx: UnboundedSender<Notification>,
}

impl Notifier {
   pub fn send<N: Into<Notification>>(&self, n: N) {
      let n = n.into();
      if let Err(err) = self.tx.send(n) {
         log::info!("events::send no listeners for {:?}", err.0);
      }
   }
}

pub struct Listener {
   rx: UnboundedReceiver<Notification>,
}

impl Listener {
   // Everything queued so far, in order of sending
   pub fn drain(&mut self) -> Vec<Notification> {
      let mut res = vec![];
      while let Ok(n) = self.rx.try_recv() {
         res.push(n);
      }
      res
   }
}

pub fn channel() -> (Notifier, Listener) {
   let (tx, rx) = mpsc::unbounded_channel();
   (Notifier { tx }, Listener { rx })
}
