/* ===============================================================================
Restaurant website menu.
Main module. 21 May 2020.
----------------------------------------------------------------------------
Licensed under the terms of the GPL version 3.
http://www.gnu.org/licenses/gpl-3.0.html
Copyright (c) 2020-2026 by Artem Khomenko _mag12@yahoo.com.
=============================================================================== */

use std::env;
use chrono::NaiveTime;
use tokio::{io::{AsyncBufReadExt, BufReader}, sync::mpsc};
use tokio_stream::{wrappers::LinesStream, StreamExt};

mod commands;
mod document;
mod environment;
mod events;
mod language;
mod loc;
mod locales;
mod menu;
mod navigation;
mod page;
mod screen;
mod site;
mod storage;
mod theme;

use commands::Command;
use menu::{loader::{self, MenuData}, LoadTicket};
use site::Site;
use storage::LocalStorage;

// ============================================================================
// [Run!]
// ============================================================================
#[tokio::main]
async fn main() {
   if let Err(err) = run().await {
      log::error!("{}", err);
      std::process::exit(1);
   }
}

async fn run() -> Result<(), String> {
   let mut builder = pretty_env_logger::formatted_builder();
   builder.parse_filters(&env::var("RUST_LOG").unwrap_or_else(|_| String::from("info")));
   builder.init();

   log::info!("Starting...");

   // Settings from environments
   let vars = environment::Vars::from_env();
   log::info!("Local time {} ({})", vars.current_date_time().format("%H:%M"), vars.time_zone_info());

   let storage = LocalStorage::open(&vars.state_file);
   let mut site = Site::new(&vars, storage)?;
   site.start(vars.current_date_time(), vars.prefers_dark);

   let source = vars.menu_source();
   let ticket = site.begin_load();
   let data = loader::load_menu_data(&source).await;
   site.finish_load(ticket, data);
   println!("{}", screen::render(&site));

   // Background reloads report here
   let (tx, mut rx) = mpsc::unbounded_channel::<(LoadTicket, MenuData)>();
   let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

   loop {
      tokio::select! {
         line = lines.next() => {
            let line = match line {
               Some(line) => line.map_err(|err| format!("main::run stdin: {}", err))?,
               None => break,
            };

            match Command::from(&line) {
               Command::Quit => break,
               Command::Help => {
                  println!("{}", commands::help());
                  continue;
               }
               Command::Unknown(text) => {
                  println!("{}", text);
                  continue;
               }
               Command::Reload => {
                  let ticket = site.begin_load();
                  let tx = tx.clone();
                  let source = source.clone();
                  tokio::spawn(async move {
                     let data = loader::load_menu_data(&source).await;
                     if tx.send((ticket, data)).is_err() {
                        log::info!("main::reload nobody waits for the menu");
                     }
                  });
                  println!("Reloading...");
                  continue;
               }
               Command::Lang(code) => {
                  site.set_language(&code);
               }
               Command::Theme => {
                  site.toggle_theme();
               }
               Command::Search(query) => site.search(&query),
               Command::Filter(tag) => site.filter(&tag),
               Command::Page(category, number) => site.select_page(category, number),
               Command::Show(id) => {
                  site.show(&id);
               }
               Command::Click(id) => {
                  site.click(&id);
               }
               Command::Time(hour) => {
                  if let Some(now) = NaiveTime::from_hms_opt(hour, 0, 0) {
                     site.arrange(now);
                  }
               }
            }
            println!("{}", screen::render(&site));
         }

         Some((ticket, data)) = rx.recv() => {
            if site.finish_load(ticket, data) {
               println!("{}", screen::render(&site));
            }
         }
      }
   }

   log::info!("Bye");
   Ok(())
}
