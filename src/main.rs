use std::env;
use std::io;

use log::info;

use contact_book::config;
use contact_book::logger::initialize_logger;
use contact_book::{handle_session, ContactBook, MyResult, Options};

fn main() -> MyResult<()> {
    let opt = match env::args().nth(1) {
        Some(path) => config::from_path(path)?.to_options()?,
        None => Options::default(),
    };

    initialize_logger(opt.log_level);
    info!("starting contact-book with {} buckets", opt.capacity);

    let mut book = ContactBook::from_options(&opt)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    handle_session(&mut book, stdin.lock(), &mut out)
}
