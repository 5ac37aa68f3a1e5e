use std::io;

use chrono;
use fern;
use log;

pub fn init() {
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(io::stderr())
        .apply();
    if let Err(err) = result {
        eprintln!("logging initialization failed: {}", err);
    }
    debug!("hello");
}
