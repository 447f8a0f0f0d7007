// SPDX-License-Identifier: MPL-2.0
use eventhub::app::{self, Flags};

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("failed to build logger instance");

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        server: args.opt_value_from_str("--server").unwrap_or(None),
        user: args.opt_value_from_str("--user").unwrap_or(None),
    };

    app::run(flags)
}
