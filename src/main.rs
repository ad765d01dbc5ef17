// SPDX-License-Identifier: MPL-2.0
//! Scripted overlay session on the headless document.
//!
//! Usage: `ephemera [--lang <code>] [--config-dir <path>]`
//!
//! Set `RUST_LOG=ephemera=debug` to follow the overlay lifecycle.

use ephemera::config;
use ephemera::i18n::I18n;
use ephemera::paths;
use ephemera::surface::{Document, Surface};
use ephemera::ui::ephemeral::{
    ConfirmOptions, Event, Manager, ProgressOptions, ToastOptions, TooltipOptions,
};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
ephemera - scripted overlay session

USAGE:
  ephemera [OPTIONS]

OPTIONS:
  --lang <code>         Locale for default labels (en-US, fr)
  --config-dir <path>   Directory holding settings.toml
  -h, --help            Print this help
";

fn main() {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return;
    }
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("invalid --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("invalid --config-dir: {err}");
            None
        });

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    paths::init_cli_override(config_dir);
    let (config, warning) = config::load();
    let i18n = I18n::new(lang, &config);
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let mut doc = Document::new();
    let save = doc.create_element("button");
    doc.set_element_id(save, "save");
    doc.set_text(save, "Save");
    let body = doc.body();
    doc.append_child(body, save);

    let mut manager = Manager::from_config(doc, &config, &i18n);
    let frame = Duration::from_millis(config::FRAME_INTERVAL_MS);

    manager.toast(ToastOptions::new("Session started"));
    manager.tooltip(TooltipOptions::new("#save", "Save the document"));
    let upload = manager.progress(ProgressOptions::new().text("Uploading"));
    manager.advance(frame);
    upload.update(&mut manager, 60.0);

    let mut answer = manager.confirm(ConfirmOptions::new("Overwrite the remote copy?"));
    manager.advance(frame);
    if let Some(ok) = manager
        .surface()
        .query_all(".eph-btn-primary")
        .last()
        .copied()
    {
        manager.handle(Event::Click(ok));
    }
    println!("confirmed: {:?}", answer.try_take());

    println!("{}", manager.surface().dump());

    upload.complete(&mut manager);
    manager.advance(Duration::from_secs(5));
    println!("live overlays after 5s: {}", manager.registry().len());
}
