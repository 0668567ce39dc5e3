use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

/// Write a status line with a colored `ok`/`fail` tag. No-op in JSON mode.
pub fn status_line(name: &str, ok: bool, detail: &str) -> io::Result<()> {
    if is_json() {
        return Ok(());
    }
    let mut out = stdout();
    out.set_color(ColorSpec::new().set_fg(Some(if ok { Color::Green } else { Color::Red })))?;
    write!(out, "{:>4}", if ok { "ok" } else { "fail" })?;
    out.reset()?;
    writeln!(out, "  {name}: {detail}")
}
