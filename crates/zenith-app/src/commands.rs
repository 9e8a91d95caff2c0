//! Line commands for the headless host.

use std::io::Write;

use anyhow::{Result, anyhow, bail};

use zenith_core::Launcher;
use zenith_core::catalog::seed;
use zenith_core::overlay::OverlayKind;
use zenith_types::input::{Button, InputEvent};

const HELP: &str = "\
up | down | left | right | ok | back   remote d-pad
vol+ | vol-                            volume keys
hover N                                point at grid tile N
type TEXT | bs                         physical keyboard
tick MS                                advance time
search TEXT                            run a recommendation query
keyboard                               show the on-screen keyboard
open NAME | close                      overlays (settings, weather, deck, ...)
category ID|N                          click a sidebar category
dock N                                 launch dock favorite N
lights | pip expand | pip stop         widgets and picture-in-picture
state | help | quit";

/// One parsed host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(InputEvent),
    Type(String),
    Tick(u64),
    Search(String),
    Keyboard,
    Open(OverlayKind),
    Close,
    Category(usize),
    Dock(usize),
    Lights,
    PipExpand,
    PipStop,
    State,
    Help,
}

/// Whether the host loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let button = |b| Command::Event(InputEvent::ButtonPress(b));
    let command = match verb.to_ascii_lowercase().as_str() {
        "up" => button(Button::Up),
        "down" => button(Button::Down),
        "left" => button(Button::Left),
        "right" => button(Button::Right),
        "ok" | "enter" | "select" => button(Button::Confirm),
        "back" | "esc" => button(Button::Cancel),
        "vol+" => button(Button::VolumeUp),
        "vol-" => button(Button::VolumeDown),
        "hover" => Command::Event(InputEvent::Hover {
            index: number(verb, rest)?,
        }),
        "type" => Command::Type(required(verb, rest)?.to_string()),
        "bs" => Command::Event(InputEvent::Backspace),
        "tick" => Command::Tick(number(verb, rest)?),
        "search" => Command::Search(required(verb, rest)?.to_string()),
        "keyboard" => Command::Keyboard,
        "open" => Command::Open(required(verb, rest)?.parse()?),
        "close" => Command::Close,
        "category" => Command::Category(category(rest)?),
        "dock" => Command::Dock(number(verb, rest)?),
        "lights" => Command::Lights,
        "pip" => match rest {
            "expand" => Command::PipExpand,
            "stop" => Command::PipStop,
            _ => bail!("usage: pip expand|stop"),
        },
        "state" => Command::State,
        "help" => Command::Help,
        "quit" | "exit" => Command::Event(InputEvent::Quit),
        other => bail!("unknown command '{other}' (try 'help')"),
    };
    Ok(Some(command))
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("'{verb}' needs an argument");
    }
    Ok(rest)
}

fn number<T: std::str::FromStr>(verb: &str, rest: &str) -> Result<T> {
    required(verb, rest)?
        .parse()
        .map_err(|_| anyhow!("'{verb}' expects a number, got '{rest}'"))
}

fn category(rest: &str) -> Result<usize> {
    if let Ok(n) = rest.parse::<usize>() {
        return Ok(n);
    }
    seed::category_index(rest).ok_or_else(|| anyhow!("unknown category '{rest}'"))
}

/// Run a command against the launcher.
pub fn apply(command: Command, launcher: &mut Launcher, out: &mut impl Write) -> Result<Flow> {
    match command {
        Command::Event(event) => {
            let quit = event == InputEvent::Quit;
            launcher.handle_event(&event);
            if quit {
                return Ok(Flow::Quit);
            }
        },
        Command::Type(text) => {
            for c in text.chars() {
                launcher.handle_event(&InputEvent::TextInput(c));
            }
        },
        Command::Tick(ms) => launcher.tick(ms),
        Command::Search(query) => launcher.search(&query),
        Command::Keyboard => {
            if !launcher.open_keyboard() {
                log::warn!("Keyboard unavailable right now");
            }
        },
        Command::Open(kind) => {
            if !launcher.open_overlay(kind) {
                log::warn!("Cannot open '{kind}' here");
            }
        },
        Command::Close => launcher.close_overlay(),
        Command::Category(index) => launcher.select_category(index),
        Command::Dock(index) => {
            if !launcher.launch_dock(index) {
                log::warn!("Dock slot {index} unavailable");
            }
        },
        Command::Lights => {
            let on = launcher.toggle_lights();
            log::info!("Lights {}", if on { "on" } else { "off" });
        },
        Command::PipExpand => launcher.expand_pip(),
        Command::PipStop => launcher.stop_pip(),
        Command::State => {
            for (i, item) in launcher.visible_items().iter().enumerate() {
                writeln!(out, "# {i:>2} {} ({:?})", item.title, item.kind)?;
            }
        },
        Command::Help => writeln!(out, "{HELP}")?,
    }
    Ok(Flow::Continue)
}
