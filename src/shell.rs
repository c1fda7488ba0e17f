use crate::models::{EntryContext, Screen, SupportInfo};
use crate::state::AppState;
use std::io::{self, BufRead, Write};
use tracing::warn;

const HELP: &str = "\
commands:
  toggle          switch the connect button ON/OFF
  region <NAME>   select a region
  regions         list regions
  config <TEXT>   replace the stored configuration
  status          show the status panel
  support         show support contacts
  quit            exit";

/// Line-oriented stand-in for the app window. While no configuration is
/// stored every line is taken as a configuration attempt, as on the
/// first-run screen.
pub fn run_shell<R: BufRead, W: Write>(
    state: &mut AppState,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    if state.screen() == Screen::ConfigEntry {
        writeln!(out, "Enter a VPN configuration to connect")?;
    } else {
        print_panel(state, out)?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(e) => {
                warn!("Ignoring shell input that is not UTF-8: {}", e);
                writeln!(out, "input is not valid UTF-8, line ignored")?;
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        if state.screen() == Screen::ConfigEntry {
            let feedback = state.submit_config(line, EntryContext::Onboarding);
            writeln!(out, "{}", feedback.message)?;
            if state.screen() == Screen::Main {
                print_panel(state, out)?;
            }
            continue;
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd {
            "" => {}
            "toggle" => {
                state.toggle_connection();
                print_panel(state, out)?;
            }
            "region" => match state.select_region(rest) {
                Ok(()) => print_panel(state, out)?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            },
            "regions" => print_regions(state, out)?,
            "config" => {
                let feedback = state.submit_config(rest, EntryContext::Update);
                writeln!(out, "{}", feedback.message)?;
            }
            "status" => print_panel(state, out)?,
            "support" => print_support(&state.support_info(), out)?,
            "help" => writeln!(out, "{}", HELP)?,
            other => writeln!(out, "unknown command '{}', try 'help'", other)?,
        }
    }

    Ok(())
}

pub(crate) fn print_panel<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    for line in state.status_panel().lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One region per line, the selected one marked with `*`.
pub(crate) fn print_regions<W: Write>(state: &AppState, out: &mut W) -> io::Result<()> {
    for region in state.regions() {
        let marker = if region.name == state.current_region() {
            "*"
        } else {
            " "
        };
        writeln!(out, "{} {}", marker, region.name)?;
    }
    Ok(())
}

pub(crate) fn print_support<W: Write>(info: &SupportInfo, out: &mut W) -> io::Result<()> {
    writeln!(out, "Email: {}", info.email)?;
    writeln!(out, "Telegram: {}", info.telegram)?;
    writeln!(out, "Hours: {}", info.hours)
}
