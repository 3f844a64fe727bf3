//! Read-eval-render loop over a line-oriented input.

use std::io::{self, BufRead, Write};

use nano_browser::BrowserError;

use crate::app_state::Session;
use crate::commands::{Command, CommandOutput};
use crate::render::render;

/// Open `address`, reporting failure on `out` instead of aborting.
pub fn open_start_page<W: Write>(
    session: &mut Session,
    address: &str,
    out: &mut W,
) -> io::Result<()> {
    let opened = session.controller.navigate_to(address).map(|_| ());
    if let Err(e) = opened {
        log::warn!("Start page {address:?} failed: {e}");
        report_error(session, &e, out)?;
    }
    Ok(())
}

/// Process commands from `input` until it ends or the user quits.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", session.title)?;
    redraw(session, out)?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = Command::parse(&line) else {
            continue;
        };
        log::debug!("Command: {cmd:?}");

        match cmd.execute(session) {
            Ok(CommandOutput::Quit) => break,
            Ok(CommandOutput::Text(text)) => writeln!(out, "{text}")?,
            Ok(CommandOutput::None) => {},
            Err(e) => {
                report_error(session, &e, out)?;
                continue;
            },
        }
        if cmd.redraws() {
            redraw(session, out)?;
        }
    }
    out.flush()
}

fn redraw<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let view = session.controller.view_state();
    writeln!(out, "{}", render(&view, &session.labels, &session.status))
}

fn report_error<W: Write>(session: &Session, err: &BrowserError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}: {err}", session.labels.get("ErrorTitle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nano_browser::BrowserConfig;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new(&BrowserConfig::default());
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_title_and_initial_view() {
        let (_, out) = run_script("");
        assert!(out.starts_with("NanoBrowser\n[Back] | [Next] | [Home]"));
    }

    #[test]
    fn errors_do_not_end_session() {
        let (session, out) = run_script("back\nexa mple.com\na.com\n");
        assert!(out.contains("Browser Error: no previous page in history"));
        assert!(out.contains("Browser Error: could not load http://exa mple.com"));
        assert_eq!(session.controller.current().unwrap().as_str(), "http://a.com");
    }

    #[test]
    fn quit_stops_processing() {
        let (session, _) = run_script("a.com\nquit\nb.com\n");
        assert_eq!(session.controller.history().len(), 1);
    }

    #[test]
    fn favorites_round_trip_through_shell() {
        let (session, out) = run_script("news.com\nfav News\nother.com\nopen News\n");
        assert!(out.contains("All Favorites: News"));
        assert_eq!(session.controller.current().unwrap().as_str(), "http://news.com");
        assert_eq!(session.controller.history().len(), 3);
    }

    #[test]
    fn start_page_failure_is_reported() {
        let mut session = Session::new(&BrowserConfig::default());
        let mut out = Vec::new();
        open_start_page(&mut session, "http://", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Browser Error: could not load"));
        assert!(session.controller.current().is_none());
    }
}
