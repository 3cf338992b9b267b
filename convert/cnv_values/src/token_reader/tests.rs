#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{Change, Direction, SmallStr};

#[test]
fn tokens_split_on_whitespace() {
    let mut reader = TokenReader::new("  up\tdn\n no  ");
    assert_eq!(reader.next_token(), Some("up"));
    assert_eq!(reader.next_token(), Some("dn"));
    assert_eq!(reader.next_token(), Some("no"));
    assert_eq!(reader.next_token(), None);
    assert!(reader.is_exhausted());
}

#[test]
fn read_up_into_change() {
    let mut change = Change::default();
    let mut reader = TokenReader::new("up");
    reader.read(&mut change);
    assert!(!reader.is_failed());
    assert_eq!(change, Change::Up);
    assert_eq!(change.to_string(), "up");
}

#[test]
fn chained_reads() {
    let mut change = Change::default();
    let mut direction = Direction::Up;
    let mut reader = TokenReader::new("dn dn");
    reader.read(&mut change).read(&mut direction);
    assert!(!reader.is_failed());
    assert_eq!(change, Change::Down);
    assert_eq!(direction, Direction::Down);
}

#[test]
fn invalid_token_fails_and_keeps_target() {
    let mut change = Change::Down;
    let mut reader = TokenReader::new("sideways");
    reader.read(&mut change);
    assert!(reader.is_failed());
    assert_eq!(change, Change::Down);
}

#[test]
fn failure_is_sticky() {
    let mut first = Change::Unchanged;
    let mut second = Change::Unchanged;
    let mut reader = TokenReader::new("bad up");
    reader.read(&mut first).read(&mut second);
    assert!(reader.is_failed());
    assert_eq!(second, Change::Unchanged);
    assert_eq!(reader.parse::<Change>(), Err(ReadError::Failed));
}

#[test]
fn clear_resumes_after_bad_token() {
    let mut change = Change::Unchanged;
    let mut reader = TokenReader::new("bad up");
    reader.read(&mut change);
    reader.clear();
    reader.read(&mut change);
    assert!(!reader.is_failed());
    assert_eq!(change, Change::Up);
}

#[test]
fn reading_past_end_fails() {
    let mut reader = TokenReader::new("   ");
    assert_eq!(reader.parse::<Change>(), Err(ReadError::Exhausted));
    assert!(reader.is_failed());
}

#[test]
fn parse_reports_token_and_reason() {
    let mut reader = TokenReader::new("no");
    let err = reader.parse::<Direction>().unwrap_err();
    assert_eq!(
        err,
        ReadError::Invalid {
            token: "no".to_owned(),
            message: "unrecognized direction token 'no', expected one of: up, dn".to_owned(),
        }
    );
}

#[test]
fn remaining_tracks_position() {
    let mut reader = TokenReader::new("up rest of line");
    assert_eq!(reader.next_token(), Some("up"));
    assert_eq!(reader.remaining(), " rest of line");
    assert!(!reader.is_exhausted());
}

#[test]
fn oversize_small_string_fails_reader() {
    let mut text = SmallStr::from_text("kept");
    let mut reader = TokenReader::new("HELLOWORLD12");
    reader.read(&mut text);
    assert!(reader.is_failed());
    assert_eq!(text, "kept");
}

#[test]
fn unicode_space_does_not_separate() {
    let mut first = Change::Unchanged;
    let mut second = Change::Unchanged;
    let mut reader = TokenReader::new("up\u{a0}dn");
    reader.read(&mut first).read(&mut second);
    assert!(reader.is_failed());
    assert_eq!(first, Change::Unchanged);
    assert_eq!(second, Change::Unchanged);
}

#[test]
fn unicode_space_stays_in_token() {
    let mut reader = TokenReader::new("\u{2003}up \u{a0}");
    assert_eq!(reader.next_token(), Some("\u{2003}up"));
    assert!(!reader.is_exhausted());
    assert_eq!(reader.next_token(), Some("\u{a0}"));
    assert!(reader.is_exhausted());
}

#[test]
fn c_locale_whitespace_separates() {
    let mut reader = TokenReader::new("up\x0bdn\x0cno\r\nup");
    let tokens: Vec<&str> = std::iter::from_fn(|| reader.next_token()).collect();
    assert_eq!(tokens, ["up", "dn", "no", "up"]);
}

#[test]
fn rejected_token_is_logged() {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut change = Change::Up;
        TokenReader::new("sideways").read(&mut change);
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("token rejected"), "{output}");
    assert!(output.contains("token=\"sideways\""), "{output}");
}
