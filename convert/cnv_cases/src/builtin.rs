//! Case bodies that need nothing beyond the value types.

use cnv_values::{make_default, Change, Direction, SmallStr, TokenReader, MAX_LEN};

use crate::{ensure, CaseResult};

/// User-defined types behave as conversion sources and targets.
pub(crate) fn user_type() -> CaseResult {
    tracing::debug!("user_type: change tokens");
    let mut changes = [Change::default(); 3];
    let mut reader = TokenReader::new("up dn no");
    for slot in &mut changes {
        reader.read(slot);
    }
    ensure(!reader.is_failed(), "every change token should read")?;
    ensure(
        changes == [Change::Up, Change::Down, Change::Unchanged],
        format!("read {changes:?}"),
    )?;
    let formatted: Vec<String> = changes.iter().map(ToString::to_string).collect();
    ensure(formatted == ["up", "dn", "no"], format!("formatted {formatted:?}"))?;

    let mut change = Change::Up;
    let mut reader = TokenReader::new("sideways");
    reader.read(&mut change);
    ensure(reader.is_failed(), "unknown change token should fail the reader")?;
    ensure(change == Change::Up, "failed read should leave the change alone")?;

    tracing::debug!("user_type: direction without default");
    let mut direction: Direction = make_default();
    ensure(direction == Direction::Up, "direction should default to up")?;
    let mut reader = TokenReader::new("dn");
    reader.read(&mut direction);
    ensure(direction == Direction::Down, "direction should read dn")?;
    let back: Direction = direction.to_string().parse()?;
    ensure(back == direction, "direction should round-trip")?;

    tracing::debug!("user_type: small strings");
    let text: SmallStr = "HELLOWORLD1".parse()?;
    ensure(text.len() == MAX_LEN, "11 bytes should fill a small string")?;
    ensure(text == "HELLOWORLD1", format!("stored {text:?}"))?;
    ensure(
        "HELLOWORLD12".parse::<SmallStr>().is_err(),
        "12 bytes should not fit",
    )?;

    let mut packed = [SmallStr::EMPTY; 3];
    let mut reader = TokenReader::new("one two three");
    for slot in &mut packed {
        *slot = reader.parse()?;
    }
    ensure(
        packed.iter().map(SmallStr::as_str).eq(["one", "two", "three"]),
        format!("read {packed:?}"),
    )?;

    Ok(())
}
