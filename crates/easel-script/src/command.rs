use std::ops::RangeInclusive;

use easel_engine::coords::RelativePoint;
use easel_engine::painter::{BackgroundRect, Figure, Fill, Tweak};

use crate::error::ParseErrorKind;

/// Accepted range for every numeric argument.
pub const ARG_RANGE: RangeInclusive<f64> = -1.0..=1.0;

/// One recognized script line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    /// Changes the drawing state; the parser follows it with a snapshot.
    Tweak(Tweak),
    /// Ready marker. Leaves the drawing state alone.
    Update,
}

/// Parses a single line. Blank lines yield `Ok(None)`.
///
/// The argument count is checked first, then each argument left to right:
/// numeric, then in [`ARG_RANGE`].
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseErrorKind> {
    let mut fields = line.split_whitespace();
    let Some(name) = fields.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = fields.collect();

    let command = match name {
        "white" => {
            numbers::<0>(&args)?;
            Command::Tweak(Tweak::Background(Fill::white()))
        }
        "green" => {
            numbers::<0>(&args)?;
            Command::Tweak(Tweak::Background(Fill::green()))
        }
        "bgrect" => {
            let [x0, y0, x1, y1] = numbers::<4>(&args)?;
            Command::Tweak(Tweak::BackgroundRect(BackgroundRect::new(
                RelativePoint::new(x0, y0),
                RelativePoint::new(x1, y1),
            )))
        }
        "figure" => {
            let [x, y] = numbers::<2>(&args)?;
            Command::Tweak(Tweak::Figure(Figure::new(RelativePoint::new(x, y))))
        }
        "move" => {
            let [dx, dy] = numbers::<2>(&args)?;
            Command::Tweak(Tweak::Move(RelativePoint::new(dx, dy)))
        }
        "reset" => {
            numbers::<0>(&args)?;
            Command::Tweak(Tweak::Reset)
        }
        "update" => {
            numbers::<0>(&args)?;
            Command::Update
        }
        other => return Err(ParseErrorKind::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn numbers<const N: usize>(args: &[&str]) -> Result<[f64; N], ParseErrorKind> {
    if args.len() != N {
        return Err(ParseErrorKind::InvalidArgumentCount);
    }

    let mut values = [0.0; N];
    for (pos, (arg, slot)) in args.iter().zip(values.iter_mut()).enumerate() {
        let value: f64 = arg.parse().map_err(|_| ParseErrorKind::InvalidArgument(pos))?;
        // NaN and infinities fail `contains` too.
        if !ARG_RANGE.contains(&value) {
            return Err(ParseErrorKind::OutOfRange(pos));
        }
        *slot = value;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweak(line: &str) -> Tweak {
        match parse_line(line) {
            Ok(Some(Command::Tweak(t))) => t,
            other => panic!("expected a tweak for {line:?}, got {other:?}"),
        }
    }

    fn err(line: &str) -> ParseErrorKind {
        parse_line(line).unwrap_err()
    }

    // ── recognized commands ───────────────────────────────────────────────

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
    }

    #[test]
    fn fills() {
        assert_eq!(tweak("white"), Tweak::Background(Fill::white()));
        assert_eq!(tweak("  green  "), Tweak::Background(Fill::green()));
    }

    #[test]
    fn bgrect_keeps_argument_order() {
        let expected = BackgroundRect::new(RelativePoint::new(0.1, -0.2), RelativePoint::new(0.3, 1.0));
        assert_eq!(tweak("bgrect 0.1 -0.2 0.3 1"), Tweak::BackgroundRect(expected));
    }

    #[test]
    fn figure_and_move() {
        assert_eq!(tweak("figure 0.5 -0.5"), Tweak::Figure(Figure::new(RelativePoint::new(0.5, -0.5))));
        assert_eq!(tweak("move -1 1"), Tweak::Move(RelativePoint::new(-1.0, 1.0)));
    }

    #[test]
    fn reset_and_update() {
        assert_eq!(tweak("reset"), Tweak::Reset);
        assert_eq!(parse_line("update"), Ok(Some(Command::Update)));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn unknown_command_keeps_its_name() {
        assert_eq!(err("hello"), ParseErrorKind::UnknownCommand("hello".into()));
        assert_eq!(err("WHITE"), ParseErrorKind::UnknownCommand("WHITE".into()));
    }

    #[test]
    fn count_is_checked_before_values() {
        assert_eq!(err("white white"), ParseErrorKind::InvalidArgumentCount);
        assert_eq!(err("reset white"), ParseErrorKind::InvalidArgumentCount);
        assert_eq!(err("update 1"), ParseErrorKind::InvalidArgumentCount);
        assert_eq!(err("bgrect 0.3 a"), ParseErrorKind::InvalidArgumentCount);
        assert_eq!(err("move 0.3 3 3 3"), ParseErrorKind::InvalidArgumentCount);
        assert_eq!(err("figure"), ParseErrorKind::InvalidArgumentCount);
    }

    #[test]
    fn non_numeric_argument_reports_position() {
        assert_eq!(err("figure j -0.9"), ParseErrorKind::InvalidArgument(0));
        assert_eq!(err("bgrect 0 0 0 x"), ParseErrorKind::InvalidArgument(3));
    }

    #[test]
    fn out_of_range_argument_reports_position() {
        assert_eq!(err("move 3 3"), ParseErrorKind::OutOfRange(0));
        assert_eq!(err("bgrect 0.3 -8 0.5 0.3"), ParseErrorKind::OutOfRange(1));
        assert_eq!(err("figure 0 1.0001"), ParseErrorKind::OutOfRange(1));
        assert_eq!(err("figure NaN 0"), ParseErrorKind::OutOfRange(0));
        assert_eq!(err("figure 0 inf"), ParseErrorKind::OutOfRange(1));
    }

    #[test]
    fn earlier_position_wins() {
        assert_eq!(err("bgrect 0.3 -8 a 0.3"), ParseErrorKind::OutOfRange(1));
        assert_eq!(err("bgrect a -8 0 0"), ParseErrorKind::InvalidArgument(0));
    }

    #[test]
    fn messages() {
        assert_eq!(err("hello").to_string(), "unknown command");
        assert_eq!(err("white 1").to_string(), "invalid argument count");
        assert_eq!(err("figure j 0").to_string(), "invalid argument at position 0");
        assert_eq!(err("move 0 2").to_string(), "value at position 1 is not in [-1,1] range");
    }
}
