use winnow::ascii::{digit0, digit1, Caseless};
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{literal, one_of, take_while};

// -- Whitespace -------------------------------------------------------------

fn ws<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c.is_whitespace()).parse_next(input)
}

// -- Booleans ---------------------------------------------------------------

/// Count a run of `!`, each optionally followed by whitespace.
pub(super) fn negations(input: &mut &str) -> ModalResult<usize> {
    repeat(0.., ('!', ws)).parse_next(input)
}

pub(super) fn truth(input: &mut &str) -> ModalResult<bool> {
    alt((
        literal(Caseless("true")).value(true),
        literal(Caseless("false")).value(false),
    ))
    .parse_next(input)
}

// -- Decimals ---------------------------------------------------------------

/// Sign, integer digits, and fraction digits. Either `.` or `,` introduces
/// the fraction.
pub(super) fn decimal_literal<'i>(
    input: &mut &'i str,
) -> ModalResult<(Option<char>, &'i str, Option<&'i str>)> {
    (
        opt(one_of(['+', '-'])),
        digit0,
        opt(preceded(one_of(['.', ',']), digit1)),
    )
        .parse_next(input)
}
