use nom::{
    IResult,
    character::complete::satisfy,
    combinator::{opt, recognize},
    error::ParseError,
    sequence::pair,
};

/// uppercase
///   = "A" | "B" | "C" | "D" | "E" | "F" | "G"
///   | "H" | "I" | "J" | "K" | "L" | "M" | "N"
///   | "O" | "P" | "Q" | "R" | "S" | "T" | "U"
///   | "V" | "W" | "X" | "Y" | "Z"
///   ;
pub fn uppercase<'s, E: ParseError<&'s str>>(i: &'s str) -> IResult<&'s str, char, E> {
    satisfy(|c| c.is_ascii_uppercase())(i)
}

/// lowercase
///   = "a" | "b" | "c" | "d" | "e" | "f" | "g"
///   | "h" | "i" | "j" | "k" | "l" | "m" | "n"
///   | "o" | "p" | "q" | "r" | "s" | "t" | "u"
///   | "v" | "w" | "x" | "y" | "z"
///   ;
pub fn lowercase<'s, E: ParseError<&'s str>>(i: &'s str) -> IResult<&'s str, char, E> {
    satisfy(|c| c.is_ascii_lowercase())(i)
}

/// Element Symbol = uppercase , [ lowercase ] ;
pub fn element_symbol<'s, E: ParseError<&'s str>>(i: &'s str) -> IResult<&'s str, &'s str, E> {
    recognize(pair(uppercase, opt(lowercase)))(i)
}
