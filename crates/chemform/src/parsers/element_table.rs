// External Crate Imports
use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{alpha1, digit1, space0, space1},
    combinator::{all_consuming, map_res},
    sequence::{delimited, preceded, tuple},
};

// Local Crate Imports
use crate::AtomicNumber;

/// The whitespace-separated fields of a single element table entry, with everything but the atomic number left
/// unvalidated so that problems can be reported against the exact field that caused them
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct RawEntry<'s> {
    pub atomic_number: (AtomicNumber, &'s str),
    pub symbol: &'s str,
    pub name: &'s str,
    pub average_mass: &'s str,
    pub monoisotopic_mass: &'s str,
}

/// Entry = Atomic Number , Field , Name , Field , Field ;
pub(crate) fn entry(i: &str) -> IResult<&str, RawEntry<'_>> {
    let atomic_number = map_res(digit1, |n: &str| n.parse::<AtomicNumber>().map(|p| (p, n)));
    let field = || take_till1(char::is_whitespace);
    let parser = tuple((
        preceded(space0, atomic_number),
        preceded(space1, field()),
        preceded(space1, alpha1),
        preceded(space1, field()),
        delimited(space1, field(), space0),
    ))
    .map(
        |(atomic_number, symbol, name, average_mass, monoisotopic_mass)| RawEntry {
            atomic_number,
            symbol,
            name,
            average_mass,
            monoisotopic_mass,
        },
    );
    all_consuming(parser)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry() {
        assert_eq!(
            entry("6     C       Carbon           12.0107         12.0"),
            Ok((
                "",
                RawEntry {
                    atomic_number: (6, "6"),
                    symbol: "C",
                    name: "Carbon",
                    average_mass: "12.0107",
                    monoisotopic_mass: "12.0",
                }
            ))
        );
        // Tabs and trailing whitespace are fine, and fields aren't validated yet
        assert_eq!(
            entry("\t17\tcl\tChlorine\t35.453\tnope  "),
            Ok((
                "",
                RawEntry {
                    atomic_number: (17, "17"),
                    symbol: "cl",
                    name: "Chlorine",
                    average_mass: "35.453",
                    monoisotopic_mass: "nope",
                }
            ))
        );
        // Missing or extra fields
        assert!(entry("6 C Carbon 12.0107").is_err());
        assert!(entry("6 C Carbon 12.0107 12.0 extra").is_err());
        // Names are single words and atomic numbers are unsigned
        assert!(entry("6 C Carbon-12 12.0107 12.0").is_err());
        assert!(entry("-6 C Carbon 12.0107 12.0").is_err());
        assert!(entry("99999999999 C Carbon 12.0107 12.0").is_err());
        assert!(entry("").is_err());
    }
}
