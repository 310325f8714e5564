use nom::character::complete::{alpha1, char, digit1};
use nom::multi::separated_list1;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

use crate::Pairs;

pub fn nom_parser(s: &str) -> Pairs<'_> {
    tuple(s).map(|(_rest, pairs)| pairs).unwrap_or_default()
}

fn pair(s: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(alpha1, char(':'), digit1)(s)
}

fn tuple(s: &str) -> IResult<&str, Pairs<'_>> {
    delimited(char('('), separated_list1(char(','), pair), char(')'))(s)
}
