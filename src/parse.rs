use winnow::{
    ascii::{dec_uint, line_ending, multispace1, space0, space1, till_line_ending},
    combinator::{alt, cut_err, eof, opt, preceded, repeat, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::Description,
    },
    token::take_while,
    PResult, Parser,
};

use crate::abilities::{AbilityScores, NUM_ABILITIES};
use crate::rules::ClassRequirement;

/// Parses a requirement catalog.
///
/// Each row is a class name followed by its six minimums in
/// Str, Int, Wis, Dex, Con, Cha order. Blank lines and `#` comments are skipped.
///
/// ```text
/// # name         Str Int Wis Dex Con Cha
/// Cleric           6   6   9   3   6   6
/// ```
pub(crate) fn parse_catalog(input: &str) -> Result<Vec<ClassRequirement>, String> {
    catalog.parse(input).map_err(|e| e.to_string())
}

fn catalog(input: &mut &str) -> PResult<Vec<ClassRequirement>> {
    preceded(ignored, repeat(0.., terminated(class_row, ignored))).parse_next(input)
}

fn ignored(input: &mut &str) -> PResult<()> {
    repeat(0.., alt((multispace1.void(), comment.void()))).parse_next(input)
}

fn comment<'i>(input: &mut &'i str) -> PResult<&'i str> {
    preceded('#', till_line_ending).parse_next(input)
}

fn class_row(input: &mut &str) -> PResult<ClassRequirement> {
    (
        class_name,
        cut_err(terminated(
            minimums,
            (space0, opt(comment), alt((line_ending, eof))),
        )),
    )
        .map(|(name, minimums)| ClassRequirement::new(name, minimums))
        .context(Label("class row"))
        .parse_next(input)
}

fn class_name<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(1.., |c: char| c.is_alphabetic() || c == '-' || c == '\'' || c == '_')
        .context(Label("class name"))
        .parse_next(input)
}

fn minimums(input: &mut &str) -> PResult<AbilityScores> {
    repeat(NUM_ABILITIES, preceded(space1, dec_uint::<_, u32, _>))
        .map(|values: Vec<u32>| {
            let mut scores = [0; NUM_ABILITIES];
            scores.copy_from_slice(&values);
            AbilityScores::new(scores)
        })
        .context(Label("ability minimums"))
        .context(Expected(Description("six whole numbers separated by spaces")))
        .parse_next(input)
}
