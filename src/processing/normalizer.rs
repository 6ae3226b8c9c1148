//! Text normalization helpers shared by the matchers and scorers

/// Canonical comparison form: lowercase, trimmed, `-` and `_` read as spaces.
///
/// Never stored; applied on both sides of every comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace(['-', '_'], " ")
}

/// Capitalize the first letter of every word, lowercase the rest.
///
/// A word starts after any character that is not a letter, so
/// `node.js` becomes `Node.Js` and `3d printing` becomes `3D Printing`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}

/// Round to the nearest integer, ties to even
pub fn round_score(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

/// Skill input accepted by the scorers: a comma-separated string or a list
#[derive(Debug, Clone, Copy)]
pub enum SkillsInput<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> From<&'a str> for SkillsInput<'a> {
    fn from(text: &'a str) -> Self {
        SkillsInput::Text(text)
    }
}

impl<'a> From<&'a String> for SkillsInput<'a> {
    fn from(text: &'a String) -> Self {
        SkillsInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [String]> for SkillsInput<'a> {
    fn from(list: &'a [String]) -> Self {
        SkillsInput::List(list)
    }
}

impl<'a> From<&'a Vec<String>> for SkillsInput<'a> {
    fn from(list: &'a Vec<String>) -> Self {
        SkillsInput::List(list.as_slice())
    }
}

/// Split the input into trimmed, non-empty skill strings.
///
/// Duplicates are kept; matching never counts a user skill twice.
pub fn parse_skills(input: SkillsInput<'_>) -> Vec<String> {
    match input {
        SkillsInput::Text(text) => text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        SkillsInput::List(list) => list
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
