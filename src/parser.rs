use crate::data::models::{DictEntry, ParseError};

/// Lines starting with `#` are header comments in CEDICT releases.
pub fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Parses one CEDICT line of the form
/// `<traditional> <simplified> [<pinyin>] /<definition>/.../`.
///
/// The caller is expected to have filtered out comments and blank lines.
pub fn parse_line(line: &str) -> Result<DictEntry, ParseError> {
    let mut tokens = line.split(' ');
    let traditional = tokens.next().ok_or(ParseError::MissingHeadword)?;
    let simplified = tokens.next().ok_or(ParseError::MissingHeadword)?;
    if traditional.is_empty() || simplified.is_empty() {
        return Err(ParseError::EmptyHeadword);
    }

    let open = line.find('[').ok_or(ParseError::MissingPinyin)?;
    let close = line[open + 1..]
        .find(']')
        .map(|offset| open + 1 + offset)
        .ok_or(ParseError::MissingPinyin)?;
    let pinyin = &line[open + 1..close];

    let rest = &line[close + 1..];
    if !rest.contains('/') {
        return Err(ParseError::MissingDefinitions);
    }

    // The segment between `]` and the first `/` is not a definition.
    let mut segments: Vec<&str> = rest.split('/').skip(1).collect();
    while segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }
    if segments.is_empty() {
        return Err(ParseError::MissingDefinitions);
    }

    Ok(DictEntry::new(
        traditional.to_string(),
        simplified.to_string(),
        pinyin.to_string(),
        segments.into_iter().map(str::to_string).collect(),
    ))
}
