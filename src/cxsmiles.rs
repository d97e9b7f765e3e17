//! Atom-value annotations embedded in extended (CXSMILES-style) notation.
//!
//! Name-to-structure services emit a SMILES line followed by optional
//! metadata. Per-atom labels travel in an `_AV:` field, written in one of
//! two forms:
//!
//! * block form: `$_AV:(1;;3)$`, content may span lines;
//! * pipe form: `|_AV:1;;3|`, a single field between pipes (the closing
//!   pipe may be missing at end of input).
//!
//! The block form takes precedence: the pipe form is only consulted when no
//! block is present anywhere in the input.

const MARKER: &str = "_AV:";
const BLOCK_OPEN: &str = "$_AV:(";
const BLOCK_CLOSE: &str = ")$";

/// Which annotation syntax supplied the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationForm {
    Block,
    Pipe,
}

/// The result of splitting an extended SMILES string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtendedSmiles {
    /// The structural part of the first line, without metadata.
    pub base: String,
    /// Per-atom labels in atom order, or `None` when the input carries no
    /// usable `_AV:` field. An empty string means "no label" for that atom.
    ///
    /// The length is not checked here; consumers compare it against the
    /// structure they build.
    pub labels: Option<Vec<String>>,
}

/// Splits `text` into its base SMILES and embedded atom labels.
///
/// Never fails: malformed or missing annotations yield `labels: None`.
///
/// # Examples
///
/// ```
/// use chemlabel::parse_extended_smiles;
///
/// let parsed = parse_extended_smiles("CCC |$_AV:(1;;3)$|");
/// assert_eq!(parsed.base, "CCC");
/// assert_eq!(parsed.labels.unwrap(), ["1", "", "3"]);
/// ```
pub fn parse_extended_smiles(text: &str) -> ExtendedSmiles {
    let labels = find_label_payload(text).and_then(|(form, raw)| {
        log::debug!("found {form:?} atom-value annotation: {raw:?}");
        split_labels(raw)
    });

    ExtendedSmiles {
        base: base_smiles(text).to_string(),
        labels,
    }
}

/// Locates the raw `_AV:` payload, trying the block form before the pipe form.
pub fn find_label_payload(text: &str) -> Option<(AnnotationForm, &str)> {
    find_block(text)
        .map(|raw| (AnnotationForm::Block, raw))
        .or_else(|| find_pipe_field(text).map(|raw| (AnnotationForm::Pipe, raw)))
}

fn find_block(text: &str) -> Option<&str> {
    let start = text.find(BLOCK_OPEN)? + BLOCK_OPEN.len();
    let len = text[start..].find(BLOCK_CLOSE)?;
    Some(&text[start..start + len])
}

/// Scans every `|`-delimited field for the marker. Within a field the last
/// marker wins and the value runs to the next `|` or the end of the text.
fn find_pipe_field(text: &str) -> Option<&str> {
    text.match_indices('|').find_map(|(pos, _)| {
        let rest = &text[pos + 1..];
        let field = rest.split('|').next().unwrap_or(rest);
        Some(&field[field.rfind(MARKER)? + MARKER.len()..])
    })
}

fn split_labels(raw: &str) -> Option<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.split(';').map(|s| s.trim().to_string()).collect())
}

/// The first line up to the first `|` or `$`, trimmed. Falls back to the
/// whole first line when that leaves nothing.
fn base_smiles(text: &str) -> &str {
    let first_line = text.split(['\n', '\r']).next().unwrap_or_default();
    let head = first_line
        .split(['|', '$'])
        .next()
        .unwrap_or_default()
        .trim();
    if head.is_empty() {
        first_line
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(text: &str) -> Option<Vec<String>> {
        parse_extended_smiles(text).labels
    }

    #[test]
    fn block_form() {
        let parsed = parse_extended_smiles("CCC |$_AV:(1;;3)$|");
        assert_eq!(parsed.base, "CCC");
        assert_eq!(parsed.labels.unwrap(), ["1", "", "3"]);
    }

    #[test]
    fn block_form_spans_lines() {
        let text = "CCO\n$_AV:(1;\n2;\n)$";
        assert_eq!(labels(text).unwrap(), ["1", "2", ""]);
        assert_eq!(parse_extended_smiles(text).base, "CCO");
    }

    #[test]
    fn block_form_stops_at_first_close() {
        assert_eq!(labels("C |$_AV:(a)$ $x)$|").unwrap(), ["a"]);
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(labels("CC |$_AV:( 1a ; 2 )$|").unwrap(), ["1a", "2"]);
    }

    #[test]
    fn pipe_form() {
        let parsed = parse_extended_smiles("CCN |_AV:1;2;|");
        assert_eq!(parsed.base, "CCN");
        assert_eq!(parsed.labels.unwrap(), ["1", "2", ""]);
    }

    #[test]
    fn pipe_form_without_closing_pipe() {
        assert_eq!(labels("CC |_AV:4;5").unwrap(), ["4", "5"]);
    }

    #[test]
    fn pipe_form_keeps_dollar_signs() {
        assert_eq!(labels("CC |_AV:a$b;c|").unwrap(), ["a$b", "c"]);
        assert_eq!(labels("CCC |$_AV:1;2;3$|").unwrap(), ["1", "2", "3$"]);
    }

    #[test]
    fn pipe_form_skips_fields_without_marker() {
        assert_eq!(labels("CC |c:0|_AV:7;8|").unwrap(), ["7", "8"]);
    }

    #[test]
    fn block_form_takes_precedence() {
        let payload = find_label_payload("CC |_AV:9;9| $_AV:(1;2)$");
        assert_eq!(payload, Some((AnnotationForm::Block, "1;2")));
    }

    #[test]
    fn unterminated_block_falls_back_to_pipe() {
        let payload = find_label_payload("CC |$_AV:(1;2|");
        assert_eq!(payload, Some((AnnotationForm::Pipe, "(1;2")));
    }

    #[test]
    fn empty_payload_is_absent() {
        assert_eq!(labels("CC |$_AV:(  )$|"), None);
        assert_eq!(labels("CC |_AV:|"), None);
    }

    #[test]
    fn all_empty_segments_are_present() {
        assert_eq!(labels("CCC |$_AV:(;;)$|").unwrap(), ["", "", ""]);
    }

    #[test]
    fn no_annotation() {
        let parsed = parse_extended_smiles("c1ccccc1");
        assert_eq!(parsed.base, "c1ccccc1");
        assert_eq!(parsed.labels, None);
    }

    #[test]
    fn base_stops_at_dollar() {
        assert_eq!(parse_extended_smiles("  CC$junk").base, "CC");
    }

    #[test]
    fn base_falls_back_to_first_line() {
        assert_eq!(parse_extended_smiles("|abc|\nCC").base, "|abc|");
        assert_eq!(parse_extended_smiles(" $x").base, " $x");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_extended_smiles(""), ExtendedSmiles::default());
    }

    #[test]
    fn label_count_is_not_validated() {
        assert_eq!(labels("C |$_AV:(1;2;3;4)$|").unwrap().len(), 4);
    }
}
