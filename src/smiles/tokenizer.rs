use crate::element::Element;
use crate::smiles::error::SmilesError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(AtomToken),
    Bond(BondToken),
    RingClosure {
        bond: Option<BondToken>,
        digit: u16,
        pos: usize,
    },
    OpenParen(usize),
    CloseParen(usize),
    Dot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub element: Element,
    pub is_aromatic: bool,
    pub isotope: u16,
    /// Explicit hydrogen count; always `Some` for bracket atoms.
    pub hcount: Option<u8>,
    pub charge: i8,
    pub atom_class: u32,
    pub is_bracket: bool,
}

/// Bond symbols. `/` and `\` are read as [`BondToken::Single`] because
/// double-bond geometry is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondToken {
    Single,
    Double,
    Triple,
    Aromatic,
}

const BARE_TWO_LETTER: [(char, char, Element); 2] =
    [('B', 'r', Element::BR), ('C', 'l', Element::CL)];

const BARE_ONE_LETTER: [(char, Element, bool); 14] = [
    ('B', Element::B, false),
    ('C', Element::C, false),
    ('N', Element::N, false),
    ('O', Element::O, false),
    ('P', Element::P, false),
    ('S', Element::S, false),
    ('F', Element::F, false),
    ('I', Element::I, false),
    ('b', Element::B, true),
    ('c', Element::C, true),
    ('n', Element::N, true),
    ('o', Element::O, true),
    ('p', Element::P, true),
    ('s', Element::S, true),
];

pub fn tokenize(input: &str) -> Result<Vec<Token>, SmilesError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '[' => {
                let (tok, next) = parse_bracket_atom(&chars, i)?;
                tokens.push(Token::Atom(tok));
                i = next;
            }
            '-' => {
                if !looks_like_bond(&tokens) {
                    return Err(SmilesError::UnexpectedChar { pos: i, ch });
                }
                tokens.push(Token::Bond(BondToken::Single));
                i += 1;
            }
            '/' | '\\' => {
                tokens.push(Token::Bond(BondToken::Single));
                i += 1;
            }
            '=' => {
                tokens.push(Token::Bond(BondToken::Double));
                i += 1;
            }
            '#' => {
                tokens.push(Token::Bond(BondToken::Triple));
                i += 1;
            }
            ':' => {
                tokens.push(Token::Bond(BondToken::Aromatic));
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot);
                i += 1;
            }
            '%' => {
                let digit = parse_percent_ring(&chars, i)?;
                let bond = try_consume_pending_bond(&mut tokens);
                tokens.push(Token::RingClosure { bond, digit, pos: i });
                i += 3;
            }
            d @ '0'..='9' => {
                let bond = try_consume_pending_bond(&mut tokens);
                tokens.push(Token::RingClosure {
                    bond,
                    digit: d as u16 - '0' as u16,
                    pos: i,
                });
                i += 1;
            }
            _ => {
                let (element, aromatic, width) = bare_element(&chars, i)
                    .ok_or(SmilesError::UnexpectedChar { pos: i, ch })?;
                tokens.push(Token::Atom(bare_atom(element, aromatic)));
                i += width;
            }
        }
    }

    Ok(tokens)
}

fn bare_element(chars: &[char], i: usize) -> Option<(Element, bool, usize)> {
    let next = chars.get(i + 1).copied();
    for (first, second, element) in BARE_TWO_LETTER {
        if chars[i] == first && next == Some(second) {
            return Some((element, false, 2));
        }
    }
    BARE_ONE_LETTER
        .iter()
        .find(|(c, _, _)| *c == chars[i])
        .map(|&(_, element, aromatic)| (element, aromatic, 1))
}

fn bare_atom(element: Element, is_aromatic: bool) -> AtomToken {
    AtomToken {
        element,
        is_aromatic,
        isotope: 0,
        hcount: None,
        charge: 0,
        atom_class: 0,
        is_bracket: false,
    }
}

fn looks_like_bond(tokens: &[Token]) -> bool {
    matches!(
        tokens.last(),
        Some(Token::Atom(_))
            | Some(Token::RingClosure { .. })
            | Some(Token::OpenParen(_))
            | Some(Token::CloseParen(_))
            | None
    )
}

fn try_consume_pending_bond(tokens: &mut Vec<Token>) -> Option<BondToken> {
    match tokens.last() {
        Some(Token::Bond(b)) => {
            let b = *b;
            tokens.pop();
            Some(b)
        }
        _ => None,
    }
}

fn parse_percent_ring(chars: &[char], start: usize) -> Result<u16, SmilesError> {
    match (chars.get(start + 1), chars.get(start + 2)) {
        (Some(d1), Some(d2)) if d1.is_ascii_digit() && d2.is_ascii_digit() => {
            Ok((*d1 as u16 - '0' as u16) * 10 + (*d2 as u16 - '0' as u16))
        }
        _ => Err(SmilesError::UnexpectedChar {
            pos: start,
            ch: '%',
        }),
    }
}

fn parse_bracket_atom(chars: &[char], start: usize) -> Result<(AtomToken, usize), SmilesError> {
    let mut i = start + 1; // skip '['

    let isotope = parse_number(chars, &mut i)
        .map(|n| u16::try_from(n).map_err(|_| SmilesError::NumberOverflow { pos: start }))
        .transpose()?
        .unwrap_or(0);
    let (element, is_aromatic) = parse_bracket_element(chars, &mut i, start)?;
    skip_chirality(chars, &mut i);
    let hcount = parse_hcount(chars, &mut i);
    let charge = parse_charge(chars, &mut i, start)?;

    let mut atom_class = 0;
    if chars.get(i) == Some(&':') {
        i += 1;
        atom_class = parse_number(chars, &mut i)
            .ok_or(SmilesError::UnclosedBracket { pos: start })?;
    }

    if chars.get(i) != Some(&']') {
        return Err(SmilesError::UnclosedBracket { pos: start });
    }
    i += 1; // skip ']'

    Ok((
        AtomToken {
            element,
            is_aromatic,
            isotope,
            hcount: Some(hcount.unwrap_or(0)),
            charge,
            atom_class,
            is_bracket: true,
        },
        i,
    ))
}

/// Reads a run of decimal digits. Returns `None` when no digit is present;
/// values that do not fit in `u32` saturate.
fn parse_number(chars: &[char], i: &mut usize) -> Option<u32> {
    let begin = *i;
    let mut val: u32 = 0;
    while let Some(d) = chars.get(*i).and_then(|c| c.to_digit(10)) {
        val = val.saturating_mul(10).saturating_add(d);
        *i += 1;
    }
    (*i > begin).then_some(val)
}

fn parse_bracket_element(
    chars: &[char],
    i: &mut usize,
    bracket_start: usize,
) -> Result<(Element, bool), SmilesError> {
    const AROMATIC: [(&str, Element); 8] = [
        ("se", Element::SE),
        ("te", Element::TE),
        ("b", Element::B),
        ("c", Element::C),
        ("n", Element::N),
        ("o", Element::O),
        ("p", Element::P),
        ("s", Element::S),
    ];

    let rest: String = chars[(*i).min(chars.len())..].iter().take(2).collect();
    if rest.is_empty() {
        return Err(SmilesError::UnclosedBracket { pos: bracket_start });
    }

    for (pat, element) in AROMATIC {
        if rest.starts_with(pat) {
            *i += pat.len();
            return Ok((element, true));
        }
    }

    let mut symbols = Vec::with_capacity(2);
    if rest.chars().count() == 2 {
        symbols.push(rest.clone());
    }
    symbols.push(rest.chars().take(1).collect::<String>());

    for sym in symbols {
        let well_formed = sym.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && sym.chars().skip(1).all(|c| c.is_ascii_lowercase());
        if !well_formed {
            continue;
        }
        if let Some(element) = Element::from_symbol(&sym) {
            *i += sym.len();
            return Ok((element, false));
        }
    }

    Err(SmilesError::InvalidElement {
        pos: *i,
        text: rest.chars().take(1).collect(),
    })
}

/// Tetrahedral marks (`@`, `@@`) are accepted and dropped.
fn skip_chirality(chars: &[char], i: &mut usize) {
    while chars.get(*i) == Some(&'@') {
        *i += 1;
    }
}

fn parse_hcount(chars: &[char], i: &mut usize) -> Option<u8> {
    if chars.get(*i) != Some(&'H') {
        return None;
    }
    *i += 1;
    match chars.get(*i).and_then(|c| c.to_digit(10)) {
        Some(d) => {
            *i += 1;
            Some(d as u8)
        }
        None => Some(1),
    }
}

fn parse_charge(chars: &[char], i: &mut usize, bracket_start: usize) -> Result<i8, SmilesError> {
    let sign: i8 = match chars.get(*i) {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Ok(0),
    };
    let symbol = chars[*i];
    *i += 1;

    if let Some(n) = parse_number(chars, i) {
        return i8::try_from(n)
            .map(|v| v * sign)
            .map_err(|_| SmilesError::InvalidCharge { pos: bracket_start });
    }

    let mut count: i8 = 1;
    while chars.get(*i) == Some(&symbol) {
        count = count
            .checked_add(1)
            .ok_or(SmilesError::InvalidCharge { pos: bracket_start })?;
        *i += 1;
    }
    Ok(count * sign)
}
