//! Text handling for mnemonics: normalization, tokenization and the
//! syntax checks that run before a mnemonic is encoded.

pub mod equivalence;
pub mod literal;

use std::sync::OnceLock;

use regex::Regex;

use crate::{error::SyntaxError, instruction::Role};

pub use equivalence::mnemonic_equals;

/// Rewrites `text` so that every comma is followed by exactly one space,
/// whitespace runs collapse into one space and nothing leads or trails.
///
/// `"  add $t1 ,$t2,   $t3 "` becomes `"add $t1, $t2, $t3"`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, part) in text.split(',').enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let words: Vec<&str> = part.split_whitespace().collect();
        out.push_str(&words.join(" "));
    }

    out.trim().to_string()
}

/// The instruction name: the leading run of letters and digits, so that
/// `jr($t1)` names `jr`.
pub fn name(text: &str) -> &str {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(text.len());

    &text[..end]
}

/// Splits a mnemonic into its name followed by its arguments.
///
/// Arguments are separated by commas or whitespace. Within one comma
/// group, a fragment starting with `(` belongs to the argument before it,
/// so `4 ($sp)` is one argument, `4($sp)`, while `$t1, ($sp)` stays two.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.trim();
    let iname = name(text);
    let rest = &text[iname.len()..];

    let mut tokens = Vec::new();
    if !iname.is_empty() {
        tokens.push(iname.to_string());
    }

    for group in rest.split(',') {
        let mut arguments: Vec<String> = Vec::new();
        for fragment in group.split_whitespace() {
            match arguments.last_mut() {
                Some(previous) if fragment.starts_with('(') => {
                    previous.push_str(fragment)
                }
                _ => arguments.push(fragment.to_string()),
            }
        }
        tokens.extend(arguments);
    }

    tokens
}

/// The canonical text of a tokenized mnemonic: the name, a space, then the
/// arguments separated by `, `.
pub fn join(tokens: &[String]) -> String {
    match tokens.split_first() {
        None => String::new(),
        Some((iname, [])) => iname.clone(),
        Some((iname, arguments)) => {
            format!("{iname} {}", arguments.join(", "))
        }
    }
}

pub fn count_commas(text: &str) -> usize {
    text.matches(',').count()
}

/// Number of arguments after the name. An address written `N (base)`
/// counts once.
pub fn count_arguments(text: &str) -> usize {
    tokenize(text).len().saturating_sub(1)
}

fn illegal_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();

    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9 ,()$-]").unwrap())
}

/// Fails with every character outside `[A-Za-z0-9 ,()$-]`, one entry per
/// offending position, in order of appearance.
pub fn validate_character_set(text: &str) -> Result<(), SyntaxError> {
    let illegal: Vec<char> = illegal_characters()
        .find_iter(text)
        .flat_map(|m| m.as_str().chars())
        .collect();

    if illegal.is_empty() {
        Ok(())
    } else {
        Err(SyntaxError::IllegalCharacters(illegal))
    }
}

/// Parentheses only ever surround the base register of an address, so
/// they may only appear in the argument filling an `address` role.
pub fn validate_parentheses_allowed(
    roles: &[Role],
    text: &str,
) -> Result<(), SyntaxError> {
    if !text.contains(['(', ')']) {
        return Ok(());
    }

    let tokens = tokenize(text);
    let misplaced = tokens.iter().enumerate().any(|(i, token)| {
        let role = i.checked_sub(1).and_then(|i| roles.get(i));
        token.contains(['(', ')']) && role != Some(&Role::Address)
    });

    if misplaced {
        Err(SyntaxError::IllegalParentheses)
    } else {
        Ok(())
    }
}

fn address_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();

    RE.get_or_init(|| Regex::new(r"^([^()]*)\(([^()]*)\)$").unwrap())
}

/// Splits an address operand into its immediate and base register texts.
///
/// `"4($sp)"` splits into `("4", Some("$sp"))`, a bare `"4"` into
/// `("4", None)`. Returns `None` when the parentheses are unbalanced or
/// misplaced.
pub fn split_address(text: &str) -> Option<(&str, Option<&str>)> {
    if !text.contains(['(', ')']) {
        return Some((text.trim(), None));
    }

    let captures = address_shape().captures(text.trim())?;
    let offset = captures.get(1)?.as_str().trim();
    let base = captures.get(2)?.as_str().trim();

    Some((offset, Some(base)))
}
