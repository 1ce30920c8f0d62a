use std::borrow::Cow;

use alloy::dyn_abi::DynSolType;

use crate::error::{EncodeError, Result};

/// Extracts the parameter types of a function signature such as
/// `transfer(address,uint256)`.
///
/// Only the first parenthesized group is read, so a trailing return list
/// (`balanceOf(address)(uint256)`) is ignored. Tuple types are kept whole:
/// commas nested inside parentheses do not split parameters. Inline
/// `/* ... */` comments are dropped and every token is trimmed.
///
/// An empty signature has no parameters. Any other input without a
/// parameter list is rejected rather than treated as `name()`.
pub fn parse_signature_types(signature: &str) -> Result<Vec<String>> {
    if signature.is_empty() {
        return Ok(Vec::new());
    }

    let stripped = strip_comments(signature);
    let (_, group) = split_param_group(&stripped).map_err(|reason| malformed(signature, reason))?;

    Ok(split_top_level(group)
        .into_iter()
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(String::from)
        .collect())
}

/// Rebuilds `name(type1,type2)` from the function name of `signature` and
/// already resolved parameter types.
pub fn canonical_signature(signature: &str, types: &[DynSolType]) -> Result<String> {
    if signature.is_empty() {
        return Ok(String::new());
    }

    let stripped = strip_comments(signature);
    let (name, _) = split_param_group(&stripped).map_err(|reason| malformed(signature, reason))?;
    let types = types
        .iter()
        .map(|ty| ty.sol_type_name())
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!("{}({types})", name.trim()))
}

fn malformed(signature: &str, reason: &str) -> EncodeError {
    EncodeError::MalformedSignature {
        signature: signature.to_string(),
        reason: reason.to_string(),
    }
}

/// Removes every terminated `/* ... */` block. An unterminated opener is left in place.
fn strip_comments(input: &str) -> Cow<'_, str> {
    if !input.contains("/*") {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        let Some(len) = rest[start + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + 2 + len + 2..];
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Returns the text before the first `(` and the contents of the group it opens.
fn split_param_group(signature: &str) -> std::result::Result<(&str, &str), &'static str> {
    let open = signature.find('(').ok_or("missing parameter list")?;

    let mut depth = 0usize;
    for (offset, c) in signature[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&signature[..open], &signature[open + 1..open + offset]));
                }
            }
            _ => {}
        }
    }

    Err("unbalanced parentheses")
}

fn split_top_level(group: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in group.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&group[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&group[start..]);

    parts
}
