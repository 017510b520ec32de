//! Commit header parsing.
//!
//! Headers come in one canonical shape plus a handful of exceptional
//! shapes found in real logs. Each shape is a grammar function returning
//! `Option<Header>`; the chain is tried in order and stops at the first
//! success. A `None` from the whole chain is a validation failure for
//! the enclosing block, never a crash.

/// Parsed header fields. The timestamp is kept verbatim (date text plus
/// a `±HHMM` offset); affiliation is resolved later from the email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub timestamp: String,
    pub name: String,
    pub email: String,
}

/// Substring identifying the repository-conversion bot in header lines.
pub const BOT_LABEL: &str = "cvs2svn";
/// Synthetic identity used for all bot commits.
pub const BOT_EMAIL: &str = "cvs2svn@bot.invalid";

type Grammar = fn(&str) -> Option<Header>;

const GRAMMARS: [Grammar; 4] = [
    parse_primary,
    parse_spaced_name,
    parse_bare_email,
    parse_bot_line,
];

/// Try each grammar in order; first success wins.
pub fn parse_header(line: &str) -> Option<Header> {
    GRAMMARS.iter().find_map(|grammar| grammar(line))
}

/// Primary grammar: `name;email;date tz`.
fn parse_primary(line: &str) -> Option<Header> {
    let mut parts = line.splitn(3, ';');
    let name = parts.next()?.trim();
    let email = parts.next()?.trim();
    let date = parts.next()?.trim();
    if name.is_empty() || email.is_empty() || !has_timezone_suffix(date) {
        return None;
    }
    let email = normalize_email(email)?;
    Some(Header {
        timestamp: date.to_string(),
        name: name.to_string(),
        email,
    })
}

/// Fallback: `name-with-possible-space email;;date tz`.
fn parse_spaced_name(line: &str) -> Option<Header> {
    let (ident, date) = line.split_once(";;")?;
    let date = date.trim();
    if !has_timezone_suffix(date) {
        return None;
    }
    // The email is the last whitespace-separated token; everything
    // before it is the (possibly multi-word) name.
    let (name, email) = ident.trim().rsplit_once(char::is_whitespace)?;
    let email = normalize_email(email.trim())?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Header {
        timestamp: date.to_string(),
        name: name.to_string(),
        email,
    })
}

/// Fallback: `email;;date tz` with no name at all. The username is
/// synthesized from the local part of the address.
fn parse_bare_email(line: &str) -> Option<Header> {
    let (ident, date) = line.split_once(";;")?;
    let date = date.trim();
    if !has_timezone_suffix(date) {
        return None;
    }
    let email = normalize_email(ident.trim())?;
    let name = email.split('@').next().unwrap_or("").to_string();
    Some(Header {
        timestamp: date.to_string(),
        name,
        email,
    })
}

/// Fallback: the conversion-bot identity line. Detected by substring;
/// any literal email-like text in the line is ignored in favor of the
/// fixed synthetic identity.
fn parse_bot_line(line: &str) -> Option<Header> {
    if !line.contains(BOT_LABEL) {
        return None;
    }
    let timestamp = line
        .rsplit(';')
        .next()
        .map(str::trim)
        .filter(|tail| has_timezone_suffix(tail))
        .unwrap_or("")
        .to_string();
    Some(Header {
        timestamp,
        name: BOT_LABEL.to_string(),
        email: BOT_EMAIL.to_string(),
    })
}

/// `date tz` means at least two whitespace-separated tokens, the last of
/// which is a `±HHMM` offset.
fn has_timezone_suffix(date: &str) -> bool {
    let mut tokens = date.split_whitespace();
    let Some(last) = tokens.next_back() else {
        return false;
    };
    if tokens.next().is_none() {
        return false;
    }
    last.len() == 5
        && (last.starts_with('+') || last.starts_with('-'))
        && last[1..].chars().all(|c| c.is_ascii_digit())
}

/// Email fixups in fixed order: strip a trailing `?`, split on `@`,
/// require exactly one non-empty domain part.
fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.strip_suffix('?').unwrap_or(raw);
    let mut parts = email.split('@');
    let local = parts.next()?;
    let domain = parts.next()?;
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return None;
    }
    Some(email.to_string())
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
