//! Message template formatting
//!
//! Templates use printf-style positional placeholders:
//!
//! - `%s` is replaced by the next argument
//! - `%%` is a literal `%`
//!
//! A `%s` with no argument left stays as-is. Arguments without a placeholder
//! are appended, separated by single spaces.

/// Fill `template` with `args`
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => out.push_str("%s"),
                }
            },
            Some('%') => {
                chars.next();
                out.push('%');
            },
            _ => out.push('%'),
        }
    }

    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }

    out
}
