//! `files.h` generation
//!
//! The header is what the downstream DOS filesystem test compiles against:
//! it walks the volume root and compares each directory entry, and each
//! file's content, with `filenames[N]`, then checks that it saw
//! `FILES_FILENAMES_NUMBER_OF` entries.
//!
//! ## Layout
//!
//! ```c
//! /* generated banner */
//! #ifndef __FILE_H__
//! #define __FILE_H__
//! /* extern "C" guard */
//! static const char *const filenames[] = {
//!   "entry",
//!   ...
//! };
//! #define FILES_FILENAMES_NUMBER_OF N
//! /* closing guards */
//! ```
//!
//! Rendering is deterministic; no timestamps or host details end up in the
//! file, so re-running over an existing volume reproduces it byte for byte.

pub mod c_literal;

use anyhow::Context;

/// File name of the header in the volume root
pub const HEADER_FILE_NAME: &str = "files.h";

/// Include guard macro
pub const INCLUDE_GUARD: &str = "__FILE_H__";

/// Symbol of the generated array
pub const ARRAY_SYMBOL: &str = "filenames";

/// Macro holding the number of array entries
pub const COUNT_MACRO: &str = "FILES_FILENAMES_NUMBER_OF";

const BANNER: &str = "\
/*
 * Generated by fatnames. Do not edit.
 *
 * Each entry names a file in the volume root whose content is the
 * UTF-8 encoding of the same string.
 */
";

const COUNT_REGEX: &str = r"(?m)^#define\s+FILES_FILENAMES_NUMBER_OF\s+(\d+)\s*$";
const LITERAL_LINE_REGEX: &str = r#"^\s*(".*")\s*,?\s*$"#;

/// Render the complete header text for `entries`, in the given order
pub fn render(entries: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"));
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif /* __cplusplus */\n\n");

    out.push_str(&format!("static const char *const {ARRAY_SYMBOL}[] = {{\n"));
    let literals = entries
        .iter()
        .map(|entry| format!("  {}", c_literal::escape(entry)))
        .collect::<Vec<_>>();
    if !literals.is_empty() {
        out.push_str(&literals.join(",\n"));
        out.push('\n');
    }
    out.push_str("};\n\n");

    out.push_str(&format!("#define {COUNT_MACRO} {}\n\n", entries.len()));

    out.push_str("#ifdef __cplusplus\n}\n#endif /* __cplusplus */\n\n");
    out.push_str(&format!("#endif /* {INCLUDE_GUARD} */\n"));

    out
}

/// Read the `filenames` array back out of a rendered header
///
/// Fails when the array or the count macro is missing, when a line inside
/// the array is not a single string literal, or when the number of literals
/// disagrees with `FILES_FILENAMES_NUMBER_OF`.
pub fn parse_filenames(header: &str) -> anyhow::Result<Vec<String>> {
    let open = format!("{ARRAY_SYMBOL}[] = {{");
    let start = header
        .find(&open)
        .map(|idx| idx + open.len())
        .ok_or_else(|| anyhow::anyhow!("header has no `{ARRAY_SYMBOL}` array"))?;
    let len = header[start..]
        .find("\n};")
        .ok_or_else(|| anyhow::anyhow!("`{ARRAY_SYMBOL}` array is not terminated"))?;
    let body = &header[start..start + len];

    let literal_re = regex::Regex::new(LITERAL_LINE_REGEX)
        .with_context(|| format!("invalid literal line regex: {LITERAL_LINE_REGEX}"))?;

    let mut names = Vec::new();
    for (line_no, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let captures = literal_re.captures(line).ok_or_else(|| {
            anyhow::anyhow!("array line {} is not a string literal: {line}", line_no)
        })?;
        names.push(c_literal::unescape(&captures[1])?);
    }

    let count_re = regex::Regex::new(COUNT_REGEX)
        .with_context(|| format!("invalid count regex: {COUNT_REGEX}"))?;
    let declared: usize = count_re
        .captures(header)
        .ok_or_else(|| anyhow::anyhow!("header does not define {COUNT_MACRO}"))?[1]
        .parse()
        .with_context(|| format!("{COUNT_MACRO} is not a number"))?;

    if declared != names.len() {
        anyhow::bail!(
            "{COUNT_MACRO} is {declared} but `{ARRAY_SYMBOL}` holds {} entries",
            names.len()
        );
    }

    Ok(names)
}
