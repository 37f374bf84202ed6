//! Deterministic naming scheme for synthesized type and member identifiers.

/// Uppercase the first character of a string.
///
/// ```
/// use aidts_core::capitalize;
///
/// assert_eq!(capitalize("patient"), "Patient");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to camelCase (e.g., "valueset-url" -> "valuesetUrl").
///
/// Each run of `-`/`_` becomes one space, then everything that is neither an
/// ASCII word character nor whitespace is dropped. The one character after
/// each space is uppercased, and spaces are removed. A space that is itself
/// consumed this way does not uppercase what follows it, so `"a- b"` is `"ab"`.
pub fn to_camel_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len());
    let mut in_separator = false;
    for c in s.chars() {
        if c == '-' || c == '_' {
            if !in_separator {
                spaced.push(' ');
            }
            in_separator = true;
            continue;
        }
        in_separator = false;
        if c.is_ascii_alphanumeric() || c.is_whitespace() {
            spaced.push(c);
        }
    }

    let mut result = String::with_capacity(spaced.len());
    let mut chars = spaced.chars();
    while let Some(c) = chars.next() {
        if c != ' ' {
            result.push(c);
        } else if let Some(next) = chars.next()
            && next != ' '
        {
            result.extend(next.to_uppercase());
        }
    }

    result
}

/// Concatenate path segments into a single PascalCase type name.
///
/// Every segment is camel-cased and capitalized before joining, so
/// `["Patient", "contact", "name"]` becomes `PatientContactName`.
pub fn path_to_pascal_case<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| capitalize(&to_camel_case(segment.as_ref())))
        .collect()
}

/// Check whether a name can be used as a bare TypeScript property key.
pub fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render a member name, quoting it when it is not a bare identifier.
///
/// Names containing `-` are always quoted.
pub fn property_name(name: &str) -> String {
    if is_bare_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
