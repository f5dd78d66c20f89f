//! Filesystem-safe names for champion icons.

/// File extension used for every saved icon.
pub const ICON_EXTENSION: &str = "png";

/// Strips every character that is not an ASCII letter or digit.
///
/// Spaces and punctuation (including apostrophes) are removed, not replaced,
/// so `"Bel'Veth"` becomes `"BelVeth"`. A name made only of punctuation
/// yields an empty string; callers accept the resulting `.png` file name.
pub fn clean_filename(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// File name (`<safe_name>.png`) an icon is stored under.
pub fn icon_file_name(safe_name: &str) -> String {
    format!("{}.{}", safe_name, ICON_EXTENSION)
}
