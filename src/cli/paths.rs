use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const RESERVED_PATH_CHARS: &[char] = &['<', '>', '"', '|'];
#[cfg(not(windows))]
const RESERVED_PATH_CHARS: &[char] = &[];

/// True if the path text contains NUL, an ASCII control character, or a
/// platform-reserved character.
pub fn has_invalid_path_chars(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .any(|c| (c.is_ascii_control() && c != '\x7f') || RESERVED_PATH_CHARS.contains(&c))
}

/// Output file next to `input`: the input stem with `suffix` appended,
/// replacing the extension. `scores.txt` becomes `scores-graded.txt`.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(suffix);
    input.with_file_name(name)
}

/// True if `output` names the existing file `input`, however it is spelled
/// (relative, `..` segments, symlinks).
pub fn is_same_file(input: &Path, output: &Path) -> io::Result<bool> {
    let input = fs::canonicalize(input)?;
    Ok(resolve_path(output).is_some_and(|output| output == input))
}

/// Canonical form of a path that may not exist yet: the parent directory is
/// resolved and the file name joined back on.
fn resolve_path(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|parent| parent.join(name))
}
