//! File and stdin helpers shared by the commands.

use std::io::BufRead;
use std::path::Path;

/// Reads one line, trimmed. `None` on EOF or read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new(b"stand\n");
/// assert_eq!(read_stdin_line(&mut input), Some("stand".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut buf = String::new();
    match stdin.read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, transparently decompressing `.zst` files.
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
