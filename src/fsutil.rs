use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Replace `target` with whatever `write` produces.
///
/// The data goes to a temporary file next to `target` that is renamed over it
/// once complete. On any error the temporary file is removed and `target` is
/// left as it was.
pub fn replace_file<F>(target: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!(
        ".{}_tmp_",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );
    let tmp = tempfile::Builder::new().prefix(&prefix).tempfile_in(dir)?;

    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    {
        let mut writer = BufWriter::new(tmp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
