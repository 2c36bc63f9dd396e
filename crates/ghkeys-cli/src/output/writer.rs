use crate::{Destination, OutputConfig, WriteError, WriteResult};

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

/// Commit `text`, sending the stdout destination to `stdout`.
///
/// Performs at most one filesystem mutation. Overwrites go through a
/// temporary file renamed into place, so a failure leaves the previous
/// content intact.
pub fn write_to<W: Write>(
    text: &str,
    config: &OutputConfig,
    stdout: &mut W,
) -> WriteResult<Destination> {
    let destination = Destination::resolve(config);

    match &destination {
        Destination::Stdout => {
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| WriteError::io("<stdout>", e))?;
        }
        Destination::Append(path) => append_file(path, text)?,
        Destination::Overwrite { path, force } => replace_file(path, text, *force)?,
    }

    Ok(destination)
}

fn append_file(path: &Path, text: &str) -> WriteResult<()> {
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| WriteError::io_at(path, e))?;

    let mut content = String::with_capacity(text.len() + 1);
    if lacks_trailing_newline(&mut file).map_err(|e| WriteError::io_at(path, e))? {
        debug!("{} does not end with a newline, adding one", path.display());
        content.push('\n');
    }
    content.push_str(text);

    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| WriteError::io_at(path, e))
}

fn replace_file(path: &Path, text: &str, force: bool) -> WriteResult<()> {
    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(WriteError::io_at(path, e)),
    };

    if existing.is_some() && !force {
        return Err(WriteError::already_exists(path));
    }

    let dir = ensure_parent_dir(path)?;
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| WriteError::io_at(path, e))?;

    temp.write_all(text.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| WriteError::io_at(path, e))?;

    if let Some(metadata) = &existing {
        fs::set_permissions(temp.path(), metadata.permissions())
            .map_err(|e| WriteError::io_at(path, e))?;
    }

    // Without force the rename itself refuses to clobber, so a file created
    // after the check above is still never replaced.
    let persisted = if force {
        temp.persist(path)
    } else {
        temp.persist_noclobber(path)
    };

    persisted.map(|_| ()).map_err(|e| {
        if e.error.kind() == ErrorKind::AlreadyExists {
            WriteError::already_exists(path)
        } else {
            WriteError::io_at(path, e.error)
        }
    })
}

/// Create the parent directory of `path` if missing and return it.
fn ensure_parent_dir(path: &Path) -> WriteResult<&Path> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| WriteError::io_at(parent, e))?;
    Ok(parent)
}

fn lacks_trailing_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
