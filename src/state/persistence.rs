use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec;
use crate::error::Result;
use crate::scene::Scene;

/// Write a file all-or-nothing: the content goes to a temporary file beside
/// `path`, which replaces `path` only after `write` succeeded and the data
/// was flushed.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = tempfile::Builder::new().prefix(".sketchpad-").tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Save a scene as pretty-printed JSON.
pub fn save_scene(scene: &Scene, path: &Path) -> Result<()> {
    let json = codec::to_json(scene)?;
    write_atomic(path, |writer| {
        writer.write_all(json.as_bytes())?;
        Ok(())
    })?;
    log::info!("Saved {} shapes to {}", scene.len(), path.display());
    Ok(())
}

/// Load a scene saved by [`save_scene`].
pub fn load_scene(path: &Path) -> Result<Scene> {
    let json = fs::read_to_string(path)?;
    let scene = codec::from_json(&json).inspect_err(|e| {
        log::warn!("Rejected {}: {}", path.display(), e);
    })?;
    log::info!("Loaded {} shapes from {}", scene.len(), path.display());
    Ok(scene)
}
