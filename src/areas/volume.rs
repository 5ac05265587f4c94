use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Target volume, addressed by its root path
///
/// The identifier is kept exactly as the user typed it (`E:\`, `/media/usb/`)
/// because it is echoed back in the confirmation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    id: String,
    root: Box<Path>,
}

impl Volume {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let root = PathBuf::from(&id).into_boxed_path();

        Volume { id, root }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The identifier without trailing separators, as formatting tools want it
    ///
    /// `E:\` becomes `E:`. An identifier made only of separators is returned
    /// unchanged.
    pub fn designator(&self) -> &str {
        match self.id.trim_end_matches(SEPARATORS) {
            "" => &self.id,
            trimmed => trimmed,
        }
    }

    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Create (or truncate) `name` in the volume root with `name` as content
    pub fn write_entry(&self, name: &str) -> anyhow::Result<PathBuf> {
        let path = self.entry_path(name);

        let mut file = File::create(&path).with_context(|| {
            format!("Failed to create file for entry '{name}': {}", path.display())
        })?;
        file.write_all(name.as_bytes())
            .with_context(|| format!("Failed to write entry '{name}' to {}", path.display()))?;

        Ok(path)
    }

    /// Replace `file_name` in the volume root with `contents`
    ///
    /// The data is flushed and synced, and the handle closed, before this
    /// returns.
    pub fn write_synced(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.entry_path(file_name);

        let file =
            File::create(&path).with_context(|| format!("Failed to create file: {path:?}"))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to file: {path:?}"))?;

        let file = writer
            .into_inner()
            .map_err(|err| err.into_error())
            .with_context(|| format!("Failed to flush file: {path:?}"))?;
        file.sync_all()
            .with_context(|| format!("Failed to sync file: {path:?}"))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designator_drops_trailing_separators() {
        assert_eq!(Volume::new("E:\\").designator(), "E:");
        assert_eq!(Volume::new("/media/usb/").designator(), "/media/usb");
        assert_eq!(Volume::new("/dev/sdb1").designator(), "/dev/sdb1");
        assert_eq!(Volume::new("/").designator(), "/");
    }

    #[test]
    fn id_is_kept_verbatim() {
        let volume = Volume::new("E:\\");

        assert_eq!(volume.id(), "E:\\");
    }

    #[test]
    fn entry_path_joins_with_or_without_trailing_separator() {
        assert_eq!(
            Volume::new("/media/usb/").entry_path("это"),
            PathBuf::from("/media/usb/это")
        );
        assert_eq!(
            Volume::new("/media/usb").entry_path("это"),
            PathBuf::from("/media/usb/это")
        );
    }
}
