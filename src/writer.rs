use super::*;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SIDECAR_EXTENSION: &str = ".zr";

/// Appends [`SIDECAR_EXTENSION`] to the file name, keeping the parent
/// directory: `dir/report.txt` -> `dir/report.txt.zr`.
pub fn sidecar_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        Error::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut target = OsString::from(name);

    target.push(SIDECAR_EXTENSION);
    Ok(path.with_file_name(target))
}

/// Reduces the whole content of `path` without writing anything.
pub fn reduce_file(path: &Path) -> Result<u64> {
    Writer::new().reduce_file(path)
}

/// Reduces `path` and stores the lowercase hex result next to it.
/// Returns the sidecar path.
pub fn compress_and_dump(path: &Path) -> Result<PathBuf> {
    Writer::new().compress_and_dump(path)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Writer {
    compressor: Compressor,
}

impl Writer {
    pub fn new() -> Writer {
        Writer {
            compressor: Compressor::new(),
        }
    }

    pub fn with_compressor(compressor: Compressor) -> Writer {
        Writer { compressor }
    }

    pub fn compressor(&self) -> &Compressor {
        &self.compressor
    }

    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::io(path, e))
    }

    /// Writes `value` as unpadded lowercase hex to the sidecar of `path`.
    pub fn write(&self, path: &Path, value: u64) -> Result<PathBuf> {
        let target = sidecar_path(path)?;

        self.write_to(path, &target, value)?;
        Ok(target)
    }

    /// Writes `value` to an already computed sidecar `target`. Failures
    /// carry the source `path`.
    pub fn write_to(&self, path: &Path, target: &Path, value: u64) -> Result<()> {
        fs::write(target, format!("{:x}", value)).map_err(|e| Error::io(path, e))
    }

    pub fn reduce_file(&self, path: &Path) -> Result<u64> {
        Ok(self.compressor.reduce(&self.read(path)?))
    }

    pub fn dump(&self, path: &Path) -> Result<(PathBuf, u64)> {
        let target = sidecar_path(path)?;
        let result = self.reduce_file(path)?;

        self.write_to(path, &target, result)?;
        Ok((target, result))
    }

    pub fn compress_and_dump(&self, path: &Path) -> Result<PathBuf> {
        self.dump(path).map(|(target, _)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_appends_extension() {
        assert_eq!(
            sidecar_path(Path::new("dir/report.txt")).unwrap(),
            PathBuf::from("dir/report.txt.zr")
        );
        assert_eq!(
            sidecar_path(Path::new("report")).unwrap(),
            PathBuf::from("report.zr")
        );
        assert_eq!(
            sidecar_path(Path::new("/tmp/a.zr")).unwrap(),
            PathBuf::from("/tmp/a.zr.zr")
        );
    }

    #[test]
    fn sidecar_needs_file_name() {
        let err = sidecar_path(Path::new("/")).unwrap_err();

        assert_eq!(err.path(), Path::new("/"));
        let Error::Io { source, .. } = err;
        assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
    }
}
