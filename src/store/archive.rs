use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::StoreError;

/// Zip the contents of `root` into `<root>/<zip_name>` at maximum
/// deflate compression.
///
/// The entry list is collected before the output file is created, so
/// the archive never contains an entry for itself. Everything else in
/// the directory at that instant is included, prior archives too.
pub(super) fn write_zip(root: &Path, zip_name: &str) -> Result<(), StoreError> {
    let mut entries = Vec::new();
    collect_entries(root, root, &mut entries)?;

    let file = File::create(root.join(zip_name))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for entry in entries {
        match entry {
            Entry::Dir(name) => {
                zip.add_directory(name, options)?;
            }
            Entry::File(name, path) => {
                zip.start_file(name, options)?;
                let mut src = File::open(path)?;
                io::copy(&mut src, &mut zip)?;
            }
        }
    }

    zip.finish()?;
    Ok(())
}

enum Entry {
    Dir(String),
    File(String, PathBuf),
}

/// Walk `dir` recursively, recording every entry with its path
/// relative to `root` as the zip entry name.
fn collect_entries(root: &Path, dir: &Path, entries: &mut Vec<Entry>) -> io::Result<()> {
    for item in std::fs::read_dir(dir)? {
        let item = item?;
        let path = item.path();
        let name = path
            .strip_prefix(root)
            .expect("walked path is under root")
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/");

        if item.file_type()?.is_dir() {
            entries.push(Entry::Dir(name));
            collect_entries(root, &path, entries)?;
        } else {
            entries.push(Entry::File(name, path));
        }
    }
    Ok(())
}
