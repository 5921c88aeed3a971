use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};

use crate::constants::JPEG_QUALITY;
use crate::fs_utils::{find_jpegs, temp_file_name};
use crate::models::BatchSummary;

/// Walks `root` recursively and strips EXIF metadata from every jpg/jpeg in
/// place. Per-file failures are logged and recorded; the batch never aborts.
pub fn run_clean(root: &Path) -> BatchSummary {
    let images = find_jpegs(root);

    let mut summary = BatchSummary::default();
    if images.is_empty() {
        println!("No .jpg or .jpeg images found.");
        return summary;
    }

    println!("Found {} images to process.", images.len());

    for path in images {
        match strip_metadata(&path) {
            Ok(()) => {
                println!("Removed EXIF from: {}", path.display());
                summary.record_ok(path);
            }
            Err(reason) => {
                eprintln!("Could not process {}: {}", path.display(), reason);
                summary.record_err(path, reason);
            }
        }
    }

    summary
}

/// Rewrites one image without its metadata. The clean copy goes to a hidden
/// temp file first and only replaces the original after verification, so a
/// failure partway through never corrupts the source file.
pub fn strip_metadata(path: &Path) -> Result<(), String> {
    let img = ImageReader::open(path)
        .map_err(|err| format!("could not open image: {}", err))?
        .decode()
        .map_err(|err| format!("could not decode image: {}", err))?;

    let temp_path = temp_file_name(path);

    if let Err(reason) = write_clean_copy(&img, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(reason);
    }

    match verify_metadata_clean(&temp_path) {
        Ok(true) => {}
        Ok(false) => {
            let _ = fs::remove_file(&temp_path);
            return Err("rewritten file still carries metadata".to_string());
        }
        Err(reason) => {
            let _ = fs::remove_file(&temp_path);
            return Err(reason);
        }
    }

    fs::rename(&temp_path, path).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        format!("could not replace the original file: {}", err)
    })
}

/// Re-encoding a decoded image drops every metadata segment; only the pixel
/// data survives. Discovery only yields jpg/jpeg, so the output is always
/// JPEG, at the fixed quality the pipeline promises.
fn write_clean_copy(img: &DynamicImage, dest: &Path) -> Result<(), String> {
    let mut file =
        File::create(dest).map_err(|err| format!("could not create temp file: {}", err))?;

    let encoder = JpegEncoder::new_with_quality(&mut file, JPEG_QUALITY);
    img.write_with_encoder(encoder)
        .map_err(|err| format!("could not encode cleaned image: {}", err))
}

/// Confirms a rewritten image has no readable EXIF fields left.
pub fn verify_metadata_clean(path: &Path) -> Result<bool, String> {
    let file = File::open(path)
        .map_err(|err| format!("could not reopen cleaned image for verification: {}", err))?;
    let mut reader = BufReader::new(file);

    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(parsed) => Ok(parsed.fields().next().is_none()),
        Err(exif::Error::NotFound(_)) | Err(exif::Error::BlankValue(_)) => Ok(true),
        Err(exif::Error::InvalidFormat(_)) => Ok(true),
        Err(exif::Error::Io(err)) => Err(format!(
            "could not read EXIF metadata during verification: {}",
            err
        )),
        Err(other) => Err(format!("EXIF verification failed: {}", other)),
    }
}
