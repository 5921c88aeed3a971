use super::clean::{run_clean, strip_metadata, verify_metadata_clean};
use super::edit::{append_generation_log, GenerationLogEntry};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_plain_jpeg(path: &Path) {
    let pixels = image::RgbImage::from_pixel(8, 8, image::Rgb([120, 80, 40]));
    pixels.save(path).expect("fixture jpeg should encode");
}

/// Minimal APP1 segment: "Exif\0\0" plus a little-endian TIFF holding a
/// single Make field, small enough for its value to sit inline.
fn exif_app1_segment() -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x010Fu16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&4u32.to_le_bytes());
    tiff.extend_from_slice(b"Cam\0");
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(&payload);
    segment
}

fn write_jpeg_with_exif(path: &Path) {
    write_plain_jpeg(path);
    let encoded = fs::read(path).expect("fixture jpeg should be readable");
    assert_eq!(&encoded[..2], &[0xFF, 0xD8], "fixture must start with SOI");

    let mut tagged = encoded[..2].to_vec();
    tagged.extend_from_slice(&exif_app1_segment());
    tagged.extend_from_slice(&encoded[2..]);
    fs::write(path, tagged).expect("tagged fixture should write");
}

#[test]
fn strip_metadata_removes_exif_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("sample.jpg");
    write_jpeg_with_exif(&source);

    assert!(
        !verify_metadata_clean(&source)?,
        "the fixture should carry detectable EXIF before cleaning"
    );

    strip_metadata(&source).expect("cleaning a valid jpeg should succeed");

    assert!(source.exists());
    assert!(verify_metadata_clean(&source)?);
    image::open(&source).expect("the cleaned file should still decode");

    let leftover = fs::read_dir(dir.path())?.count();
    assert_eq!(leftover, 1, "no temp files should remain next to the source");
    Ok(())
}

#[test]
fn invalid_image_fails_without_stopping_the_batch() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    write_plain_jpeg(&dir.path().join("good.jpg"));
    let bad = dir.path().join("bad.jpg");
    fs::write(&bad, b"this is not an image")?;

    let summary = run_clean(dir.path());

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.processed(), 1);
    assert_eq!(summary.failed(), 1);

    let failures: Vec<_> = summary.failures().collect();
    assert!(failures[0].path.ends_with("bad.jpg"));
    assert_eq!(
        fs::read(&bad)?,
        b"this is not an image",
        "a failed file must be left untouched"
    );
    Ok(())
}

#[test]
fn clean_walk_covers_nested_directories_and_skips_others() -> Result<(), Box<dyn std::error::Error>>
{
    let dir = tempdir()?;
    write_plain_jpeg(&dir.path().join("top.jpg"));
    fs::create_dir(dir.path().join("nested"))?;
    write_plain_jpeg(&dir.path().join("nested").join("deep.jpeg"));
    fs::write(dir.path().join("ignored.png"), b"png")?;
    fs::write(dir.path().join("ignored.txt"), b"text")?;

    let summary = run_clean(dir.path());

    assert_eq!(summary.total(), 2);
    assert_eq!(summary.processed(), 2);
    assert_eq!(summary.failed(), 0);
    Ok(())
}

#[test]
fn clean_of_an_empty_directory_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let summary = run_clean(dir.path());
    assert_eq!(summary.total(), 0);
    Ok(())
}

fn log_entry(n: u64) -> GenerationLogEntry {
    GenerationLogEntry {
        timestamp: n,
        source_image: format!("input/{n}.jpg"),
        output_image: format!("output/{n}-processed.jpg"),
        model: "gemini-3-pro-image-preview".to_string(),
    }
}

#[tokio::test]
async fn generation_log_appends_and_parses_back() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_path = dir.path().join("generation_log.json");

    append_generation_log(&log_path, log_entry(1)).await?;
    append_generation_log(&log_path, log_entry(2)).await?;

    let entries: Vec<GenerationLogEntry> =
        serde_json::from_str(&fs::read_to_string(&log_path)?)?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].timestamp, 1);
    assert_eq!(entries[1].output_image, "output/2-processed.jpg");
    Ok(())
}

#[tokio::test]
async fn generation_log_keeps_only_the_most_recent_entries(
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let log_path = dir.path().join("generation_log.json");

    for n in 0..55 {
        append_generation_log(&log_path, log_entry(n)).await?;
    }

    let entries: Vec<GenerationLogEntry> =
        serde_json::from_str(&fs::read_to_string(&log_path)?)?;
    assert_eq!(entries.len(), 50);
    assert_eq!(entries[0].timestamp, 5, "oldest entries should rotate out");
    assert_eq!(entries[49].timestamp, 54);
    Ok(())
}
