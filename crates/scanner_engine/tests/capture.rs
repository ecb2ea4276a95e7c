use std::io::Write;

use base64::{engine::general_purpose, Engine as _};
use scanner_engine::load_image;

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];
const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

fn write_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(bytes).expect("write fixture");
    file
}

#[test]
fn jpeg_bytes_are_declared_as_jpeg() {
    let file = write_fixture(JPEG_MAGIC);

    let image = load_image(file.path().to_str().unwrap()).expect("load ok");

    assert_eq!(image.media_type, "image/jpeg");
    assert!(image.encoded.starts_with("data:image/jpeg;base64,"));
    assert_eq!(image.byte_len, JPEG_MAGIC.len() as u64);
}

#[test]
fn png_bytes_are_declared_as_png() {
    let file = write_fixture(PNG_MAGIC);

    let image = load_image(file.path().to_str().unwrap()).expect("load ok");

    assert_eq!(image.media_type, "image/png");
    assert!(image.encoded.starts_with("data:image/png;base64,"));
}

#[test]
fn unrecognized_bytes_fall_back_to_jpeg() {
    let file = write_fixture(b"definitely not an image");

    let image = load_image(file.path().to_str().unwrap()).expect("load ok");

    assert_eq!(image.media_type, "image/jpeg");
}

#[test]
fn encoded_payload_round_trips_the_file_bytes() {
    let file = write_fixture(PNG_MAGIC);

    let image = load_image(file.path().to_str().unwrap()).expect("load ok");

    let payload = image
        .encoded
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .expect("data-url wrapper present");
    let decoded = general_purpose::STANDARD.decode(payload).expect("decodes");
    assert_eq!(decoded, PNG_MAGIC);
}

#[test]
fn missing_file_is_a_capture_error() {
    let err = load_image("/no/such/label.jpg").unwrap_err();

    assert_eq!(err.path, "/no/such/label.jpg");
    assert!(!err.message.is_empty());
}

#[test]
fn display_name_is_the_file_name() {
    let file = write_fixture(JPEG_MAGIC);

    let image = load_image(file.path().to_str().unwrap()).expect("load ok");

    let expected = file.path().file_name().unwrap().to_string_lossy();
    assert_eq!(image.source_name, expected);
}
