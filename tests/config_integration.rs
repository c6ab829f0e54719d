use std::fs;
use typedbuf::{ByteOrder, DataBuffer, DataConfig};

#[test]
fn test_config_defaults() {
    let config = DataConfig::default();
    assert_eq!(config.bytes_per_line, 16);
    assert_eq!(config.max_string_length, 4096);
    assert!(config.show_ascii);
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typedbuf.json");

    let config = DataConfig {
        bytes_per_line: 8,
        max_string_length: 64,
        show_ascii: false,
    };
    fs::write(&path, config.to_json().unwrap()).unwrap();

    let loaded = DataConfig::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_drives_description() {
    let data = DataBuffer::from_c_string(ByteOrder::Little, 8, "hello, world").unwrap();
    let config = DataConfig {
        bytes_per_line: 8,
        ..DataConfig::default()
    };
    let text = data.describe(&config);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("  hello, w"));
    assert!(lines[1].starts_with("0x00000008: 6f 72 6c 64"));
}

#[test]
fn test_buffer_snapshot_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buffer.json");

    let data = DataBuffer::from_array(ByteOrder::Big, 4, &[0xdead_beefu32]).unwrap();
    fs::write(&path, data.to_json().unwrap()).unwrap();

    let loaded = DataBuffer::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, data);
    assert_eq!(loaded.read::<u32>(0).unwrap(), 0xdead_beef);
}
