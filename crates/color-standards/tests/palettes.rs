//! Tests for the built-in palettes and name table data.

use std::collections::HashSet;

use color_standards::{default_table, is_hex_code};

#[test]
fn palettes_are_lowercase_non_empty_and_unique() {
    let table = default_table();
    let mut count = 0;
    for (name, codes) in table.palettes() {
        count += 1;
        assert!(!name.is_empty());
        assert_eq!(name, name.to_lowercase());
        assert!(!codes.is_empty(), "palette {name} is empty");
        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len(), "duplicate hex code in palette {name}");
        for code in codes {
            assert!(is_hex_code(code));
            assert_eq!(*code, code.to_uppercase());
        }
    }
    assert_eq!(count, 13);
}

#[test]
fn primary_palettes_contain_their_keyword() {
    let table = default_table();
    for name in ["red", "green", "blue"] {
        let hex = table.hex_for_name(name).unwrap();
        assert!(table.palette(name).unwrap().contains(&hex), "{name}");
    }
}

#[test]
fn every_name_maps_back_to_its_entry() {
    let table = default_table();
    for entry in table.entries() {
        assert!(!entry.names.is_empty());
        assert!(entry.names.is_sorted());
        for name in &entry.names {
            assert_eq!(table.hex_for_name(name), Some(entry.hex));
        }
    }
}

#[test]
fn unknown_palette_is_absent() {
    assert!(default_table().palette("not-a-palette").is_none());
}

#[test]
fn editor_theme_palettes_are_registered() {
    let table = default_table();
    let molokai = table.palette("molokai").unwrap();
    assert_eq!(molokai.len(), 11);
    assert_eq!(molokai[0], "1B1D1E");
    assert!(molokai.contains(&"F92672"));
    for name in ["gruvbox", "molokai", "solarized"] {
        assert!(table.palette(name).is_some(), "{name}");
    }
}
