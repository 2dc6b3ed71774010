//! Key name → keycode table for the GFRM100 Bluetooth remote.
//!
//! Names are matched case-insensitively.  The table is a static slice, so
//! lookups never allocate and the table can never be mutated at runtime.
//!
//! # Release codes
//!
//! The remote only has two distinct release codes: `0x4102` for the digits
//! and `DEL` (keyboard report, id 0x41) and `0x4003` for everything else
//! (consumer report, id 0x40).  They are listed as `RELEASE2` and `RELEASE3`
//! so they can be sent by name.

pub mod keycode;

pub use keycode::Keycode;

use keycode::BATTERY_REPORT;

/// Table entry name of the battery-status pseudo-key.
pub const BATTERY_LEVEL_KEY: &str = "BATT_LEVEL";

/// Every named key the remote can send.
const KEY_TABLE: &[(&str, u32)] = &[
    (BATTERY_LEVEL_KEY, BATTERY_REPORT),
    ("DIGIT_1", 0x001E_4102),
    ("DIGIT_2", 0x001F_4102),
    ("DIGIT_3", 0x0020_4102),
    ("DIGIT_4", 0x0021_4102),
    ("DIGIT_5", 0x0022_4102),
    ("DIGIT_6", 0x0023_4102),
    ("DIGIT_7", 0x0024_4102),
    ("DIGIT_8", 0x0025_4102),
    ("DIGIT_9", 0x0026_4102),
    ("DIGIT_0", 0x0027_4102),
    ("DEL", 0x002A_4102),
    ("RELEASE2", 0x0000_4102),
    ("TV_BOX_POWER", 0x0030_4003),
    ("TV_POWER", 0x0082_1203),
    ("INPUT", 0x0082_4003),
    ("STOP", 0x00B7_4003),
    ("RECORD", 0x00B2_4003),
    ("REWIND", 0x00B4_4003),
    ("PLAY", 0x00B0_4003),
    ("FAST_FORWARD", 0x00B3_4003),
    ("SKIP_BACKWARD", 0x00B6_4003),
    ("PAUSE", 0x00B1_4003),
    ("SKIP_FORWARD", 0x00B5_4003),
    ("MENU", 0x0040_4003),
    ("BACK", 0x0224_4003),
    ("GUIDE", 0x008D_4003),
    ("UP", 0x0042_4003),
    ("LEFT", 0x0044_4003),
    ("OK", 0x0041_4003),
    ("RIGHT", 0x0045_4003),
    ("DOWN", 0x0043_4003),
    ("EXIT", 0x0204_4003),
    ("INFO", 0x0004_4003),
    ("VOL_UP", 0x00E9_4003),
    ("SEARCH", 0x00F7_4003),
    ("CH_UP", 0x009C_4003),
    ("VOL_DOWN", 0x00EA_4003),
    ("MUTE", 0x00E2_4003),
    ("CH_DOWN", 0x009D_4003),
    ("PREV", 0x0083_4003),
    ("RELEASE3", 0x0000_4003),
];

/// Read-only view over the remote's key table.
pub struct KeyTable;

impl KeyTable {
    /// Looks up a key by name, ignoring ASCII case.
    ///
    /// Returns `None` for names that are not in the table.
    pub fn lookup(name: &str) -> Option<Keycode> {
        KEY_TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, raw)| Keycode::new(raw))
    }

    /// All key names in ascending order.
    pub fn list_names() -> Vec<String> {
        let mut names: Vec<String> = KEY_TABLE.iter().map(|(name, _)| name.to_string()).collect();
        names.sort();
        names
    }

    /// Keycode for a single decimal digit character (`'0'..='9'`).
    pub fn digit(d: char) -> Option<Keycode> {
        if !d.is_ascii_digit() {
            return None;
        }
        let mut name = String::from("DIGIT_");
        name.push(d);
        Self::lookup(&name)
    }

    /// Base code of the battery-status pseudo-key (level 0).
    pub fn battery_base() -> Keycode {
        Keycode::new(BATTERY_REPORT)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(KeyTable::lookup("guide"), Some(Keycode::new(0x008D_4003)));
        assert_eq!(KeyTable::lookup("Vol_Up"), Some(Keycode::new(0x00E9_4003)));
        assert_eq!(KeyTable::lookup("DIGIT_7"), Some(Keycode::new(0x0024_4102)));
    }

    #[test]
    fn test_lookup_unknown_name_returns_none() {
        assert_eq!(KeyTable::lookup("TELEPORT"), None);
        assert_eq!(KeyTable::lookup(""), None);
    }

    #[test]
    fn test_lookup_does_not_confuse_numeric_looking_names() {
        // The table never yields a code for something it does not contain,
        // however the input looks.
        assert_eq!(KeyTable::lookup("0xdeadbeef"), None);
        assert_eq!(KeyTable::lookup("3735928559"), None);
    }

    #[test]
    fn test_list_names_is_sorted_and_complete() {
        // Arrange / Act
        let names = KeyTable::list_names();

        // Assert
        assert_eq!(names.len(), KEY_TABLE.len());
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.iter().any(|n| n == "RELEASE2"));
        assert!(names.iter().any(|n| n == "RELEASE3"));
    }

    #[test]
    fn test_key_names_are_unique() {
        let mut names = KeyTable::list_names();
        names.dedup();
        assert_eq!(names.len(), KEY_TABLE.len());
    }

    #[test]
    fn test_every_press_code_releases_to_one_of_the_two_release_codes() {
        let release2 = KeyTable::lookup("RELEASE2").unwrap();
        let release3 = KeyTable::lookup("RELEASE3").unwrap();
        for &(name, raw) in KEY_TABLE {
            let code = Keycode::new(raw);
            if name == BATTERY_LEVEL_KEY || name == "TV_POWER" {
                continue;
            }
            assert_eq!(code.release().release(), code.release(), "{name}");
            assert!(
                code.release() == release2 || code.release() == release3,
                "{name} releases to unexpected {}",
                code.release()
            );
        }
    }

    #[test]
    fn test_release_property_holds_for_every_key() {
        for &(name, raw) in KEY_TABLE {
            let code = Keycode::new(raw);
            assert_eq!(code.release().raw(), raw & 0x0000_FFFF, "{name}");
        }
    }

    #[test]
    fn test_digit_maps_each_decimal_character() {
        assert_eq!(KeyTable::digit('0'), KeyTable::lookup("DIGIT_0"));
        assert_eq!(KeyTable::digit('9'), KeyTable::lookup("DIGIT_9"));
        assert_eq!(KeyTable::digit('x'), None);
    }

    #[test]
    fn test_battery_base_matches_table_entry() {
        assert_eq!(Some(KeyTable::battery_base()), KeyTable::lookup(BATTERY_LEVEL_KEY));
    }
}
