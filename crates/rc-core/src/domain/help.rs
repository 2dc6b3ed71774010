//! Text printed for `HELP` and `--keys`.

use crate::keymap::KeyTable;

/// Builds the supported-keys listing.
pub fn help_text() -> String {
    let mut text = String::from(
        "\nSupported Key names (case-insensitive):\n\
         =======================================\n\
         Special keys:\n------------\n\
         \x20 'HELP': Print supported key names (useful in interactive mode)\n\
         \x20 'END': Exit this program\n\
         \x20 'REL': Send release key (key-up) for the last key pressed down\n\
         \x20        E.g.: 'INFO REL' -> INFO key-down, then INFO key-up\n\
         \x20 'SLEEPx.y': Sleep for x.y secs\n\
         \x20        E.g.: GUIDE SLEEP0.5 REL -> GUIDE key-down, then sleep 0.5sec, then GUIDE key-up\n\
         \x20 'BATT_LEVELx': Send battery level <x> [%]\n\
         \x20                E.g.: BATT_LEVEL55 -> Send Battery-level 55%\n\
         \x20 'RAWMODEx': set raw-mode off (x=0) or on (all else)\n\
         \x20 'DEBUGx': change debug level to x (useful in interactive mode)\n\
         \nRemote Control key names:\n-------------------------\n",
    );
    text.push_str(&KeyTable::list_names().join(", "));
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_special_tokens_and_every_key() {
        let text = help_text();
        for special in ["'HELP'", "'END'", "'REL'", "'SLEEPx.y'", "'BATT_LEVELx'", "'RAWMODEx'", "'DEBUGx'"] {
            assert!(text.contains(special), "missing {special}");
        }
        for name in KeyTable::list_names() {
            assert!(text.contains(&name), "missing key {name}");
        }
    }
}
