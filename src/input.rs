//! Keyboard and pad input mapping
//!
//! Pure key/attribute lookups; the actual event wiring lives in the wasm
//! host layer.

use crate::sim::Direction;

/// Map a `KeyboardEvent.key` value to a directional intent.
///
/// Arrow keys and WASD (either case) are accepted.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a pad element's `data-dir` attribute to a directional intent
pub fn direction_for_pad(dir: &str) -> Option<Direction> {
    match dir {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Arrow keys get their default (page scroll) suppressed; WASD is left alone
pub fn is_arrow_key(key: &str) -> bool {
    key.starts_with("Arrow")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(direction_for_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(direction_for_key("ArrowRight"), Some(Direction::Right));
    }

    #[test]
    fn test_wasd_either_case() {
        assert_eq!(direction_for_key("w"), Some(Direction::Up));
        assert_eq!(direction_for_key("A"), Some(Direction::Left));
        assert_eq!(direction_for_key("s"), Some(Direction::Down));
        assert_eq!(direction_for_key("D"), Some(Direction::Right));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(direction_for_key(" "), None);
        assert_eq!(direction_for_key("Escape"), None);
        assert_eq!(direction_for_key("q"), None);
    }

    #[test]
    fn test_pad_attributes() {
        assert_eq!(direction_for_pad("up"), Some(Direction::Up));
        assert_eq!(direction_for_pad("right"), Some(Direction::Right));
        assert_eq!(direction_for_pad("bogus"), None);
    }

    #[test]
    fn test_is_arrow_key() {
        assert!(is_arrow_key("ArrowLeft"));
        assert!(!is_arrow_key("a"));
    }
}
