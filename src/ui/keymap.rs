//! Keyboard bindings from terminal keys to calculator symbols

use crate::config::ConfigError;
use crate::engine::symbol::{BinaryOp, Constant, MemoryOp, Symbol, UnaryFn};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Lookup table from key codes to symbols
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<KeyCode, Symbol>,
}

impl Keymap {
    /// Default bindings: every character that names a symbol, plus the
    /// classic shortcuts (Esc/c clear, m memory add, r memory recall)
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();

        for c in "0123456789.+-*/%^=!e".chars() {
            if let Some(symbol) = Symbol::from_char(c) {
                bindings.insert(KeyCode::Char(c), symbol);
            }
        }

        bindings.insert(KeyCode::Enter, Symbol::Equals);
        bindings.insert(KeyCode::Backspace, Symbol::Backspace);
        bindings.insert(KeyCode::Esc, Symbol::Clear);
        bindings.insert(KeyCode::Delete, Symbol::Clear);
        bindings.insert(KeyCode::Char('c'), Symbol::Clear);
        bindings.insert(KeyCode::Char('C'), Symbol::Clear);
        bindings.insert(KeyCode::Char('m'), Symbol::Memory(MemoryOp::Add));
        bindings.insert(KeyCode::Char('r'), Symbol::Memory(MemoryOp::Recall));
        bindings.insert(KeyCode::Char('x'), Symbol::Operator(BinaryOp::Multiply));
        bindings.insert(KeyCode::Char('p'), Symbol::Constant(Constant::Pi));
        bindings.insert(KeyCode::Char('n'), Symbol::Sign);
        bindings.insert(KeyCode::Char('s'), Symbol::Unary(UnaryFn::SquareRoot));

        Keymap { bindings }
    }

    /// Default bindings overlaid with `[keys]` entries from the config
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut keymap = Keymap::new();
        for (key, label) in overrides {
            let code = parse_key_name(key).ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            let symbol = Symbol::from_label(label).map_err(|source| ConfigError::Binding {
                key: key.clone(),
                source,
            })?;
            keymap.bind(code, symbol);
        }
        Ok(keymap)
    }

    pub fn bind(&mut self, code: KeyCode, symbol: Symbol) {
        self.bindings.insert(code, symbol);
    }

    /// Symbol for a key press. Ctrl and Alt chords are never bound.
    pub fn lookup(&self, key: &KeyEvent) -> Option<Symbol> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        self.bindings.get(&key.code).copied()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a config key name: a single character, `F1`..`F12`, or a named key
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return (1..=12).contains(&n).then_some(KeyCode::F(n));
    }

    match lower.as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::new();
        assert_eq!(keymap.lookup(&press(KeyCode::Char('7'))), Some(Symbol::Digit(7)));
        assert_eq!(keymap.lookup(&press(KeyCode::Enter)), Some(Symbol::Equals));
        assert_eq!(keymap.lookup(&press(KeyCode::Esc)), Some(Symbol::Clear));
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('m'))),
            Some(Symbol::Memory(MemoryOp::Add))
        );
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('*'))),
            Some(Symbol::Operator(BinaryOp::Multiply))
        );
        assert_eq!(keymap.lookup(&press(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_shifted_characters_still_match() {
        let keymap = Keymap::new();
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(keymap.lookup(&plus), Some(Symbol::Operator(BinaryOp::Add)));
    }

    #[test]
    fn test_control_chords_ignored() {
        let keymap = Keymap::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keymap.lookup(&ctrl_c), None);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut overrides = BTreeMap::new();
        overrides.insert("s".to_string(), "x²".to_string());
        overrides.insert("F5".to_string(), "MC".to_string());

        let keymap = Keymap::with_overrides(&overrides).unwrap();
        assert_eq!(
            keymap.lookup(&press(KeyCode::Char('s'))),
            Some(Symbol::Unary(UnaryFn::Square))
        );
        assert_eq!(
            keymap.lookup(&press(KeyCode::F(5))),
            Some(Symbol::Memory(MemoryOp::Clear))
        );
    }

    #[test]
    fn test_bad_overrides_rejected() {
        let mut overrides = BTreeMap::new();
        overrides.insert("hyper".to_string(), "C".to_string());
        assert!(matches!(
            Keymap::with_overrides(&overrides),
            Err(ConfigError::UnknownKey(_))
        ));

        let mut overrides = BTreeMap::new();
        overrides.insert("k".to_string(), "cos".to_string());
        assert!(matches!(
            Keymap::with_overrides(&overrides),
            Err(ConfigError::Binding { .. })
        ));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(parse_key_name("Enter"), Some(KeyCode::Enter));
        assert_eq!(parse_key_name("f12"), Some(KeyCode::F(12)));
        assert_eq!(parse_key_name("F13"), None);
        assert_eq!(parse_key_name("space"), Some(KeyCode::Char(' ')));
    }
}
