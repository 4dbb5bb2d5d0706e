//! Key decoding: raw key events to the closed command set.
//!
//! The keystroke source delivers discrete named key events; the
//! binding table turns them into [`Command`] variants before they reach
//! the world, replacing per-key branching with a single dispatch table.
//! Keys with no binding are ignored. A key may also be bound to
//! [`Binding::Suppress`], a deliberate no-op that exists to swallow a
//! key the host would otherwise act on (the reference bindings suppress
//! `s`, which opens a save dialog in the original display host).

use indexmap::IndexMap;
use ripple_core::{Command, Direction};

/// A named key event from the external input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// The space bar.
    Space,
    /// A printable character key.
    Char(char),
}

/// What a bound key does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Dispatch a command to the simulation.
    Dispatch(Command),
    /// Deliberately do nothing, preventing any default host behavior.
    Suppress,
}

/// Insertion-ordered key-to-binding table.
///
/// The default table reproduces the reference controls: arrows move
/// the observer, `w`/`x`/`a`/`d` move the emitter (each move
/// re-emits), space injects in place, `q` quits, and `s` is
/// suppressed.
#[derive(Clone, Debug)]
pub struct KeyBindings {
    map: IndexMap<Key, Binding>,
}

impl KeyBindings {
    /// An empty table; every key decodes to `None`.
    pub fn empty() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Decode a key event. `None` means the key is unbound and must be
    /// ignored.
    pub fn decode(&self, key: Key) -> Option<Binding> {
        self.map.get(&key).copied()
    }

    /// Bind or rebind a key.
    pub fn bind(&mut self, key: Key, binding: Binding) {
        self.map.insert(key, binding);
    }

    /// Remove a binding, returning it if the key was bound.
    pub fn unbind(&mut self, key: Key) -> Option<Binding> {
        self.map.shift_remove(&key)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, Binding)> + '_ {
        self.map.iter().map(|(&k, &b)| (k, b))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::Up, Binding::Dispatch(Command::MoveObserver(Direction::North)));
        bindings.bind(Key::Down, Binding::Dispatch(Command::MoveObserver(Direction::South)));
        bindings.bind(Key::Left, Binding::Dispatch(Command::MoveObserver(Direction::West)));
        bindings.bind(Key::Right, Binding::Dispatch(Command::MoveObserver(Direction::East)));
        bindings.bind(
            Key::Char('w'),
            Binding::Dispatch(Command::MoveEmitter(Direction::North)),
        );
        bindings.bind(
            Key::Char('x'),
            Binding::Dispatch(Command::MoveEmitter(Direction::South)),
        );
        bindings.bind(
            Key::Char('a'),
            Binding::Dispatch(Command::MoveEmitter(Direction::West)),
        );
        bindings.bind(
            Key::Char('d'),
            Binding::Dispatch(Command::MoveEmitter(Direction::East)),
        );
        bindings.bind(Key::Space, Binding::Dispatch(Command::Inject));
        bindings.bind(Key::Char('q'), Binding::Dispatch(Command::Quit));
        bindings.bind(Key::Char('s'), Binding::Suppress);
        bindings
    }
}
