//! Text rendering of a floor layout
//!
//! Draws the whole square grid, origin centred, one bracketed cell per
//! position:
//!
//! ```text
//! [ ][ ][ ][ ][ ][ ][ ]
//! [ ][ ][ ][!][ ][ ][ ]
//! [ ][ ][ ][O][ ][ ][ ]
//! [ ][ ][?][S][O][ ][ ]
//! ...
//! ```

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::{MAX_GRID_DISTANCE, grid_side};

use super::Floor;
use super::layout::RoomLayout;
use super::position::Position;

/// What a grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Symbol {
    Start,
    Item,
    Boss,
    Room,
    Empty,
}

impl Symbol {
    /// Get the display character for this symbol
    pub const fn glyph(&self) -> char {
        match self {
            Symbol::Start => 'S',
            Symbol::Item => '?',
            Symbol::Boss => '!',
            Symbol::Room => 'O',
            Symbol::Empty => ' ',
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Symbol::Start => "Starting Room",
            Symbol::Item => "Item Room",
            Symbol::Boss => "Boss Room",
            Symbol::Room => "Room",
            Symbol::Empty => "Empty",
        }
    }
}

/// Symbol key, one `glyph=name` entry per occupied-cell symbol
pub fn legend() -> String {
    Symbol::iter()
        .filter(|symbol| *symbol != Symbol::Empty)
        .map(|symbol| format!("{}={}", symbol.glyph(), symbol.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Symbol for a single position
fn symbol_at(layout: &RoomLayout, pos: Position, item: Position, boss: Position) -> Symbol {
    if !layout.contains(pos) {
        Symbol::Empty
    } else if pos.is_origin() {
        Symbol::Start
    } else if pos == item {
        Symbol::Item
    } else if pos == boss {
        Symbol::Boss
    } else {
        Symbol::Room
    }
}

/// Render a layout as a `(2 * max_distance + 1)`-square grid of `[x]` cells
///
/// Rows run top to bottom from `y = -max_distance`, each ending in a newline.
pub fn render_layout(
    layout: &RoomLayout,
    max_distance: i32,
    item: Position,
    boss: Position,
) -> String {
    let max_distance = max_distance.clamp(0, MAX_GRID_DISTANCE);
    let side = grid_side(max_distance);
    let mut output = String::with_capacity(side * (side * 3 + 1));

    for y in -max_distance..=max_distance {
        for x in -max_distance..=max_distance {
            let symbol = symbol_at(layout, Position::new(x, y), item, boss);
            output.push('[');
            output.push(symbol.glyph());
            output.push(']');
        }
        output.push('\n');
    }
    output
}

impl Floor {
    /// A graphical representation of the floor
    ///
    /// S=Start Room ?=Item Room !=Boss Room
    pub fn render(&self) -> String {
        render_layout(
            self.rooms_map(),
            self.max_distance(),
            self.item_room_pos(),
            self.boss_room_pos(),
        )
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
