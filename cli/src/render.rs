use std::fmt::Write;

use memory_puzzle_core as game;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct RenderStyle {
    /// Paint glyphs with their 24-bit palette color.
    pub color: bool,
}

const CELL_WIDTH: usize = 4;

fn glyph(shape: game::Shape) -> char {
    use game::Shape::*;
    match shape {
        Circle => '●',
        Square => '■',
        Diamond => '◆',
        Triangle => '▲',
        Star => '★',
        Plus => '✚',
        Cross => '✖',
        Hexagon => '⬢',
    }
}

fn color_letter(color: game::Color) -> char {
    use game::Color::*;
    match color {
        Rose => 'r',
        Orange => 'o',
        Yellow => 'y',
        Lime => 'l',
        Emerald => 'e',
        Cyan => 'c',
        Blue => 'b',
        Violet => 'v',
        Pink => 'p',
    }
}

fn face(identity: game::Identity, style: RenderStyle) -> String {
    let glyph = glyph(identity.shape);
    let letter = color_letter(identity.color);
    if style.color {
        let (r, g, b) = identity.color.rgb();
        format!("\x1b[38;2;{r};{g};{b}m{glyph}\x1b[0m{letter}")
    } else {
        format!("{glyph}{letter}")
    }
}

fn cell(tile: &game::Tile, style: RenderStyle) -> String {
    use game::TileState::*;
    match tile.state() {
        Hidden => " ?? ".to_string(),
        Revealed => format!("[{}]", face(tile.identity(), style)),
        Matched => format!(" {} ", face(tile.identity(), style)),
    }
}

pub(crate) fn hud(board: &game::Board, elapsed_secs: u32) -> String {
    let level = board.level();
    format!(
        "Level: {} ({}×{})   Moves: {}   Pairs: {}/{}   Time: {}s",
        level.name,
        level.rows,
        level.cols,
        board.moves(),
        board.matched_pairs(),
        board.total_pairs(),
        elapsed_secs
    )
}

/// Grid with 1-based row and column headers.
pub(crate) fn board(board: &game::Board, style: RenderStyle) -> String {
    let (rows, cols) = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 1..=cols {
        let _ = write!(out, "{col:^CELL_WIDTH$}");
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>2} ", row + 1);
        for col in 0..cols {
            out.push_str(&cell(&board[(row, col)], style));
        }
        out.push('\n');
    }
    out
}
