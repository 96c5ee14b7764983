use rand::Rng;

use common::{Coord, Game};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Path,
    Start,
    End,
    Player,
}

/// Everything needed to draw one screen: the maze blown up to a block map
/// with overlays, plus a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tiles: Vec<Vec<Tile>>,
    pub hud: String,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }
}

pub const HELP: &str = "[arrows] move  [s] solve  [n] new  [1-3] difficulty  [q] quit";

fn tile_of(coord: Coord) -> (usize, usize) {
    (2 * coord.y + 1, 2 * coord.x + 1)
}

pub fn frame<R: Rng>(game: &Game<R>) -> Frame {
    let maze = game.maze();
    let mut tiles: Vec<Vec<Tile>> = maze
        .tiles()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|solid| if solid { Tile::Wall } else { Tile::Floor })
                .collect()
        })
        .collect();

    for pair in game.solution().windows(2) {
        let (row_a, col_a) = tile_of(pair[0]);
        let (row_b, col_b) = tile_of(pair[1]);
        tiles[row_a][col_a] = Tile::Path;
        tiles[(row_a + row_b) / 2][(col_a + col_b) / 2] = Tile::Path;
        tiles[row_b][col_b] = Tile::Path;
    }

    let (row, col) = tile_of(maze.start());
    tiles[row][col] = Tile::Start;
    let (row, col) = tile_of(maze.end());
    tiles[row][col] = Tile::End;
    let (row, col) = tile_of(game.player());
    tiles[row][col] = Tile::Player;

    let hud = format!(
        "Difficulty: {}  Moves: {}  {}",
        game.difficulty(),
        game.moves(),
        HELP
    );

    Frame { tiles, hud }
}

/// Plain-text rendering, two columns per tile.
pub fn to_text(frame: &Frame) -> String {
    frame
        .tiles
        .iter()
        .map(|row| row.iter().map(|&tile| glyph(tile)).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Wall => "██",
        Tile::Floor => "  ",
        Tile::Path => "··",
        Tile::Start => "▒▒",
        Tile::End => "▓▓",
        Tile::Player => "@@",
    }
}
