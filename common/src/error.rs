use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} maze")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}
