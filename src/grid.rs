use egui::Pos2;

/// Spacings offered by the grid size picker.
pub const GRID_SPACINGS: [u32; 4] = [20, 30, 40, 50];

/// Alignment grid drawn over the canvas display. Never written into the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    enabled: bool,
    spacing: u32,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            enabled: false,
            spacing: GRID_SPACINGS[0],
        }
    }
}

impl GridState {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Enables the grid at `spacing`. A spacing of zero hides the grid instead.
    pub fn show(&mut self, spacing: u32) {
        if spacing == 0 {
            self.hide();
            return;
        }
        self.spacing = spacing;
        self.enabled = true;
    }

    pub fn hide(&mut self) {
        self.enabled = false;
    }
}

/// One grid line in viewport-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Pos2,
    pub to: Pos2,
}

/// Lines for the grid over a `width` x `height` viewport, verticals first.
///
/// Lines start at the origin and repeat every `spacing` units while strictly inside the
/// viewport.
pub fn grid_lines(grid: &GridState, width: f32, height: f32) -> Vec<GridLine> {
    if !grid.enabled || grid.spacing == 0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let spacing = grid.spacing as f32;
    let mut lines = Vec::new();

    let mut x = 0.0;
    while x < width {
        lines.push(GridLine {
            from: Pos2::new(x, 0.0),
            to: Pos2::new(x, height),
        });
        x += spacing;
    }

    let mut y = 0.0;
    while y < height {
        lines.push(GridLine {
            from: Pos2::new(0.0, y),
            to: Pos2::new(width, y),
        });
        y += spacing;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_grid_has_no_lines() {
        let grid = GridState::default();
        assert!(grid_lines(&grid, 800.0, 600.0).is_empty());
    }

    #[test]
    fn test_line_counts() {
        let mut grid = GridState::default();
        grid.show(50);

        let lines = grid_lines(&grid, 200.0, 120.0);
        let vertical = lines.iter().filter(|line| line.from.x == line.to.x).count();
        let horizontal = lines.len() - vertical;

        // x = 0, 50, 100, 150 and y = 0, 50, 100
        assert_eq!(vertical, 4);
        assert_eq!(horizontal, 3);
        assert_eq!(lines[1].from, Pos2::new(50.0, 0.0));
        assert_eq!(lines[1].to, Pos2::new(50.0, 120.0));
    }

    #[test]
    fn test_zero_spacing_hides_grid() {
        let mut grid = GridState::default();
        grid.show(30);
        assert!(grid.is_enabled());
        assert_eq!(grid.spacing(), 30);

        grid.show(0);
        assert!(!grid.is_enabled());
        assert_eq!(grid.spacing(), 30);
    }
}
