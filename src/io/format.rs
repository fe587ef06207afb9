//! Boxed titles and labelled grids for rendering tabular symmetry data.

use std::fmt;

const MOLSYM_BANNER_LENGTH: usize = 48;

/// Writes a boxed title that spans at least `width` columns.
pub(crate) fn write_title(f: &mut fmt::Formatter<'_>, title: &str, width: usize) -> fmt::Result {
    let length = title
        .chars()
        .count()
        .max(width.saturating_sub(6))
        .max(MOLSYM_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    writeln!(f, "┌──{bar}──┐")?;
    writeln!(f, "│§ {title:^length$} §│")?;
    writeln!(f, "└──{bar}──┘")
}

/// Column widths of a grid with a left-aligned label column followed by right-aligned cells.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridLayout {
    pub(crate) label_width: usize,
    pub(crate) cell_width: usize,
    pub(crate) ncells: usize,
}

impl GridLayout {
    /// The total width of one rendered row.
    pub(crate) fn width(&self) -> usize {
        self.label_width + 2 + (self.cell_width + 1) * self.ncells
    }

    /// Writes one row of the grid.
    pub(crate) fn write_row<T: fmt::Display>(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        cells: impl IntoIterator<Item = T>,
    ) -> fmt::Result {
        let (label_width, cell_width) = (self.label_width, self.cell_width);
        write!(f, "{label:<label_width$} │")?;
        for cell in cells {
            write!(f, " {:>cell_width$}", cell.to_string())?;
        }
        writeln!(f)
    }

    /// Writes the rule separating the header row from the body.
    pub(crate) fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}┼{}",
            "─".repeat(self.label_width + 1),
            "─".repeat((self.cell_width + 1) * self.ncells)
        )
    }
}
