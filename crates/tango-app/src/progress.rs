/// Fixed-width console progress indicator.
///
/// Pure state plus a pure `render`; the caller owns the redraw side
/// effect.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    total: usize,
    completed: usize,
    width: usize,
}

impl ProgressBar {
    pub fn with_width(total: usize, width: usize) -> Self {
        Self {
            total,
            completed: 0,
            width,
        }
    }

    /// Record one completed lookup. Saturates at `total`.
    pub fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn render(&self) -> String {
        let total = self.total.max(1);
        let filled = self.width * self.completed / total;
        let percent = 100.0 * self.completed as f64 / total as f64;

        format!(
            "|{}{}| {:.2}%",
            "█".repeat(filled),
            " ".repeat(self.width - filled),
            percent
        )
    }
}
