use serde::Serialize;

/// 2×2 confusion matrix; rows are the actual class, columns the predicted
/// class, both ordered `[negative, positive]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix([[usize; 2]; 2]);

impl ConfusionMatrix {
    pub fn from_counts(counts: [[usize; 2]; 2]) -> Self {
        Self(counts)
    }

    /// Count one sample given matrix indices
    pub fn record(&mut self, actual: usize, predicted: usize) {
        self.0[actual][predicted] += 1;
    }

    pub fn cell(&self, actual: usize, predicted: usize) -> usize {
        self.0[actual][predicted]
    }

    pub fn rows(&self) -> &[[usize; 2]; 2] {
        &self.0
    }

    pub fn tn(&self) -> usize {
        self.0[0][0]
    }

    pub fn fp(&self) -> usize {
        self.0[0][1]
    }

    pub fn fn_(&self) -> usize {
        self.0[1][0]
    }

    pub fn tp(&self) -> usize {
        self.0[1][1]
    }

    pub fn total(&self) -> usize {
        self.0.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        self.tn() + self.tp()
    }

    pub fn misclassified(&self) -> usize {
        self.fp() + self.fn_()
    }

    /// Samples whose actual class is `class`
    pub fn actual_count(&self, class: usize) -> usize {
        self.0[class].iter().sum()
    }

    /// Samples predicted as `class`
    pub fn predicted_count(&self, class: usize) -> usize {
        self.0.iter().map(|row| row[class]).sum()
    }

    pub fn max_cell(&self) -> usize {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }
}
