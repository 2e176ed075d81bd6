use serde::Serialize;

/// The declared negative/positive class pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet {
    pub negative: String,
    pub positive: String,
}

impl LabelSet {
    pub fn new(negative: &str, positive: &str) -> Self {
        Self {
            negative: negative.to_string(),
            positive: positive.to_string(),
        }
    }

    /// Matrix index of a label: 0 for negative, 1 for positive
    pub fn index_of(&self, label: &str) -> Option<usize> {
        if label == self.negative {
            Some(0)
        } else if label == self.positive {
            Some(1)
        } else {
            None
        }
    }

    /// Labels in matrix order `[negative, positive]`
    pub fn ordered(&self) -> [&str; 2] {
        [self.negative.as_str(), self.positive.as_str()]
    }
}

/// Names of the two label columns, used when reporting bad values
#[derive(Debug, Clone, Copy)]
pub struct LabelColumns<'a> {
    pub ground_truth: &'a str,
    pub predicted: &'a str,
}
