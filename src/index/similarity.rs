use std::cmp::Ordering;

use super::model::VectorModel;

/// Dense, symmetric matrix of pairwise cosine similarities, one row and
/// column per catalog item. Immutable once built.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn from_model(model: &VectorModel) -> Self {
        let n = model.len();
        let mut cells = vec![0.0; n * n];

        for i in 0..n {
            // Self-similarity is 1 by definition, zero-magnitude vectors
            // included.
            cells[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let sim = cosine(model.vector(i), model.vector(j));
                cells[i * n + j] = sim;
                cells[j * n + i] = sim;
            }
        }

        Self { n, cells }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
}

/// Cosine similarity of two sparse vectors: dot product over the product of
/// magnitudes. A zero-magnitude vector scores 0 against everything.
fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let mut dot = 0.0;
    let (mut x, mut y) = (0, 0);
    while x < a.len() && y < b.len() {
        match a[x].0.cmp(&b[y].0) {
            Ordering::Less => x += 1,
            Ordering::Greater => y += 1,
            Ordering::Equal => {
                dot += a[x].1 * b[y].1;
                x += 1;
                y += 1;
            }
        }
    }

    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Weights are non-negative, so the result lives in [0, 1]; the clamp
    // only absorbs floating-point drift.
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn magnitude(v: &[(usize, f64)]) -> f64 {
    v.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
}
