pub mod model;
pub mod similarity;
pub mod stopwords;
pub mod tokenize;

pub use model::{IndexError, VectorModel};
pub use similarity::SimilarityMatrix;

use crate::catalog::Catalog;

/// Build the vector-space model and the full pairwise similarity matrix for
/// one catalog snapshot. One-shot batch computation; a changed catalog means
/// building a whole new pair.
pub fn build(catalog: &Catalog) -> Result<(VectorModel, SimilarityMatrix), IndexError> {
    let model = VectorModel::fit(catalog)?;
    let matrix = SimilarityMatrix::from_model(&model);
    Ok((model, matrix))
}
