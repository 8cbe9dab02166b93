use derive_more::{Display, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GeometryError {
    /// A normal has zero or non-finite length, so no direction can be derived from it.
    #[display("Degenerate normal: zero or non-finite length")]
    DegenerateNormal,
    /// The linear part of a transform can not be inverted.
    #[display("Singular matrix: linear part is not invertible")]
    SingularMatrix,
}
