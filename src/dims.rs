use ndarray::{ArrayBase, Dim, Dimension, Ix, RawData};

use crate::search::nearest_smooth;
use crate::{FactorSet, GoodSizeError, Nearest, SearchDirection};

/// Element-wise nearest-smooth search over a batch of dimensions.
///
/// Order is preserved and elements are independent. A clamped element is
/// reported in place through its `Nearest` and does not stop the batch; a
/// zero dimension fails the whole call.
pub fn closest_optimal(
    dims: &[u64],
    direction: SearchDirection,
    factors: &FactorSet,
) -> Result<Vec<Nearest>, GoodSizeError> {
    dims.iter()
        .map(|&n| nearest_smooth(n, direction, factors))
        .collect()
}

/// Next-largest smooth size per axis, for padding a transform input shape.
pub fn good_size<const N: usize>(
    size: &[usize; N],
    factors: &FactorSet,
) -> Result<[usize; N], GoodSizeError> {
    let mut out = [0usize; N];
    for i in 0..N {
        let v = nearest_smooth(size[i] as u64, SearchDirection::Ascending, factors)?.get();
        out[i] = usize::try_from(v).map_err(|_| GoodSizeError::DimensionOverflow(v))?;
    }
    Ok(out)
}

pub trait GoodSizeExt<const N: usize> {
    fn good_size(&self, factors: &FactorSet) -> Result<[usize; N], GoodSizeError>;
}

impl<S: RawData, const N: usize> GoodSizeExt<N> for ArrayBase<S, Dim<[Ix; N]>>
where
    Dim<[Ix; N]>: Dimension,
{
    fn good_size(&self, factors: &FactorSet) -> Result<[usize; N], GoodSizeError> {
        let dim = self.raw_dim();
        let size: [usize; N] = std::array::from_fn(|i| dim[i]);
        good_size(&size, factors)
    }
}
