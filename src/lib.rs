mod dims;
mod emit;
mod error;
mod factors;
mod search;
mod table;

pub use dims::{closest_optimal, good_size, GoodSizeExt};
pub use emit::{rust_source_fragment, write_rust_source};
pub use error::GoodSizeError;
pub use factors::{is_smooth, FactorSet};
pub use search::nearest_smooth;
pub use table::{lookup_larger, lookup_smaller, SmoothTable};
pub use table::{DEFAULT_MAX_EXPONENTS, DEFAULT_TABLE_LEN};

// which way to walk from the starting dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    // smallest smooth value >= the input
    #[default]
    Ascending,
    // largest smooth value <= the input
    Descending,
}

// outcome of a nearest-smooth search. `Clamped` is the descending boundary
// case: the walk ran below the smallest allowed factor and the result was
// pinned to that factor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nearest {
    Found(u64),
    Clamped(u64),
}

impl Nearest {
    pub fn get(self) -> u64 {
        match self {
            Nearest::Found(v) | Nearest::Clamped(v) => v,
        }
    }

    pub fn is_clamped(self) -> bool {
        matches!(self, Nearest::Clamped(_))
    }
}
