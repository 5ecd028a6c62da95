#[macro_use]
mod value_conversion;

pub mod cons_list;
pub mod pair;
pub mod value;


pub use cons_list::{ConsList, ListStep};
pub use pair::Pair;
pub use value::{Value, ValueIter};
