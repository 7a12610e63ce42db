//! Recursive van Emde Boas node structures and main API.

mod inner;
mod iter;
mod leaf;
mod node;
#[allow(clippy::module_inception)]
mod veb;

pub use inner::InnerNode;
pub use iter::{Iter, RangeIter};
pub use leaf::Leaf;
pub use node::Node;
pub use veb::VebSet;
