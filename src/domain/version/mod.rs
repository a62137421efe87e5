mod range;
mod semver;

pub use range::{Comparator, Op, VersionRange};
pub use semver::{Identifier, Version};
