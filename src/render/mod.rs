//! Rendering layer: templated text and structured trees built on lookups.
//!
//! | renderer                       | output                       |
//! |--------------------------------|------------------------------|
//! | [`TreeEngine::option_list`]    | flat fragments with spacers  |
//! | [`TreeEngine::dual_list`]      | flat, two templates          |
//! | [`TreeEngine::nested_list`]    | nested markup                |
//! | [`TreeEngine::menu`]           | nested navigation markup     |
//! | [`TreeEngine::tree_array`]     | nested [`TreeItem`]s         |
//! | [`flatten_tree`]               | indented flat records        |
//!
//! [`TreeEngine::option_list`]: crate::engine::TreeEngine::option_list
//! [`TreeEngine::dual_list`]: crate::engine::TreeEngine::dual_list
//! [`TreeEngine::nested_list`]: crate::engine::TreeEngine::nested_list
//! [`TreeEngine::menu`]: crate::engine::TreeEngine::menu
//! [`TreeEngine::tree_array`]: crate::engine::TreeEngine::tree_array

pub mod array;
mod connector;
pub mod nested;
pub mod options;
pub mod template;

pub use array::{flatten_tree, TreeItem};
pub use connector::Marks;
pub use nested::NestedList;
pub use options::{DualList, OptionList, DEFAULT_OPTION_TEMPLATE};
pub use template::{Substitutions, Template};
