//! Action module

pub mod declare_argument;
pub mod node;

pub use declare_argument::DeclareArgument;
pub use node::{Node, ParamValue, Parameter};
