mod autocomplete;
mod script;

pub use self::{autocomplete::*, script::*};
