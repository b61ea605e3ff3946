pub(crate) mod builtin;
pub(crate) mod def;
pub(crate) mod model;
pub(crate) mod segment;
pub(crate) mod transition;
