pub(crate) mod engine;
pub(crate) mod scope;
pub(crate) mod state;
pub(crate) mod trigger;
