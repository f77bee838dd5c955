pub(crate) mod barrier;
pub(crate) mod counter;
pub(crate) mod hero;
pub(crate) mod parallax;
pub(crate) mod reveal;
pub(crate) mod snap;
