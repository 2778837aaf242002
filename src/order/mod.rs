pub(crate) mod chain;
pub(crate) mod plan;
pub(crate) mod proximity;
