pub(crate) mod compiler;
pub(crate) mod project;
pub(crate) mod request;
