pub(crate) mod replayer;
