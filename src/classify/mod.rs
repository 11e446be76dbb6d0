pub(crate) mod velocity;
