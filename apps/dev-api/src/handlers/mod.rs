pub(crate) mod directory;
pub(crate) mod health;
pub(crate) mod register;
