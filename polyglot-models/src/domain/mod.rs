#[allow(clippy::needless_update)]
mod app;
#[allow(clippy::needless_update)]
mod category;
#[allow(clippy::needless_update)]
mod common;
#[allow(clippy::needless_update)]
mod key;
mod lookup;
mod translation;

pub mod prelude;
