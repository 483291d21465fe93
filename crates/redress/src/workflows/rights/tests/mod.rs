mod common;
mod intake;
mod rules;
