mod common;
mod privacy;
