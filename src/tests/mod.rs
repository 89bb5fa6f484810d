mod hasher;
mod traits;
