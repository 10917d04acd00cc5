// This is where the actual calculations happen.

pub mod score;
pub mod position;
pub mod evaluation;
pub mod search;
pub mod notation;
