// Domain layer: lesson models and the traits the lessons are written against.

pub mod model;
pub mod ports;
