/// Scene generation from sampling parameters.
pub mod generator;
/// Shape and scene data model.
pub mod model;
