pub mod condition;
pub mod severity;
pub mod symptom;
