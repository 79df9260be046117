pub mod examples;
pub mod missing_examples;
pub mod sections;
