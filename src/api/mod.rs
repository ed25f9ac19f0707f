pub mod training_plan;
