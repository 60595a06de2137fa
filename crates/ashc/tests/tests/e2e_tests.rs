#[path = "e2e/full_pipeline.rs"]
mod full_pipeline;

#[path = "e2e/economy_flow.rs"]
mod economy_flow;
