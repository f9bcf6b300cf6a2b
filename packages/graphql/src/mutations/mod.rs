use async_graphql::MergedObject;
mod analysis;
mod input_validators;

#[derive(MergedObject, Default)]
pub struct Mutations(analysis::AnalysisMutation);
