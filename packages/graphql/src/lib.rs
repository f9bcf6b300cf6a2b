pub mod types;
pub mod queries;
pub mod mutations;
pub mod errors;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use services::AnalysisConfig;

pub type AnalysisSchema = Schema<queries::Queries, mutations::Mutations, EmptySubscription>;

pub fn build_schema(config: AnalysisConfig) -> AnalysisSchema {
    Schema::build(
        queries::Queries::default(),
        mutations::Mutations::default(),
        EmptySubscription,
    )
    .data(config)
    .finish()
}
